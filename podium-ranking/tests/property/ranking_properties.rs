use chrono::NaiveDate;
use podium_core::roster::{DecayRate, Observation, Team};
use podium_ranking::{rank, trajectory};
use proptest::prelude::*;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
}

fn arb_lambda() -> impl Strategy<Value = DecayRate> {
    (0.01f64..=0.99).prop_map(|v| DecayRate::new(v).unwrap())
}

fn arb_team(index: usize) -> impl Strategy<Value = Team> {
    prop::collection::vec((0.0f64..500.0, 0i64..120), 0..15).prop_map(move |raw| {
        let mut team = Team::new(format!("team-{index}"));
        for (score, offset) in raw {
            team.record(Observation::new(score, day(offset), None).unwrap());
        }
        team
    })
}

fn arb_roster() -> impl Strategy<Value = Vec<Team>> {
    prop::collection::vec(
        prop::collection::vec((0.0f64..500.0, 0i64..120), 0..15),
        1..8,
    )
    .prop_map(|teams_raw| {
        teams_raw
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                let mut team = Team::new(format!("team-{i}"));
                for (score, offset) in raw {
                    team.record(Observation::new(score, day(offset), None).unwrap());
                }
                team
            })
            .collect()
    })
}

// ── Ranking is always sorted descending ──────────────────────────────────

proptest! {
    #[test]
    fn ranking_sorted_descending(
        roster in arb_roster(),
        lambda in arb_lambda(),
        rotation in 0usize..8,
    ) {
        let mut rotated = roster;
        let len = rotated.len();
        rotated.rotate_left(rotation % len);

        let entries = rank::rank(&rotated, day(150), lambda);
        prop_assert_eq!(entries.len(), len);
        for pair in entries.windows(2) {
            prop_assert!(
                pair[0].score >= pair[1].score,
                "not descending: {} < {}",
                pair[0].score,
                pair[1].score
            );
        }
    }
}

// ── Single trajectory shape ──────────────────────────────────────────────

proptest! {
    #[test]
    fn trajectory_has_one_point_per_observation(
        team in arb_team(0),
        lambda in arb_lambda(),
    ) {
        let points = trajectory::team_trajectory(&team, lambda);
        prop_assert_eq!(points.len(), team.observation_count());
        for pair in points.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date, "dates not ascending");
        }
    }
}

// ── Aligned axis and gap placement ───────────────────────────────────────

proptest! {
    #[test]
    fn aligned_axis_is_sorted_distinct_union(
        roster in arb_roster(),
        lambda in arb_lambda(),
    ) {
        let aligned = trajectory::aligned_trajectories(&roster, lambda);

        // Axis sorted and de-duplicated.
        for pair in aligned.dates.windows(2) {
            prop_assert!(pair[0] < pair[1], "axis not strictly ascending");
        }

        // Axis covers exactly the observed dates.
        let mut union: Vec<NaiveDate> = roster
            .iter()
            .flat_map(|t| t.observations.iter().map(|o| o.occurred_at))
            .collect();
        union.sort();
        union.dedup();
        prop_assert_eq!(&aligned.dates, &union);

        // Every series is gap-only strictly before its first observation
        // and present from it onward.
        for series in &aligned.series {
            let team = roster.iter().find(|t| t.name == series.name).unwrap();
            let first = team
                .observations
                .iter()
                .map(|o| o.occurred_at)
                .min()
                .unwrap();
            for (date, point) in aligned.dates.iter().zip(&series.points) {
                if *date < first {
                    prop_assert!(point.is_none(), "expected gap at {date}");
                } else {
                    prop_assert!(point.is_some(), "expected value at {date}");
                }
            }
        }
    }
}
