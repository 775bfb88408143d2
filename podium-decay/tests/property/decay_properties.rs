use chrono::NaiveDate;
use podium_core::roster::{DecayRate, Observation};
use podium_decay::{formula, weight};
use proptest::prelude::*;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
}

fn arb_lambda() -> impl Strategy<Value = DecayRate> {
    (0.01f64..=0.99).prop_map(|v| DecayRate::new(v).unwrap())
}

fn arb_observations() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec((0.0f64..1000.0, 0i64..365), 0..50).prop_map(|raw| {
        raw.into_iter()
            .map(|(score, offset)| Observation::new(score, day(offset), None).unwrap())
            .collect()
    })
}

// ── Non-negative scores never produce a negative result ──────────────────

proptest! {
    #[test]
    fn weighted_score_non_negative(
        observations in arb_observations(),
        lambda in arb_lambda(),
    ) {
        let score = formula::weighted_score(&observations, day(400), lambda);
        prop_assert!(score >= 0.0, "negative score {score}");
    }
}

// ── Input permutation never changes the result ───────────────────────────

proptest! {
    #[test]
    fn weighted_score_permutation_invariant(
        observations in arb_observations(),
        lambda in arb_lambda(),
        seed in 0usize..1000,
    ) {
        let as_of = day(400);
        let baseline = formula::weighted_score(&observations, as_of, lambda);

        // Distinct dates make the stable sort a total order, so any
        // rotation must reproduce the baseline exactly.
        let mut distinct: Vec<Observation> = observations
            .iter()
            .enumerate()
            .map(|(i, o)| Observation::new(o.score, day(i as i64), None).unwrap())
            .collect();
        let distinct_baseline = formula::weighted_score(&distinct, as_of, lambda);
        if !distinct.is_empty() {
            let len = distinct.len();
            distinct.rotate_left(seed % len);
        }
        let rotated = formula::weighted_score(&distinct, as_of, lambda);
        prop_assert_eq!(distinct_baseline, rotated);

        // And the original (possibly tied) input is at least stable
        // under an identity pass.
        prop_assert_eq!(baseline, formula::weighted_score(&observations, as_of, lambda));
    }
}

// ── Day weight is monotone in recency ────────────────────────────────────

proptest! {
    #[test]
    fn day_weight_monotone_in_recency(
        lambda in arb_lambda(),
        older in 0i64..365,
        gap in 1i64..365,
    ) {
        let as_of = day(800);
        let w_old = weight::day_weight(day(older), as_of, lambda);
        let w_new = weight::day_weight(day(older + gap), as_of, lambda);
        prop_assert!(
            w_new > w_old,
            "λ={} gap={}: {} !> {}",
            lambda.value(), gap, w_new, w_old
        );
    }
}

// ── Index weight bounds ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn index_weight_bounded(lambda in arb_lambda(), rank in 0usize..200) {
        let w = weight::index_weight(rank, lambda);
        prop_assert!(w > 0.0 && w <= 1.0, "weight {w} out of (0, 1]");
    }
}

// ── Single observation identity ──────────────────────────────────────────

proptest! {
    #[test]
    fn single_observation_identity(
        score in 0.0f64..1000.0,
        lambda in arb_lambda(),
        offset in 0i64..365,
    ) {
        let o = Observation::new(score, day(offset), None).unwrap();
        let result = formula::weighted_score(std::slice::from_ref(&o), day(offset), lambda);
        let expected = lambda.normalizer() * score;
        prop_assert!((result - expected).abs() < 1e-9);
    }
}

// ── Appending to a prefix shifts earlier exponents by one ────────────────

proptest! {
    #[test]
    fn appending_shifts_prefix_exponents(
        scores in prop::collection::vec(0.0f64..1000.0, 1..20),
        appended in 0.0f64..1000.0,
        lambda in arb_lambda(),
    ) {
        let history: Vec<Observation> = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| Observation::new(s, day(i as i64), None).unwrap())
            .collect();

        let before = formula::prefix_score(&history, lambda);

        let mut extended = history.clone();
        extended.push(Observation::new(appended, day(scores.len() as i64), None).unwrap());
        let after = formula::prefix_score(&extended, lambda);

        // Every earlier weight gains one factor of λ; the new event
        // enters at weight 1.
        let expected = lambda.value() * before + lambda.normalizer() * appended;
        prop_assert!(
            (after - expected).abs() < 1e-6,
            "after {} vs expected {}",
            after,
            expected
        );
    }
}
