/// Default global decay rate λ.
pub const DEFAULT_LAMBDA: f64 = 0.95;
