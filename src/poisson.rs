use crate::factorial::{Factorial, FactorialError};

/// Probability of exactly `k` events given an expected rate of `lambda`.
#[inline]
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial.get(k) as f64
}

/// As [`univariate`], for callers holding a signed event count. A negative `k` is an error.
pub fn checked_univariate(k: i32, lambda: f64, factorial: &impl Factorial) -> Result<f64, FactorialError> {
    let denominator = factorial.checked(k)?;
    Ok(lambda.powi(k) * f64::exp(-lambda) / denominator as f64)
}
