// Percentage growth between two period values
use crate::error::{EngineError, Result};

const DECIMALS: i32 = 2;

/// `round(100 * (current - previous) / previous, 2)`.
///
/// A zero previous value is rejected; callers decide beforehand what a zero
/// baseline means for the report.
pub fn calculate_growth(previous: f64, current: f64) -> Result<f64> {
    if previous == 0.0 {
        return Err(EngineError::DivisionByZero);
    }
    tracing::trace!(previous, current, "calculating growth");
    Ok(round_to(100.0 * (current - previous) / previous, DECIMALS))
}

// Exact halves go to the even digit.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_decline() {
        assert_eq!(calculate_growth(314.31, 303.78).unwrap(), -3.35);
    }

    #[test]
    fn test_growth_units() {
        // 100 * (26 - 38) / 38 = -31.578...
        assert_eq!(calculate_growth(38.0, 26.0).unwrap(), -31.58);
    }

    #[test]
    fn test_growth_not_clamped() {
        assert_eq!(calculate_growth(10.0, 35.0).unwrap(), 250.0);
        assert_eq!(calculate_growth(10.0, 0.0).unwrap(), -100.0);
    }

    #[test]
    fn test_growth_half_rounds_to_even() {
        // 100 * (801 - 800) / 800 = 0.125 exactly
        assert_eq!(calculate_growth(800.0, 801.0).unwrap(), 0.12);
        // 100 * (803 - 800) / 800 = 0.375 exactly
        assert_eq!(calculate_growth(800.0, 803.0).unwrap(), 0.38);
    }

    #[test]
    fn test_growth_unchanged() {
        assert_eq!(calculate_growth(303.78, 303.78).unwrap(), 0.0);
    }

    #[test]
    fn test_growth_zero_previous() {
        assert!(matches!(calculate_growth(0.0, 12.0), Err(EngineError::DivisionByZero)));
    }
}
