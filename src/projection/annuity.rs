//! Annuity future value and compounding
//!
//! Amounts use a positive-payment convention: paying in a positive
//! contribution produces a positive future value.

use serde::{Deserialize, Serialize};

/// When in each year the contribution is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTiming {
    /// Ordinary annuity: paid at the end of the year, earns nothing that year
    #[default]
    EndOfYear,
    /// Annuity due: paid at the start of the year, earns a full year's return
    BeginningOfYear,
}

impl PaymentTiming {
    fn growth_factor(self, rate: f64) -> f64 {
        match self {
            PaymentTiming::EndOfYear => 1.0,
            PaymentTiming::BeginningOfYear => 1.0 + rate,
        }
    }
}

/// Future value of `periods` equal payments at `rate` per period.
///
/// # Arguments
/// * `rate` - Periodic rate as a decimal (0.07 for 7%)
/// * `periods` - Number of payments made
/// * `payment` - Amount of each payment
/// * `timing` - Whether payments fall at the start or end of each period
pub fn future_value(rate: f64, periods: u32, payment: f64, timing: PaymentTiming) -> f64 {
    if rate == 0.0 {
        return payment * periods as f64;
    }

    // (1+r)^n - 1 without the cancellation of subtracting 1 from a power
    let growth = (periods as f64 * rate.ln_1p()).exp_m1();
    payment * timing.growth_factor(rate) * growth / rate
}

/// Balance after one more year: grow what is there and add this year's payment
pub fn accumulate(balance: f64, rate: f64, payment: f64, timing: PaymentTiming) -> f64 {
    match timing {
        PaymentTiming::EndOfYear => balance * (1.0 + rate) + payment,
        PaymentTiming::BeginningOfYear => (balance + payment) * (1.0 + rate),
    }
}

/// Grow `value` by one period at `rate`
pub fn compound(value: f64, rate: f64) -> f64 {
    value * (1.0 + rate)
}

/// Round a dollar amount toward zero to whole dollars.
///
/// Amounts within floating-point noise of a whole dollar snap to it, so an
/// exact 6000 computed as 5999.999999999999 is not reported as 5999.
pub fn whole_dollars(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= WHOLE_DOLLAR_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        value.trunc()
    }
}

const WHOLE_DOLLAR_TOLERANCE: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_payment_end_of_year() {
        // One end-of-year payment has had no time to grow
        assert_relative_eq!(future_value(0.07, 1, 6000.0, PaymentTiming::EndOfYear), 6000.0);
    }

    #[test]
    fn test_single_payment_beginning_of_year() {
        assert_relative_eq!(
            future_value(0.07, 1, 6000.0, PaymentTiming::BeginningOfYear),
            6420.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_two_payments() {
        // 1000 grown one year plus 1000 just paid
        assert_relative_eq!(
            future_value(0.10, 2, 1000.0, PaymentTiming::EndOfYear),
            2100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        assert_relative_eq!(future_value(0.0, 36, 6000.0, PaymentTiming::EndOfYear), 216_000.0);
        assert_relative_eq!(
            future_value(0.0, 36, 6000.0, PaymentTiming::BeginningOfYear),
            216_000.0
        );
    }

    #[test]
    fn test_zero_periods() {
        assert_relative_eq!(future_value(0.05, 0, 1000.0, PaymentTiming::EndOfYear), 0.0);
    }

    #[test]
    fn test_negative_rate_still_positive() {
        let fv = future_value(-0.05, 10, 1000.0, PaymentTiming::EndOfYear);
        assert!(fv > 0.0 && fv < 10_000.0);
    }

    #[test]
    fn test_single_payment_across_rates() {
        for tenths in 1..=200 {
            let rate = tenths as f64 / 1000.0;
            let fv = future_value(rate, 1, 6000.0, PaymentTiming::EndOfYear);
            assert_eq!(whole_dollars(fv), 6000.0, "rate {rate}");
        }
    }

    #[test]
    fn test_accumulate_matches_closed_form() {
        let mut end = 0.0;
        let mut beginning = 0.0;
        for years in 1..=40 {
            end = accumulate(end, 0.055, 6000.0, PaymentTiming::EndOfYear);
            beginning = accumulate(beginning, 0.055, 6000.0, PaymentTiming::BeginningOfYear);
            assert_relative_eq!(
                end,
                future_value(0.055, years, 6000.0, PaymentTiming::EndOfYear),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                beginning,
                future_value(0.055, years, 6000.0, PaymentTiming::BeginningOfYear),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_first_accumulation_is_exact() {
        assert_eq!(accumulate(0.0, 0.13, 6000.0, PaymentTiming::EndOfYear), 6000.0);
    }

    #[test]
    fn test_whole_dollars() {
        assert_eq!(whole_dollars(5999.999999999999), 6000.0);
        assert_eq!(whole_dollars(6000.000000000001), 6000.0);
        assert_eq!(whole_dollars(5999.99), 5999.0);
        assert_eq!(whole_dollars(12_419.7), 12_419.0);
        assert_eq!(whole_dollars(0.0), 0.0);
    }

    #[test]
    fn test_compound() {
        assert_relative_eq!(compound(1000.0, 0.07), 1070.0, epsilon = 1e-9);
        assert_relative_eq!(compound(1000.0, 0.0), 1000.0);
    }
}
