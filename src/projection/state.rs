//! Running accumulation state carried from one age to the next

use super::annuity::{accumulate, compound, whole_dollars, PaymentTiming};

/// State of the savings at the end of an age
#[derive(Debug, Clone, Default)]
pub struct AccumulationState {
    /// Number of contributions paid so far
    pub years_contributed: u32,

    /// Whole-dollar total paid in so far
    pub cumulative_contribution: f64,

    /// Unrounded balance while contributions are being paid
    pub balance: f64,

    /// Value reported for the most recent age
    pub value: f64,
}

impl AccumulationState {
    /// Pay one more year's contribution and grow the balance
    pub fn contribute(&mut self, payment: f64, rate: f64, timing: PaymentTiming) {
        self.years_contributed += 1;
        self.cumulative_contribution = whole_dollars(self.years_contributed as f64 * payment);
        self.balance = accumulate(self.balance, rate, payment, timing);
        self.value = whole_dollars(self.balance);
    }

    /// Carry the reported value forward one year with no new contribution
    pub fn grow(&mut self, rate: f64) {
        self.value = compound(self.value, rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_contribute_then_grow() {
        let mut state = AccumulationState::default();
        state.contribute(1000.0, 0.10, PaymentTiming::EndOfYear);
        state.contribute(1000.0, 0.10, PaymentTiming::EndOfYear);
        assert_eq!(state.years_contributed, 2);
        assert_eq!(state.cumulative_contribution, 2000.0);
        assert_eq!(state.value, 2100.0);

        // Growth starts from the reported whole-dollar value
        state.grow(0.10);
        assert_relative_eq!(state.value, 2310.0, epsilon = 1e-9);
        assert_eq!(state.cumulative_contribution, 2000.0);
    }

    #[test]
    fn test_balance_keeps_cents() {
        let mut state = AccumulationState::default();
        state.contribute(100.0, 0.055, PaymentTiming::EndOfYear);
        state.contribute(100.0, 0.055, PaymentTiming::EndOfYear);
        assert_relative_eq!(state.balance, 205.5, epsilon = 1e-9);
        assert_eq!(state.value, 205.0);
    }
}
