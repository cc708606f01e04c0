use crate::core::error::{CalcError, CalcResult};
use crate::core::rate::{monthly_rate, MONTHS_PER_YEAR};
use crate::core::terms::PayoffQuery;
use serde::{Deserialize, Serialize};

/// Remaining time to pay off a loan, split into whole years and months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffResult {
    pub years_remaining: u32,
    pub months_remaining: u32,
}

impl PayoffResult {
    pub fn new(years_remaining: u32, months_remaining: u32) -> Self {
        Self {
            years_remaining,
            months_remaining,
        }
    }

    pub fn is_paid_off(&self) -> bool {
        self.years_remaining == 0 && self.months_remaining == 0
    }
}

/// Solve for the time remaining until a balance is paid off at a fixed
/// monthly payment.
///
/// Inverts the amortization formula:
/// `n = ln(M / (M − B·r)) / ln(1 + r)`, or `n = B / M` at a zero rate.
///
/// The month remainder is rounded up for an interest-bearing loan and
/// rounded down at a zero rate. A non-zero-rate remainder can therefore
/// round up to 12, e.g. `(4, 12)` rather than `(5, 0)`.
///
/// Any balance `≤ 0` returns `(0, 0)` without looking at the rate or payment.
///
/// # Errors
///
/// [`CalcError::InsufficientPayment`] when the payment does not exceed the
/// interest accrued on the balance in one month.
///
/// # Examples
///
/// ```
/// use loan_engine::core::terms::PayoffQuery;
/// use loan_engine::loan::payoff::{solve_payoff_period, PayoffResult};
///
/// let result = solve_payoff_period(&PayoffQuery::new(0.0, 6.5, 195.66)).unwrap();
/// assert_eq!(result, PayoffResult::new(0, 0));
/// ```
pub fn solve_payoff_period(query: &PayoffQuery) -> CalcResult<PayoffResult> {
    if query.remaining_principal <= 0.0 {
        return Ok(PayoffResult::default());
    }
    query.validate()?;

    let rate = monthly_rate(query.annual_rate_percent);
    let payment = query.monthly_payment;
    let per_year = MONTHS_PER_YEAR as f64;

    let result = if rate == 0.0 {
        let periods = query.remaining_principal / payment;
        PayoffResult::new(
            (periods / per_year).floor() as u32,
            (periods % per_year).floor() as u32,
        )
    } else {
        let interest = query.remaining_principal * rate;
        if payment <= interest {
            return Err(CalcError::InsufficientPayment { payment, interest });
        }
        // ln(M / (M − B·r)) / ln(1 + r), written with ln_1p for tiny rates.
        let periods = (interest / (payment - interest)).ln_1p() / rate.ln_1p();
        PayoffResult::new(
            (periods / per_year).floor() as u32,
            (periods % per_year).ceil() as u32,
        )
    };

    log::debug!(
        "balance {} at {}% paying {}: {}y {}m remaining",
        query.remaining_principal,
        query.annual_rate_percent,
        payment,
        result.years_remaining,
        result.months_remaining
    );

    Ok(result)
}

impl std::fmt::Display for PayoffResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years, {} months remaining",
            self.years_remaining, self.months_remaining
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_interest_bearing() {
        // 195.66 slightly exceeds the exact 60-month payment, so the period
        // solves to just over 60 months and the remainder rounds up.
        let result = solve_payoff_period(&PayoffQuery::new(10_000.0, 6.5, 195.66)).unwrap();
        assert_eq!(result, PayoffResult::new(5, 1));
    }

    #[test]
    fn test_payoff_matches_closed_form() {
        let (balance, annual, payment) = (5_000.0, 6.5, 195.66);
        let r: f64 = annual / 100.0 / 12.0;
        let periods = (payment / (payment - balance * r)).ln() / (1.0 + r).ln();

        let result = solve_payoff_period(&PayoffQuery::new(balance, annual, payment)).unwrap();
        assert_eq!(result.years_remaining, (periods / 12.0).floor() as u32);
        assert_eq!(result.months_remaining, (periods % 12.0).ceil() as u32);
        assert_eq!(result, PayoffResult::new(2, 4));
    }

    #[test]
    fn test_payoff_zero_rate_rounds_down() {
        // 1000 / 150 = 6.67 months: floored to 6, where a rate-bearing loan
        // would round up.
        let result = solve_payoff_period(&PayoffQuery::new(1_000.0, 0.0, 150.0)).unwrap();
        assert_eq!(result, PayoffResult::new(0, 6));

        let result = solve_payoff_period(&PayoffQuery::new(4_000.0, 0.0, 100.0)).unwrap();
        assert_eq!(result, PayoffResult::new(3, 4));
    }

    #[test]
    fn test_tiny_rate_approaches_balance_over_payment() {
        // 10,000 / 195.66 = 51.1 months.
        let result = solve_payoff_period(&PayoffQuery::new(10_000.0, 1e-14, 195.66)).unwrap();
        assert_eq!(result, PayoffResult::new(4, 4));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = solve_payoff_period(&PayoffQuery::new(10_000.0, -1.0, 195.66));
        assert!(matches!(
            result,
            Err(CalcError::InvalidRate { field: "annual_rate_percent", .. })
        ));
    }

    #[test]
    fn test_paid_off_loan() {
        let result = solve_payoff_period(&PayoffQuery::new(0.0, 6.5, 195.66)).unwrap();
        assert!(result.is_paid_off());
    }

    #[test]
    fn test_overpaid_loan_ignores_other_inputs() {
        let result = solve_payoff_period(&PayoffQuery::new(-25.0, -3.0, 0.0)).unwrap();
        assert_eq!(result, PayoffResult::new(0, 0));
    }

    #[test]
    fn test_payment_below_interest() {
        // Monthly interest on 10,000 at 6.5% is about 54.17.
        let result = solve_payoff_period(&PayoffQuery::new(10_000.0, 6.5, 50.0));
        assert!(matches!(
            result,
            Err(CalcError::InsufficientPayment { payment, .. }) if payment == 50.0
        ));
    }

    #[test]
    fn test_payment_equal_to_interest() {
        let result = solve_payoff_period(&PayoffQuery::new(12_000.0, 12.0, 120.0));
        assert!(result.unwrap_err().is_payment_error());
    }

    #[test]
    fn test_non_positive_payment() {
        let result = solve_payoff_period(&PayoffQuery::new(1_000.0, 0.0, 0.0));
        assert_eq!(result, Err(CalcError::InvalidPayment { payment: 0.0 }));
    }
}
