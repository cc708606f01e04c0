use crate::core::error::CalcResult;
use crate::core::money::Money;
use crate::core::rate::monthly_rate;
use crate::core::terms::LoanTerms;
use serde::{Deserialize, Serialize};

/// Fixed monthly payment and lifetime totals of an amortizing loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanAmortizationResult {
    pub monthly_payment: f64,
    /// `monthly_payment × months`.
    pub total_paid: f64,
    /// `total_paid − principal`.
    pub total_interest: f64,
    months: u32,
}

impl LoanAmortizationResult {
    /// Number of monthly payments over the term.
    pub fn months(&self) -> u32 {
        self.months
    }
}

/// Compute the fixed monthly payment of a standard amortizing loan.
///
/// Uses the annuity closed form `P·r / (1 − (1 + r)^−n)` with `r` the
/// monthly rate and `n` the number of months. A zero rate falls back to
/// straight-line repayment `P / n`, so total interest is exactly zero.
///
/// # Examples
///
/// ```
/// use loan_engine::core::terms::LoanTerms;
/// use loan_engine::loan::amortization::amortize_loan;
///
/// let result = amortize_loan(&LoanTerms::new(12_000.0, 0.0, 4)).unwrap();
/// assert_eq!(result.monthly_payment, 250.0);
/// assert_eq!(result.total_interest, 0.0);
/// ```
pub fn amortize_loan(terms: &LoanTerms) -> CalcResult<LoanAmortizationResult> {
    terms.validate()?;

    let rate = monthly_rate(terms.annual_rate_percent);
    let months = terms.months();
    let n = months as f64;

    let monthly_payment = if rate == 0.0 {
        terms.principal / n
    } else {
        // 1 − (1 + r)^−n, kept accurate when r is tiny.
        let discount = -(-n * rate.ln_1p()).exp_m1();
        terms.principal * rate / discount
    };

    let total_paid = monthly_payment * n;
    let total_interest = total_paid - terms.principal;

    log::debug!(
        "amortized {} over {} months at {}%: payment {}",
        terms.principal,
        months,
        terms.annual_rate_percent,
        monthly_payment
    );

    Ok(LoanAmortizationResult {
        monthly_payment,
        total_paid,
        total_interest,
        months,
    })
}

impl std::fmt::Display for LoanAmortizationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Loan ===")?;
        writeln!(f, "Months:          {}", self.months)?;
        writeln!(f, "Monthly Payment: {}", Money(self.monthly_payment))?;
        writeln!(f, "Total Paid:      {}", Money(self.total_paid))?;
        writeln!(f, "Total Interest:  {}", Money(self.total_interest))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CalcError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_regular_loan() {
        let result = amortize_loan(&LoanTerms::new(10_000.0, 5.0, 5)).unwrap();
        assert_abs_diff_eq!(result.monthly_payment, 188.71, epsilon = 0.005);
        assert_abs_diff_eq!(result.total_paid, 11_322.74, epsilon = 0.005);
        assert_abs_diff_eq!(result.total_interest, 1_322.74, epsilon = 0.005);
        assert_eq!(result.months(), 60);
    }

    #[test]
    fn test_zero_interest_loan() {
        let result = amortize_loan(&LoanTerms::new(12_000.0, 0.0, 4)).unwrap();
        assert_eq!(result.monthly_payment, 250.0);
        assert_eq!(result.total_paid, 12_000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_tiny_rate_tends_to_straight_line() {
        let result = amortize_loan(&LoanTerms::new(12_000.0, 1e-14, 4)).unwrap();
        assert!(result.monthly_payment.is_finite());
        assert_relative_eq!(result.monthly_payment, 250.0, max_relative = 1e-9);
        assert_relative_eq!(result.total_paid, 12_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_totals_identity() {
        let terms = LoanTerms::new(250_000.0, 6.25, 30);
        let result = amortize_loan(&terms).unwrap();
        assert_relative_eq!(result.total_paid, result.monthly_payment * 360.0);
        assert_relative_eq!(result.total_interest, result.total_paid - terms.principal);
    }

    #[test]
    fn test_zero_term_rejected() {
        let result = amortize_loan(&LoanTerms::new(10_000.0, 5.0, 0));
        assert_eq!(
            result,
            Err(CalcError::InvalidTerm {
                field: "term_years",
                value: 0
            })
        );
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = amortize_loan(&LoanTerms::new(10_000.0, -2.0, 5));
        assert!(matches!(result, Err(CalcError::InvalidRate { .. })));
    }

    #[test]
    fn test_display_rounds_to_cents() {
        let result = amortize_loan(&LoanTerms::new(10_000.0, 5.0, 5)).unwrap();
        let text = result.to_string();
        assert!(text.contains("Monthly Payment: $188.71"));
        assert!(text.contains("Total Interest:  $1322.74"));
    }
}
