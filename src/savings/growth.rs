use crate::core::error::CalcResult;
use crate::core::money::Money;
use crate::core::rate::CompoundingMode;
use crate::core::terms::SavingsTerms;
use serde::{Deserialize, Serialize};

/// Projected value of a savings plan at the end of its term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub future_value: f64,
    /// Initial deposit plus every monthly contribution.
    pub total_contributed: f64,
    /// Growth above what was paid in.
    pub interest_earned: f64,
    pub compounding: CompoundingMode,
}

/// Project the future value of an initial deposit plus monthly
/// contributions.
///
/// The deposit compounds over the whole term. Each contribution is made at
/// the end of its month and compounds from then until the end of the term.
/// How `rate_percent` is read, and how many compounding steps fall in a
/// month, depend on [`CompoundingMode`].
///
/// # Examples
///
/// ```
/// use loan_engine::core::terms::SavingsTerms;
/// use loan_engine::savings::growth::project_savings;
///
/// let result = project_savings(&SavingsTerms::new(1000.0, 100.0, 0.0, 5)).unwrap();
/// assert_eq!(result.future_value, 7000.0);
/// ```
pub fn project_savings(terms: &SavingsTerms) -> CalcResult<SavingsResult> {
    terms.validate()?;

    let mode = terms.compounding;
    let growth = 1.0 + mode.period_rate(terms.rate_percent);
    let steps_per_month = mode.steps_per_month();
    let months = terms.months();
    let total_steps = steps_per_month * months as f64;

    let mut future_value = terms.initial * growth.powf(total_steps);
    for month in 0..months {
        let remaining_steps = total_steps - (month + 1) as f64 * steps_per_month;
        future_value += terms.monthly_contribution * growth.powf(remaining_steps);
    }

    let total_contributed = terms.initial + terms.monthly_contribution * months as f64;

    log::debug!(
        "projected savings of {} + {}/month at {}% ({}) over {} months: {}",
        terms.initial,
        terms.monthly_contribution,
        terms.rate_percent,
        mode,
        months,
        future_value
    );

    Ok(SavingsResult {
        future_value,
        total_contributed,
        interest_earned: future_value - total_contributed,
        compounding: mode,
    })
}

impl std::fmt::Display for SavingsResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Savings ({}) ===", self.compounding)?;
        writeln!(f, "Future Value:      {}", Money(self.future_value))?;
        writeln!(f, "Total Contributed: {}", Money(self.total_contributed))?;
        writeln!(f, "Interest Earned:   {}", Money(self.interest_earned))?;
        Ok(())
    }
}
