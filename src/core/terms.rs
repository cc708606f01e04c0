use crate::core::error::{CalcError, CalcResult};
use crate::core::rate::{CompoundingMode, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// Terms of a fixed-rate amortizing loan.
///
/// # Examples
///
/// ```
/// use loan_engine::core::terms::LoanTerms;
///
/// let terms = LoanTerms::new(10_000.0, 5.0, 5);
/// assert_eq!(terms.months(), 60);
/// assert!(terms.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed. Must be positive.
    pub principal: f64,
    /// Nominal annual interest rate, in percent.
    pub annual_rate_percent: f64,
    /// Loan term in whole years.
    pub term_years: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    pub fn months(&self) -> u32 {
        self.term_years.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn validate(&self) -> CalcResult<()> {
        check_term_years(self.term_years)?;
        check_rate("annual_rate_percent", self.annual_rate_percent)?;
        check_finite("principal", self.principal)?;
        if self.principal <= 0.0 {
            return Err(CalcError::InvalidAmount {
                field: "principal",
                reason: "must be positive",
                value: self.principal,
            });
        }
        Ok(())
    }
}

/// Terms of a recurring-contribution savings plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsTerms {
    /// Opening deposit. Must not be negative.
    pub initial: f64,
    /// Amount added at the end of every month.
    pub monthly_contribution: f64,
    /// Rate in percent, in the unit selected by `compounding`.
    pub rate_percent: f64,
    pub term_years: u32,
    #[serde(default)]
    pub compounding: CompoundingMode,
}

impl SavingsTerms {
    /// Savings terms with the default (yearly) compounding mode.
    pub fn new(initial: f64, monthly_contribution: f64, rate_percent: f64, term_years: u32) -> Self {
        Self {
            initial,
            monthly_contribution,
            rate_percent,
            term_years,
            compounding: CompoundingMode::default(),
        }
    }

    pub fn with_compounding(mut self, compounding: CompoundingMode) -> Self {
        self.compounding = compounding;
        self
    }

    pub fn months(&self) -> u32 {
        self.term_years.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn validate(&self) -> CalcResult<()> {
        check_term_years(self.term_years)?;
        check_rate("rate_percent", self.rate_percent)?;
        check_finite("initial", self.initial)?;
        check_finite("monthly_contribution", self.monthly_contribution)?;
        if self.initial < 0.0 {
            return Err(CalcError::InvalidAmount {
                field: "initial",
                reason: "must not be negative",
                value: self.initial,
            });
        }
        Ok(())
    }
}

/// Inputs for solving the remaining time to pay off a loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffQuery {
    /// Outstanding balance. Zero or negative means the loan is settled.
    pub remaining_principal: f64,
    pub annual_rate_percent: f64,
    pub monthly_payment: f64,
}

impl PayoffQuery {
    pub fn new(remaining_principal: f64, annual_rate_percent: f64, monthly_payment: f64) -> Self {
        Self {
            remaining_principal,
            annual_rate_percent,
            monthly_payment,
        }
    }

    /// Validation for an outstanding (positive) balance.
    pub fn validate(&self) -> CalcResult<()> {
        check_rate("annual_rate_percent", self.annual_rate_percent)?;
        check_finite("remaining_principal", self.remaining_principal)?;
        check_payment(self.monthly_payment)
    }
}

/// Inputs for projecting one chunk of a payment schedule.
///
/// The `previous_*` accumulators and `remaining_principal` are threaded by
/// the caller from one chunk's [`ScheduleResult`](crate::loan::schedule::ScheduleResult)
/// into the next query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub remaining_principal: f64,
    pub annual_rate_percent: f64,
    pub monthly_payment: f64,
    /// Total paid across all earlier chunks.
    #[serde(default)]
    pub previous_total_paid: f64,
    /// Interest paid across all earlier chunks.
    #[serde(default)]
    pub previous_interest_paid: f64,
    /// Months to simulate in this chunk.
    pub period_months: u32,
}

impl ScheduleQuery {
    pub fn new(
        remaining_principal: f64,
        annual_rate_percent: f64,
        monthly_payment: f64,
        previous_total_paid: f64,
        previous_interest_paid: f64,
        period_months: u32,
    ) -> Self {
        Self {
            remaining_principal,
            annual_rate_percent,
            monthly_payment,
            previous_total_paid,
            previous_interest_paid,
            period_months,
        }
    }

    /// A query for the first chunk of a fresh loan.
    pub fn starting(
        principal: f64,
        annual_rate_percent: f64,
        monthly_payment: f64,
        period_months: u32,
    ) -> Self {
        Self::new(principal, annual_rate_percent, monthly_payment, 0.0, 0.0, period_months)
    }

    pub fn validate(&self) -> CalcResult<()> {
        check_term("period_months", self.period_months)?;
        check_rate("annual_rate_percent", self.annual_rate_percent)?;
        check_payment(self.monthly_payment)?;
        check_finite("remaining_principal", self.remaining_principal)?;
        check_finite("previous_total_paid", self.previous_total_paid)?;
        check_finite("previous_interest_paid", self.previous_interest_paid)?;
        if self.remaining_principal < 0.0 {
            return Err(CalcError::InvalidAmount {
                field: "remaining_principal",
                reason: "must not be negative",
                value: self.remaining_principal,
            });
        }
        Ok(())
    }
}

fn check_term(field: &'static str, value: u32) -> CalcResult<()> {
    if value == 0 {
        return Err(CalcError::InvalidTerm { field, value });
    }
    Ok(())
}

fn check_term_years(years: u32) -> CalcResult<()> {
    check_term("term_years", years)?;
    if years.checked_mul(MONTHS_PER_YEAR).is_none() {
        return Err(CalcError::InvalidTerm {
            field: "term_years",
            value: years,
        });
    }
    Ok(())
}

fn check_rate(field: &'static str, rate: f64) -> CalcResult<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(CalcError::InvalidRate { field, rate });
    }
    Ok(())
}

fn check_payment(payment: f64) -> CalcResult<()> {
    if !payment.is_finite() || payment <= 0.0 {
        return Err(CalcError::InvalidPayment { payment });
    }
    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::InvalidAmount {
            field,
            reason: "must be a finite number",
            value,
        });
    }
    Ok(())
}
