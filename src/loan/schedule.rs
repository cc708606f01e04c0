use crate::core::error::{CalcError, CalcResult};
use crate::core::money::Money;
use crate::core::rate::monthly_rate;
use crate::core::terms::ScheduleQuery;
use serde::{Deserialize, Serialize};

/// Cumulative totals after projecting one chunk of a payment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Everything paid so far, including earlier chunks.
    pub total_paid: f64,
    /// Interest paid so far, including earlier chunks.
    pub total_interest: f64,
    /// Balance left after this chunk. Never negative.
    pub remaining_principal: f64,
    /// Months actually simulated in this chunk.
    pub months_projected: u32,
}

impl ScheduleResult {
    pub fn is_paid_off(&self) -> bool {
        self.remaining_principal <= 0.0
    }

    /// Principal repaid so far.
    pub fn principal_paid(&self) -> f64 {
        self.total_paid - self.total_interest
    }
}

impl ScheduleQuery {
    /// The query for the chunk following `result`, keeping this query's
    /// rate, payment and chunk length.
    pub fn following(&self, result: &ScheduleResult) -> ScheduleQuery {
        ScheduleQuery {
            remaining_principal: result.remaining_principal,
            previous_total_paid: result.total_paid,
            previous_interest_paid: result.total_interest,
            ..*self
        }
    }
}

/// Simulate up to `period_months` of monthly payments on a balance.
///
/// Each month accrues `balance × r` interest and applies the rest of the
/// payment to principal, capped at the remaining balance so the final
/// month never overpays. The loop stops early once the balance reaches
/// zero.
///
/// The engine keeps no state between calls: feeding each result into the
/// next query via [`ScheduleQuery::following`] rebuilds the full schedule
/// chunk by chunk.
///
/// # Errors
///
/// [`CalcError::InsufficientPayment`] when the payment does not exceed the
/// first month's interest, since the balance would never shrink.
///
/// # Examples
///
/// ```
/// use loan_engine::core::terms::ScheduleQuery;
/// use loan_engine::loan::schedule::project_scheduled_payments;
///
/// let query = ScheduleQuery::starting(10_000.0, 6.5, 195.66, 12);
/// let first_year = project_scheduled_payments(&query).unwrap();
/// let second_year = project_scheduled_payments(&query.following(&first_year)).unwrap();
///
/// assert!(second_year.remaining_principal < first_year.remaining_principal);
/// assert!(second_year.total_paid > first_year.total_paid);
/// ```
pub fn project_scheduled_payments(query: &ScheduleQuery) -> CalcResult<ScheduleResult> {
    query.validate()?;

    let rate = monthly_rate(query.annual_rate_percent);
    let payment = query.monthly_payment;

    let opening_interest = query.remaining_principal * rate;
    if query.remaining_principal > 0.0 && payment <= opening_interest {
        return Err(CalcError::InsufficientPayment {
            payment,
            interest: opening_interest,
        });
    }

    let mut principal = query.remaining_principal;
    let mut period_payments = 0.0;
    let mut period_interest = 0.0;
    let mut months_projected = 0;

    for month in 0..query.period_months {
        if principal <= 0.0 {
            break;
        }
        let interest = principal * rate;
        let principal_portion = (payment - interest).min(principal);

        period_payments += interest + principal_portion;
        period_interest += interest;
        principal -= principal_portion;
        months_projected += 1;

        log::trace!(
            "month {}: interest {}, principal {}, balance {}",
            month + 1,
            interest,
            principal_portion,
            principal
        );
    }

    let result = ScheduleResult {
        total_paid: query.previous_total_paid + period_payments,
        total_interest: query.previous_interest_paid + period_interest,
        remaining_principal: principal.max(0.0),
        months_projected,
    };

    log::debug!(
        "projected {} of {} months: paid {}, interest {}, balance {}",
        months_projected,
        query.period_months,
        period_payments,
        period_interest,
        result.remaining_principal
    );

    Ok(result)
}

/// Project a whole schedule in chunks of `query.period_months`.
///
/// Returns the cumulative snapshot after each chunk, stopping once the loan
/// is paid off or `max_chunks` chunks have been projected.
pub fn build_schedule(query: &ScheduleQuery, max_chunks: usize) -> CalcResult<Vec<ScheduleResult>> {
    let mut chunks = Vec::new();
    let mut next = *query;

    while chunks.len() < max_chunks {
        let result = project_scheduled_payments(&next)?;
        chunks.push(result);
        if result.is_paid_off() {
            break;
        }
        next = next.following(&result);
    }

    Ok(chunks)
}

impl std::fmt::Display for ScheduleResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Months Projected:    {}", self.months_projected)?;
        writeln!(f, "Total Paid:          {}", Money(self.total_paid))?;
        writeln!(f, "Total Interest:      {}", Money(self.total_interest))?;
        writeln!(f, "Remaining Principal: {}", Money(self.remaining_principal))?;
        Ok(())
    }
}
