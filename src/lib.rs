//! # loan-engine
//!
//! Amortization and compound-growth calculations for fixed-rate
//! installment loans and recurring-contribution savings accounts.
//!
//! Every entry point is a pure function from a value record to a result
//! (or a [`CalcError`](core::error::CalcError)). Nothing is cached or
//! shared between calls, so the functions are safe to call from any thread.
//!
//! ## Architecture
//!
//! - **core**: Input records, validation, errors, rate conventions, money formatting
//! - **loan**: Payment amortization, payoff period solving, chunked payment schedules
//! - **savings**: Future value of deposits under yearly, monthly or daily compounding

pub mod core;
pub mod loan;
pub mod savings;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::error::{CalcError, CalcResult};
    pub use crate::core::rate::CompoundingMode;
    pub use crate::core::terms::{LoanTerms, PayoffQuery, SavingsTerms, ScheduleQuery};
    pub use crate::loan::amortization::{amortize_loan, LoanAmortizationResult};
    pub use crate::loan::payoff::{solve_payoff_period, PayoffResult};
    pub use crate::loan::schedule::{build_schedule, project_scheduled_payments, ScheduleResult};
    pub use crate::savings::growth::{project_savings, SavingsResult};
}
