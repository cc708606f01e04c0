use thiserror::Error;

/// Errors arising from loan and savings calculations.
///
/// Every failure is a deterministic function of the inputs, so callers
/// should report these as validation messages rather than retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{field} must be a positive number of periods, got {value}")]
    InvalidTerm { field: &'static str, value: u32 },

    #[error("monthly payment {payment} does not cover the monthly interest of {interest} on the balance")]
    InsufficientPayment { payment: f64, interest: f64 },

    #[error("monthly payment must be a positive finite amount, got {payment}")]
    InvalidPayment { payment: f64 },

    #[error("{field} must be a non-negative finite percentage, got {rate}")]
    InvalidRate { field: &'static str, rate: f64 },

    #[error("{field} {reason}, got {value}")]
    InvalidAmount {
        field: &'static str,
        reason: &'static str,
        value: f64,
    },
}

impl CalcError {
    /// True for both payment failures: a malformed payment and one too
    /// small to amortize the balance.
    pub fn is_payment_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidPayment { .. } | CalcError::InsufficientPayment { .. }
        )
    }
}

pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_values() {
        let err = CalcError::InvalidTerm {
            field: "term_years",
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "term_years must be a positive number of periods, got 0"
        );

        let err = CalcError::InvalidRate {
            field: "annual_rate_percent",
            rate: -1.5,
        };
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn test_payment_error_classification() {
        assert!(CalcError::InvalidPayment { payment: 0.0 }.is_payment_error());
        assert!(CalcError::InsufficientPayment {
            payment: 10.0,
            interest: 54.17
        }
        .is_payment_error());
        assert!(!CalcError::InvalidTerm {
            field: "period_months",
            value: 0
        }
        .is_payment_error());
    }
}
