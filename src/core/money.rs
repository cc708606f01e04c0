use rust_decimal::Decimal;
use std::fmt;

/// Round a floating point amount to whole cents.
///
/// Non-finite amounts have no decimal representation and map to zero.
///
/// ```
/// use loan_engine::core::money::to_cents;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_cents(188.712336), dec!(188.71));
/// assert_eq!(to_cents(1322.7401864), dec!(1322.74));
/// ```
pub fn to_cents(amount: f64) -> Decimal {
    Decimal::from_f64_retain(amount)
        .unwrap_or(Decimal::ZERO)
        .round_dp(2)
}

/// Display wrapper printing an amount as `$1234.56`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = to_cents(self.0);
        if cents.is_sign_negative() && !cents.is_zero() {
            write!(f, "-${:.2}", cents.abs())
        } else {
            write!(f, "${:.2}", cents.abs())
        }
    }
}
