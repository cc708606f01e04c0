use serde::{Deserialize, Serialize};
use std::fmt;

/// Months per year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Average days per month used by daily compounding (365 / 12).
pub const DAYS_PER_MONTH: f64 = 365.0 / 12.0;

/// Convert a nominal annual rate in percent to a decimal monthly rate.
///
/// ```
/// use loan_engine::core::rate::monthly_rate;
///
/// assert_eq!(monthly_rate(12.0), 0.01);
/// assert_eq!(monthly_rate(0.0), 0.0);
/// ```
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64
}

/// How a savings rate input is interpreted and compounded.
///
/// Each variant reads `rate_percent` in a different unit, matching the
/// calculator's labelled input fields:
///
/// - `Yearly`: an annual rate, compounded monthly at `rate / 12`.
/// - `Monthly`: already a monthly rate, applied once per month.
/// - `Daily`: already a daily rate, applied over `365 / 12` days per month.
///
/// Unrecognized names parse as `Yearly`.
///
/// ```
/// use loan_engine::core::rate::CompoundingMode;
///
/// assert_eq!(CompoundingMode::from("daily"), CompoundingMode::Daily);
/// assert_eq!(CompoundingMode::from("quarterly"), CompoundingMode::Yearly);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CompoundingMode {
    #[default]
    Yearly,
    Monthly,
    Daily,
}

impl CompoundingMode {
    /// Decimal rate applied per compounding step.
    pub fn period_rate(self, rate_percent: f64) -> f64 {
        match self {
            CompoundingMode::Yearly => monthly_rate(rate_percent),
            CompoundingMode::Monthly | CompoundingMode::Daily => rate_percent / 100.0,
        }
    }

    /// Number of compounding steps in one month.
    pub fn steps_per_month(self) -> f64 {
        match self {
            CompoundingMode::Yearly | CompoundingMode::Monthly => 1.0,
            CompoundingMode::Daily => DAYS_PER_MONTH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompoundingMode::Yearly => "yearly",
            CompoundingMode::Monthly => "monthly",
            CompoundingMode::Daily => "daily",
        }
    }
}

impl fmt::Display for CompoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CompoundingMode {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "yearly" => CompoundingMode::Yearly,
            "monthly" => CompoundingMode::Monthly,
            "daily" => CompoundingMode::Daily,
            other => {
                log::warn!("unrecognized compounding mode '{}', using yearly", other);
                CompoundingMode::Yearly
            }
        }
    }
}

impl From<String> for CompoundingMode {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
