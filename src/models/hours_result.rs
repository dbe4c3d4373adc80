//! Hours engine output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The split of a worked day into regular and overtime hours.
///
/// `error` is `None` for a valid calculation. When it carries a message all
/// three hour buckets are zero.
///
/// # Example
///
/// ```
/// use attendance_engine::models::HoursResult;
///
/// let result = HoursResult::rejected("checkout must be after checkin");
/// assert!(!result.is_valid());
/// assert!(result.total_hours.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursResult {
    /// Regular plus overtime hours.
    pub total_hours: Decimal,
    /// Hours counted as regular time.
    pub regular_hours: Decimal,
    /// Hours counted as overtime.
    pub overtime_hours: Decimal,
    /// A user-facing message when the inputs were rejected.
    pub error: Option<String>,
}

impl HoursResult {
    /// A result with no hours and no error, as used for absence records.
    pub fn zero() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            error: None,
        }
    }

    /// A rejected calculation carrying `message` and zero hours.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::zero()
        }
    }

    /// Returns true when the calculation was accepted.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}
