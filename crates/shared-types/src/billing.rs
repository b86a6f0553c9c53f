use serde::{Deserialize, Serialize};

/// Outcome of a payment attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Success,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "SUCCESS",
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Failed => "FAILED",
        }
    }
}

/// A recorded payment attempt. Only `Success` unlocks the vault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    /// Email of the student the payment belongs to.
    pub user_id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub status: PaymentStatus,
    pub timestamp: i64,
}

impl PaymentRecord {
    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Success
    }
}

/// Format minor units as a price label, e.g. `49900` + `"INR"` → `"INR 499.00"`.
pub fn format_amount(amount: i64, currency: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{currency} {sign}{}.{:02}", abs / 100, abs % 100)
}
