use crate::now_millis;
use shared_types::{format_amount, BillingConfig, PaymentRecord, PaymentStatus};

/// Stand-in for a payment gateway. Every charge settles immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedCheckout {
    price_cents: i64,
    currency: String,
}

impl SimulatedCheckout {
    pub fn new(price_cents: i64, currency: impl Into<String>) -> Self {
        Self {
            price_cents,
            currency: currency.into(),
        }
    }

    pub fn from_config(config: &BillingConfig) -> Self {
        Self::new(config.price_cents, config.currency.clone())
    }

    /// Price as shown on the paywall, e.g. `INR 499.00`.
    pub fn price_label(&self) -> String {
        format_amount(self.price_cents, &self.currency)
    }

    /// Charge `user_id` the vault price.
    pub fn charge(&self, user_id: &str) -> PaymentRecord {
        let record = PaymentRecord {
            id: format!("pay_{}", uuid::Uuid::new_v4().simple()),
            user_id: user_id.to_string(),
            amount: self.price_cents,
            status: PaymentStatus::Success,
            timestamp: now_millis(),
        };
        tracing::info!(payment = %record.id, user = %user_id, amount = record.amount, "Simulated charge settled");
        record
    }
}

impl Default for SimulatedCheckout {
    fn default() -> Self {
        Self::from_config(&BillingConfig::default())
    }
}
