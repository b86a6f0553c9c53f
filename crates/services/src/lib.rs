pub mod admin;
pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod controller;
pub mod password;
pub mod store;

pub use admin::AdminCredentials;
pub use auth::AuthService;
pub use catalog::Catalog;
pub use checkout::SimulatedCheckout;
pub use controller::{VaultController, GOOGLE_AUTH_FAILED, INVALID_ADMIN_CREDENTIALS};
pub use store::{MemorySessionStore, SessionStore};

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileSessionStore;

/// Current time as Unix epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
