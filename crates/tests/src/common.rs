use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;
use services::{MemorySessionStore, SessionStore, VaultController};
use shared_types::{AdminConfig, AppConfig, AppError, BillingConfig};
use std::rc::Rc;

pub const ADMIN_EMAIL: &str = "admin@notevault.in";
pub const ADMIN_PASSWORD: &str = "correct horse";

/// Config with a known staff credential and the default price.
pub fn test_config() -> AppConfig {
    AppConfig {
        admin: AdminConfig {
            email: ADMIN_EMAIL.to_string(),
            password: Some(ADMIN_PASSWORD.to_string()),
            password_hash: None,
        },
        billing: BillingConfig::default(),
        ..AppConfig::default()
    }
}

pub fn fresh_store() -> Rc<MemorySessionStore> {
    Rc::new(MemorySessionStore::new())
}

pub fn controller_on(store: Rc<MemorySessionStore>) -> VaultController {
    let store: Rc<dyn SessionStore> = store;
    VaultController::from_config(store, &test_config())
}

pub fn controller() -> VaultController {
    controller_on(fresh_store())
}

/// A memory store whose writes to one key always fail, like a browser
/// storage quota that fills up halfway through a sign-in.
pub struct RefusingStore {
    inner: MemorySessionStore,
    refused: &'static str,
}

impl RefusingStore {
    pub fn refusing(key: &'static str) -> Rc<Self> {
        Rc::new(Self {
            inner: MemorySessionStore::new(),
            refused: key,
        })
    }
}

impl SessionStore for RefusingStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if key == self.refused {
            return Err(AppError::storage(format!("quota exceeded writing {key}")));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.inner.remove(key)
    }
}

pub fn controller_on_refusing(store: Rc<RefusingStore>) -> VaultController {
    let store: Rc<dyn SessionStore> = store;
    VaultController::from_config(store, &test_config())
}

/// A three-segment token whose payload is `claims`. Header and signature are
/// opaque filler; nothing verifies them.
pub fn token_for(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

pub fn student_token(email: &str, name: &str) -> String {
    token_for(&serde_json::json!({
        "email": email,
        "name": name,
        "picture": format!("https://lh3.example/{}.png", uuid::Uuid::new_v4()),
        "sub": "1234567890",
    }))
}

/// Sign a student in through the credential callback.
pub fn sign_in_student(controller: &mut VaultController, email: &str) {
    controller.begin_sign_in();
    controller.handle_credential(&student_token(email, "Test Student"));
}

pub fn sign_in_staff(controller: &mut VaultController) {
    assert!(controller.submit_admin_login(ADMIN_EMAIL, ADMIN_PASSWORD));
}
