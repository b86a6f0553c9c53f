use serde::{Deserialize, Serialize};

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default, so a missing or partial file
/// still produces a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub billing: BillingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Sign-in provider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default = "default_script_url")]
    pub script_url: String,
    #[serde(default)]
    pub button: ButtonOptions,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            script_url: default_script_url(),
            button: ButtonOptions::default(),
        }
    }
}

fn default_script_url() -> String {
    "https://accounts.google.com/gsi/client".to_string()
}

/// Options passed to the provider's `renderButton`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonOptions {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_size")]
    pub size: String,
    #[serde(default = "default_width")]
    pub width: u32,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            size: default_size(),
            width: default_width(),
        }
    }
}

fn default_theme() -> String {
    "outline".to_string()
}

fn default_size() -> String {
    "large".to_string()
}

fn default_width() -> u32 {
    250
}

/// Staff credential stub.
///
/// `password_hash` (an Argon2 PHC string) wins over `password`; a plain
/// `password` is hashed once at startup and never kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminConfig {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

/// Where the session store keeps its data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Key prefix, e.g. `notevault` → `notevault.session`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Directory for the file-backed store on native targets.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            dir: default_storage_dir(),
        }
    }
}

fn default_namespace() -> String {
    "notevault".to_string()
}

fn default_storage_dir() -> String {
    ".notevault".to_string()
}

/// Price of the vault unlock charged by the simulated checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingConfig {
    #[serde(default = "default_price")]
    pub price_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            price_cents: default_price(),
            currency: default_currency(),
        }
    }
}

fn default_price() -> i64 {
    49_900
}

fn default_currency() -> String {
    "INR".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = toml::from_str::<AppConfig>("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.identity.button.width, 250);
        assert_eq!(config.identity.script_url, "https://accounts.google.com/gsi/client");
        assert_eq!(config.storage.namespace, "notevault");
        assert_eq!(config.billing.price_cents, 49_900);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_default_missing_fields() {
        let config = toml::from_str::<AppConfig>(
            r#"
            [identity]
            client_id = "abc.apps.googleusercontent.com"

            [identity.button]
            theme = "filled_blue"
            "#,
        )
        .unwrap();
        assert_eq!(config.identity.client_id, "abc.apps.googleusercontent.com");
        assert_eq!(config.identity.button.theme, "filled_blue");
        assert_eq!(config.identity.button.size, "large");
        assert_eq!(config.admin, AdminConfig::default());
    }

    #[test]
    fn full_document() {
        let config = toml::from_str::<AppConfig>(
            r#"
            [identity]
            client_id = "id"
            script_url = "https://example.test/gsi.js"

            [admin]
            email = "staff@notevault.in"
            password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"

            [storage]
            namespace = "nv"
            dir = "/tmp/nv"

            [billing]
            price_cents = 1000
            currency = "USD"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.admin.email, "staff@notevault.in");
        assert!(config.admin.password.is_none());
        assert!(config.admin.password_hash.is_some());
        assert_eq!(config.storage.dir, "/tmp/nv");
        assert_eq!(config.billing.currency, "USD");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
