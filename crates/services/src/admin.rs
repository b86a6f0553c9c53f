use crate::password::{hash_password, verify_password};
use shared_types::AdminConfig;

/// The single staff account the credential form accepts.
///
/// This is a client-side stub: whoever ships the config ships the hash.
/// Real staff authentication needs a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCredentials {
    email: String,
    password_hash: Option<String>,
}

impl AdminCredentials {
    /// Build from config. A plain `password` is hashed here and dropped; a
    /// config without an email or any password disables staff login.
    pub fn from_config(config: &AdminConfig) -> Self {
        let email = config.email.trim().to_string();
        if email.is_empty() {
            tracing::warn!("No admin email configured; staff login is disabled");
            return Self::disabled();
        }

        let password_hash = match (&config.password_hash, &config.password) {
            (Some(hash), _) if !hash.is_empty() => Some(hash.clone()),
            (_, Some(plain)) if !plain.is_empty() => match hash_password(plain) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    tracing::error!(%e, "Failed to hash configured admin password");
                    None
                }
            },
            _ => {
                tracing::warn!(email = %email, "No admin password configured; staff login is disabled");
                None
            }
        };

        Self {
            email,
            password_hash,
        }
    }

    /// Credentials from an existing Argon2 PHC hash.
    pub fn with_hash(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: Some(password_hash.into()),
        }
    }

    /// Credentials that reject everything.
    pub fn disabled() -> Self {
        Self {
            email: String::new(),
            password_hash: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.email.is_empty() && self.password_hash.is_some()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Email match is case-insensitive; the password must verify against the hash.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let Some(hash) = self.password_hash.as_deref() else {
            return false;
        };
        if self.email.is_empty() || !self.email.eq_ignore_ascii_case(email.trim()) {
            return false;
        }
        match verify_password(password, hash) {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!(%e, "Configured admin password hash is unreadable");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(email: &str, password: Option<&str>, hash: Option<&str>) -> AdminConfig {
        AdminConfig {
            email: email.to_string(),
            password: password.map(String::from),
            password_hash: hash.map(String::from),
        }
    }

    #[test]
    fn plain_password_is_hashed_and_verifies() {
        let creds = AdminCredentials::from_config(&config("staff@notevault.in", Some("s3cret"), None));
        assert!(creds.is_enabled());
        assert!(creds.verify("staff@notevault.in", "s3cret"));
        assert!(creds.verify("  STAFF@notevault.IN ", "s3cret"));
        assert!(!creds.verify("staff@notevault.in", "wrong"));
        assert!(!creds.verify("other@notevault.in", "s3cret"));
    }

    #[test]
    fn configured_hash_wins_over_plain_password() {
        let hash = hash_password("from-hash").unwrap();
        let creds = AdminCredentials::from_config(&config(
            "staff@notevault.in",
            Some("from-plain"),
            Some(&hash),
        ));
        assert!(creds.verify("staff@notevault.in", "from-hash"));
        assert!(!creds.verify("staff@notevault.in", "from-plain"));
    }

    #[test]
    fn missing_pieces_disable_login() {
        assert!(!AdminCredentials::from_config(&config("", Some("pw"), None)).is_enabled());
        let no_password = AdminCredentials::from_config(&config("staff@notevault.in", None, None));
        assert!(!no_password.is_enabled());
        assert!(!no_password.verify("staff@notevault.in", ""));
        assert!(!AdminCredentials::disabled().verify("", ""));
    }

    #[test]
    fn unreadable_hash_rejects() {
        let creds = AdminCredentials::with_hash("staff@notevault.in", "garbage");
        assert!(!creds.verify("staff@notevault.in", "anything"));
    }
}
