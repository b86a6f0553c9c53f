use dioxus::prelude::*;
use services::store::{namespaced, SessionStore, NOTES_KEY, SESSION_KEY, SUBJECTS_KEY, USERS_KEY};
use shared_types::AppError;
use std::cell::RefCell;
use std::collections::HashMap;

/// `localStorage`-backed store for the web build.
///
/// The page storage is only reachable asynchronously through the script
/// bridge, so every known key is read once in [`BrowserSessionStore::open`]
/// and served from a cache afterwards. Writes update the cache and are
/// forwarded to the page without waiting.
pub struct BrowserSessionStore {
    namespace: String,
    cache: RefCell<HashMap<String, String>>,
}

impl BrowserSessionStore {
    pub async fn open(namespace: &str) -> Self {
        let keys: Vec<String> = [SESSION_KEY, USERS_KEY, SUBJECTS_KEY, NOTES_KEY]
            .iter()
            .map(|key| namespaced(namespace, key))
            .collect();
        let script = format!(
            r#"
            const keys = {keys};
            const found = {{}};
            try {{
                for (const key of keys) {{
                    const value = window.localStorage.getItem(key);
                    if (value !== null) found[key] = value;
                }}
            }} catch (e) {{}}
            return found;
            "#,
            keys = json_literal(&keys),
        );

        let stored = match document::eval(&script).join::<HashMap<String, String>>().await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!(error = ?e, "Could not read localStorage; starting empty");
                HashMap::new()
            }
        };
        tracing::debug!(keys = stored.len(), "Browser session store opened");

        Self {
            namespace: namespace.to_string(),
            cache: RefCell::new(stored),
        }
    }

    fn full_key(&self, key: &str) -> String {
        namespaced(&self.namespace, key)
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.cache.borrow().get(&self.full_key(key)).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let key = self.full_key(key);
        document::eval(&format!(
            "try {{ window.localStorage.setItem({}, {}); }} catch (e) {{}}",
            json_literal(&key),
            json_literal(value),
        ));
        self.cache.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let key = self.full_key(key);
        document::eval(&format!(
            "try {{ window.localStorage.removeItem({}); }} catch (e) {{}}",
            json_literal(&key),
        ));
        self.cache.borrow_mut().remove(&key);
        Ok(())
    }
}

/// Quote a value for splicing into a script.
fn json_literal<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
