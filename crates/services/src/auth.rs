use crate::admin::AdminCredentials;
use crate::store::{load_json, load_or_default, save_json, SessionStore, SESSION_KEY, USERS_KEY};
use crate::now_millis;
use shared_types::{AppError, AuthState, PaymentRecord, UserRecord};
use std::rc::Rc;

/// Owns the canonical session and the student ledger.
///
/// Every operation that changes the session returns a complete
/// [`AuthState`]; callers replace whatever they hold with it.
pub struct AuthService {
    store: Rc<dyn SessionStore>,
    admin: AdminCredentials,
    current: AuthState,
    users: Vec<UserRecord>,
}

impl AuthService {
    /// Restore the persisted session (if any) from `store`.
    pub fn new(store: Rc<dyn SessionStore>, admin: AdminCredentials) -> Self {
        let current = match load_json::<AuthState>(store.as_ref(), SESSION_KEY) {
            Ok(Some(state)) => state.normalized(),
            Ok(None) => AuthState::guest(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored session unreadable; starting as guest");
                AuthState::guest()
            }
        };
        let users = load_or_default(store.as_ref(), USERS_KEY);

        if current.is_authenticated {
            tracing::info!(role = current.role.as_str(), "Restored persisted session");
        }

        Self {
            store,
            admin,
            current,
            users,
        }
    }

    pub fn get_auth_state(&self) -> AuthState {
        self.current.clone()
    }

    pub fn is_admin(&self) -> bool {
        self.current.is_admin()
    }

    pub fn is_user(&self) -> bool {
        self.current.is_user()
    }

    /// Students the vault has seen, most recent sign-in first.
    pub fn known_users(&self) -> Vec<UserRecord> {
        let mut users = self.users.clone();
        users.sort_by(|a, b| b.last_login_at.cmp(&a.last_login_at));
        users
    }

    /// Start a student session. The paid flag is carried over from the
    /// ledger when this email has signed in before.
    pub fn login_with_google(
        &mut self,
        email: &str,
        display_name: Option<&str>,
        picture: Option<&str>,
    ) -> Result<AuthState, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::bad_request("Identity token carried no email"));
        }

        let mut users = self.users.clone();
        let now = now_millis();
        let record = match users
            .iter_mut()
            .find(|u| u.email.eq_ignore_ascii_case(email))
        {
            Some(existing) => {
                existing.display_name = display_name.map(String::from);
                existing.profile_picture = picture.map(String::from);
                existing.last_login_at = now;
                existing.clone()
            }
            None => {
                let record = UserRecord {
                    email: email.to_string(),
                    display_name: display_name.map(String::from),
                    profile_picture: picture.map(String::from),
                    is_paid: false,
                    last_login_at: now,
                };
                users.push(record.clone());
                record
            }
        };

        let state = AuthState::user(
            record.email.clone(),
            record.display_name.clone(),
            record.profile_picture.clone(),
            record.is_paid,
        );

        // The in-memory ledger follows whatever reached the store, even when
        // the session write below fails.
        save_json(self.store.as_ref(), USERS_KEY, &users)?;
        self.users = users;
        save_json(self.store.as_ref(), SESSION_KEY, &state)?;

        tracing::info!(email = %record.email, paid = record.is_paid, "Student signed in");
        self.current = state.clone();
        Ok(state)
    }

    /// Start a staff session, or `None` when the credentials do not match.
    pub fn login_admin(&mut self, email: &str, password: &str) -> Option<AuthState> {
        if !self.admin.is_enabled() {
            tracing::warn!("Staff login attempted but no admin account is configured");
            return None;
        }
        if !self.admin.verify(email, password) {
            tracing::warn!(email = %email.trim(), "Rejected admin credentials");
            return None;
        }

        let state = AuthState::admin(self.admin.email());
        self.persist_session(&state);
        tracing::info!(email = %self.admin.email(), "Admin signed in");
        self.current = state.clone();
        Some(state)
    }

    /// Flip the paid flag on the current session. `None` when nobody is signed in.
    pub fn update_payment_status(&mut self, paid: bool) -> Option<AuthState> {
        if !self.current.is_authenticated {
            return None;
        }

        let state = AuthState {
            is_paid: paid,
            ..self.current.clone()
        };

        if let Some(email) = state.email.as_deref() {
            if let Some(record) = self
                .users
                .iter_mut()
                .find(|u| u.email.eq_ignore_ascii_case(email))
            {
                record.is_paid = paid;
                if let Err(e) = save_json(self.store.as_ref(), USERS_KEY, &self.users) {
                    tracing::error!(error = %e, "Failed to persist ledger");
                }
            }
        }

        self.persist_session(&state);
        tracing::info!(paid, "Payment status updated");
        self.current = state.clone();
        Some(state)
    }

    /// Apply a payment outcome. Only a successful payment belonging to the
    /// signed-in user unlocks the vault; anything else leaves the session as is.
    pub fn apply_payment(&mut self, record: &PaymentRecord) -> Option<AuthState> {
        if !self.current.is_authenticated {
            return None;
        }
        let belongs_to_session = self
            .current
            .email
            .as_deref()
            .is_some_and(|email| email.eq_ignore_ascii_case(&record.user_id));

        if !belongs_to_session {
            tracing::warn!(payment = %record.id, "Ignoring payment for another user");
            return Some(self.get_auth_state());
        }
        if !record.is_success() {
            tracing::info!(payment = %record.id, status = record.status.as_str(), "Payment not settled");
            return Some(self.get_auth_state());
        }
        self.update_payment_status(true)
    }

    /// End the session. The ledger is kept.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            tracing::error!(error = %e, "Failed to clear persisted session");
        }
        if self.current.is_authenticated {
            tracing::info!(role = self.current.role.as_str(), "Signed out");
        }
        self.current = AuthState::guest();
    }

    fn persist_session(&self, state: &AuthState) {
        if let Err(e) = save_json(self.store.as_ref(), SESSION_KEY, state) {
            tracing::error!(error = %e, "Failed to persist session");
        }
    }
}
