use crate::admin::AdminCredentials;
use crate::auth::AuthService;
use crate::catalog::Catalog;
use crate::checkout::SimulatedCheckout;
use crate::store::SessionStore;
use shared_types::{
    decode_identity_token, AppConfig, AppError, AuthState, NewNote, Note, PaymentRecord, Subject,
    UserRecord, View, ViewRouter,
};
use std::rc::Rc;

pub const INVALID_ADMIN_CREDENTIALS: &str = "Invalid admin credentials.";
pub const GOOGLE_AUTH_FAILED: &str = "Google authentication failed.";

/// Everything the shell renders from, and every intent a screen can raise.
///
/// The auth service is the source of truth for the session; this controller
/// keeps the snapshot the UI reads and feeds each replacement into the
/// router before anything is rendered.
pub struct VaultController {
    auth: AuthService,
    router: ViewRouter,
    catalog: Catalog,
    checkout: SimulatedCheckout,
    auth_state: AuthState,
    error: Option<String>,
    signing_in: bool,
}

impl VaultController {
    pub fn new(auth: AuthService, catalog: Catalog, checkout: SimulatedCheckout) -> Self {
        let auth_state = auth.get_auth_state();
        let mut router = ViewRouter::new();
        router.on_auth_changed(&auth_state);
        Self {
            auth,
            router,
            catalog,
            checkout,
            auth_state,
            error: None,
            signing_in: false,
        }
    }

    /// Wire every collaborator to one store using the loaded config.
    pub fn from_config(store: Rc<dyn SessionStore>, config: &AppConfig) -> Self {
        let auth = AuthService::new(store.clone(), AdminCredentials::from_config(&config.admin));
        let catalog = Catalog::new(store);
        Self::new(auth, catalog, SimulatedCheckout::from_config(&config.billing))
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth_state
    }

    pub fn view(&self) -> &View {
        self.router.current()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_signing_in(&self) -> bool {
        self.signing_in
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn checkout_price(&self) -> String {
        self.checkout.price_label()
    }

    /// Ledger listing for the staff dashboard. Empty for anyone else.
    pub fn known_users(&self) -> Vec<UserRecord> {
        if self.auth_state.is_admin() {
            self.auth.known_users()
        } else {
            Vec::new()
        }
    }

    /// The provider's button was pressed; show the overlay until the
    /// credential arrives.
    pub fn begin_sign_in(&mut self) {
        self.signing_in = true;
    }

    /// Credential callback from the identity provider.
    ///
    /// Undecodable tokens and tokens without an email are dropped without a
    /// message. The overlay is cleared on every path.
    pub fn handle_credential(&mut self, credential: &str) {
        self.signing_in = true;

        match decode_identity_token(credential) {
            Some(claims) => match claims.email.as_deref().filter(|e| !e.trim().is_empty()) {
                Some(email) => {
                    match self.auth.login_with_google(
                        email,
                        claims.name.as_deref(),
                        claims.picture.as_deref(),
                    ) {
                        Ok(state) => {
                            self.error = None;
                            self.replace_auth(state);
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Google sign-in failed");
                            self.error = Some(GOOGLE_AUTH_FAILED.to_string());
                        }
                    }
                }
                None => tracing::debug!("Identity token carried no email; ignoring"),
            },
            None => tracing::debug!("Ignoring undecodable identity token"),
        }

        self.signing_in = false;
    }

    /// The provider reported a failure before any credential arrived.
    pub fn provider_failed(&mut self, message: &str) {
        tracing::error!(reason = %message, "Identity provider unavailable");
        self.signing_in = false;
        self.error = Some(GOOGLE_AUTH_FAILED.to_string());
    }

    /// Staff credential form submit. Returns whether the login succeeded.
    pub fn submit_admin_login(&mut self, email: &str, password: &str) -> bool {
        match self.auth.login_admin(email, password) {
            Some(state) => {
                self.error = None;
                self.replace_auth(state);
                true
            }
            None => {
                self.error = Some(INVALID_ADMIN_CREDENTIALS.to_string());
                false
            }
        }
    }

    /// Manual navigation. Refused targets are logged and ignored.
    pub fn navigate(&mut self, target: View) {
        let from = self.router.current().clone();
        match self.router.navigate(target, &self.auth_state) {
            Ok(to) => {
                if *to != from {
                    tracing::debug!(from = %from, to = %to, "Navigated");
                }
                self.error = None;
            }
            Err(refused) => {
                tracing::warn!(
                    view = %refused,
                    role = self.auth_state.role.as_str(),
                    "Refused navigation"
                );
            }
        }
    }

    pub fn navigate_label(&mut self, label: &str) {
        self.navigate(View::from_label(label));
    }

    pub fn logout(&mut self) {
        self.auth.logout();
        self.auth_state = AuthState::guest();
        self.router.reset();
        self.error = None;
        self.signing_in = false;
    }

    /// Run the simulated checkout for the signed-in student.
    pub fn checkout(&mut self) -> Option<PaymentRecord> {
        if !self.auth_state.is_user() {
            tracing::warn!("Checkout requested without a student session");
            return None;
        }
        let user_id = self.auth_state.email.clone()?;
        let record = self.checkout.charge(&user_id);
        if let Some(state) = self.auth.apply_payment(&record) {
            self.replace_auth(state);
        }
        Some(record)
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn add_subject(&mut self, name: &str) -> Result<Subject, AppError> {
        self.require_admin()?;
        self.catalog.add_subject(name)
    }

    pub fn remove_subject(&mut self, id: &str) -> Result<Subject, AppError> {
        self.require_admin()?;
        self.catalog.remove_subject(id)
    }

    pub fn add_note(&mut self, note: NewNote) -> Result<Note, AppError> {
        self.require_admin()?;
        self.catalog.add_note(note)
    }

    pub fn remove_note(&mut self, id: &str) -> Result<Note, AppError> {
        self.require_admin()?;
        self.catalog.remove_note(id)
    }

    /// Download link for a note. Only staff and paid students get one.
    pub fn download_href(&self, note_id: &str) -> Option<String> {
        let entitled =
            self.auth_state.is_admin() || (self.auth_state.is_user() && self.auth_state.is_paid);
        if !entitled {
            return None;
        }
        self.catalog.download_href(note_id)
    }

    fn require_admin(&self) -> Result<(), AppError> {
        if self.auth_state.is_admin() {
            Ok(())
        } else {
            Err(AppError::unauthorized("Staff session required"))
        }
    }

    fn replace_auth(&mut self, state: AuthState) {
        self.auth_state = state;
        let view = self.router.on_auth_changed(&self.auth_state);
        tracing::info!(
            role = self.auth_state.role.as_str(),
            view = %view,
            "Session changed"
        );
    }
}
