use crate::auth::{AuthState, UserRole};
use std::fmt;

/// The screen currently mounted in the shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    LoginSelection,
    AdminLogin,
    AdminDashboard,
    UserDashboard,
    /// Any label the router does not recognize.
    NotFound(String),
}

impl View {
    /// Kebab-case label used by navigation intents.
    pub fn label(&self) -> &str {
        match self {
            View::Home => "home",
            View::LoginSelection => "login-selection",
            View::AdminLogin => "admin-login",
            View::AdminDashboard => "admin-dashboard",
            View::UserDashboard => "user-dashboard",
            View::NotFound(label) => label,
        }
    }

    /// Resolve a navigation label. Unknown labels map to `NotFound`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "home" => View::Home,
            "login-selection" => View::LoginSelection,
            "admin-login" => View::AdminLogin,
            "admin-dashboard" => View::AdminDashboard,
            "user-dashboard" => View::UserDashboard,
            other => View::NotFound(other.to_string()),
        }
    }

    /// Screens that host the identity provider's sign-in button.
    pub fn hosts_sign_in_button(&self) -> bool {
        matches!(self, View::Home | View::LoginSelection)
    }

    /// Whether `auth` is allowed to have this screen mounted.
    pub fn permits(&self, auth: &AuthState) -> bool {
        match self {
            View::AdminDashboard => auth.is_admin(),
            View::UserDashboard => auth.is_authenticated && auth.role != UserRole::Admin,
            _ => true,
        }
    }

    /// The dashboard an authenticated session lands on.
    pub fn dashboard_for(auth: &AuthState) -> Self {
        if auth.role == UserRole::Admin {
            View::AdminDashboard
        } else {
            View::UserDashboard
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single-selection state machine deciding which screen to mount.
///
/// Auth changes take precedence over manual navigation: an authenticated
/// session is always forced onto its dashboard, and a signed-out session is
/// forced home unless it is in the middle of choosing how to sign in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &View {
        &self.current
    }

    /// Recompute the screen after the session was replaced.
    pub fn on_auth_changed(&mut self, auth: &AuthState) -> &View {
        if auth.is_authenticated {
            self.current = View::dashboard_for(auth);
        } else if !matches!(self.current, View::AdminLogin | View::LoginSelection) {
            self.current = View::Home;
        }
        &self.current
    }

    /// Apply a manual navigation intent.
    ///
    /// Dashboards are role-gated; a refused target is handed back in `Err`
    /// and the current screen is left as is.
    pub fn navigate(&mut self, target: View, auth: &AuthState) -> Result<&View, View> {
        if !target.permits(auth) {
            return Err(target);
        }
        self.current = target;
        Ok(&self.current)
    }

    /// `navigate` by label, for intents that arrive as strings.
    pub fn navigate_label(&mut self, label: &str, auth: &AuthState) -> Result<&View, View> {
        self.navigate(View::from_label(label), auth)
    }

    /// Return to the landing screen after a logout.
    pub fn reset(&mut self) {
        self.current = View::Home;
    }
}
