use serde::{Deserialize, Serialize};

/// Session role controlling which dashboard a visitor may see.
///
/// - `Guest`: nobody is signed in. Only the public screens are reachable.
/// - `User`: a student signed in through the identity provider.
/// - `Admin`: staff signed in through the local credential form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
    #[default]
    Guest,
}

impl UserRole {
    /// Upper-case label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
            UserRole::Guest => "GUEST",
        }
    }

    /// Human-readable label for badges.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Staff",
            UserRole::User => "Student",
            UserRole::Guest => "Guest",
        }
    }
}

/// Snapshot of the current session.
///
/// Always replaced wholesale; holders never patch individual fields.
/// `is_authenticated == false` implies `role == Guest`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl AuthState {
    /// The canonical signed-out state.
    pub fn guest() -> Self {
        Self::default()
    }

    /// A student session established through the identity provider.
    pub fn user(
        email: impl Into<String>,
        display_name: Option<String>,
        profile_picture: Option<String>,
        is_paid: bool,
    ) -> Self {
        Self {
            role: UserRole::User,
            email: Some(email.into()),
            display_name,
            profile_picture,
            is_paid,
            is_authenticated: true,
        }
    }

    /// A staff session established through the credential form.
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            role: UserRole::Admin,
            email: Some(email.into()),
            display_name: Some("Administrator".to_string()),
            profile_picture: None,
            is_paid: false,
            is_authenticated: true,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated && self.role == UserRole::Admin
    }

    pub fn is_user(&self) -> bool {
        self.is_authenticated && self.role == UserRole::User
    }

    /// Restore the role invariant on a snapshot read from outside the process.
    /// An unauthenticated snapshot collapses to the canonical guest value.
    pub fn normalized(self) -> Self {
        if self.is_authenticated && self.role != UserRole::Guest {
            self
        } else {
            Self::guest()
        }
    }

    /// Name shown in the header, falling back to the email address.
    pub fn label(&self) -> String {
        self.display_name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Guest".to_string())
    }

    /// Up to two upper-case initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.label()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// A student the vault has seen sign in, with their paid entitlement.
///
/// Kept across logouts so the next sign-in restores `is_paid`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
    pub last_login_at: i64,
}
