mod admin_dashboard;
mod admin_login;
mod header;
mod home;
mod login_selection;
mod not_found;
mod signing_in;
mod user_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use header::{Footer, Header};
pub use home::Home;
pub use login_selection::LoginSelection;
pub use not_found::NotFound;
pub use signing_in::SigningInOverlay;
pub use user_dashboard::UserDashboard;

use crate::auth::use_vault;
use dioxus::prelude::*;
use shared_types::View;

/// Mounts the screen the router currently selects, or the signing-in
/// overlay while a credential is being processed.
#[component]
pub fn ViewOutlet() -> Element {
    let vault = use_vault();

    if vault.is_signing_in() {
        return rsx! { SigningInOverlay {} };
    }

    match vault.view() {
        View::Home => rsx! { Home {} },
        View::LoginSelection => rsx! { LoginSelection {} },
        View::AdminLogin => rsx! { AdminLogin {} },
        View::AdminDashboard => rsx! { AdminDashboard {} },
        View::UserDashboard => rsx! { UserDashboard {} },
        View::NotFound(label) => rsx! { NotFound { label: label } },
    }
}
