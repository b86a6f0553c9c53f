use crate::auth::use_vault;
use crate::identity::GoogleSignInButton;
use dioxus::prelude::*;
use shared_types::View;
use shared_ui::{Button, ButtonVariant};

/// Landing screen with the provider's sign-in button.
#[component]
pub fn Home() -> Element {
    let vault = use_vault();
    let error = vault.error();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "home-hero",
            h1 { class: "home-title", "Every lecture, every subject, one vault." }
            p { class: "home-lede",
                "NoteVault collects curated study notes by subject. Sign in with your "
                "Google account to browse the catalog and unlock downloads."
            }

            div { class: "home-signin",
                GoogleSignInButton {}
                if let Some(message) = error {
                    p { class: "screen-error", role: "alert", "{message}" }
                }
            }

            div { class: "home-links",
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| vault.navigate(View::LoginSelection),
                    "More sign-in options"
                }
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| vault.navigate(View::AdminLogin),
                    "Staff login"
                }
            }
        }

        section { class: "home-features",
            div { class: "home-feature",
                h3 { "Organised by subject" }
                p { "Browse notes the staff have filed under each course." }
            }
            div { class: "home-feature",
                h3 { "PDF and Word" }
                p { "Download lecture notes as .pdf, .docx or .doc." }
            }
            div { class: "home-feature",
                h3 { "One unlock" }
                p { "A single payment opens the whole vault for your account." }
            }
        }
    }
}
