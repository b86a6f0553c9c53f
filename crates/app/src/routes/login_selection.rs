use crate::auth::use_vault;
use crate::identity::GoogleSignInButton;
use dioxus::prelude::*;
use shared_types::View;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    CardTone, Divider,
};

#[component]
pub fn LoginSelection() -> Element {
    let vault = use_vault();
    let error = vault.error();

    rsx! {
        div { class: "auth-page",
            Card { tone: CardTone::Accent, class: "auth-card",
                CardHeader {
                    CardTitle { "Sign in to NoteVault" }
                    CardDescription { "Students sign in with Google. Staff use the management portal." }
                }
                CardContent {
                    GoogleSignInButton {}
                    if let Some(message) = error {
                        p { class: "screen-error", role: "alert", "{message}" }
                    }
                    Divider { caption: "or" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| vault.navigate(View::AdminLogin),
                        "Staff sign-in"
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| vault.navigate(View::Home),
                        "Back to home"
                    }
                }
            }
        }
    }
}
