use dioxus::prelude::*;
use shared_ui::Spinner;

/// Full-screen overlay shown while a credential is being processed.
#[component]
pub fn SigningInOverlay() -> Element {
    rsx! {
        div { class: "signing-in-overlay",
            Spinner { label: Some("Signing you in...".to_string()) }
        }
    }
}
