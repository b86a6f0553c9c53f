use crate::auth::use_vault;
use dioxus::prelude::*;
use shared_types::View;
use shared_ui::Button;

#[component]
pub fn NotFound(label: String) -> Element {
    let vault = use_vault();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Screen not found" }
            p { class: "not-found-message",
                "There is no screen called "
                code { "{label}" }
                "."
            }
            Button { onclick: move |_| vault.navigate(View::Home), "Back to home" }
        }
    }
}
