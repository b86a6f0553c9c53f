use dioxus::prelude::*;
use services::config::{config, load_config};
use services::{SessionStore, VaultController};
use std::rc::Rc;

mod auth;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod browser_store;
mod format_helpers;
mod identity;
mod routes;

use auth::VaultHandle;
use identity::use_identity_provider;
use routes::{Footer, Header, ViewOutlet};

const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = load_config(EMBEDDED_CONFIG);
    let level = config
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logger] Failed to initialize logging: {e}");
    }

    dioxus::launch(App);
}

/// Store handle passed as a prop. Equality is identity: the store is opened
/// once and never replaced.
#[derive(Clone)]
struct StoreHandle(Rc<dyn SessionStore>);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(target_arch = "wasm32")]
async fn open_store() -> Rc<dyn SessionStore> {
    let storage = &config().storage;
    Rc::new(browser_store::BrowserSessionStore::open(&storage.namespace).await)
}

#[cfg(not(target_arch = "wasm32"))]
async fn open_store() -> Rc<dyn SessionStore> {
    let storage = &config().storage;
    match services::FileSessionStore::open(&storage.dir, &storage.namespace) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "Session store unavailable; nothing will persist");
            Rc::new(services::MemorySessionStore::new())
        }
    }
}

#[component]
fn App() -> Element {
    let store = use_resource(open_store);
    let store = store.cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match store {
            Some(store) => rsx! { Vault { store: StoreHandle(store) } },
            None => rsx! {
                div { class: "app-loading",
                    shared_ui::Spinner { label: Some("Opening your vault...".to_string()) }
                }
            },
        }
    }
}

/// Root composer: owns the controller and the identity provider, and mounts
/// the selected screen inside the header/footer shell.
#[component]
fn Vault(store: StoreHandle) -> Element {
    let vault = use_context_provider(|| {
        VaultHandle::new(VaultController::from_config(store.0.clone(), config()))
    });
    use_identity_provider(&config().identity, vault);

    rsx! { Shell {} }
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            Header {}
            main { class: "app-main",
                ViewOutlet {}
            }
            Footer {}
        }
    }
}
