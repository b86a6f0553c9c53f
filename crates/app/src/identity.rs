//! Google Identity Services bridge.
//!
//! The provider lives in the page, so the bridge is a long-lived script that
//! loads the GSI client, initializes it with our client id and posts
//! [`ProviderEvent`]s back to a coroutine.

use crate::auth::{use_vault, VaultHandle};
use dioxus::prelude::*;
use shared_types::{ButtonOptions, IdentityConfig, ProviderEvent};

/// DOM id of the container the provider renders its button into.
pub const GOOGLE_BUTTON_ID: &str = "google-signin-button";

/// The injected sign-in capability. `ready` flips once the provider script
/// has loaded and been initialized; button rendering waits on it.
#[derive(Clone, Copy)]
pub struct IdentityProvider {
    pub ready: Signal<bool>,
    pub unavailable: Signal<bool>,
}

impl IdentityProvider {
    pub fn is_ready(&self) -> bool {
        *self.ready.read()
    }

    pub fn is_unavailable(&self) -> bool {
        *self.unavailable.read()
    }
}

/// Start the bridge and provide the capability to descendants.
///
/// Credentials are handed straight to the vault controller.
pub fn use_identity_provider(config: &'static IdentityConfig, vault: VaultHandle) -> IdentityProvider {
    let provider = use_context_provider(|| IdentityProvider {
        ready: Signal::new(false),
        unavailable: Signal::new(false),
    });

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let mut ready = provider.ready;
        let mut unavailable = provider.unavailable;

        if config.client_id.trim().is_empty() {
            tracing::warn!("No identity client id configured; Google sign-in is disabled");
            unavailable.set(true);
            return;
        }

        let mut bridge = document::eval(&bootstrap_script(config));
        loop {
            let message = match bridge.recv::<serde_json::Value>().await {
                Ok(message) => message,
                Err(e) => {
                    tracing::error!(error = ?e, "Identity bridge closed");
                    ready.set(false);
                    break;
                }
            };

            match ProviderEvent::parse(message) {
                Some(ProviderEvent::Ready) => {
                    tracing::info!("Identity provider ready");
                    ready.set(true);
                }
                Some(ProviderEvent::Credential { credential }) => {
                    vault.update(|c| {
                        c.begin_sign_in();
                        c.handle_credential(&credential);
                    });
                }
                Some(ProviderEvent::Unavailable { message }) => {
                    ready.set(false);
                    unavailable.set(true);
                    vault.update(|c| c.provider_failed(&message));
                    break;
                }
                None => tracing::warn!("Unrecognized identity bridge message"),
            }
        }
    });

    provider
}

pub fn use_identity() -> IdentityProvider {
    use_context::<IdentityProvider>()
}

/// Script that loads and initializes the provider, then stays alive to
/// forward credentials.
pub fn bootstrap_script(config: &IdentityConfig) -> String {
    format!(
        r#"
        const clientId = {client_id};
        const scriptUrl = {script_url};
        const init = () => {{
            try {{
                google.accounts.id.initialize({{
                    client_id: clientId,
                    callback: (response) => dioxus.send({{
                        type: "credential",
                        credential: (response && response.credential) || "",
                    }}),
                }});
                dioxus.send({{ type: "ready" }});
            }} catch (err) {{
                dioxus.send({{ type: "unavailable", message: String(err) }});
            }}
        }};
        if (window.google && window.google.accounts && window.google.accounts.id) {{
            init();
        }} else {{
            const script = document.createElement("script");
            script.src = scriptUrl;
            script.async = true;
            script.defer = true;
            script.onload = init;
            script.onerror = () => dioxus.send({{
                type: "unavailable",
                message: "Failed to load " + scriptUrl,
            }});
            document.head.appendChild(script);
        }}
        await new Promise(() => {{}});
        "#,
        client_id = js_string(&config.client_id),
        script_url = js_string(&config.script_url),
    )
}

/// Script that renders the provider button into `container_id`.
pub fn render_button_script(container_id: &str, options: &ButtonOptions) -> String {
    format!(
        r#"
        const container = document.getElementById({id});
        if (container && window.google && window.google.accounts && window.google.accounts.id) {{
            container.innerHTML = "";
            google.accounts.id.renderButton(container, {{
                theme: {theme},
                size: {size},
                width: {width},
            }});
        }}
        "#,
        id = js_string(container_id),
        theme = js_string(&options.theme),
        size = js_string(&options.size),
        width = options.width,
    )
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Slot the provider renders its button into. Re-rendered whenever it is
/// mounted (every view change onto a screen hosting it) and when the
/// provider becomes ready. Renders nothing on screens that do not host it.
#[component]
pub fn GoogleSignInButton() -> Element {
    let identity = use_identity();
    let vault = use_vault();

    use_effect(move || {
        if identity.is_ready() && vault.view().hosts_sign_in_button() {
            let options = &services::config::config().identity.button;
            document::eval(&render_button_script(GOOGLE_BUTTON_ID, options));
        }
    });

    if !vault.view().hosts_sign_in_button() {
        return rsx! {};
    }

    rsx! {
        div { class: "google-signin",
            div { id: GOOGLE_BUTTON_ID, class: "google-signin-slot" }
            if identity.is_unavailable() {
                p { class: "google-signin-note", "Google sign-in is unavailable right now." }
            } else if !identity.is_ready() {
                p { class: "google-signin-note", "Loading Google sign-in..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_embeds_quoted_config() {
        let config = IdentityConfig {
            client_id: "abc\"123.apps.googleusercontent.com".to_string(),
            ..IdentityConfig::default()
        };
        let script = bootstrap_script(&config);
        assert!(script.contains(r#"const clientId = "abc\"123.apps.googleusercontent.com";"#));
        assert!(script.contains(r#"const scriptUrl = "https://accounts.google.com/gsi/client";"#));
        assert!(script.contains("google.accounts.id.initialize"));
    }

    #[test]
    fn render_script_uses_button_options() {
        let script = render_button_script(GOOGLE_BUTTON_ID, &ButtonOptions::default());
        assert!(script.contains(r#"document.getElementById("google-signin-button")"#));
        assert!(script.contains(r#"theme: "outline""#));
        assert!(script.contains(r#"size: "large""#));
        assert!(script.contains("width: 250"));
    }
}
