use crate::auth::use_vault;
use dioxus::prelude::*;
use shared_types::View;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormField, Input,
};

/// Staff credential form. The inputs are local to this screen and keep their
/// contents until it unmounts; only the submit reaches the controller.
#[component]
pub fn AdminLogin() -> Element {
    let vault = use_vault();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = vault.error();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        vault.update(|c| c.submit_admin_login(&email(), &password()));
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Management Portal" }
                    CardDescription { "Staff sign-in for managing subjects, notes and students." }
                }
                CardContent {
                    if let Some(message) = error {
                        div { class: "screen-error", role: "alert", "{message}" }
                    }
                    form { class: "auth-form", onsubmit: handle_submit,
                        FormField { label: "Email", html_for: "admin-email",
                            Input {
                                input_type: "email",
                                id: "admin-email",
                                placeholder: "admin@notevault.in",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        FormField { label: "Password", html_for: "admin-password",
                            Input {
                                input_type: "password",
                                id: "admin-password",
                                placeholder: "Enter your password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button { button_type: "submit", class: "auth-submit", "Sign in" }
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| vault.navigate(View::LoginSelection),
                        "Return to Student Sign In"
                    }
                }
            }
        }
    }
}
