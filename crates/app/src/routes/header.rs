use crate::auth::use_vault;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::{UserRole, View};
use shared_ui::{Avatar, AvatarSize, Badge, BadgeVariant, Button, ButtonVariant};

#[component]
pub fn Header() -> Element {
    let vault = use_vault();
    let auth = vault.auth();
    let view = vault.view();

    let home_view = if auth.is_authenticated {
        View::dashboard_for(&auth)
    } else {
        View::Home
    };
    let on_dashboard = view == home_view;
    let nav_target = home_view.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./header.css") }

        header { class: "app-header",
            button {
                class: "app-brand",
                r#type: "button",
                onclick: move |_| vault.navigate(nav_target.clone()),
                Icon::<LdBookOpen> { icon: LdBookOpen, width: 22, height: 22 }
                span { class: "app-brand-name", "NoteVault" }
            }

            nav { class: "app-nav",
                if auth.is_authenticated {
                    Button {
                        variant: if on_dashboard { ButtonVariant::Secondary } else { ButtonVariant::Ghost },
                        onclick: move |_| vault.navigate(home_view.clone()),
                        "Dashboard"
                    }
                } else if !matches!(view, View::LoginSelection | View::AdminLogin) {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| vault.navigate(View::LoginSelection),
                        "Sign in"
                    }
                }
            }

            if auth.is_authenticated {
                div { class: "app-session",
                    Avatar {
                        src: auth.profile_picture.clone(),
                        initials: auth.initials(),
                        alt: auth.label(),
                        size: AvatarSize::Small,
                    }
                    div { class: "app-session-identity",
                        span { class: "app-session-name", "{auth.label()}" }
                        div { class: "app-session-badges",
                            Badge {
                                variant: if auth.role == UserRole::Admin { BadgeVariant::Info } else { BadgeVariant::Neutral },
                                "{auth.role.display_name()}"
                            }
                            if auth.is_user() && auth.is_paid {
                                Badge { variant: BadgeVariant::Success, dot: true, "Paid" }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Sign out",
                        onclick: move |_| vault.update(|c| c.logout()),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        span { "Logout" }
                    }
                }
            }
        }
    }
}

/// Persistent footer. Staff entry point is only offered to signed-out visitors.
#[component]
pub fn Footer() -> Element {
    let vault = use_vault();
    let authenticated = vault.auth().is_authenticated;

    rsx! {
        footer { class: "app-footer",
            span { "NoteVault · study notes, organised by subject" }
            if !authenticated {
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| vault.navigate(View::AdminLogin),
                    "Management Portal"
                }
            }
        }
    }
}
