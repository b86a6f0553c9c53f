use dioxus::prelude::*;

/// Indeterminate progress ring with an optional caption.
#[component]
pub fn Spinner(
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "nv-spinner", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            span { class: "nv-spinner-ring", "aria-hidden": "true" }
            if let Some(label) = label {
                span { class: "nv-spinner-label", "{label}" }
            }
        }
    }
}
