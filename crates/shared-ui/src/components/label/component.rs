use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form label bound to an input through `html_for`.
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "nv-label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}

/// A labelled slot for one form control. The child control should carry
/// `id` equal to `html_for`.
#[component]
pub fn FormField(
    label: String,
    html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "nv-field", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            Label { html_for: html_for, "{label}" }
            {children}
        }
    }
}
