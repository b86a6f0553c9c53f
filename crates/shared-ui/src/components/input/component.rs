use dioxus::prelude::*;

/// Single-line text input.
///
/// `error` replaces `hint` underneath the field and marks the input
/// `aria-invalid`. Give the input an `id` when either is used so the message
/// can be linked through `aria-describedby`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] id: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] hint: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "nv-input", None, false)],
        attributes,
    ]);
    let invalid = error.is_some();
    let field_id = (!id.is_empty()).then_some(id);
    let message_id = field_id.as_ref().map(|id| format!("{id}-message"));
    let (message, message_class) = match (error, hint) {
        (Some(error), _) => (Some(error), "nv-input-error"),
        (None, Some(hint)) => (Some(hint), "nv-input-hint"),
        (None, None) => (None, ""),
    };
    let described_by = message.as_ref().and(message_id.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "nv-input-wrapper",
            input {
                id: field_id,
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                "aria-invalid": invalid,
                "aria-describedby": described_by,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(text) = message {
                p { id: message_id, class: message_class, "{text}" }
            }
        }
    }
}
