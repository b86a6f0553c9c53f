use dioxus::prelude::*;

/// How prominent a button is. Rendered as `data-variant`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Deletes something. Paired with a confirm step by callers.
    Destructive,
    Outline,
    Ghost,
    /// Rendered like a text link, for inline "back" and "staff" actions.
    Link,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// `button` unless the button submits a form.
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default = false)]
    pub disabled: bool,
    /// While set the button is disabled and shows a spinner in front of
    /// `busy_label` (or the children when no label is given).
    #[props(default = false)]
    pub busy: bool,
    #[props(default)]
    pub busy_label: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let ButtonProps {
        variant,
        button_type,
        disabled,
        busy,
        busy_label,
        onclick,
        attributes,
        children,
    } = props;

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "nv-button", None, false),
            Attribute::new("data-variant", variant.as_str(), None, false),
        ],
        attributes,
    ]);
    let label = if busy { busy_label } else { None };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{button_type}",
            disabled: disabled || busy,
            "aria-busy": busy,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if busy {
                span { class: "nv-button-spinner", "aria-hidden": "true" }
            }
            match label {
                Some(text) => rsx! { "{text}" },
                None => children,
            }
        }
    }
}
