use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn as_str(&self) -> &'static str {
        match self {
            AvatarSize::Small => "sm",
            AvatarSize::Medium => "md",
            AvatarSize::Large => "lg",
        }
    }
}

/// Round profile picture, falling back to initials when there is no image.
#[component]
pub fn Avatar(
    #[props(default)] src: Option<String>,
    #[props(default)] initials: String,
    #[props(default)] alt: String,
    #[props(default)] size: AvatarSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "nv-avatar", None, false),
        Attribute::new("data-size", size.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let src = src.filter(|s| !s.is_empty());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            if let Some(src) = src {
                img {
                    class: "nv-avatar-image",
                    src: "{src}",
                    alt: "{alt}",
                    referrerpolicy: "no-referrer",
                }
            } else {
                span { class: "nv-avatar-fallback", "aria-label": "{alt}", "{initials}" }
            }
        }
    }
}
