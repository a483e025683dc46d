use dioxus::prelude::*;

/// Centered card with a heading block above its content, used by every
/// standalone page of the origin UI.
#[component]
pub fn FormCard(
    heading: String,
    #[props(default)] subheading: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            header { class: "form-card-header",
                h3 { class: "form-card-title", "{heading}" }
                if !subheading.is_empty() {
                    p { class: "form-card-description", "{subheading}" }
                }
            }
            div { class: "form-card-content", {children} }
        }
    }
}
