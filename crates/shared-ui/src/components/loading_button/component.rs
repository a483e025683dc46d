use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
        }
    }
}

/// Submit button that shows a spinner and stays disabled while `loading`,
/// so the enclosing form's `onsubmit` cannot fire twice.
#[derive(Props, Clone, PartialEq)]
pub struct LoadingButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn LoadingButton(props: LoadingButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button loading-button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let busy = if props.loading { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "submit",
            disabled: props.disabled || props.loading,
            "aria-busy": busy,
            ..merged,
            if props.loading {
                span { class: "loading-button-spinner", role: "progressbar" }
            }
            span { class: "loading-button-label", {props.children} }
        }
    }
}
