use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;

/// Masked password field with a reveal toggle and optional helper text.
///
/// When `error` is set the wrapper gets `data-error="true"` and the helper
/// text is styled as an error.
#[component]
pub fn PasswordInput(
    #[props(default = "Password".to_string())] label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = false)] error: bool,
    #[props(default)] helper_text: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut revealed = use_signal(|| false);

    let base = vec![Attribute::new("class", "password-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let input_type = if revealed() { "text" } else { "password" };
    let toggle_label = if revealed() { "Hide password" } else { "Show password" };
    let error_flag = if error { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "password-input-wrapper", "data-error": error_flag,
            label { class: "password-input-label",
                "{label}"
                div { class: "password-input-row",
                    input {
                        r#type: input_type,
                        value: value,
                        disabled: disabled,
                        autocomplete: "new-password",
                        "aria-invalid": error_flag,
                        oninput: move |evt| on_input.call(evt),
                        ..merged,
                    }
                    button {
                        r#type: "button",
                        class: "password-input-toggle",
                        "aria-label": toggle_label,
                        onclick: move |_| revealed.toggle(),
                        if revealed() {
                            Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                        } else {
                            Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                        }
                    }
                }
            }
            if !helper_text.is_empty() {
                p { class: "password-input-helper", "{helper_text}" }
            }
        }
    }
}
