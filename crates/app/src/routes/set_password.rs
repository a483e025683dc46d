use crate::nav::RouterNavigator;
use crate::routes::Route;
use crate::ApiContext;
use client::{resolve_relative, Navigator, PasswordResetForm, ResetLogin, SubmitDecision};
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{ButtonVariant, FormCard, LoadingButton, PasswordInput};

/// First-run page that sets the web UI admin password.
///
/// On success the router moves two levels up. A rejected request just
/// re-enables the form; nothing is shown to the user.
#[component]
pub fn SetPassword() -> Element {
    let current = use_route::<Route>();

    rsx! {
        PasswordResetPanel { current: current, initial: PasswordResetForm::new() }
    }
}

/// The form itself, seeded with `initial` on mount. `current` is the route
/// the success redirect is resolved against.
#[component]
fn PasswordResetPanel(current: Route, initial: PasswordResetForm) -> Element {
    let mut state = use_signal(move || initial);
    let ApiContext(api) = use_context::<ApiContext>();
    let router = RouterNavigator::new(&current);

    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        let router = router.clone();
        async move {
            evt.prevent_default();

            // The write guard must be released before awaiting.
            let request = match state.write().begin_submit() {
                SubmitDecision::Send(request) => request,
                SubmitDecision::Mismatch | SubmitDecision::Busy => return,
            };

            let result = match api.as_deref() {
                Some(api) => api.reset_login(&request).await,
                None => Err(AppError::internal("origin API client is not configured")),
            };

            let next = state.write().finish_submit(result);
            if let Some(relative) = next {
                router.push(&resolve_relative(&router.current_path(), relative));
            }
        }
    };

    let (password, confirm, mismatch, helper_text, loading) = {
        let form = state.read();
        (
            form.password().to_string(),
            form.confirm_password().to_string(),
            !form.passwords_match(),
            form.confirm_helper_text().to_string(),
            form.loading(),
        )
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./page.css") }

        div { class: "page",
            FormCard {
                heading: "Set Password",
                subheading: "Set root metrics password",

                form { onsubmit: handle_submit, action: "#",
                    PasswordInput {
                        id: "password",
                        value: password,
                        on_input: move |e: FormEvent| state.write().set_password(e.value()),
                    }
                    PasswordInput {
                        id: "confirm_password",
                        label: "Confirm Password",
                        value: confirm,
                        error: mismatch,
                        helper_text: helper_text,
                        on_input: move |e: FormEvent| state.write().set_confirm_password(e.value()),
                    }
                    div { class: "password-actions",
                        LoadingButton {
                            variant: ButtonVariant::Outline,
                            loading: loading,
                            "Confirm"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::MISMATCH_HELPER_TEXT;
    use pretty_assertions::assert_eq;

    #[component]
    fn Harness(form: PasswordResetForm) -> Element {
        use_context_provider(|| ApiContext(None));

        rsx! {
            PasswordResetPanel { current: Route::SetPassword {}, initial: form }
        }
    }

    fn render(form: PasswordResetForm) -> String {
        dioxus_ssr::render_element(rsx! {
            Harness { form: form }
        })
    }

    fn filled(password: &str, confirm: &str) -> PasswordResetForm {
        let mut form = PasswordResetForm::new();
        form.set_password(password);
        form.set_confirm_password(confirm);
        form
    }

    #[test]
    fn empty_form_renders_two_masked_fields_and_enabled_submit() {
        let html = render(PasswordResetForm::new());

        assert!(html.contains("Set Password"));
        assert!(html.contains("Set root metrics password"));
        assert!(html.contains("Confirm Password"));
        assert_eq!(html.matches(r#"type="password""#).count(), 2);
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"aria-busy="false""#));
        assert!(!html.contains("disabled"));
        assert!(!html.contains(MISMATCH_HELPER_TEXT));
    }

    #[test]
    fn mismatched_passwords_flag_the_confirmation() {
        let html = render(filled("Abc123!", "xyz"));

        assert!(html.contains(MISMATCH_HELPER_TEXT));
        assert!(html.contains(r#"data-error="true""#));
        assert_eq!(html.matches(r#"data-error="false""#).count(), 1);
    }

    #[test]
    fn matching_passwords_show_no_error() {
        let html = render(filled("Abc123!", "Abc123!"));

        assert!(!html.contains(MISMATCH_HELPER_TEXT));
        assert_eq!(html.matches(r#"data-error="false""#).count(), 2);
    }

    #[test]
    fn submitting_form_disables_confirm_with_spinner() {
        let mut form = filled("Abc123!", "Abc123!");
        assert!(matches!(form.begin_submit(), SubmitDecision::Send(_)));

        let html = render(form);

        assert!(html.contains(r#"aria-busy="true""#));
        assert!(html.contains("loading-button-spinner"));
        assert!(html.contains("disabled"));
    }
}
