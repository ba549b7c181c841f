use yew::prelude::*;

use crate::components::field::{field_error, TextField};
use crate::error::AppError;
use crate::hooks::use_form_data;
use crate::models::LoginRequest;
use crate::state::{FieldErrors, FormState};
use crate::utils::validation::{finish, is_valid_email, require};

pub fn validate_login(values: &LoginRequest) -> Option<FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "email", &values.email, "Email is required");
    if !errors.contains_key("email") && !is_valid_email(&values.email) {
        errors.insert("email".into(), "Enter a valid email address".into());
    }
    require(&mut errors, "password", &values.password, "Password is required");
    finish(errors)
}

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<LoginRequest>,
    #[prop_or_default]
    pub logging_in: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let form = use_form_data(|| FormState::with_validator(LoginRequest::default(), validate_login));
    let values = form.state.values().clone();

    let onsubmit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let on_login = on_login.clone();
            form.handle_submit(move |request: LoginRequest| async move {
                on_login.emit(request);
                Ok::<(), AppError>(())
            });
        })
    };

    html! {
        <div class="login-screen">
            <form class="login-card" {onsubmit}>
                <h1>{"Volunteer Admin"}</h1>
                <p class="muted">{"Sign in to manage volunteers, activities and hours."}</p>

                <TextField
                    label="Email"
                    input_type="email"
                    value={values.email.clone()}
                    on_input={form.field::<String>("email")}
                    error={field_error(form.state.errors(), "email")}
                    disabled={props.logging_in}
                />
                <TextField
                    label="Password"
                    input_type="password"
                    value={values.password.clone()}
                    on_input={form.field::<String>("password")}
                    error={field_error(form.state.errors(), "password")}
                    disabled={props.logging_in}
                />

                if let Some(error) = &props.error {
                    <p class="error">{ error }</p>
                }

                <button type="submit" class="btn btn-primary btn-block" disabled={props.logging_in}>
                    { if props.logging_in { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_valid_email_and_password() {
        let errors = validate_login(&LoginRequest::default()).unwrap_or_default();
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert_eq!(errors.get("password").map(String::as_str), Some("Password is required"));

        let errors = validate_login(&LoginRequest { email: "ana".into(), password: "x".into() }).unwrap_or_default();
        assert_eq!(errors.get("email").map(String::as_str), Some("Enter a valid email address"));
        assert!(!errors.contains_key("password"));

        assert!(validate_login(&LoginRequest { email: "ana@example.org".into(), password: "x".into() }).is_none());
    }
}
