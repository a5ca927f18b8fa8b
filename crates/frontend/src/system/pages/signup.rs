use contracts::system::auth::SignupRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::auth::{api, context::start_session, context::use_auth};

const MIN_PASSWORD_LEN: usize = 8;

fn validate(full_name: &str, email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if full_name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let full_name = RwSignal::new(String::new());
    let school_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if let Err(e) = validate(&full_name.get(), &email.get(), &password.get(), &confirm.get()) {
            set_error_message.set(Some(e));
            return;
        }

        let school = school_name.get();
        let request = SignupRequest {
            full_name: full_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            school_name: if school.trim().is_empty() { None } else { Some(school) },
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::signup(request).await {
                Ok(response) => start_session(set_auth_state, response),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <PageFrame page_id=page_id(Page::Signup) category=PAGE_CAT_PUBLIC>
            <div class="login-container">
                <div class="login-box">
                    <h1>"KSManager"</h1>
                    <h2>"Create account"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        {field("full_name", "Full name", "text", full_name)}
                        {field("school_name", "School", "text", school_name)}
                        {field("email", "Email", "email", email)}
                        {field("password", "Password", "password", password)}
                        {field("confirm", "Repeat password", "password", confirm)}

                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Creating..." } else { "Create account" }}
                        </button>
                    </form>

                    <div class="login-info">
                        <a href="/login" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Login);
                        }>
                            "Already registered? Sign in"
                        </a>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_signup() {
        assert!(validate("Ana", "ana@example.com", "kitesurf1", "kitesurf1").is_ok());
        assert!(validate(" ", "ana@example.com", "kitesurf1", "kitesurf1").is_err());
        assert!(validate("Ana", "ana", "kitesurf1", "kitesurf1").is_err());
        assert!(validate("Ana", "ana@example.com", "short", "short").is_err());
        assert_eq!(
            validate("Ana", "ana@example.com", "kitesurf1", "kitesurf2"),
            Err("Passwords do not match".to_string())
        );
    }
}
