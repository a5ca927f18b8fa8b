use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::auth::{api, context::start_session, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    // auth gate moves the user on to the dashboard
                    start_session(set_auth_state, response);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id=page_id(Page::Login) category=PAGE_CAT_PUBLIC>
            <div class="login-container">
                <div class="login-box">
                    <h1>"KSManager"</h1>
                    <h2>"Sign in"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>

                    <div class="login-info">
                        <a href="/signup" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Signup);
                        }>
                            "No account yet? Create one"
                        </a>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
