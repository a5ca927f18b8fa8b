//! Application shell - auth gate and page outlet.
//!
//! Public pages (landing, login, signup) render bare; every other page renders
//! inside the `Shell` layout. Nothing is shown, and no history entry is
//! written, until a stored session has been checked.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::registry::render_page;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let restoring = Memo::new(move |_| auth_state.with(|state| state.restoring));
    let authenticated = Memo::new(move |_| auth_state.with(|state| state.is_authenticated()));

    ctx.init_history_sync(
        Signal::derive(move || !restoring.get()),
        Signal::derive(move || authenticated.get()),
    );

    // Guard: redirect away from pages the current session may not see.
    Effect::new(move |_| {
        if restoring.get() {
            return;
        }
        let authenticated = authenticated.get();
        if ctx.page().guard_redirect(authenticated).is_some() {
            ctx.apply_guard(authenticated);
        }
    });

    let page = Memo::new(move |_| ctx.page());
    let public = Memo::new(move |_| !page.get().requires_auth());

    view! {
        <Show
            when=move || !restoring.get()
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <Show
                when=move || public.get()
                fallback=move || view! {
                    <Shell>
                        {move || {
                            // the guard is about to redirect
                            if !authenticated.get() {
                                return ().into_any();
                            }
                            render_page(page.get(), ctx)
                        }}
                    </Shell>
                }
            >
                {move || render_page(page.get(), ctx)}
            </Show>
        </Show>
    }
}
