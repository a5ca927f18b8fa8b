//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the current page title, the signed-in user
//! and the logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
            ctx.navigate(Page::Login);
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span
                    class="top-header__title"
                    on:click=move |_| ctx.navigate(Page::Dashboard)
                >
                    "KSManager"
                </span>
                <span class="top-header__page">{move || ctx.page().title()}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.navigate(Page::Settings)
                    title="Settings"
                >
                    {icon("settings")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
