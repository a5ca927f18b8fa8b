use contracts::enums::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::config::config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
            ctx.navigate(Page::Login);
        });
    };

    let user_line = move || {
        auth_state
            .get()
            .user
            .map(|user| format!("{} <{}>", user.display_name(), user.email))
            .unwrap_or_default()
    };
    let is_admin = move || auth_state.get().user.map(|user| user.is_admin).unwrap_or(false);

    view! {
        <PageFrame page_id=page_id(Page::Settings) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings"</h1>
                </div>
                <div class="page__header-right">
                    <Button on_click=logout>"Sign out"</Button>
                </div>
            </div>

            <div class="page__content">
                <section class="settings__section">
                    <h3>"Account"</h3>
                    <p>{user_line}</p>
                </section>

                <Show when=is_admin>
                    <section class="settings__section">
                        <h3>"Users"</h3>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctx.navigate(Page::List(EntityKind::User))
                        >
                            "Manage users"
                        </Button>
                    </section>
                </Show>

                <section class="settings__section">
                    <h3>"Application"</h3>
                    <p>{format!("API: {}", crate::shared::api_utils::api_base())}</p>
                    <p>{format!("Session key: {}", config().session.storage_key)}</p>
                    <Button on_click=move |_| ctx.navigate(Page::Roadmap)>"Roadmap"</Button>
                </section>
            </div>
        </PageFrame>
    }
}
