use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::auth::context::use_auth;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let signed_in = move || auth_state.get().is_authenticated();

    view! {
        <PageFrame page_id=page_id(Page::Landing) category=PAGE_CAT_PUBLIC>
            <div class="landing">
                <h1 class="landing__title">"KSManager"</h1>
                <p class="landing__lead">
                    "Customers, lessons, rentals and accounts of a kite school in one place."
                </p>
                <div class="landing__actions">
                    <Show
                        when=signed_in
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| ctx.navigate(Page::Login)
                            >
                                "Sign in"
                            </Button>
                            <Button on_click=move |_| ctx.navigate(Page::Signup)>
                                "Create account"
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctx.navigate(Page::Dashboard)
                        >
                            "Open dashboard"
                        </Button>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
