use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the navigation store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
        </ConfigProvider>
    }
}
