use crate::confirm::ConfirmController;
use crate::pages::MainLayout;
use crate::state::{AppContext, AppState};
use crate::toast::ToastController;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));
    provide_context(ConfirmController::new());
    provide_context(ToastController::new());

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("notes/:id") view=MainLayout />
                <Route path=path!("") view=MainLayout />
            </Routes>
        </Router>
    }
}
