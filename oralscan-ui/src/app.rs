//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{About, Creators, Home, Upload};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    // Display settings come from the gateway; defaults apply until then
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    spawn_local(async move {
        match api::fetch_settings().await {
            Ok(settings) => state.settings.set(settings),
            Err(e) => logging::warn!("Using default display settings: {}", e),
        }
    });

    view! {
        <Router>
            <div class="min-h-screen flex flex-col text-gray-800">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-12">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/about" view=About />
                        <Route path="/creators" view=Creators />
                        <Route path="/upload" view=Upload />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Site footer
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-green-800 text-white py-6">
            <div class="container mx-auto px-4 text-center">
                <h3 class="text-xl font-semibold mb-2">"Oral Cancer Detection"</h3>
                <p class="opacity-80 mb-4">
                    "Supporting early detection of oral cancer through AI-assisted image screening and referral guidance."
                </p>
                <p class="text-sm opacity-60">"© 2025 Oral Cancer Detection. All rights reserved."</p>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
