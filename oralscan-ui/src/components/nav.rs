//! Navigation Component
//!
//! Header navigation bar with brand and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-40 bg-white/80 backdrop-blur-md shadow-md">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🔬"</span>
                        <span class="text-xl font-bold text-green-700">"Oral Cancer Detection"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/about" label="About" />
                        <NavLink href="/creators" label="Creators" />
                        <NavLink href="/upload" label="Upload" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-green-700 hover:text-green-500 hover:bg-green-50 transition-colors"
            active_class="bg-green-100 font-medium"
        >
            {label}
        </A>
    }
}
