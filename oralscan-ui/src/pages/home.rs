//! Home Page
//!
//! Hero, key features and the chat widget.

use leptos::*;
use leptos_router::*;

use crate::components::ChatWidget;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🌿",
        title: "Screening Accuracy",
        description: "Our AI model helps identify suspicious lesions and classify potential risk with robust accuracy.",
    },
    Feature {
        icon: "✅",
        title: "Fast Screening",
        description: "Get rapid screening results after uploading oral images to help guide next steps.",
    },
    Feature {
        icon: "📈",
        title: "Care Guidance",
        description: "Receive recommendations for follow-up, specialist referral, and early intervention pathways.",
    },
];

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-16">
            <section class="text-center max-w-3xl mx-auto py-12">
                <h1 class="text-4xl md:text-5xl font-bold text-green-800 mb-6">"Oral Cancer Prediction"</h1>
                <p class="text-lg text-gray-600 mb-8">
                    "Upload a photo of the oral cavity or lesion to screen for signs of oral cancer and pre-cancerous conditions."
                </p>
                <div class="flex justify-center gap-4">
                    <A
                        href="/upload"
                        class="px-6 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors"
                    >
                        "Upload Image"
                    </A>
                    <a
                        href="#features"
                        class="px-6 py-3 border border-green-600 text-green-700 hover:bg-green-50 rounded-lg font-medium transition-colors"
                    >
                        "Learn More ↓"
                    </a>
                </div>
            </section>

            <section id="features">
                <h2 class="text-3xl font-bold text-center text-green-800 mb-8">"Key Features"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {FEATURES.iter().map(|feature| view! {
                        <div class="bg-white rounded-2xl shadow-lg p-6 text-center">
                            <div class="text-4xl mb-4">{feature.icon}</div>
                            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
                            <p class="text-gray-600">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <ChatWidget />
        </div>
    }
}
