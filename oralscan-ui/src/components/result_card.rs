//! Result Card Component
//!
//! Renders a mapped classification: headline, cause, associated factors,
//! histopathologic features and recommendations.

use leptos::*;

use oralscan_core::ResultPresentation;

/// Result card for one classification
#[component]
pub fn ResultCard(
    presentation: ResultPresentation,
    /// Formatted confidence, shown when present
    confidence: Option<String>,
) -> impl IntoView {
    let normal = presentation.label.is_normal();
    let (card_class, icon, icon_class) = if normal {
        ("bg-green-50 border-green-600", "✔", "text-green-600")
    } else {
        ("bg-red-50 border-red-500", "⚠", "text-red-500")
    };

    let info = presentation.info.clone();
    let steps: Vec<String> = presentation
        .recommendation_steps()
        .into_iter()
        .map(str::to_string)
        .collect();

    view! {
        <div class=format!("border rounded-2xl p-6 text-left {}", card_class)>
            <div class="flex items-center gap-3 mb-4">
                <span class=format!("text-2xl {}", icon_class)>{icon}</span>
                <h2 class="text-xl font-semibold text-gray-800">{presentation.message.clone()}</h2>
            </div>

            {confidence.map(|c| view! {
                <p class="mb-4 text-sm text-gray-600">"Confidence: " <span class="font-semibold">{c}</span></p>
            })}

            <div class="grid gap-4">
                <Section title="Cause">
                    <p>{info.cause}</p>
                </Section>

                <Section title="Associated Factors">
                    <ul class="list-disc list-inside">
                        {info.conditions.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                    </ul>
                </Section>

                <Section title="Histopathologic Features">
                    <ul class="list-disc list-inside">
                        {info.symptoms.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                    </ul>
                </Section>

                <Section title="Recommendations">
                    {steps.into_iter().map(|step| view! { <p>{step}</p> }).collect_view()}
                </Section>
            </div>
        </div>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded-lg">
            <h3 class="text-green-600 font-semibold mb-2">{title}</h3>
            {children()}
        </div>
    }
}
