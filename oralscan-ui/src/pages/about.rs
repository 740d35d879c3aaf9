//! About Page
//!
//! Mission, how the screening works, and what each classification means.

use leptos::*;
use leptos_router::*;

struct Classification {
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    features_heading: &'static str,
    features: &'static [&'static str],
    advice_heading: &'static str,
    advice: &'static [&'static str],
}

const CLASSIFICATIONS: [Classification; 2] = [
    Classification {
        name: "Oral Squamous Cell Carcinoma (OSCC)",
        icon: "⚠",
        description: "OSCC is the most common type of oral cancer, accounting for over 90% of all oral malignancies. It arises from the squamous cells that line the oral cavity.",
        features_heading: "Histological Features:",
        features: &[
            "Atypical squamous cells with enlarged, hyperchromatic nuclei",
            "Keratin pearl formation in well-differentiated tumors",
            "Invasion into underlying connective tissue",
            "Increased mitotic activity and cellular pleomorphism",
            "Loss of normal epithelial architecture",
        ],
        advice_heading: "Risk Factors:",
        advice: &[
            "Tobacco use (smoking and smokeless tobacco)",
            "Heavy alcohol consumption",
            "Human Papillomavirus (HPV) infection",
            "Betel quid and areca nut chewing",
            "Chronic sun exposure (for lip cancer)",
            "Poor oral hygiene and dental care",
        ],
    },
    Classification {
        name: "Normal Oral Tissue",
        icon: "🛡",
        description: "Normal oral mucosa consists of stratified squamous epithelium with underlying connective tissue (lamina propria). Healthy tissue shows orderly cell maturation and intact basement membrane.",
        features_heading: "Healthy Tissue Features:",
        features: &[
            "Regular stratified squamous epithelium layers",
            "Normal nuclear-to-cytoplasmic ratio",
            "Intact basement membrane",
            "Orderly cell maturation from basal to superficial layers",
            "Healthy underlying connective tissue",
        ],
        advice_heading: "Prevention Tips:",
        advice: &[
            "Maintain regular dental checkups",
            "Practice good oral hygiene",
            "Avoid tobacco and excessive alcohol",
            "Eat a balanced diet rich in fruits and vegetables",
            "Perform monthly oral self-examinations",
            "Stay hydrated and protect lips from sun exposure",
        ],
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Upload", "Submit histopathologic images of oral tissue samples"),
    ("Analyze", "AI processes and examines cellular patterns"),
    ("Results", "Receive classification with detailed insights"),
];

/// About page component
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="max-w-5xl mx-auto space-y-12">
            <div class="text-center">
                <div class="text-6xl mb-4">"🔬"</div>
                <h1 class="text-4xl font-bold text-green-800 mb-2">"About Oral Cancer Detection"</h1>
                <p class="text-lg text-gray-600">
                    "AI-Powered Histopathologic Image Analysis for Early Cancer Detection"
                </p>
            </div>

            <section class="bg-white rounded-2xl shadow-lg p-8 space-y-4">
                <h2 class="text-2xl font-bold text-green-800">"🧠 Our Mission"</h2>
                <p class="text-gray-600">
                    "The Oral Cancer Detection project leverages advanced deep learning technology to assist pathologists and healthcare professionals in the early detection of oral squamous cell carcinoma (OSCC) through histopathologic image analysis."
                </p>
                <p class="text-gray-600">
                    "Our AI model has been trained on thousands of histopathologic images to accurately differentiate between OSCC and normal oral tissue, providing rapid screening support that can help expedite diagnosis and treatment planning."
                </p>
                <p class="text-gray-600">
                    "Early detection of oral cancer significantly improves patient outcomes, with 5-year survival rates exceeding 80% when detected at early stages compared to less than 40% for late-stage diagnoses."
                </p>
            </section>

            <section>
                <h2 class="text-2xl font-bold text-center text-green-800 mb-6">"How It Works"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {STEPS.iter().enumerate().map(|(i, (title, description))| view! {
                        <div class="bg-white rounded-2xl shadow p-6 text-center">
                            <div class="w-10 h-10 mx-auto mb-3 rounded-full bg-green-600 text-white flex items-center justify-center font-bold">
                                {i + 1}
                            </div>
                            <h3 class="text-lg font-semibold mb-1">{*title}</h3>
                            <p class="text-gray-600 text-sm">{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section>
                <h2 class="text-2xl font-bold text-center text-green-800 mb-6">"Classification Categories"</h2>
                <div class="space-y-6">
                    {CLASSIFICATIONS.iter().map(|item| view! {
                        <div class="bg-white rounded-2xl shadow-lg p-8">
                            <div class="flex items-center gap-3 mb-3">
                                <span class="text-3xl">{item.icon}</span>
                                <h3 class="text-xl font-semibold">{item.name}</h3>
                            </div>
                            <p class="text-gray-600 mb-4">{item.description}</p>
                            <div class="grid md:grid-cols-2 gap-6">
                                <DetailList heading=item.features_heading items=item.features />
                                <DetailList heading=item.advice_heading items=item.advice />
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="bg-yellow-50 border border-yellow-300 rounded-2xl p-8 text-center">
                <h2 class="text-2xl font-bold text-yellow-800 mb-3">"Important Disclaimer"</h2>
                <p class="text-gray-700 mb-6">
                    "This AI-powered analysis is intended for screening and educational purposes only. It should not replace professional medical diagnosis. All results should be reviewed and confirmed by a qualified pathologist or healthcare professional."
                </p>
                <A
                    href="/upload"
                    class="px-6 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Try Cancer Detection"
                </A>
            </section>
        </div>
    }
}

#[component]
fn DetailList(heading: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold text-green-700 mb-2">{heading}</h4>
            <ul class="list-disc list-inside space-y-1 text-gray-600">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
