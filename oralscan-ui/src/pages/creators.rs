//! Creators Page

use leptos::*;

struct Creator {
    name: &'static str,
    initials: &'static str,
    role: &'static str,
    department: &'static str,
    university: &'static str,
    description: &'static str,
    github: &'static str,
}

const CREATORS: [Creator; 2] = [
    Creator {
        name: "Sarthak Sisodia",
        initials: "SS",
        role: "Developer & Researcher",
        department: "B.Tech Student",
        university: "SRM Institute of Science and Technology",
        description: "Passionate about leveraging AI and machine learning to solve real-world healthcare challenges. Focused on developing innovative solutions for early disease detection.",
        github: "https://github.com/IamSarTech",
    },
    Creator {
        name: "Aditya Sinha",
        initials: "AS",
        role: "Developer & Researcher",
        department: "B.Tech Student",
        university: "SRM Institute of Science and Technology",
        description: "Dedicated to creating impactful technology solutions in the healthcare domain. Specializes in building user-friendly applications with cutting-edge AI capabilities.",
        github: "https://github.com/adityanation",
    },
];

/// Creators page component
#[component]
pub fn Creators() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto">
            <div class="text-center mb-12">
                <div class="text-6xl mb-4">"🎓"</div>
                <h1 class="text-3xl md:text-4xl font-bold text-green-800 mb-4">"Meet The Creators"</h1>
                <p class="text-gray-600 text-lg max-w-2xl mx-auto">
                    "The passionate minds behind the Oral Cancer Detection System, working to make early cancer detection accessible to everyone."
                </p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                {CREATORS.iter().map(|creator| view! {
                    <div class="bg-white rounded-2xl shadow-lg p-8 text-center hover:shadow-xl transition-shadow duration-300">
                        <div class="w-24 h-24 mx-auto mb-6 rounded-full border-4 border-green-200 bg-green-100 text-green-700 text-3xl font-bold flex items-center justify-center">
                            {creator.initials}
                        </div>
                        <h3 class="text-2xl font-bold text-gray-800 mb-2">{creator.name}</h3>
                        <p class="text-green-600 font-semibold mb-1">{creator.role}</p>
                        <p class="text-gray-500 text-sm mb-4">{creator.department}</p>
                        <div class="inline-flex items-center gap-2 bg-green-50 text-green-700 px-4 py-2 rounded-full text-sm font-medium mb-4">
                            "🎓 " {creator.university}
                        </div>
                        <p class="text-gray-600 leading-relaxed mb-6">{creator.description}</p>
                        <a
                            href=creator.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block px-4 py-2 bg-gray-100 hover:bg-green-100 rounded-full text-sm text-gray-700 transition-colors"
                        >
                            "GitHub"
                        </a>
                    </div>
                }).collect_view()}
            </div>

            <div class="mt-12 bg-white rounded-2xl shadow-lg p-8">
                <h2 class="text-2xl font-bold text-green-800 mb-4 text-center">"About This Project"</h2>
                <p class="text-gray-600 text-center max-w-3xl mx-auto leading-relaxed">
                    "This Oral Cancer Detection System was developed as part of our academic project at SRM Institute of Science and Technology. Our goal is to leverage artificial intelligence to assist in early detection of oral squamous cell carcinoma (OSCC), potentially saving lives through timely diagnosis and treatment."
                </p>
            </div>
        </div>
    }
}
