//! Upload Page
//!
//! Pick a histopathologic image, preview it, classify it through the
//! gateway and optionally download the PDF report.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::{closure::Closure, JsCast};

use oralscan_core::{PredictTransport, UploadAlert, UploadFlow, REPORT_FILE_NAME};

use crate::api::{download_bytes, Gateway, PickedFile};
use crate::components::{ChatWidget, ResultCard};
use crate::state::global::GlobalState;

/// Upload page component
#[component]
pub fn Upload() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let flow = create_rw_signal(UploadFlow::<PickedFile>::new());

    let on_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        flow.update(|f| f.select_file(file.clone().map(PickedFile)));
        if let Some(file) = file {
            read_preview(flow, &file);
        }
    };

    let analyze = move |_| {
        let file = match flow.try_update(|f| f.begin_analyze().cloned()) {
            Some(Ok(file)) => file,
            Some(Err(alert)) => {
                state.show_error(&alert.to_string());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let result = Gateway.predict(&file).await;
            if let Err(e) = &result {
                logging::warn!("Prediction failed: {}", e);
            }
            if let Some(Err(alert)) = flow.try_update(|f| f.finish_analyze(result)) {
                state.show_error(&alert.to_string());
            }
        });
    };

    let download_report = move |_| {
        let snapshot = flow.get_untracked();

        spawn_local(async move {
            match snapshot.download_report(&Gateway).await {
                Ok(Some(pdf)) => {
                    match download_bytes(&pdf, REPORT_FILE_NAME, "application/pdf") {
                        Ok(()) => state.show_success(&format!("Saved {}", REPORT_FILE_NAME)),
                        Err(e) => {
                            logging::warn!("Report download failed: {}", e);
                            state.show_error(&UploadAlert::ReportFailed.to_string());
                        }
                    }
                }
                Ok(None) => {}
                Err(alert) => state.show_error(&alert.to_string()),
            }
        });
    };

    let loading = move || flow.with(|f| f.is_loading());

    view! {
        <div class="max-w-2xl mx-auto text-center">
            <div class="text-left mb-6">
                <A href="/" class="text-green-700 hover:text-green-500">"← Back to Home"</A>
            </div>

            <h1 class="text-4xl font-bold text-green-800 mb-4">"Upload & Analyze"</h1>
            <p class="text-lg text-gray-600 mb-8">
                "Upload a histopathologic (microscopic) image of oral tissue for AI-assisted classification into OSCC or Normal tissue."
            </p>

            <div class="bg-white/90 p-8 rounded-2xl shadow mb-6">
                <label class="flex flex-col items-center gap-4 p-8 mb-4 border-2 border-dashed border-green-600 rounded-xl cursor-pointer hover:bg-green-50 transition-colors">
                    <input type="file" accept="image/*" class="hidden" on:change=on_file_change />
                    <span class="text-3xl text-green-600">"⬆"</span>
                    <span class="text-gray-700">"Click to select an image"</span>
                </label>

                {move || flow.with(|f| f.preview().map(str::to_string)).map(|src| view! {
                    <div class="mb-4 rounded-xl overflow-hidden border border-gray-200">
                        <img src=src alt="Preview" class="w-full h-auto" />
                    </div>
                })}

                <button
                    class="w-full px-6 py-3 bg-green-600 hover:bg-green-700 disabled:opacity-60 text-white rounded-lg font-medium transition-colors"
                    disabled=loading
                    on:click=analyze
                >
                    {move || if loading() { "Analyzing..." } else { "Analyze Image" }}
                </button>
            </div>

            {move || {
                let settings = state.settings.get();
                flow.with(|f| {
                    let result = f.result()?;
                    let presentation = f.presentation()?.clone();
                    let confidence = result.confidence_label().filter(|_| settings.show_confidence);
                    Some((presentation, confidence))
                })
                .map(|(presentation, confidence)| view! {
                    <div class="space-y-4">
                        <ResultCard presentation=presentation confidence=confidence />
                        <Show when=move || settings.report_enabled>
                            <button
                                class="w-full px-6 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors"
                                on:click=download_report
                            >
                                "Download PDF Report"
                            </button>
                        </Show>
                    </div>
                })
            }}

            <ChatWidget />
        </div>
    }
}

/// Read `file` as a data URL and hand it to the flow as the preview
fn read_preview(flow: RwSignal<UploadFlow<PickedFile>>, file: &web_sys::File) {
    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            logging::warn!("FileReader unavailable: {:?}", e);
            return;
        }
    };

    let onload = {
        let reader = reader.clone();
        let file_name = file.name();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(data_url) = reader.result().ok().and_then(|result| result.as_string()) {
                flow.update(|f| f.set_preview(&file_name, data_url));
            }
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        logging::warn!("Failed to read image: {:?}", e);
    }
}
