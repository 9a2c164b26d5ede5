//! New Client Modal
//!
//! Registration form for a new client record. Closes on backdrop click,
//! the close/cancel buttons, or Escape while open. Submitting with an
//! empty trimmed name is a silent no-op.

use leptos::*;

use crate::api::{self, Client};
use crate::dom;

/// Default value biasing the date-picker toward a useful decade
const DEFAULT_BIRTH_DATE: &str = "1960-01-01";

/// Registration modal
#[component]
pub fn NewClientModal(
    on_close: impl Fn() + 'static + Clone,
    #[prop(into)] on_created: Callback<String>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (birth_date, set_birth_date) = create_signal(DEFAULT_BIRTH_DATE.to_string());
    let (sex, set_sex) = create_signal(String::new());
    let (height, set_height) = create_signal(String::new());
    let (weight, set_weight) = create_signal(String::new());
    let (surgery_history, set_surgery_history) = create_signal(String::new());
    let (medications, set_medications) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Focus the name field once it is mounted
    let name_input = create_node_ref::<html::Input>();
    create_effect(move |_| {
        if let Some(input) = name_input.get() {
            let _ = input.focus();
        }
    });

    // Close on Escape while the modal is open; the listener is removed
    // with the component.
    let on_close_for_esc = on_close.clone();
    window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close_for_esc();
        }
    });

    // Clone on_close for each place it's used
    let on_close_for_backdrop = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let trimmed = name.get().trim().to_string();
        if trimmed.is_empty() {
            return;
        }

        let client = Client {
            name: trimmed,
            birth_date: birth_date.get().trim().to_string(),
            sex: sex.get().trim().to_string(),
            height: height.get().trim().to_string(),
            weight: weight.get().trim().to_string(),
            surgery_history: surgery_history.get().trim().to_string(),
            medications: medications.get().trim().to_string(),
            tests: Vec::new(),
        };

        set_submitting.set(true);

        spawn_local(async move {
            match api::create_client(&client).await {
                Ok(()) => on_created.call(client.name.clone()),
                Err(e) => dom::alert(&format!("Registration failed: {}", e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
            on:click=move |_| on_close_for_backdrop()
        >
            <div
                class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4 max-h-[90vh] overflow-y-auto"
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"New Client"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Name
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            node_ref=name_input
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Birth date
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Birth date"</label>
                        <input
                            type="date"
                            prop:value=move || birth_date.get()
                            on:input=move |ev| set_birth_date.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Sex
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Sex"</label>
                        <select
                            on:change=move |ev| set_sex.set(event_target_value(&ev))
                            prop:value=move || sex.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="">"Select..."</option>
                            <option value="female">"Female"</option>
                            <option value="male">"Male"</option>
                        </select>
                    </div>

                    // Height / weight
                    <div class="grid grid-cols-2 gap-3">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Height (cm)"</label>
                            <input
                                type="text"
                                prop:value=move || height.get()
                                on:input=move |ev| set_height.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Weight (kg)"</label>
                            <input
                                type="text"
                                prop:value=move || weight.get()
                                on:input=move |ev| set_weight.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    // Surgery history
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Surgery history"</label>
                        <textarea
                            rows="2"
                            prop:value=move || surgery_history.get()
                            on:input=move |ev| set_surgery_history.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Medications
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Medications"</label>
                        <textarea
                            rows="2"
                            prop:value=move || medications.get()
                            on:input=move |ev| set_medications.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
