//! Results Page
//!
//! Read-only summary of the selected client together with their most
//! recent test result, and a button opening the full result popup.

use leptos::*;

use crate::api::{self, Client, LatestResultResponse};
use crate::components::{ClientSummary, Loading};
use crate::result_popup;
use crate::state::session::use_session;

/// Results page component
#[component]
pub fn ResultsPage() -> impl IntoView {
    let session = use_session();

    let client = create_rw_signal(None::<Client>);
    let latest = create_rw_signal(None::<LatestResultResponse>);
    let (loading, set_loading) = create_signal(false);

    let session_for_effect = session.clone();
    create_effect(move |_| {
        let session = session_for_effect.clone();
        spawn_local(async move {
            let name = session.selection.get();
            if name.is_empty() {
                return;
            }

            set_loading.set(true);
            match api::fetch_client(&name).await {
                Ok(c) => client.set(Some(c)),
                Err(e) => session.show_error(&format!("Failed to load client: {}", e)),
            }

            match api::fetch_latest_result(&name).await {
                Ok(response) => latest.set(Some(response)),
                Err(e) => session.show_error(&format!("Failed to load latest result: {}", e)),
            }
            set_loading.set(false);
        });
    });

    let session_for_view = session.clone();
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Results"</h1>
                <p class="text-gray-400 mt-1">"Most recent diagnostic result"</p>
            </div>

            {move || {
                let name = session_for_view.selection.get();
                if name.is_empty() {
                    view! {
                        <p class="text-gray-400">
                            "No client selected. Pick one on the Clients page."
                        </p>
                    }.into_view()
                } else if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <div class="space-y-6">
                            {move || client.get().map(|client| view! {
                                <ClientSummary client=client />
                            })}

                            <LatestResult name=name.clone() latest=latest />
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Latest-result card
#[component]
fn LatestResult(
    name: String,
    latest: RwSignal<Option<LatestResultResponse>>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Latest Result"</h2>

            {move || {
                let name = name.clone();
                match latest.get() {
                    None => view! {
                        <p class="text-gray-400">"Latest result unavailable."</p>
                    }.into_view(),
                    Some(response) => match response.latest {
                        None => view! {
                            <p class="text-gray-400">"No diagnostic records."</p>
                        }.into_view(),
                        Some(test) => {
                            let summary = response
                                .result
                                .as_ref()
                                .map(|result| result.summary.clone())
                                .unwrap_or_default();
                            let score = response
                                .result
                                .as_ref()
                                .and_then(|result| result.score)
                                .map(|score| score.to_string())
                                .unwrap_or_default();
                            let label = result_popup::format_test_label(&test);

                            view! {
                                <div class="space-y-3">
                                    <div class="text-gray-400 text-sm">"Latest: " {label}</div>
                                    <div class="font-semibold">{summary}</div>
                                    <div>"Score: " <b>{score}</b></div>
                                    <button
                                        on:click=move |_| {
                                            result_popup::open_result_popup(&name, &test)
                                        }
                                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                                    >
                                        "Open full result"
                                    </button>
                                </div>
                            }.into_view()
                        }
                    },
                }
            }}
        </section>
    }
}
