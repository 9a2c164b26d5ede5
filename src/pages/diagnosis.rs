//! Diagnosis Page
//!
//! Read-only summary of the selected client, shown while a diagnostic
//! session is being run.

use leptos::*;

use crate::api::{self, Client};
use crate::components::{ClientSummary, Loading};
use crate::state::session::use_session;

/// Diagnosis page component
#[component]
pub fn DiagnosisPage() -> impl IntoView {
    let session = use_session();

    let client = create_rw_signal(None::<Client>);
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
            set_loading.set(false);
        });
    });

    let session_for_view = session.clone();
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Diagnosis"</h1>
                <p class="text-gray-400 mt-1">"Current client for this diagnostic session"</p>
            </div>

            {move || {
                if session_for_view.selection.get().is_empty() {
                    view! {
                        <p class="text-gray-400">
                            "No client selected. Pick one on the Clients page."
                        </p>
                    }.into_view()
                } else if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    match client.get() {
                        Some(client) => view! { <ClientSummary client=client /> }.into_view(),
                        None => view! {
                            <p class="text-gray-400">"Client could not be loaded."</p>
                        }.into_view(),
                    }
                }
            }}
        </div>
    }
}
