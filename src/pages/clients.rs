//! Clients Page
//!
//! Client roster with detail panel and registration modal. Selecting a row
//! persists the choice, loads the detail panel and scrolls the row into
//! view; deleting the selected client clears the selection again.

use leptos::*;

use crate::api::{self, Client};
use crate::components::{ClientDetail, ClientList, ListSkeleton, NewClientModal};
use crate::dom;
use crate::state::session::{use_session, SessionState};

/// Clients page component
#[component]
pub fn ClientsPage() -> impl IntoView {
    let session = use_session();

    let clients = create_rw_signal(Vec::<Client>::new());
    let detail = create_rw_signal(None::<Client>);
    let (show_create, set_show_create) = create_signal(false);
    let (loading, set_loading) = create_signal(true);

    // Fetch the roster and restore the persisted selection on mount
    let session_for_effect = session.clone();
    create_effect(move |_| {
        let session = session_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            load_roster(clients, &session).await;

            let saved = session.selection.get();
            if !saved.is_empty() {
                load_detail(detail, saved).await;
            }
            set_loading.set(false);
        });
    });

    let session_for_select = session.clone();
    let on_select = Callback::new(move |name: String| {
        if name.is_empty() {
            return;
        }
        session_for_select.select(&name);
        spawn_local(async move {
            load_detail(detail, name).await;
        });
    });

    let session_for_delete = session.clone();
    let on_delete = Callback::new(move |name: String| {
        if !dom::confirm(&format!("Really delete client '{}'?", name)) {
            return;
        }

        let session = session_for_delete.clone();
        spawn_local(async move {
            match api::delete_client(&name).await {
                Ok(()) => {
                    if session.selection.get() == name {
                        session.clear_selection();
                        detail.set(None);
                    }
                    load_roster(clients, &session).await;
                    session.show_success(&format!("Deleted '{}'", name));
                }
                Err(e) => dom::alert(&format!("Delete failed: {}", e)),
            }
        });
    });

    // Registration success: select the new client and bring it into view
    let session_for_created = session.clone();
    let on_created = Callback::new(move |name: String| {
        set_show_create.set(false);
        session_for_created.select(&name);

        let session = session_for_created.clone();
        spawn_local(async move {
            load_roster(clients, &session).await;
            load_detail(detail, name).await;
        });
    });

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Clients"</h1>
                    <p class="text-gray-400 mt-1">"Registered clients and their test history"</p>
                </div>

                <button
                    on:click=move |_| set_show_create.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ New Client"
                </button>
            </div>

            // Registration modal
            {move || {
                if show_create.get() {
                    view! {
                        <NewClientModal
                            on_close=move || set_show_create.set(false)
                            on_created=on_created
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Roster and detail panel
            <div class="grid lg:grid-cols-2 gap-8 items-start">
                <section class="bg-gray-800 rounded-xl p-4">
                    {move || {
                        if loading.get() {
                            view! { <ListSkeleton count=5 /> }.into_view()
                        } else {
                            view! {
                                <ClientList
                                    clients=clients
                                    on_select=on_select
                                    on_delete=on_delete
                                />
                            }.into_view()
                        }
                    }}
                </section>

                <section>
                    {move || {
                        match detail.get() {
                            Some(client) => view! {
                                <ClientDetail client=client />
                            }.into_view(),
                            None => view! {
                                <p class="text-gray-400 text-center py-12">
                                    "Select a client to see their record."
                                </p>
                            }.into_view(),
                        }
                    }}
                </section>
            </div>
        </div>
    }
}

/// Reload the roster into `clients`, surfacing failures as a toast
async fn load_roster(clients: RwSignal<Vec<Client>>, session: &SessionState) {
    match api::fetch_clients().await {
        Ok(list) => clients.set(list),
        Err(e) => session.show_error(&format!("Failed to load clients: {}", e)),
    }
}

/// Load one client into the detail panel and scroll its row into view
async fn load_detail(detail: RwSignal<Option<Client>>, name: String) {
    match api::fetch_client(&name).await {
        Ok(client) => {
            detail.set(Some(client));
            dom::scroll_client_row_into_view(&name);
        }
        Err(e) => {
            detail.set(None);
            dom::alert(&format!("Failed to load client '{}': {}", name, e));
        }
    }
}
