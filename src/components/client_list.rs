//! Client List
//!
//! Roster rows with selection, deletion and active-row highlighting. The
//! active style derives per row from the session's selection signal, so at
//! most one row carries it.

use leptos::*;

use crate::api::Client;
use crate::state::session::use_session;

/// Scrollable client roster
#[component]
pub fn ClientList(
    #[prop(into)] clients: Signal<Vec<Client>>,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2 max-h-[36rem] overflow-y-auto">
            {move || {
                let clients = clients.get();
                if clients.is_empty() {
                    view! {
                        <p class="text-gray-400 text-center py-8">
                            "No clients yet. Register your first one!"
                        </p>
                    }.into_view()
                } else {
                    clients.into_iter().map(|client| {
                        view! {
                            <ClientRow client=client on_select=on_select on_delete=on_delete />
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}

/// Single roster row
#[component]
fn ClientRow(
    client: Client,
    on_select: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let session = use_session();

    let meta = meta_line(&client);
    let name = client.name.clone();
    let name_for_class = client.name.clone();
    let name_for_select = client.name.clone();
    let name_for_delete = client.name.clone();

    view! {
        <div
            data-name=name
            on:click=move |_| on_select.call(name_for_select.clone())
            class=move || {
                let base = "flex items-center justify-between px-4 py-3 rounded-lg \
                            cursor-pointer transition-colors";
                if session.selection.get() == name_for_class {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-900 hover:bg-gray-700", base)
                }
            }
        >
            <div>
                <div class="font-semibold">{client.name.clone()}</div>
                <div class="text-sm text-gray-400">{meta}</div>
            </div>

            <button
                type="button"
                title="Delete"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    on_delete.call(name_for_delete.clone());
                }
                class="text-gray-500 hover:text-red-400 text-xl leading-none px-2"
            >
                "×"
            </button>
        </div>
    }
}

/// "birth / sex" meta line, skipping empty parts
fn meta_line(client: &Client) -> String {
    [client.birth_date.trim(), client.sex.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_line_joins_birth_and_sex() {
        let client = Client {
            name: "Alice".to_string(),
            birth_date: "1960-01-01".to_string(),
            sex: "female".to_string(),
            ..Client::default()
        };
        assert_eq!(meta_line(&client), "1960-01-01 / female");
    }

    #[test]
    fn meta_line_skips_empty_parts() {
        let client = Client {
            name: "Bob".to_string(),
            sex: "male".to_string(),
            ..Client::default()
        };
        assert_eq!(meta_line(&client), "male");

        let bare = Client {
            name: "Carol".to_string(),
            ..Client::default()
        };
        assert_eq!(meta_line(&bare), "");
    }
}
