//! Client Detail
//!
//! Detail panel for the selected client, plus the compact summary reused by
//! the diagnosis and results pages.

use leptos::*;

use crate::api::Client;
use crate::result_popup;

/// Detail panel showing one client's record and test history
#[component]
pub fn ClientDetail(client: Client) -> impl IntoView {
    let name = client.name.clone();
    let tests = client.tests.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-6">
            <h2 class="text-xl font-semibold">{client.name.clone()}</h2>

            <dl class="grid grid-cols-[9rem,1fr] gap-y-2 text-sm">
                <DetailField label="Birth date" value=client.birth_date.clone() />
                <DetailField label="Sex" value=client.sex.clone() />
                <DetailField label="Height" value=client.height.clone() />
                <DetailField label="Weight" value=client.weight.clone() />
                <DetailField label="Surgery history" value=client.surgery_history.clone() />
                <DetailField label="Medications" value=client.medications.clone() />
            </dl>

            <div>
                <h3 class="font-medium mb-2">"Tests"</h3>
                {if tests.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No tests recorded."</p>
                    }.into_view()
                } else {
                    view! {
                        <ul class="space-y-2">
                            {tests.into_iter().map(|test| {
                                let client_name = name.clone();
                                let label = result_popup::format_test_label(&test);
                                view! {
                                    <li>
                                        <button
                                            on:click=move |_| {
                                                result_popup::open_result_popup(&client_name, &test)
                                            }
                                            class="w-full text-left px-4 py-2 bg-gray-700 \
                                                   hover:bg-gray-600 rounded-lg transition-colors"
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }}
            </div>
        </div>
    }
}

/// One label/value pair in the detail grid
#[component]
fn DetailField(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    let shown = if value.trim().is_empty() {
        "-".to_string()
    } else {
        value
    };

    view! {
        <dt class="text-gray-400">{label}</dt>
        <dd>{shown}</dd>
    }
}

/// Compact read-only client summary for the diagnosis and results pages
#[component]
pub fn ClientSummary(client: Client) -> impl IntoView {
    let line = summary_line(&client);

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <div class="font-semibold text-lg">{client.name.clone()}</div>
            <div class="text-gray-400 text-sm mt-1">{line}</div>
        </div>
    }
}

/// "birth / sex / weight / height" line, skipping empty parts
fn summary_line(client: &Client) -> String {
    [
        client.birth_date.trim(),
        client.sex.trim(),
        client.weight.trim(),
        client.height.trim(),
    ]
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
    fn summary_line_joins_in_display_order() {
        let client = Client {
            name: "Alice".to_string(),
            birth_date: "1960-01-01".to_string(),
            sex: "female".to_string(),
            weight: "60".to_string(),
            height: "165".to_string(),
            ..Client::default()
        };
        assert_eq!(summary_line(&client), "1960-01-01 / female / 60 / 165");
    }

    #[test]
    fn summary_line_skips_missing_fields() {
        let client = Client {
            name: "Bob".to_string(),
            height: "180".to_string(),
            ..Client::default()
        };
        assert_eq!(summary_line(&client), "180");
    }
}
