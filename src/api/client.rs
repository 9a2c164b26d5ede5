//! HTTP API Client
//!
//! Functions for communicating with the clinic records REST API. All
//! operations return `Result<T, String>`; a non-2xx response fails with the
//! raw response body text so handlers can show it to the user verbatim.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

/// Default API base URL (same-origin)
pub const DEFAULT_API_BASE: &str = "/api";

const API_BASE_KEY: &str = "clinic_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

// ============ Wire Types ============

/// One client record. The same shape serves as the registration payload,
/// with `tests` empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub surgery_history: String,
    #[serde(default)]
    pub medications: String,
    #[serde(default)]
    pub tests: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClientListResponse {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub clients: Option<Vec<Client>>,
}

/// Scored outcome of one test administration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub test: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub details: Vec<ResultDetail>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultDetail {
    pub item: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatestResultResponse {
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub result: Option<TestResult>,
}

// ============ API Functions ============

/// Fetch the client roster
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let api_base = get_api_base();
    let response: ClientListResponse = get_json(&format!("{}/clients", api_base)).await?;
    Ok(normalize_client_list(response))
}

/// Prefer the full `clients` array; older servers only send `names`.
pub fn normalize_client_list(response: ClientListResponse) -> Vec<Client> {
    match response.clients {
        Some(clients) => clients,
        None => response
            .names
            .into_iter()
            .map(|name| Client {
                name,
                ..Client::default()
            })
            .collect(),
    }
}

/// Fetch a single client by name
pub async fn fetch_client(name: &str) -> Result<Client, String> {
    let api_base = get_api_base();
    get_json(&format!("{}/client/{}", api_base, urlencoding::encode(name))).await
}

/// Register a new client
pub async fn create_client(client: &Client) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/client", api_base))
        .json(client)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(&response).await);
    }

    Ok(())
}

/// Delete a client by name
pub async fn delete_client(name: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!(
        "{}/client/{}",
        api_base,
        urlencoding::encode(name)
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(&response).await);
    }

    Ok(())
}

/// Fetch the result of one test administration
pub async fn fetch_result(name: &str, test: &str) -> Result<TestResult, String> {
    let api_base = get_api_base();
    get_json(&format!(
        "{}/result?name={}&test={}",
        api_base,
        urlencoding::encode(name),
        urlencoding::encode(test)
    ))
    .await
}

/// Fetch a client's most recent result, if any
pub async fn fetch_latest_result(name: &str) -> Result<LatestResultResponse, String> {
    let api_base = get_api_base();
    get_json(&format!(
        "{}/latest_result?name={}",
        api_base,
        urlencoding::encode(name)
    ))
    .await
}

/// GET `url` and parse the JSON body
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(&response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Error body text, falling back to the status code when unreadable
async fn error_text(response: &Response) -> String {
    response
        .text()
        .await
        .ok()
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", response.status()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefers_full_client_records() {
        let response = ClientListResponse {
            names: vec!["ignored".to_string()],
            clients: Some(vec![Client {
                name: "Alice".to_string(),
                birth_date: "1960-01-01".to_string(),
                ..Client::default()
            }]),
        };

        let clients = normalize_client_list(response);
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Alice");
        assert_eq!(clients[0].birth_date, "1960-01-01");
    }

    #[test]
    fn normalize_falls_back_to_bare_names() {
        let response = ClientListResponse {
            names: vec!["Alice".to_string(), "Bob".to_string()],
            clients: None,
        };

        let clients = normalize_client_list(response);
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].name, "Alice");
        assert_eq!(clients[1].birth_date, "");
        assert!(clients[1].tests.is_empty());
    }

    #[test]
    fn client_deserializes_with_missing_fields() {
        let client: Client = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(client.name, "Alice");
        assert_eq!(client.sex, "");
        assert!(client.tests.is_empty());
    }

    #[test]
    fn registration_payload_carries_every_field() {
        let client = Client {
            name: "Alice".to_string(),
            birth_date: "1960-01-01".to_string(),
            sex: "female".to_string(),
            height: "165".to_string(),
            weight: "60".to_string(),
            surgery_history: "none".to_string(),
            medications: "aspirin".to_string(),
            tests: Vec::new(),
        };

        let payload = serde_json::to_value(&client).unwrap();
        assert_eq!(payload["name"], "Alice");
        assert_eq!(payload["surgery_history"], "none");
        assert_eq!(payload["medications"], "aspirin");
        assert_eq!(payload["tests"], serde_json::json!([]));
    }

    #[test]
    fn result_score_may_be_absent() {
        let result: TestResult = serde_json::from_str(
            r#"{"name": "Alice", "test": "2025-01-01T16-00-00", "summary": "ok"}"#,
        )
        .unwrap();
        assert_eq!(result.score, None);
        assert!(result.details.is_empty());

        let result: TestResult = serde_json::from_str(
            r#"{"name": "Alice", "test": "2025-01-01T16-00-00", "score": 87}"#,
        )
        .unwrap();
        assert_eq!(result.score, Some(87.0));
    }

    #[test]
    fn latest_result_null_means_no_records() {
        let response: LatestResultResponse =
            serde_json::from_str(r#"{"name": "Alice", "latest": null, "result": null}"#).unwrap();
        assert!(response.latest.is_none());
        assert!(response.result.is_none());

        let response: LatestResultResponse = serde_json::from_str(
            r#"{
                "latest": "2025-01-01T16-00-00",
                "result": {
                    "name": "Alice",
                    "test": "2025-01-01T16-00-00",
                    "summary": "fine",
                    "score": 87,
                    "details": [{"item": "A", "value": "OK"}]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(response.latest.as_deref(), Some("2025-01-01T16-00-00"));
        let result = response.result.unwrap();
        assert_eq!(result.details[0].item, "A");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn api_base_override_round_trips_and_normalizes() {
        set_api_base("http://localhost:5000/api/");
        assert_eq!(get_api_base(), "http://localhost:5000/api");
    }
}
