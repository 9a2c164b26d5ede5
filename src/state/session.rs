//! Session State
//!
//! Reactive state shared across pages. The selected client persists in
//! browser local storage so it survives page reloads; the detail panel and
//! the active roster row both derive from the one `selection` signal.

use leptos::*;

/// Local-storage key holding the selected client name
const SELECTION_KEY: &str = "selected_client_name";

/// Session context provided to all components
#[derive(Clone)]
pub struct SessionState {
    /// Name of the currently selected client, empty when none
    pub selection: RwSignal<String>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide the session context to the component tree
pub fn provide_session_state() {
    let state = SessionState {
        selection: create_rw_signal(load_selection()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Fetch the session context
pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found")
}

impl SessionState {
    /// Select a client and persist the choice across reloads
    pub fn select(&self, name: &str) {
        store_selection(name);
        self.selection.set(name.to_string());
    }

    /// Drop the selection, e.g. after the selected client was deleted
    pub fn clear_selection(&self) {
        store_selection("");
        self.selection.set(String::new());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Read the persisted selection; an absent key reads as empty
pub fn load_selection() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(name)) = storage.get_item(SELECTION_KEY) {
                return name;
            }
        }
    }
    String::new()
}

fn store_selection(name: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(SELECTION_KEY, name);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn selection_round_trips_through_local_storage() {
        store_selection("Alice");
        assert_eq!(load_selection(), "Alice");

        store_selection("");
        assert_eq!(load_selection(), "");
    }
}
