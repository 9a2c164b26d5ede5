//! DOM Adapter
//!
//! Thin helpers over `web_sys` for the few imperative interactions the
//! views need: blocking dialogs and roster scrolling. Keeps raw browser
//! plumbing out of component code.

/// Blocking alert dialog
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking confirmation dialog. Answers "no" when the window is unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Scroll the roster row for `name` into view, if it is rendered
pub fn scroll_client_row_into_view(name: &str) {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };

    let selector = format!("[data-name=\"{}\"]", attr_escape(name));
    if let Ok(Some(row)) = document.query_selector(&selector) {
        row.scroll_into_view();
    }
}

/// Escape a value for use inside a double-quoted attribute selector
fn attr_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_escape_passes_plain_names_through() {
        assert_eq!(attr_escape("Alice"), "Alice");
        assert_eq!(attr_escape("김철수"), "김철수");
    }

    #[test]
    fn attr_escape_quotes_selector_metacharacters() {
        assert_eq!(attr_escape(r#"a"b"#), r#"a\"b"#);
        assert_eq!(attr_escape(r"a\b"), r"a\\b");
        assert_eq!(attr_escape(r#"\""#), r#"\\\""#);
    }
}
