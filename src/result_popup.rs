//! Result Popup Renderer
//!
//! Fetches a single test result and renders it as a self-contained document
//! in a new browser window. Rendering is a pure string function so the
//! escaping contract stays testable: every interpolated value passes
//! through [`escape_html`], since summaries and detail values are stored
//! free text.

use wasm_bindgen_futures::spawn_local;

use crate::api::{self, TestResult};
use crate::dom;

const WINDOW_FEATURES: &str = "width=900,height=700";

/// Fetch the result for `(name, test)` and open it in a popup window.
/// Fire-and-forget; failures surface as blocking alerts.
pub fn open_result_popup(name: &str, test: &str) {
    let name = name.to_string();
    let test = test.to_string();

    spawn_local(async move {
        match api::fetch_result(&name, &test).await {
            Ok(result) => show_result_window(&result),
            Err(e) => dom::alert(&format!("Failed to load result: {}", e)),
        }
    });
}

fn show_result_window(result: &TestResult) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    match window.open_with_url_and_target_and_features("", "_blank", WINDOW_FEATURES) {
        Ok(Some(popup)) => {
            if let Some(document) = popup.document() {
                document.set_title(&format!("Result - {} - {}", result.name, result.test));
                if let Some(root) = document.document_element() {
                    root.set_inner_html(&render_result_document(result));
                }
            }
        }
        _ => dom::alert("The popup was blocked. Allow popups for this site to view results."),
    }
}

/// Render the popup document markup (head and body of a blank window)
pub fn render_result_document(result: &TestResult) -> String {
    let details: String = result
        .details
        .iter()
        .map(|detail| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(&detail.item),
                escape_html(&detail.value)
            )
        })
        .collect();

    let score = result
        .score
        .map(|score| score.to_string())
        .unwrap_or_default();

    format!(
        r#"<head>
<meta charset="utf-8" />
<style>
  body{{font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;padding:16px;background:#f7f7fb;}}
  .card{{background:#fff;border-radius:14px;padding:14px;box-shadow:0 6px 20px rgba(0,0,0,0.06);margin:12px 0;}}
  .k{{display:inline-block;width:110px;font-weight:700;color:#374151;}}
  .v{{color:#111827;}}
  .muted{{color:#6b7280;}}
  table{{border-collapse:collapse;width:100%;}}
  td,th{{border-bottom:1px solid #e5e7eb;padding:8px;text-align:left;}}
</style>
</head>
<body>
<h2>Test Result</h2>

<div class="card">
  <div><span class="k">Name</span><span class="v">{name}</span></div>
  <div><span class="k">Birth date</span><span class="v">{birth_date}</span></div>
  <div><span class="k">Sex</span><span class="v">{sex}</span></div>
  <div><span class="k">Weight</span><span class="v">{weight}</span></div>
  <div><span class="k">Height</span><span class="v">{height}</span></div>
</div>

<div class="card">
  <div class="muted">Test: {test}</div>
  <h3 style="margin:8px 0 0 0;">{summary}</h3>
  <div style="margin-top:6px;">Score: <b>{score}</b></div>

  <div style="margin-top:12px;">
    <div class="muted">Details</div>
    <table>
      <thead><tr><th>Item</th><th>Value</th></tr></thead>
      <tbody>{details}</tbody>
    </table>
  </div>
</div>
</body>"#,
        name = escape_html(&result.name),
        birth_date = escape_html(&result.birth_date),
        sex = escape_html(&result.sex),
        weight = escape_html(&result.weight),
        height = escape_html(&result.height),
        test = escape_html(&result.test),
        summary = escape_html(&result.summary),
        score = escape_html(&score),
        details = details,
    )
}

/// Escape a value for interpolation into HTML markup
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a raw test id (`YYYY-MM-DDTHH-MM-SS`) for display.
/// Ids that don't parse pass through unchanged.
pub fn format_test_label(test: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(test, "%Y-%m-%dT%H-%M-%S")
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| test.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResultDetail;

    fn sample_result() -> TestResult {
        TestResult {
            name: "Alice".to_string(),
            test: "2025-01-01T16-00-00".to_string(),
            birth_date: "1960-01-01".to_string(),
            sex: "female".to_string(),
            weight: "60".to_string(),
            height: "165".to_string(),
            summary: "All clear".to_string(),
            score: Some(87.0),
            details: vec![
                ResultDetail {
                    item: "A".to_string(),
                    value: "OK".to_string(),
                },
                ResultDetail {
                    item: "B".to_string(),
                    value: "Needs review".to_string(),
                },
            ],
        }
    }

    #[test]
    fn escape_html_covers_all_special_characters() {
        assert_eq!(escape_html("<b>&'\""), "&lt;b&gt;&amp;&#039;&quot;");
    }

    #[test]
    fn escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("Alice 1960-01-01"), "Alice 1960-01-01");
    }

    #[test]
    fn document_contains_every_field() {
        let html = render_result_document(&sample_result());
        assert!(html.contains("Alice"));
        assert!(html.contains("1960-01-01"));
        assert!(html.contains("All clear"));
        assert!(html.contains("Score: <b>87</b>"));
        assert!(html.contains("<tr><td>B</td><td>Needs review</td></tr>"));
    }

    #[test]
    fn document_escapes_stored_free_text() {
        let mut result = sample_result();
        result.summary = "<script>alert('x')</script>".to_string();
        result.details[0].value = "a < b & c".to_string();

        let html = render_result_document(&result);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn absent_score_renders_empty() {
        let mut result = sample_result();
        result.score = None;

        let html = render_result_document(&result);
        assert!(html.contains("Score: <b></b>"));
    }

    #[test]
    fn test_labels_format_when_parseable() {
        assert_eq!(format_test_label("2025-01-01T16-00-00"), "2025-01-01 16:00");
        assert_eq!(format_test_label("baseline"), "baseline");
    }
}
