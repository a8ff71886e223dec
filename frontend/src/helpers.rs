//! Small view helpers shared by the panels and pages.
//!
//! - Opening service URLs (raw job files, comparison report) in a new tab.
//! - Human-readable sizes and timestamps for the saved-file listings.
//! - Card excerpts and the markdown rendering of the match analysis.

use js_sys::Date;
use pulldown_cmark::{html, Parser};
use wasm_bindgen::JsValue;
use yew::virtual_dom::AttrValue;

/// Opens `url` in a new browsing context. Blocked pop-ups are only logged.
pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window()
        .map(|window| window.open_with_url_and_target(url, "_blank"))
        .unwrap_or(Ok(None));
    match opened {
        Ok(Some(_)) => {}
        Ok(None) => gloo_console::error!("Pop-up blocked for", url.to_string()),
        Err(err) => gloo_console::error!("Failed to open", url.to_string(), err),
    }
}

/// `51200` -> `"50.00 KB"`.
pub fn format_kib(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Formats an ISO timestamp with the browser's Korean locale rules.
/// Unparseable input is shown as received.
pub fn format_modified(timestamp: &str) -> String {
    let date = Date::new(&JsValue::from_str(timestamp));
    if date.get_time().is_nan() {
        return timestamp.to_string();
    }
    date.to_locale_string("ko-KR", &JsValue::UNDEFINED).into()
}

/// First `max_chars` characters of `text`, with `...` when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Escapes special HTML characters so service text cannot inject markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the free-text analysis as markdown. Single newlines become hard
/// breaks so the service's line layout survives.
pub fn render_analysis(text: &str) -> AttrValue {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let escaped = escape_html(normalized.trim());
    let with_breaks = escaped.replace('\n', "  \n");

    let parser = Parser::new(&with_breaks);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    AttrValue::from(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_use_two_decimals() {
        assert_eq!(format_kib(51200), "50.00 KB");
        assert_eq!(format_kib(1536), "1.50 KB");
        assert_eq!(format_kib(0), "0.00 KB");
    }

    #[test]
    fn excerpt_cuts_on_char_boundaries() {
        assert_eq!(excerpt("short", 150), "short");
        assert_eq!(excerpt("파이썬 개발자", 3), "파이썬...");
        assert_eq!(excerpt("abcdef", 6), "abcdef");
    }

    #[test]
    fn analysis_bullets_render_as_list() {
        let html = render_analysis("추천사항:\n- Docker 경험 추가\n- 영어 능력 강조");
        assert!(html.contains("<li>Docker 경험 추가</li>"));
        assert!(html.contains("<li>영어 능력 강조</li>"));
    }

    #[test]
    fn analysis_markup_is_escaped() {
        let html = render_analysis("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn analysis_keeps_single_line_breaks() {
        let html = render_analysis("전체 적합도: 72%\n스킬 매칭: 80%");
        assert!(html.contains("<br />"));
    }
}
