//! HTML helper functions

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make serialized JSON safe to embed inside a `<script>` element
///
/// Only `<` needs escaping; `<` is still valid JSON.
pub fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}
