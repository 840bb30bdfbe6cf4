/// Webview script that puts `text` on the system clipboard.
///
/// The text is JSON-encoded so quotes, newlines, and non-ASCII pass
/// through as a valid JS string literal.
#[must_use]
pub fn copy_text_script(text: &str) -> String {
    let encoded = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_owned());
    format!("navigator.clipboard.writeText({encoded});")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_newlines() {
        let script = copy_text_script("line \"one\"\nline two");
        assert_eq!(
            script,
            "navigator.clipboard.writeText(\"line \\\"one\\\"\\nline two\");"
        );
    }

    #[test]
    fn passes_cyrillic_through_unescaped() {
        let script = copy_text_script("Бағдарлама");
        assert!(script.contains("Бағдарлама"));
    }
}
