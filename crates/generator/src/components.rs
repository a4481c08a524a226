use leptos::prelude::*;
use locale_pages_core::PageProps;

/// HTML-escape a string for use inside an attribute value
///
/// Escapes: & < > " '
fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Page body: a fixed heading and the locale line.
///
/// The locale line is a single text node so the rendered HTML reads
/// `Lang: <code>` with no separator markers in between.
fn test_page(lang: String) -> impl IntoView {
    let lang_line = format!("Lang: {lang}");
    view! {
        <h1>"Test Page"</h1>
        <h4>{lang_line}</h4>
    }
}

/// Render the page fragment for the given props.
///
/// Props without a locale render the default `en`.
pub fn render_page(props: &PageProps) -> String {
    test_page(props.lang_or_default().to_string()).to_html()
}

/// Render a complete HTML document around the page fragment
pub fn render_document(props: &PageProps) -> String {
    let body = render_page(props);
    let lang_attr = html_escape(props.lang_or_default());

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang_attr}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Test Page</title>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_lang() {
        let html = render_page(&PageProps::with_lang("fr"));
        assert!(html.contains("Test Page"));
        assert!(html.contains("Lang: fr"));
        assert!(!html.contains("Lang: en"));
    }

    #[test]
    fn test_render_without_lang_defaults_to_en() {
        let html = render_page(&PageProps::default());
        assert!(html.contains("Lang: en"));
    }

    #[test]
    fn test_render_passes_value_through_unvalidated() {
        // The renderer displays whatever the props carry
        let html = render_page(&PageProps::with_lang("xx"));
        assert!(html.contains("Lang: xx"));
    }

    #[test]
    fn test_render_escapes_text() {
        let html = render_page(&PageProps::with_lang("<b>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_document_shell() {
        let html = render_document(&PageProps::with_lang("gb"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="gb">"#));
        assert!(html.contains("<title>Test Page</title>"));
        assert_eq!(html.matches("Lang: gb").count(), 1);
    }

    #[test]
    fn test_document_attribute_escaping() {
        assert_eq!(html_escape(r#""en" & 'fr'"#), "&quot;en&quot; &amp; &#x27;fr&#x27;");
        let html = render_document(&PageProps::with_lang("\"><script>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let props = PageProps::with_lang("en");
        assert_eq!(render_document(&props), render_document(&props));
    }
}
