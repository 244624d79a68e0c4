use pulldown_cmark::escape::escape_html;
use regex::Regex;

/// HTML-escape arbitrary text for interpolation into the document.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = escape_html(&mut escaped, text);
    escaped
}

/// Escape `text`, then rewrite inline `**bold**` and `*italic*` runs into
/// `<strong>` and `<em>` markup. Escaping happens first so the rewritten
/// tags are the only markup in the result.
pub fn inline_markup(text: &str) -> String {
    let escaped = escape(text);

    let bold = Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid");
    let with_bold = bold.replace_all(&escaped, "<strong>$1</strong>");

    let italic = Regex::new(r"\*([^*]+)\*").expect("italic pattern is valid");
    italic.replace_all(&with_bold, "<em>$1</em>").into_owned()
}
