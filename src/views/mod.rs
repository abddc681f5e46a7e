pub mod fragment;
pub mod layout;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"AT&T"</b> 'x'"#),
            "&lt;b&gt;&quot;AT&amp;T&quot;&lt;/b&gt; &#39;x&#39;"
        );
        assert_eq!(escape_html("GOOGL"), "GOOGL");
    }
}
