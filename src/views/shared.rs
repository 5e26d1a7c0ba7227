use comrak::{Options, markdown_to_html};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<Options> = Lazy::new(|| {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.hardbreaks = true;
    // Replies come from a remote service; raw HTML stays escaped.
    options.render.escape = true;
    options
});

/// Render a model reply. Plain text keeps its line breaks.
pub fn reply_to_html(md: &str) -> String {
    markdown_to_html(md, &MARKDOWN_OPTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_html_is_escaped() {
        let html = reply_to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn line_breaks_are_kept() {
        let html = reply_to_html("one\ntwo");
        assert!(html.contains("<br />"));
    }

    #[test]
    fn emphasis_is_rendered() {
        assert!(reply_to_html("be **gentle**").contains("<strong>gentle</strong>"));
    }
}
