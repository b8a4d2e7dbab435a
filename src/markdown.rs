use markdown::{Options as MarkdownOptions, to_html, to_html_with_options};

/// Renders summary markdown to HTML. The source text is not rewritten first;
/// raw HTML inside it is escaped by the renderer.
pub fn render_markdown(text: &str) -> String {
    let options = MarkdownOptions::gfm();
    // GFM without MDX cannot fail; fall back to plain CommonMark regardless.
    to_html_with_options(text, &options).unwrap_or_else(|_| to_html(text))
}
