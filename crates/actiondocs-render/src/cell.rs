//! Markdown-to-HTML normalization for table cells

use std::sync::LazyLock;

use pulldown_cmark::{Parser, html};
use regex::Regex;

/// Whitespace between a closing and an opening tag
static INTER_TAG_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s*<").unwrap());

/// `<code>` opening tag directly inside `<pre>`
static PRE_CODE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<pre><code[^>]*>").unwrap());

/// Transforms markdown into HTML that renders correctly inside a
/// GitHub-flavoured markdown table cell.
///
/// Single-line markdown renders fine in a cell as-is and bypasses the
/// conversion entirely.
pub fn markdown_to_table_html(md: &str) -> String {
    if !md.contains('\n') {
        return md.to_string();
    }

    let mut rendered = String::new();
    html::push_html(&mut rendered, Parser::new(md));

    // Minify whitespace between tags
    let rendered = INTER_TAG_WHITESPACE.replace_all(&rendered, "><");

    // Fenced code renders as <pre><code ...></code></pre>, but GitHub
    // treats <pre><code> in table cells as inline code. Only a bare
    // <pre></pre> renders as a block, so strip the inner wrapper.
    let rendered = PRE_CODE_OPEN.replace_all(&rendered, "<pre>");
    let rendered = rendered.replace("</code></pre>", "</pre>");

    // Remaining newlines sit inside multi-line elements such as <p> or
    // <pre> and need explicit breaks.
    rendered.lines().collect::<Vec<_>>().join("<br />")
}
