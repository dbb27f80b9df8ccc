//! Navigation menu derived from section names.
//!
//! Contract sections render as markdown headings, so the menu links use
//! GitHub heading anchor slugs:
//! - lowercase
//! - drop every char that is not alphanumeric, space, or hyphen
//! - replace spaces with hyphens

use crate::model::DocAgnosticFormat;

/// Render the contract index shown at the top of a markdown document.
pub fn render_menu(docs: &DocAgnosticFormat) -> String {
    let mut out = String::from("## Contracts\n\n");
    for name in docs.keys() {
        out.push_str(&render_menu_item(name));
        out.push('\n');
    }
    out
}

/// One menu list item linking to a section heading.
pub fn render_menu_item(name: &str) -> String {
    format!("* [{}](#{})", name, anchor_slug(name))
}

/// GitHub heading anchor slug for a section name.
pub fn anchor_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
