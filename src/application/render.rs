//! Markdown to sanitised HTML for post previews and the canonical post view.

use std::collections::HashSet;

use ammonia::Builder as AmmoniaBuilder;
use comrak::{markdown_to_html, options::Options};
use once_cell::sync::Lazy;

static OPTIONS: Lazy<Options<'static>> = Lazy::new(default_options);
static SANITIZER: Lazy<AmmoniaBuilder<'static>> = Lazy::new(build_sanitizer);

/// Render post markdown into HTML safe to embed in a page.
pub fn render_markdown(markdown: &str) -> String {
    let html = markdown_to_html(markdown, &OPTIONS);
    SANITIZER.clean(&html).to_string()
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options
}

fn build_sanitizer() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();
    let generic: HashSet<&'static str> = HashSet::from(["class", "id", "title", "lang", "dir"]);
    builder.generic_attributes(generic);
    builder.add_tags(&["input", "section"]);
    builder.add_tag_attributes("input", &["type", "checked", "disabled"]);
    builder
}
