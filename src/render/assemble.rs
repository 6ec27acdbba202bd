//! Final document composition.
//!
//! Pure text concatenation in one fixed order: head boilerplate, skip
//! link, navbar, sidebar, content, wave, deferred script. No DOM parsing
//! or validation happens here; the fragments are trusted authoring
//! artifacts and malformed input propagates to the output as-is.

use crate::registry::PageDescriptor;

use super::context::OutputContext;

const SKIP_LINK: &str = r##"<a href="#main-content" class="skip-link">Skip to main content</a>"##;

pub(super) fn assemble(
    descriptor: &PageDescriptor,
    content: &str,
    navbar: &str,
    sidebar: &str,
    wave: &str,
    ctx: &OutputContext,
) -> String {
    let body_class_attr = if descriptor.body_class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, descriptor.body_class)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body{body_class_attr}>
    {skip_link}
    {navbar}
    {sidebar}
    {content}
    {wave}
    <script src="{script}" defer></script>
</body>
</html>
"#,
        title = descriptor.title,
        stylesheet = ctx.stylesheet_path,
        body_class_attr = body_class_attr,
        skip_link = SKIP_LINK,
        navbar = navbar,
        sidebar = sidebar,
        content = content,
        wave = wave,
        script = ctx.script_path,
    )
}
