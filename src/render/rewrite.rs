//! Pure string rewrites applied to fragment HTML.
//!
//! Every function here returns a new `String` and depends only on its
//! arguments. The rewrites operate on documented marker patterns (the
//! `data-page` attribute, the four known anchor labels, and unprefixed
//! `img/` / `files/` references); anything else passes through untouched,
//! including the card and drawer class names the front-end script keys on.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::registry::PageId;

use super::context::OutputContext;

static PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*data-page="[^"]*""#).unwrap());

// One anchor pattern per known navigation label. Matching by visible label
// keeps the rewrite independent of whatever href the fragment carried before.
static NAV_ANCHORS: LazyLock<Vec<(PageId, Regex)>> = LazyLock::new(|| {
    PageId::ALL
        .iter()
        .map(|id| {
            let pattern = format!(
                r#"<a href="[^"]*"[^>]*>{}</a>"#,
                regex::escape(id.nav_label())
            );
            (*id, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\bsrc="img/"#).unwrap());
static FILES_HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\bhref="files/"#).unwrap());

/// Remove every `data-page="..."` attribute. Idempotent: a stripped
/// fragment contains no marker for a second pass to match.
pub(super) fn strip_page_markers(html: &str) -> String {
    PAGE_MARKER.replace_all(html, "").into_owned()
}

/// Point each known navigation anchor at its href for `ctx`, regardless of
/// the anchor's prior href or attributes. Labels with no matching anchor in
/// the fragment are skipped.
pub(super) fn rewrite_nav_links(html: &str, ctx: &OutputContext) -> String {
    let mut out = html.to_string();
    for (id, anchor) in NAV_ANCHORS.iter() {
        let replacement = format!(r#"<a href="{}">{}</a>"#, ctx.href(*id), id.nav_label());
        out = anchor.replace_all(&out, NoExpand(&replacement)).into_owned();
    }
    out
}

/// Add `aria-current="page"` to the anchor whose href literally equals
/// `current_href`. Matching on the post-rewrite href, not on page identity,
/// guarantees the marked link is the one that navigates to this page. A
/// fragment with no matching anchor is returned unchanged.
pub(super) fn mark_current(html: &str, current_href: &str) -> String {
    let plain = format!(r#"<a href="{current_href}">"#);
    let marked = format!(r#"<a href="{current_href}" aria-current="page">"#);
    html.replace(&plain, &marked)
}

/// Prefix unprefixed asset references: `src="img/...` and `href="files/...`.
/// References already carrying a prefix no longer start with the bare
/// `img/` or `files/` form, so repeated application cannot double-prefix.
pub(super) fn prefix_assets(html: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return html.to_string();
    }
    let out = IMG_SRC.replace_all(html, NoExpand(&format!(r#"src="{prefix}img/"#)));
    FILES_HREF
        .replace_all(&out, NoExpand(&format!(r#"href="{prefix}files/"#)))
        .into_owned()
}

/// The documented composition for a navigation fragment: strip markers,
/// rewrite hrefs for the context, then mark the current page's link. The
/// current-link marker must be applied after href rewriting because it
/// matches the literal rewritten href.
pub(super) fn rewrite_navigation(html: &str, ctx: &OutputContext, current: PageId) -> String {
    let stripped = strip_page_markers(html);
    let linked = rewrite_nav_links(&stripped, ctx);
    mark_current(&linked, ctx.href(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVBAR: &str = concat!(
        r#"<nav class="nav"><button class="nav-hamburger" aria-label="Menu"></button>"#,
        r##"<a href="#" data-page="home">Home</a>"##,
        r##"<a href="#" data-page="about">About Me</a>"##,
        r##"<a href="#" data-page="experience">Experience</a>"##,
        r##"<a href="#" data-page="projects">Projects</a>"##,
        r#"<img src="img/logo.svg" alt=""><a href="files/resume.pdf">Resume</a></nav>"#,
    );

    #[test]
    fn strip_page_markers_removes_every_marker() {
        let stripped = strip_page_markers(NAVBAR);
        assert!(!stripped.contains("data-page="));
    }

    #[test]
    fn strip_page_markers_is_idempotent() {
        let once = strip_page_markers(NAVBAR);
        let twice = strip_page_markers(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn rewrite_matches_by_label_not_prior_href() {
        let html = r#"<a href="../stale/path.html" class="x">About Me</a>"#;
        let ctx = OutputContext::clean_url(true);
        let out = rewrite_nav_links(html, &ctx);
        assert_eq!(out, r#"<a href="about/">About Me</a>"#);
    }

    #[test]
    fn rewrite_leaves_unknown_labels_untouched() {
        let html = r#"<a href="contact.html">Contact</a>"#;
        let ctx = OutputContext::clean_url(false);
        assert_eq!(rewrite_nav_links(html, &ctx), html);
    }

    #[test]
    fn mark_current_targets_the_exact_href() {
        let ctx = OutputContext::clean_url(false);
        let linked = rewrite_nav_links(&strip_page_markers(NAVBAR), &ctx);
        let marked = mark_current(&linked, ctx.href(PageId::About));
        assert!(marked.contains(r#"<a href="../about/" aria-current="page">About Me</a>"#));
        assert_eq!(marked.matches("aria-current").count(), 1);
    }

    #[test]
    fn mark_current_without_match_returns_input_unchanged() {
        let html = r#"<a href="about/">About Me</a>"#;
        assert_eq!(mark_current(html, "missing/"), html);
    }

    #[test]
    fn prefix_assets_with_empty_prefix_is_a_noop() {
        assert_eq!(prefix_assets(NAVBAR, ""), NAVBAR);
    }

    #[test]
    fn prefix_assets_rewrites_both_reference_kinds() {
        let out = prefix_assets(NAVBAR, "../");
        assert!(out.contains(r#"src="../img/logo.svg""#));
        assert!(out.contains(r#"href="../files/resume.pdf""#));
    }

    #[test]
    fn prefix_assets_never_double_prefixes() {
        let once = prefix_assets(NAVBAR, "../");
        let twice = prefix_assets(&once, "../");
        assert_eq!(once, twice);
        assert!(!twice.contains("../../"));
    }

    #[test]
    fn navigation_composition_for_nested_page() {
        let ctx = OutputContext::clean_url(false);
        let out = rewrite_navigation(NAVBAR, &ctx, PageId::About);
        assert!(!out.contains("data-page="));
        assert!(out.contains(r#"<a href="../">Home</a>"#));
        assert!(out.contains(r#"<a href="../about/" aria-current="page">About Me</a>"#));
        assert!(out.contains(r#"<a href="../experience/">Experience</a>"#));
        // Class names the front-end script relies on pass through verbatim.
        assert!(out.contains("nav-hamburger"));
    }

    #[test]
    fn navigation_composition_for_legacy_mirror() {
        let ctx = OutputContext::legacy_flat();
        let out = rewrite_navigation(NAVBAR, &ctx, PageId::Home);
        assert!(out.contains(r#"<a href="home.html" aria-current="page">Home</a>"#));
        assert!(out.contains(r#"<a href="projects.html">Projects</a>"#));
    }
}
