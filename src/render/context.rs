//! Output contexts: everything about a page's links and asset paths that
//! depends on where the assembled document lives in the output tree.
//!
//! A context is derived per (page, pass) and never stored. Two families
//! exist: clean-URL (directory-style hrefs, depth-dependent prefixes) and
//! legacy-flat (sibling `.html` hrefs for file:// preview).

use crate::registry::PageId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OutputContext {
    kind: ContextKind,
    /// Prefix every canonical asset reference needs in this context.
    pub asset_prefix: &'static str,
    pub stylesheet_path: &'static str,
    pub script_path: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ContextKind {
    CleanRoot,
    CleanNested,
    LegacyFlat,
}

impl OutputContext {
    pub fn clean_url(is_root: bool) -> Self {
        if is_root {
            Self {
                kind: ContextKind::CleanRoot,
                asset_prefix: "",
                stylesheet_path: "styles/main.css",
                script_path: "js/app.js",
            }
        } else {
            Self {
                kind: ContextKind::CleanNested,
                asset_prefix: "../",
                stylesheet_path: "../styles/main.css",
                script_path: "../js/app.js",
            }
        }
    }

    /// The flat mirror always lives one directory below the true root, so
    /// every page takes the `../` asset prefix, home included. Downstream
    /// consumers depend on this exact layout.
    pub fn legacy_flat() -> Self {
        Self {
            kind: ContextKind::LegacyFlat,
            asset_prefix: "../",
            stylesheet_path: "../styles/main.css",
            script_path: "../js/app.js",
        }
    }

    /// Relative href a navigation link to `id` carries in this context.
    pub fn href(&self, id: PageId) -> &'static str {
        match self.kind {
            ContextKind::CleanRoot => match id {
                PageId::Home => "./",
                PageId::About => "about/",
                PageId::Experience => "experience/",
                PageId::Projects => "projects/",
            },
            ContextKind::CleanNested => match id {
                PageId::Home => "../",
                PageId::About => "../about/",
                PageId::Experience => "../experience/",
                PageId::Projects => "../projects/",
            },
            // Note home.html, not index.html: the mirror keeps home as an
            // ordinary sibling file.
            ContextKind::LegacyFlat => match id {
                PageId::Home => "home.html",
                PageId::About => "about.html",
                PageId::Experience => "experience.html",
                PageId::Projects => "projects.html",
            },
        }
    }
}
