//! The fixed set of pages that make up the site.
//!
//! The registry is static configuration: a missing or malformed entry is a
//! programming error, not a runtime condition. The order of `PAGES` only
//! determines reporting order; output is otherwise order-independent.

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PageId {
    Home,
    About,
    Experience,
    Projects,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::Home,
        PageId::About,
        PageId::Experience,
        PageId::Projects,
    ];

    /// Stable identifier used for source file names (`pages/<slug>.html`)
    /// and the legacy mirror file names.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Experience => "experience",
            PageId::Projects => "projects",
        }
    }

    /// Visible anchor text in the navigation fragments. Link rewriting
    /// matches on this label, never on the anchor's prior href.
    pub fn nav_label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About Me",
            PageId::Experience => "Experience",
            PageId::Projects => "Projects",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PageDescriptor {
    pub id: PageId,
    pub title: &'static str,
    /// Class attribute for `<body>`; omitted from the output when empty.
    pub body_class: &'static str,
    /// Clean-URL output location relative to the output root.
    pub output_path: &'static str,
    /// True only for the home page, which lives at the output root.
    pub is_root: bool,
}

pub static PAGES: [PageDescriptor; 4] = [
    PageDescriptor {
        id: PageId::Home,
        title: "Home",
        body_class: "",
        output_path: "index.html",
        is_root: true,
    },
    PageDescriptor {
        id: PageId::About,
        title: "About Me",
        body_class: "",
        output_path: "about/index.html",
        is_root: false,
    },
    PageDescriptor {
        id: PageId::Experience,
        title: "Experience",
        body_class: "experience-page",
        output_path: "experience/index.html",
        is_root: false,
    },
    PageDescriptor {
        id: PageId::Projects,
        title: "Projects",
        body_class: "projects-page",
        output_path: "projects/index.html",
        is_root: false,
    },
];
