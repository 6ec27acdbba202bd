//! Content extraction: isolate the semantic `<main>` region of a page
//! source and normalize its asset references.
//!
//! The normalized form assumes the referencing document lives at the site
//! root (`img/...`, `files/...`). That canonical form is the only allowed
//! intermediate representation: context prefixing in `rewrite` is applied
//! to canonical blocks only, so a block can never end up with a doubled
//! relative path no matter where its source sat on disk.

use std::sync::LazyLock;

use regex::Regex;

static MAIN_REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<main\s+id="main-content"[^>]*>.*?</main>"#).unwrap());

static NESTED_ASSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\./(img|styles|js|files)/").unwrap());

/// Extract the `<main id="main-content">` region of `raw`, falling back to
/// the entire input when the marker is absent (a minimal page source
/// without the marker is still usable). Asset references authored one
/// level deep are rewritten to the canonical root-relative form before the
/// block is returned.
pub(super) fn extract_main(raw: &str) -> String {
    let block = match MAIN_REGION.find(raw) {
        Some(found) => found.as_str(),
        None => raw,
    };
    NESTED_ASSET.replace_all(block, "$1/").into_owned()
}
