mod assemble;
mod assets;
mod context;
mod extract;
mod rewrite;
mod utils;


use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::{CONFIG_FILE, Config};
use crate::registry::{PAGES, PageDescriptor};

use assemble::assemble;
use assets::copy_static_assets;
use context::OutputContext;
use extract::extract_main;
use rewrite::{prefix_assets, rewrite_navigation};
use utils::{log_status, normalize_path};

#[derive(Clone, Copy, Debug)]
pub struct BuildPlan {
    /// Refresh the legacy flat mirror when the pages directory exists.
    pub mirror: bool,
    pub verbose: bool,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages_written: Vec<PathBuf>,
    pub mirror_written: Vec<PathBuf>,
    pub static_assets_copied: usize,
}

/// The three shared fragments, read once per build and shared read-only
/// across all page iterations. Every rewrite returns a new string; the
/// raw fragments are never mutated in place.
struct Fragments {
    navbar: String,
    sidebar: String,
    wave: String,
}

pub fn build_site(root: &Path, plan: BuildPlan) -> Result<BuildReport> {
    let started = Instant::now();
    let config = Config::load(root.join(CONFIG_FILE))?;

    let components_dir = root.join(&config.components_dir);
    let fragments = load_fragments(&components_dir)?;
    log_status(
        plan.verbose,
        "LOAD",
        format!("Loaded shared fragments from {}", config.components_dir),
    );

    let pages_dir = root.join(&config.pages_dir);
    let has_pages_dir = pages_dir.exists();

    // Every input is read and extracted before the first write, so a
    // missing source aborts the run without leaving half-updated output.
    let mut contents: Vec<(&'static PageDescriptor, String)> = Vec::with_capacity(PAGES.len());
    for descriptor in PAGES.iter() {
        let source_path = page_source_path(root, &pages_dir, has_pages_dir, descriptor);
        let raw = fs::read_to_string(&source_path)
            .with_context(|| format!("failed to read page source {}", source_path.display()))?;
        contents.push((descriptor, extract_main(&raw)));
        log_status(
            plan.verbose,
            "LOAD",
            format!("Extracted content for {}", descriptor.id.slug()),
        );
    }

    let out_root = match config.output_dir.as_deref() {
        Some(dir) => root.join(dir),
        None => root.to_path_buf(),
    };

    let mut report = BuildReport::default();

    log_status(plan.verbose, "PASS", "Writing clean-URL tree");
    for (descriptor, content) in &contents {
        let ctx = OutputContext::clean_url(descriptor.is_root);
        let html = compose(descriptor, content, &fragments, &ctx);
        let out_path = out_root.join(descriptor.output_path);
        write_page(&out_path, &html)?;
        println!("Wrote {}", descriptor.output_path);
        report.pages_written.push(out_path);
    }

    if has_pages_dir && plan.mirror {
        log_status(plan.verbose, "PASS", "Refreshing legacy flat mirror");
        let mirror_dir = out_root.join(&config.pages_dir);
        let ctx = OutputContext::legacy_flat();
        for (descriptor, content) in &contents {
            let html = compose(descriptor, content, &fragments, &ctx);
            let file_name = format!("{}.html", descriptor.id.slug());
            let out_path = mirror_dir.join(&file_name);
            write_page(&out_path, &html)?;
            println!("Wrote {}", normalize_path(&Path::new(&config.pages_dir).join(&file_name)));
            report.mirror_written.push(out_path);
        }
    } else if plan.mirror {
        log_status(
            plan.verbose,
            "PASS",
            format!("No {} directory; skipping mirror", config.pages_dir),
        );
    }

    if config.writes_out_of_tree() {
        log_status(plan.verbose, "STATIC", "Copying static asset trees");
        report.static_assets_copied = copy_static_assets(root, &out_root)?;
    }

    let elapsed = started.elapsed();
    println!(
        "[SUMMARY] pages: {}; mirror pages: {}; static assets copied: {}; elapsed: {:.2?}",
        report.pages_written.len(),
        report.mirror_written.len(),
        report.static_assets_copied,
        elapsed
    );

    Ok(report)
}

fn load_fragments(components_dir: &Path) -> Result<Fragments> {
    Ok(Fragments {
        navbar: read_fragment(components_dir, "navbar.html")?,
        sidebar: read_fragment(components_dir, "sidebar.html")?,
        wave: read_fragment(components_dir, "wave.html")?,
    })
}

fn read_fragment(components_dir: &Path, name: &str) -> Result<String> {
    let path = components_dir.join(name);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fragment {}", path.display()))
}

/// Where a page's content source lives. With a pages directory the sources
/// are bare fragments; without one the previous in-place outputs serve as
/// sources, since extraction recovers the content region from a full
/// document.
fn page_source_path(
    root: &Path,
    pages_dir: &Path,
    has_pages_dir: bool,
    descriptor: &PageDescriptor,
) -> PathBuf {
    if has_pages_dir {
        pages_dir.join(format!("{}.html", descriptor.id.slug()))
    } else if descriptor.is_root {
        root.join("index.html")
    } else {
        root.join(descriptor.id.slug()).join("index.html")
    }
}

/// One page, one context: rewrite the shared fragments, prefix the
/// canonical content block, and concatenate the final document. The
/// content block must already be in canonical root-relative form.
fn compose(
    descriptor: &PageDescriptor,
    content: &str,
    fragments: &Fragments,
    ctx: &OutputContext,
) -> String {
    let navbar = prefix_assets(
        &rewrite_navigation(&fragments.navbar, ctx, descriptor.id),
        ctx.asset_prefix,
    );
    let sidebar = prefix_assets(
        &rewrite_navigation(&fragments.sidebar, ctx, descriptor.id),
        ctx.asset_prefix,
    );
    let wave = prefix_assets(&fragments.wave, ctx.asset_prefix);
    let content = prefix_assets(content, ctx.asset_prefix);
    assemble(descriptor, &content, &navbar, &sidebar, &wave, ctx)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("failed to write page {}", path.display()))
}
