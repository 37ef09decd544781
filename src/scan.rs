//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the content directory, parses every
//! markdown post's front matter, and produces a [`Manifest`] that the
//! generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                                  # Content root
//! ├── config.toml                           # Site configuration (optional)
//! ├── series/                               # Series descriptions (optional)
//! │   └── building-a-coding-agent-in-rust.md
//! ├── 2025-10-26-agent-loop.md              # Post (date prefix supplies the date)
//! ├── notes/
//! │   └── axum-routing.md                   # Posts may live in subdirectories
//! └── .drafts/                              # Hidden entries are skipped
//! ```
//!
//! ## Front Matter
//!
//! ```yaml
//! ---
//! title: The Agent Loop
//! date: 2025-10-26
//! series: Building a Coding Agent in Rust
//! series_order: 1
//! draft: false
//! exclude: false
//! ---
//! ```
//!
//! ## Failure Policy
//!
//! A post that cannot be understood (no front matter, invalid YAML, no
//! resolvable date) is skipped with a warning rather than failing the scan.
//! A skipped post simply never reaches the series index. IO and config errors
//! are fatal.

use crate::config::{self, SiteConfig};
use crate::naming;
use crate::types::Post;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Content root not found: {0}")]
    MissingRoot(PathBuf),
}

/// Why a single post file was skipped.
#[derive(Error, Debug, PartialEq)]
pub enum PostError {
    #[error("unreadable: {0}")]
    Read(String),
    #[error("no front matter block")]
    NoFrontMatter,
    #[error("invalid front matter: {0}")]
    FrontMatter(String),
    #[error("unrecognized date '{0}'")]
    BadDate(String),
    #[error("no date in front matter or filename")]
    NoDate,
    #[error("empty id")]
    EmptyId,
    #[error("id '{0}' cannot be used as a path segment")]
    UnsafeId(String),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// All posts that parsed, sorted by source path.
    pub posts: Vec<Post>,
    /// Series identifier → rendered HTML description.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub series_descriptions: BTreeMap<String, String>,
    /// Files that could not be parsed, with the reason.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
    pub config: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub source_path: String,
    pub reason: String,
}

/// Raw front matter as written by the author.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatter {
    title: Option<String>,
    date: Option<String>,
    slug: Option<String>,
    series: Option<String>,
    #[serde(alias = "seriesOrder")]
    series_order: Option<u32>,
    draft: bool,
    #[serde(alias = "excluded")]
    exclude: bool,
}

/// Name of the directory holding series descriptions.
const SERIES_DIR: &str = "series";

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }
    let config = config::load_config(root)?;
    let files = collect_post_files(root)?;
    debug!(files = files.len(), "collected post files");

    let results: Vec<(PathBuf, Result<Post, PostError>)> = files
        .par_iter()
        .map(|path| (path.clone(), load_post(path, root)))
        .collect();

    let mut posts = Vec::new();
    let mut skipped = Vec::new();
    let mut seen_ids = HashSet::new();
    for (path, result) in results {
        let source_path = relative(&path, root);
        match result {
            Ok(post) if !seen_ids.insert(post.id.clone()) => {
                warn!(file = %source_path, id = %post.id, "duplicate post id, skipping");
                skipped.push(SkippedFile {
                    source_path,
                    reason: format!("duplicate id '{}'", post.id),
                });
            }
            Ok(post) => posts.push(post),
            Err(err) => {
                warn!(file = %source_path, "skipping post: {err}");
                skipped.push(SkippedFile {
                    source_path,
                    reason: err.to_string(),
                });
            }
        }
    }

    warn_duplicate_orders(&posts);
    let series_descriptions = read_series_descriptions(&root.join(SERIES_DIR))?;

    Ok(Manifest {
        posts,
        series_descriptions,
        skipped,
        config,
    })
}

/// All `*.md` files under `root`, sorted by path, excluding hidden entries
/// and the series description directory.
fn collect_post_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let series_dir = root.join(SERIES_DIR);
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e) && e.path() != series_dir);
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn load_post(path: &Path, root: &Path) -> Result<Post, PostError> {
    let content = fs::read_to_string(path).map_err(|e| PostError::Read(e.to_string()))?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let mut post = parse_post(&content, &stem)?;
    post.source_path = relative(path, root);
    Ok(post)
}

/// Build a [`Post`] from a file's content and filename stem.
///
/// Resolution order:
/// - id: `slug` → stem without date prefix
/// - title: `title` → first `# ` heading → id with dashes as spaces
/// - published: `date` → date prefix of the stem
pub fn parse_post(content: &str, stem: &str) -> Result<Post, PostError> {
    let (yaml, body) = split_front_matter(content).ok_or(PostError::NoFrontMatter)?;
    let front: FrontMatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| PostError::FrontMatter(e.to_string()))?
    };

    let parsed = naming::parse_post_stem(stem);
    let id = front
        .slug
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or(parsed.slug);
    if id.is_empty() {
        return Err(PostError::EmptyId);
    }
    if !naming::is_path_safe_id(&id) {
        return Err(PostError::UnsafeId(id));
    }

    let published = match front.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            parse_date(raw).ok_or_else(|| PostError::BadDate(raw.to_string()))?
        }
        _ => parsed
            .date
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .ok_or(PostError::NoDate)?,
    };

    let title = front
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| first_heading(body))
        .unwrap_or_else(|| id.replace('-', " "));

    Ok(Post {
        id,
        title,
        published,
        series_name: front.series.filter(|s| !s.trim().is_empty()),
        series_order: front.series_order,
        draft: front.draft,
        excluded: front.exclude,
        source_path: String::new(),
    })
}

/// Split `---`-delimited front matter from the body.
///
/// Returns `None` when the file does not open with a `---` line or the block
/// is never closed.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\r\n")
        .or_else(|| content.strip_prefix("---\n"))?;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Parse a front matter date.
///
/// Accepts RFC 3339 (`2025-10-26T09:30:00+02:00`), naive date-times
/// (`2025-10-26T09:30:00`, `2025-10-26 09:30`), and plain dates
/// (`2025-10-26`, midnight UTC). Naive values are taken as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Log series whose members share an explicit order value. The ordering
/// still resolves them by date; the warning only points the author at it.
fn warn_duplicate_orders(posts: &[Post]) {
    let mut orders: HashMap<(String, u32), Vec<&str>> = HashMap::new();
    for post in posts {
        if let (Some(id), Some(order)) = (post.series_id(), post.series_order) {
            orders.entry((id, order)).or_default().push(&post.id);
        }
    }
    let mut duplicates: Vec<_> = orders.into_iter().filter(|(_, ids)| ids.len() > 1).collect();
    duplicates.sort();
    for ((series, order), ids) in duplicates {
        warn!(%series, order, posts = ?ids, "several posts share a series_order");
    }
}

/// Read `series/<identifier>.md` files and render them to HTML.
///
/// The file stem is normalized, so `series/Backend Axum.md` describes the
/// `backend-axum` series.
fn read_series_descriptions(dir: &Path) -> Result<BTreeMap<String, String>, ScanError> {
    let mut descriptions = BTreeMap::new();
    if !dir.is_dir() {
        return Ok(descriptions);
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_markdown(p))
        .collect();
    files.sort();

    for path in files {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let identifier = naming::normalize(&stem);
        let content = fs::read_to_string(&path)?;
        if identifier.is_empty() || content.trim().is_empty() {
            continue;
        }
        descriptions.insert(identifier, render_markdown(&content));
    }
    Ok(descriptions)
}

fn render_markdown(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}
