//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest, applies the
//! publication filter at a reference time, runs the series computations, and
//! writes the series section of the site.
//!
//! ## Generated Pages
//!
//! - **Series index** (`/{series_path}/index.html`): every series with its
//!   post count, or an empty-state message when there are none
//! - **Series listing** (`/{series_path}/{id}/index.html`, then
//!   `/page/{n}/index.html`): the ordered posts of one series, paginated
//! - **Navigation fragments** (`/{series_path}/{id}/nav/{post}.html`):
//!   "Part N of M" with previous/next links, for inclusion in post pages
//! - **Series data** (`/{series_path}/series.json`): the same information as
//!   JSON for other templating layers
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── series/
//!     ├── index.html
//!     ├── series.json
//!     └── building-a-coding-agent-in-rust/
//!         ├── index.html
//!         ├── page/
//!         │   └── 2/index.html
//!         └── nav/
//!             ├── agent-loop.html
//!             └── agent-tools.html
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. Series
//! descriptions arrive pre-rendered from markdown and are the only
//! pre-escaped content.

use crate::config::{SiteConfig, SiteSection};
use crate::filter::PostFilter;
use crate::naming;
use crate::scan::Manifest;
use crate::series::{self, SeriesError};
use crate::types::{Post, SeriesNavigation, SeriesPage, SeriesSummary};
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Series error: {0}")]
    Series(#[from] SeriesError),
}

const CSS: &str = include_str!("../static/style.css");

// ============================================================================
// Series index data
// ============================================================================

/// Everything the rendering layer needs about series, in owned form.
///
/// Serialized as `series.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesIndex {
    pub series: Vec<SeriesEntry>,
    /// Post id → its place in its series. Posts outside any series are absent.
    pub navigation: BTreeMap<String, NavEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub identifier: String,
    pub display_name: String,
    pub member_count: usize,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Members in reading order.
    pub posts: Vec<PostLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostLink {
    pub id: String,
    pub title: String,
    pub url: String,
    pub published: DateTime<Utc>,
    /// 1-based position in the series.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub series: String,
    pub series_name: String,
    pub position: usize,
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<PostLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PostLink>,
}

/// Canonical URL of a rendered post.
pub fn post_url(site: &SiteSection, id: &str) -> String {
    format!("/{}/{}/", site.posts_path.trim_matches('/'), id)
}

/// URL of a series listing page (1-based).
pub fn series_url(site: &SiteSection, identifier: &str, page: usize) -> String {
    let base = site.series_path.trim_matches('/');
    if page <= 1 {
        format!("/{base}/{identifier}/")
    } else {
        format!("/{base}/{identifier}/page/{page}/")
    }
}

fn post_link(site: &SiteSection, post: &Post, position: usize) -> PostLink {
    PostLink {
        id: post.id.clone(),
        title: post.title.clone(),
        url: post_url(site, &post.id),
        published: post.published,
        position,
    }
}

fn nav_entry(site: &SiteSection, identifier: &str, nav: &SeriesNavigation<'_>) -> NavEntry {
    NavEntry {
        series: identifier.to_string(),
        series_name: nav.series_name.to_string(),
        position: nav.position,
        total: nav.total,
        previous: nav
            .previous
            .map(|p| post_link(site, p, nav.position - 1)),
        next: nav.next.map(|p| post_link(site, p, nav.position + 1)),
    }
}

/// One series with its members in reading order.
///
/// Computed once per build and shared by the HTML pages and `series.json`.
#[derive(Debug, Clone)]
pub struct PlannedSeries<'a> {
    pub summary: SeriesSummary,
    pub ordered: Vec<&'a Post>,
}

impl PlannedSeries<'_> {
    /// Navigation for each member, aligned with `ordered`.
    pub fn navigation(&self) -> Vec<SeriesNavigation<'_>> {
        series::navigation_for_series(&self.ordered, &self.summary.display_name)
    }
}

/// Group, select, and order every series with eligible members.
pub fn plan_series<'a>(posts: &'a [Post], filter: &PostFilter) -> Vec<PlannedSeries<'a>> {
    series::list_series(posts, filter)
        .into_iter()
        .map(|summary| {
            let ordered =
                series::order_series(series::series_members(posts, filter, &summary.identifier));
            PlannedSeries { summary, ordered }
        })
        .collect()
}

/// Build the owned series index from planned series.
pub fn build_index(
    planned: &[PlannedSeries<'_>],
    site: &SiteSection,
    descriptions: &BTreeMap<String, String>,
) -> SeriesIndex {
    let mut series = Vec::new();
    let mut navigation = BTreeMap::new();

    for plan in planned {
        let identifier = &plan.summary.identifier;
        for (current, nav) in plan.ordered.iter().zip(plan.navigation()) {
            navigation.insert(current.id.clone(), nav_entry(site, identifier, &nav));
        }
        series.push(SeriesEntry {
            identifier: identifier.clone(),
            display_name: plan.summary.display_name.clone(),
            member_count: plan.summary.member_count,
            url: series_url(site, identifier, 1),
            description: descriptions.get(identifier).cloned(),
            posts: plan
                .ordered
                .iter()
                .enumerate()
                .map(|(i, p)| post_link(site, p, i + 1))
                .collect(),
        });
    }

    SeriesIndex { series, navigation }
}

// ============================================================================
// Generation
// ============================================================================

/// What the generate stage wrote, for CLI output.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Series section path, relative to the output directory.
    pub series_path: String,
    pub series: Vec<GeneratedSeries>,
}

#[derive(Debug, Clone)]
pub struct GeneratedSeries {
    pub display_name: String,
    pub identifier: String,
    pub member_count: usize,
    /// Listing pages, relative to the output directory.
    pub pages: Vec<String>,
    pub nav_fragments: usize,
}

/// Read the scan manifest at `manifest_path` and generate the site.
pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    now: DateTime<Utc>,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_from_manifest(&manifest, output_dir, now)
}

/// Generate the series section of the site from an in-memory manifest.
pub fn generate_from_manifest(
    manifest: &Manifest,
    output_dir: &Path,
    now: DateTime<Utc>,
) -> Result<GenerateReport, GenerateError> {
    let config = &manifest.config;
    let filter = PostFilter::from_config(&config.posts, now);
    let series_path = config.site.series_path.trim_matches('/').to_string();
    let series_root = output_dir.join(&series_path);
    fs::create_dir_all(&series_root)?;

    let planned = plan_series(&manifest.posts, &filter);
    info!(series = planned.len(), as_of = %now, "generating series pages");

    let index_html = render_series_index(&planned, config);
    fs::write(series_root.join("index.html"), index_html.into_string())?;

    let mut report = GenerateReport {
        output_dir: output_dir.to_path_buf(),
        series_path,
        series: Vec::new(),
    };

    for plan in &planned {
        let summary = &plan.summary;
        let series_dir = series_root.join(&summary.identifier);
        let description = manifest
            .series_descriptions
            .get(&summary.identifier)
            .map(String::as_str);

        let mut pages = Vec::new();
        for page in series::paginate(&plan.ordered, config.series.page_size)? {
            let page_dir = if page.page_number == 1 {
                series_dir.clone()
            } else {
                series_dir.join("page").join(page.page_number.to_string())
            };
            fs::create_dir_all(&page_dir)?;
            let html = render_series_page(summary, &page, description, config);
            let path = page_dir.join("index.html");
            fs::write(&path, html.into_string())?;
            pages.push(relative(&path, output_dir));
        }

        let nav_dir = series_dir.join("nav");
        fs::create_dir_all(&nav_dir)?;
        let mut nav_fragments = 0;
        for (post, nav) in plan.ordered.iter().zip(plan.navigation()) {
            if !naming::is_path_safe_id(&post.id) {
                warn!(post = %post.id, "post id is not a valid file name, skipping navigation fragment");
                continue;
            }
            let html = render_series_nav(&nav, &summary.identifier, &config.site);
            fs::write(nav_dir.join(format!("{}.html", post.id)), html.into_string())?;
            nav_fragments += 1;
        }
        debug!(series = %summary.identifier, pages = pages.len(), "wrote series");

        report.series.push(GeneratedSeries {
            display_name: summary.display_name.clone(),
            identifier: summary.identifier.clone(),
            member_count: summary.member_count,
            pages,
            nav_fragments,
        });
    }

    let index = build_index(&planned, &config.site, &manifest.series_descriptions);
    fs::write(
        series_root.join("series.json"),
        serde_json::to_string_pretty(&index)?,
    )?;

    Ok(report)
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, site_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (site_title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Renders the index of all series
fn render_series_index(planned: &[PlannedSeries<'_>], config: &SiteConfig) -> Markup {
    let content = html! {
        nav.breadcrumb {
            a href="/" { (config.site.title) }
            " › Series"
        }
        main.series-index {
            h1 { "Series" }
            @if planned.is_empty() {
                p.empty-state { "No series yet." }
            } @else {
                ul.series-list {
                    @for summary in planned.iter().map(|p| &p.summary) {
                        li {
                            a href=(series_url(&config.site, &summary.identifier, 1)) {
                                (summary.display_name)
                            }
                            " "
                            span.series-count { (post_count(summary.member_count)) }
                        }
                    }
                }
            }
        }
    };
    base_document("Series", &config.site.title, content)
}

fn post_count(n: usize) -> String {
    if n == 1 {
        "1 post".to_string()
    } else {
        format!("{n} posts")
    }
}

/// Renders one listing page of a series
fn render_series_page(
    summary: &SeriesSummary,
    page: &SeriesPage<'_>,
    description: Option<&str>,
    config: &SiteConfig,
) -> Markup {
    let site = &config.site;
    let first = page.first_position(config.series.page_size);
    let title = if page.page_number > 1 {
        format!("{} (page {})", summary.display_name, page.page_number)
    } else {
        summary.display_name.clone()
    };

    let content = html! {
        nav.breadcrumb {
            a href="/" { (site.title) }
            " › "
            a href={ "/" (site.series_path.trim_matches('/')) "/" } { "Series" }
            " › "
            (summary.display_name)
        }
        main.series-page {
            header.series-header {
                h1 { (summary.display_name) }
                p.series-count { (post_count(page.total_items)) }
                @if let Some(desc) = description {
                    div.series-description { (PreEscaped(desc)) }
                }
            }
            ol.series-posts start=(first) {
                @for post in &page.items {
                    li {
                        a href=(post_url(site, &post.id)) { (post.title) }
                        " "
                        time.post-date datetime=(post.published.to_rfc3339()) {
                            (format_date(&post.published))
                        }
                    }
                }
            }
            @if page.total_pages > 1 {
                nav.pager {
                    @if page.has_previous() {
                        a rel="prev" href=(series_url(site, &summary.identifier, page.page_number - 1)) { "← Earlier parts" }
                    } @else {
                        span {}
                    }
                    span.pager-position { "Page " (page.page_number) " of " (page.total_pages) }
                    @if page.has_next() {
                        a rel="next" href=(series_url(site, &summary.identifier, page.page_number + 1)) { "Later parts →" }
                    } @else {
                        span {}
                    }
                }
            }
        }
    };
    base_document(&title, &site.title, content)
}

/// Renders the previous/next fragment embedded in a post page
pub fn render_series_nav(nav: &SeriesNavigation<'_>, identifier: &str, site: &SiteSection) -> Markup {
    html! {
        aside.series-nav {
            p.series-position {
                "Part " (nav.position) " of " (nav.total) " in "
                a href=(series_url(site, identifier, 1)) { (nav.series_name) }
            }
            div.series-links {
                @if let Some(prev) = nav.previous {
                    a.series-prev rel="prev" href=(post_url(site, &prev.id)) { "← " (prev.title) }
                } @else {
                    span {}
                }
                @if let Some(next) = nav.next {
                    a.series-next rel="next" href=(post_url(site, &next.id)) { (next.title) " →" }
                } @else {
                    span {}
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;
    use crate::test_helpers::{at, coding_agent_series, post, series_post, setup_fixtures};
    use tempfile::TempDir;

    fn manifest_with(posts: Vec<Post>, page_size: usize) -> Manifest {
        let mut config = SiteConfig::default();
        config.series.page_size = page_size;
        Manifest {
            posts,
            series_descriptions: BTreeMap::new(),
            skipped: Vec::new(),
            config,
        }
    }

    #[test]
    fn post_and_series_urls() {
        let site = SiteSection::default();
        assert_eq!(post_url(&site, "agent-loop"), "/posts/agent-loop/");
        assert_eq!(series_url(&site, "axum", 1), "/series/axum/");
        assert_eq!(series_url(&site, "axum", 3), "/series/axum/page/3/");
    }

    #[test]
    fn urls_tolerate_slashes_in_config() {
        let site = SiteSection {
            posts_path: "/blog/".to_string(),
            series_path: "/reading/".to_string(),
            ..SiteSection::default()
        };
        assert_eq!(post_url(&site, "p"), "/blog/p/");
        assert_eq!(series_url(&site, "s", 2), "/reading/s/page/2/");
    }

    #[test]
    fn series_nav_fragment_links_neighbours() {
        let posts = coding_agent_series();
        let filter = PostFilter::published_at(at("2026-01-01"));
        let nav = series::series_navigation(&posts, &filter, &posts[1])
            .unwrap()
            .unwrap();
        let html = render_series_nav(&nav, "building-a-coding-agent-in-rust", &SiteSection::default())
            .into_string();
        assert!(html.contains("Part 2 of 3"));
        assert!(html.contains(r#"href="/posts/part-1/""#));
        assert!(html.contains(r#"href="/posts/part-3/""#));
        assert!(html.contains(r#"href="/series/building-a-coding-agent-in-rust/""#));
    }

    #[test]
    fn series_nav_fragment_first_post_has_no_prev_link() {
        let posts = coding_agent_series();
        let filter = PostFilter::published_at(at("2026-01-01"));
        let nav = series::series_navigation(&posts, &filter, &posts[0])
            .unwrap()
            .unwrap();
        let html = render_series_nav(&nav, "x", &SiteSection::default()).into_string();
        assert!(!html.contains("series-prev"));
        assert!(html.contains("series-next"));
    }

    #[test]
    fn series_index_empty_state() {
        let html = render_series_index(&[], &SiteConfig::default()).into_string();
        assert!(html.contains("No series yet."));
    }

    #[test]
    fn series_index_lists_counts() {
        let posts = vec![series_post("routing", "2025-01-01", "Axum", Some(1))];
        let planned = plan_series(&posts, &PostFilter::published_at(at("2026-01-01")));
        let html = render_series_index(&planned, &SiteConfig::default()).into_string();
        assert!(html.contains(r#"href="/series/axum/""#));
        assert!(html.contains("1 post"));
    }

    #[test]
    fn html_escape_in_maud() {
        let posts = vec![series_post("x", "2025-01-01", "<script>alert(1)</script>", Some(1))];
        let planned = plan_series(&posts, &PostFilter::published_at(at("2026-01-01")));
        let html = render_series_index(&planned, &SiteConfig::default()).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn build_index_collects_series_and_navigation() {
        let mut posts = coding_agent_series();
        posts.push(post("plain", "2025-01-01"));
        let filter = PostFilter::published_at(at("2026-01-01"));
        let planned = plan_series(&posts, &filter);
        let index = build_index(&planned, &SiteSection::default(), &BTreeMap::new());

        assert_eq!(index.series.len(), 1);
        let entry = &index.series[0];
        assert_eq!(entry.identifier, "building-a-coding-agent-in-rust");
        assert_eq!(entry.member_count, 3);
        let positions: Vec<usize> = entry.posts.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);

        assert!(!index.navigation.contains_key("plain"));
        let nav = &index.navigation["part-2"];
        assert_eq!((nav.position, nav.total), (2, 3));
        assert_eq!(nav.previous.as_ref().map(|p| p.id.as_str()), Some("part-1"));
        assert_eq!(nav.next.as_ref().map(|p| p.position), Some(3));
    }

    #[test]
    fn plan_orders_members_for_reading() {
        let mut posts = coding_agent_series();
        posts.reverse();
        let filter = PostFilter::published_at(at("2026-01-01"));
        let planned = plan_series(&posts, &filter);
        assert_eq!(planned.len(), 1);
        let ids: Vec<&str> = planned[0].ordered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["part-1", "part-2", "part-3"]);

        let navigation = planned[0].navigation();
        for (post, nav) in planned[0].ordered.iter().zip(&navigation) {
            let single = series::series_navigation(&posts, &filter, post)
                .unwrap()
                .unwrap();
            assert_eq!(&single, nav);
        }
    }

    #[test]
    fn generate_keeps_nav_fragments_inside_output() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let posts = vec![
            series_post("../../escaped", "2025-01-01", "Axum", Some(1)),
            series_post("2025/intro", "2025-01-02", "Axum", Some(2)),
            series_post("routing", "2025-01-03", "Axum", Some(3)),
        ];
        let manifest = manifest_with(posts, 10);
        let report = generate_from_manifest(&manifest, &out, at("2026-01-01")).unwrap();

        assert_eq!(report.series[0].nav_fragments, 1);
        assert!(out.join("series/axum/nav/routing.html").exists());
        assert!(!tmp.path().join("escaped.html").exists());
        assert!(!out.join("series/escaped.html").exists());
    }

    #[test]
    fn generate_skips_unsafe_slug_from_scan() {
        let content = TempDir::new().unwrap();
        fs::write(
            content.path().join("intro.md"),
            "---\ndate: 2025-01-01\nslug: 2025/intro\nseries: Axum\n---\n",
        )
        .unwrap();
        fs::write(
            content.path().join("routing.md"),
            "---\ndate: 2025-01-02\nseries: Axum\n---\n",
        )
        .unwrap();
        let manifest = scan::scan(content.path()).unwrap();
        assert_eq!(manifest.skipped.len(), 1);

        let out = TempDir::new().unwrap();
        let report = generate_from_manifest(&manifest, out.path(), at("2026-01-01")).unwrap();
        assert_eq!(report.series[0].member_count, 1);
        assert!(out.path().join("series/axum/nav/routing.html").exists());
    }

    #[test]
    fn generate_report_carries_series_path() {
        let tmp = TempDir::new().unwrap();
        let mut manifest = manifest_with(coding_agent_series(), 10);
        manifest.config.site.series_path = "/reading/".to_string();
        let report = generate_from_manifest(&manifest, tmp.path(), at("2026-01-01")).unwrap();
        assert_eq!(report.series_path, "reading");
        assert!(tmp.path().join("reading/index.html").exists());
    }

    #[test]
    fn generate_writes_paginated_listing() {
        let tmp = TempDir::new().unwrap();
        let posts: Vec<Post> = (1..=5)
            .map(|n| series_post(&format!("p{n}"), "2025-01-01", "Long Read", Some(n)))
            .collect();
        let manifest = manifest_with(posts, 2);
        let report = generate_from_manifest(&manifest, tmp.path(), at("2026-01-01")).unwrap();

        let series_dir = tmp.path().join("series/long-read");
        assert!(series_dir.join("index.html").exists());
        assert!(series_dir.join("page/2/index.html").exists());
        assert!(series_dir.join("page/3/index.html").exists());
        assert!(!series_dir.join("page/4").exists());
        assert_eq!(report.series[0].pages.len(), 3);
        assert_eq!(report.series[0].pages[1], "series/long-read/page/2/index.html");
        assert_eq!(report.series[0].nav_fragments, 5);

        let page3 = fs::read_to_string(series_dir.join("page/3/index.html")).unwrap();
        assert!(page3.contains(r#"start="5""#));
        assert!(page3.contains("Page 3 of 3"));
    }

    #[test]
    fn generate_with_no_series_writes_empty_index() {
        let tmp = TempDir::new().unwrap();
        let manifest = manifest_with(vec![post("plain", "2025-01-01")], 10);
        let report = generate_from_manifest(&manifest, tmp.path(), at("2026-01-01")).unwrap();
        assert!(report.series.is_empty());
        let index = fs::read_to_string(tmp.path().join("series/index.html")).unwrap();
        assert!(index.contains("No series yet."));
        let json = fs::read_to_string(tmp.path().join("series/series.json")).unwrap();
        let parsed: SeriesIndex = serde_json::from_str(&json).unwrap();
        assert!(parsed.series.is_empty());
    }

    #[test]
    fn generate_from_fixtures() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let manifest = scan::scan(content.path()).unwrap();
        let report = generate_from_manifest(&manifest, out.path(), at("2026-01-01")).unwrap();

        let names: Vec<&str> = report.series.iter().map(|s| s.display_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["backend engineering in axum", "Building a Coding Agent in Rust"]
        );
        // First eligible post in path order names the series; draft and
        // future posts are filtered out
        assert_eq!(report.series[0].member_count, 2);
        assert_eq!(report.series[1].member_count, 3);

        let agent = out.path().join("series/building-a-coding-agent-in-rust");
        let page1 = fs::read_to_string(agent.join("index.html")).unwrap();
        assert!(page1.contains("terminal coding agent"));
        assert!(page1.contains("The Agent Loop"));
        assert!(agent.join("page/2/index.html").exists());
        assert!(agent.join("nav/agent-tools.html").exists());
        assert!(!agent.join("nav/agent-future.html").exists());
    }

    #[test]
    fn generate_reads_manifest_file() {
        let tmp = TempDir::new().unwrap();
        let manifest = manifest_with(coding_agent_series(), 10);
        let manifest_path = tmp.path().join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();

        let out = tmp.path().join("dist");
        let report = generate(&manifest_path, &out, at("2026-01-01")).unwrap();
        assert_eq!(report.series.len(), 1);
        assert!(out.join("series/series.json").exists());
    }
}
