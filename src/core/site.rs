//! Site definition: the fixed set of pages assembled from the source repository.

use std::path::PathBuf;

use serde::Serialize;

/// One unit of work mapping a source Markdown file to a labeled site page.
#[derive(Debug, Clone, Serialize)]
pub struct PageJob {
    /// Path of the source file, relative to the checkout root.
    pub source: String,
    /// Filename of the produced page inside the output directory.
    pub page: String,
    /// Human-readable label; fills the title slot verbatim and, lowercased,
    /// the permalink slot of the page header.
    pub label: String,
    /// Substrings whose matching lines are stripped from the produced page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drop: Vec<String>,
}

impl PageJob {
    pub fn new(source: &str, page: &str, label: &str) -> Self {
        Self {
            source: source.to_string(),
            page: page.to_string(),
            label: label.to_string(),
            drop: Vec::new(),
        }
    }

    /// A job whose produced page sits at the site root: the permalink line is
    /// stripped after the header rewrite.
    pub fn root(source: &str, page: &str, label: &str) -> Self {
        Self {
            drop: vec!["permalink".to_string()],
            ..Self::new(source, page, label)
        }
    }
}

/// Immutable description of the whole site build, constructed once at startup
/// and passed by reference into the driver.
#[derive(Debug, Clone, Serialize)]
pub struct SiteDefinition {
    /// Clone URL of the source repository.
    pub repo_url: String,
    /// Directory the clone lands in, relative to the working directory.
    pub checkout_dir: PathBuf,
    /// Directory the produced pages are written to.
    pub output_dir: PathBuf,
    /// Ordered page jobs; processed exactly in this order.
    pub jobs: Vec<PageJob>,
}

/// The HSUPipeline documentation site.
pub fn default_site() -> SiteDefinition {
    SiteDefinition {
        repo_url: "https://github.com/HSUPipeline/Overview".to_string(),
        checkout_dir: PathBuf::from("Overview"),
        output_dir: PathBuf::from("outputs"),
        jobs: vec![
            PageJob::root("README.md", "index.md", "HSUPipeline"),
            PageJob::new("Templates.md", "templates.md", "Templates"),
            PageJob::new("Sorting.md", "sorting.md", "Sorting"),
            PageJob::new("Converting.md", "converting.md", "Converting"),
            PageJob::new("Analysis.md", "analysis.md", "Analysis"),
            PageJob::new("Projects.md", "projects.md", "Projects"),
            PageJob::new("CodeMap.md", "codemap.md", "CodeMap"),
        ],
    }
}
