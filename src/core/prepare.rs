//! Site preparation driver: output dir, fetch, pages, cleanup.

use serde::Serialize;

use crate::page;
use crate::site::SiteDefinition;
use crate::utils::io;
use crate::vcs::{Checkout, Vcs};
use crate::Result;

/// One produced page, as reported back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct PageOutcome {
    pub page: String,
    pub label: String,
    pub source: String,
}

/// Result of a full site preparation run.
#[derive(Debug, Clone, Serialize)]
pub struct PrepareReport {
    pub repo_url: String,
    pub output_dir: String,
    pub pages: Vec<PageOutcome>,
}

/// Run the whole pipeline for one site definition.
///
/// Steps, in order: ensure the output directory exists, fetch the source
/// repository, materialize every configured page, remove the checkout. The
/// checkout is held by a guard, so removal also happens when a page fails.
pub fn prepare_site(site: &SiteDefinition, vcs: &dyn Vcs) -> Result<PrepareReport> {
    io::ensure_dir(&site.output_dir, "create output directory")?;

    log_status!("prepare", "Cloning {}", site.repo_url);
    let checkout = Checkout::fetch(vcs, &site.repo_url, &site.checkout_dir)?;

    let mut pages = Vec::with_capacity(site.jobs.len());
    for job in &site.jobs {
        log_status!("prepare", "Writing {}", job.page);
        page::create_page(checkout.path(), &site.output_dir, job)?;
        pages.push(PageOutcome {
            page: job.page.clone(),
            label: job.label.clone(),
            source: job.source.clone(),
        });
    }

    Ok(PrepareReport {
        repo_url: site.repo_url.clone(),
        output_dir: site.output_dir.display().to_string(),
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::PageJob;
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    /// Test double: "fetches" by writing fixture files into the target dir.
    struct FixtureVcs {
        files: Vec<(&'static str, &'static str)>,
        removed: RefCell<Vec<PathBuf>>,
    }

    impl FixtureVcs {
        fn new(files: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                files,
                removed: RefCell::new(Vec::new()),
            }
        }
    }

    impl Vcs for FixtureVcs {
        fn fetch(&self, _url: &str, target_dir: &Path) -> Result<()> {
            fs::create_dir_all(target_dir).unwrap();
            for (name, contents) in &self.files {
                fs::write(target_dir.join(name), contents).unwrap();
            }
            Ok(())
        }

        fn remove(&self, path: &Path) -> Result<()> {
            if path.exists() {
                fs::remove_dir_all(path).unwrap();
            }
            self.removed.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct FailingVcs;

    impl Vcs for FailingVcs {
        fn fetch(&self, _url: &str, _target_dir: &Path) -> Result<()> {
            Err(crate::Error::git_command_failed("git clone failed: no route to host"))
        }

        fn remove(&self, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    fn test_site(root: &Path, jobs: Vec<PageJob>) -> SiteDefinition {
        SiteDefinition {
            repo_url: "https://example.com/Overview".to_string(),
            checkout_dir: root.join("Overview"),
            output_dir: root.join("outputs"),
            jobs,
        }
    }

    #[test]
    fn prepare_writes_every_configured_page() {
        let dir = tempdir().unwrap();
        let vcs = FixtureVcs::new(vec![
            ("README.md", "# Overview\n\nWelcome.\n"),
            ("Sorting.md", "# Sorting\n\nSome content.\n"),
        ]);
        let site = test_site(
            dir.path(),
            vec![
                PageJob::root("README.md", "index.md", "HSUPipeline"),
                PageJob::new("Sorting.md", "sorting.md", "Sorting"),
            ],
        );

        let report = prepare_site(&site, &vcs).unwrap();

        assert_eq!(report.pages.len(), 2);
        assert_eq!(report.pages[0].page, "index.md");

        let index = fs::read_to_string(site.output_dir.join("index.md")).unwrap();
        assert_eq!(
            index,
            "---\ntitle: HSUPipeline\nlayout: page\n---\n\nWelcome.\n"
        );

        let sorting = fs::read_to_string(site.output_dir.join("sorting.md")).unwrap();
        assert_eq!(
            sorting,
            "---\ntitle: Sorting\nlayout: page\npermalink: /sorting/\n---\n\nSome content.\n"
        );
    }

    #[test]
    fn prepare_creates_the_output_directory() {
        let dir = tempdir().unwrap();
        let vcs = FixtureVcs::new(vec![("README.md", "# Overview\n\nWelcome.\n")]);
        let site = test_site(
            dir.path(),
            vec![PageJob::root("README.md", "index.md", "HSUPipeline")],
        );
        assert!(!site.output_dir.exists());

        prepare_site(&site, &vcs).unwrap();

        assert!(site.output_dir.is_dir());
    }

    #[test]
    fn prepare_removes_the_checkout_after_success() {
        let dir = tempdir().unwrap();
        let vcs = FixtureVcs::new(vec![("README.md", "# Overview\n\nWelcome.\n")]);
        let site = test_site(
            dir.path(),
            vec![PageJob::root("README.md", "index.md", "HSUPipeline")],
        );

        prepare_site(&site, &vcs).unwrap();

        assert!(!site.checkout_dir.exists());
        assert_eq!(*vcs.removed.borrow(), vec![site.checkout_dir.clone()]);
    }

    #[test]
    fn prepare_removes_the_checkout_when_a_page_fails() {
        let dir = tempdir().unwrap();
        let vcs = FixtureVcs::new(vec![("README.md", "# Overview\n\nWelcome.\n")]);
        let site = test_site(
            dir.path(),
            vec![
                PageJob::root("README.md", "index.md", "HSUPipeline"),
                PageJob::new("Missing.md", "missing.md", "Missing"),
            ],
        );

        let err = prepare_site(&site, &vcs).unwrap_err();

        assert_eq!(err.code.as_str(), "page.source_missing");
        assert_eq!(*vcs.removed.borrow(), vec![site.checkout_dir.clone()]);
    }

    #[test]
    fn prepare_stops_when_fetch_fails() {
        let dir = tempdir().unwrap();
        let site = test_site(
            dir.path(),
            vec![PageJob::root("README.md", "index.md", "HSUPipeline")],
        );

        let err = prepare_site(&site, &FailingVcs).unwrap_err();

        assert_eq!(err.code.as_str(), "git.command_failed");
        assert!(!site.output_dir.join("index.md").exists());
    }

    #[test]
    fn prepare_leaves_stale_pages_from_previous_runs() {
        let dir = tempdir().unwrap();
        let vcs = FixtureVcs::new(vec![("README.md", "# Overview\n\nWelcome.\n")]);
        let site = test_site(
            dir.path(),
            vec![PageJob::root("README.md", "index.md", "HSUPipeline")],
        );
        fs::create_dir_all(&site.output_dir).unwrap();
        fs::write(site.output_dir.join("retired.md"), "from an older job list\n").unwrap();

        prepare_site(&site, &vcs).unwrap();

        // The output directory is never cleared, only overwritten per job.
        assert!(site.output_dir.join("retired.md").exists());
    }
}
