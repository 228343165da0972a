//! Page materialization: copy a source file and rewrite its header.

use std::path::Path;

use crate::error::{Error, Result};
use crate::site::PageJob;
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};

/// Metadata block prepended to every produced page.
const HEADER_TEMPLATE: &str = "---\ntitle: {{title}}\nlayout: page\npermalink: /{{permalink}}/\n---\n\n";

/// Leading lines every source document carries: its own title and a blank
/// line. Both are discarded; the title is re-added from the job's label.
const SOURCE_HEADER_LINES: usize = 2;

/// Materialize one page: copy the job's source file out of the checkout into
/// the output directory, then rewrite its header and apply the job's line
/// filter.
pub fn create_page(checkout: &Path, output_dir: &Path, job: &PageJob) -> Result<()> {
    let source = checkout.join(&job.source);
    if !source.exists() {
        return Err(Error::page_source_missing(
            job.source.clone(),
            checkout.display().to_string(),
        ));
    }

    let dest = output_dir.join(&job.page);
    io::copy_file(&source, &dest, "copy page source")?;
    rewrite_header(&dest, &job.label)?;

    if !job.drop.is_empty() {
        drop_lines(&dest, &job.drop)?;
    }

    Ok(())
}

/// Replace the file's two-line source header with the rendered metadata block.
///
/// The two-line assumption is not validated: a shorter file loses whatever
/// lines it has and still receives the header.
pub fn rewrite_header(path: &Path, label: &str) -> Result<()> {
    let contents = io::read_file(path, "read page")?;
    let body: Vec<&str> = contents.lines().skip(SOURCE_HEADER_LINES).collect();

    let header = template::render(
        HEADER_TEMPLATE,
        &[
            (TemplateVars::TITLE, label),
            (TemplateVars::PERMALINK, &label.to_lowercase()),
        ],
    );

    let mut out = header;
    if !body.is_empty() {
        out.push_str(&body.join("\n"));
        out.push('\n');
    }

    io::write_file(path, &out, "write page")
}

/// Remove every line containing any of the given substrings, preserving the
/// order of the remaining lines.
pub fn drop_lines(path: &Path, needles: &[String]) -> Result<()> {
    let contents = io::read_file(path, "read page for line filter")?;

    let kept: Vec<&str> = contents
        .lines()
        .filter(|line| !needles.iter().any(|needle| line.contains(needle.as_str())))
        .collect();

    let mut out = kept.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }

    io::write_file(path, &out, "write filtered page")
}
