use clap::Args;
use serde::Serialize;

use siteprep::prepare::{self, PageOutcome};
use siteprep::site;
use siteprep::vcs::Git;

use super::CmdResult;

#[derive(Args)]
pub struct PrepareArgs {}

#[derive(Serialize)]
pub struct PrepareOutput {
    pub command: &'static str,
    pub repo_url: String,
    pub output_dir: String,
    pub page_count: usize,
    pub pages: Vec<PageOutcome>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

pub fn run(_args: PrepareArgs, _global: &super::GlobalArgs) -> CmdResult<PrepareOutput> {
    let site = site::default_site();
    let report = prepare::prepare_site(&site, &Git::new())?;

    let page_count = report.pages.len();

    Ok((
        PrepareOutput {
            command: "prepare",
            repo_url: report.repo_url,
            output_dir: report.output_dir.clone(),
            page_count,
            pages: report.pages,
            hints: vec![format!(
                "{} page(s) written to {}.",
                page_count, report.output_dir
            )],
        },
        0,
    ))
}
