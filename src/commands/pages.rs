use clap::Args;
use serde::Serialize;

use siteprep::site::{self, PageJob};

use super::CmdResult;

#[derive(Args)]
pub struct PagesArgs {}

#[derive(Serialize)]
pub struct PagesOutput {
    pub command: &'static str,
    pub repo_url: String,
    pub total: usize,
    pub pages: Vec<PageJob>,
}

pub fn run(_args: PagesArgs, _global: &super::GlobalArgs) -> CmdResult<PagesOutput> {
    let site = site::default_site();

    Ok((
        PagesOutput {
            command: "pages",
            repo_url: site.repo_url,
            total: site.jobs.len(),
            pages: site.jobs,
        },
        0,
    ))
}
