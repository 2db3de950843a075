use anyhow::Result;
use clap::Parser;

mod builder;
mod cli;
mod config;
mod definition;
mod github;
mod hydra;
mod util;

use crate::cli::{Cli, normalize};
use crate::github::PullRequestSet;

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI and load the input template
  let cfg = normalize(cli)?;

  // Phase 2: read the pull-request batch
  let prs: PullRequestSet = util::read_json(&cfg.pull_requests_file)?;

  // Phase 3: one declarative jobset per pull request, flattened for Hydra
  let make_definition = definition::select_strategy(cfg.use_flakes);
  let jobsets = builder::build_jobsets(&prs, &cfg.job, make_definition);

  util::write_json_pretty(&cfg.out, &jobsets)
}
