use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, JobConfig};
use crate::hydra::InputCollection;

#[derive(Parser, Debug)]
#[command(
    name = "hydra-jobset-generator",
    version,
    about = "Generate Hydra declarative jobsets from GitHub pull requests",
    long_about = None
)]
pub struct Cli {
  /// Pull-request JSON keyed by identifier, as fetched from GitHub ("-" for stdin)
  pub pull_requests_file: Option<String>,

  /// Generate flake-style jobsets instead of legacy nix-expression ones
  #[arg(long)]
  pub flakes: bool,

  /// Base input template JSON file (legacy jobsets only)
  #[arg(long)]
  pub template: Option<PathBuf>,

  /// Seconds between evaluations of a generated jobset
  #[arg(long, default_value_t = 300)]
  pub check_interval: u64,

  /// Relative share of the evaluation queue
  #[arg(long, default_value_t = 1)]
  pub scheduling_shares: u64,

  /// Send notification mail when an evaluation fails
  #[arg(long)]
  pub email_enable: bool,

  /// Recipient overriding the default notification addresses (empty for none)
  #[arg(long, default_value = "")]
  pub email_override: String,

  /// Mail the authors of commits in the pull request if something fails
  #[arg(long)]
  pub email_responsible: bool,

  /// Number of evaluations Hydra keeps per jobset
  #[arg(long, default_value_t = 3)]
  pub keep_evaluations: u64,

  /// Name of the nix-expression input (legacy jobsets only)
  #[arg(long, default_value = "src")]
  pub input_name: String,

  /// Path of the nix expression inside that input (legacy jobsets only)
  #[arg(long, default_value = "default.nix")]
  pub input_path: String,

  /// Where to write the jobset document (default stdout "-")
  #[arg(long, default_value = "-")]
  pub out: String,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub pull_requests_file: String,
  pub out: String,
  pub use_flakes: bool,
  pub job: JobConfig,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  // Template and flakes are mutually exclusive strategies; reject the mix
  // before anything is read or generated.
  if cli.template.is_some() && cli.flakes {
    bail!("Cannot combine --template and --flakes");
  }

  let pull_requests_file = match cli.pull_requests_file {
    Some(file) => file,
    None => bail!("Provide a pull-request file, or \"-\" to read from stdin"),
  };

  let input_template = match &cli.template {
    Some(path) => config::load_template(path)?,
    None => InputCollection::new(),
  };

  Ok(EffectiveConfig {
    pull_requests_file,
    out: cli.out,
    use_flakes: cli.flakes,
    job: JobConfig {
      checkinterval: cli.check_interval,
      emailoverride: cli.email_override,
      enableemail: cli.email_enable,
      email_responsible: cli.email_responsible,
      inputname: cli.input_name,
      inputpath: cli.input_path,
      keepnr: cli.keep_evaluations,
      schedulingshares: cli.scheduling_shares,
      input_template,
    },
  })
}
