// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Assemble one jobset per pull request and drive the whole batch into the flat output document
// role: processing/orchestrator
// inputs: PullRequestSet, JobConfig, a bound definition strategy
// outputs: DeclarativeJobsets keyed "pr-<id>"; a stderr warning when a generated name is overwritten
// invariants:
// - generated jobsets are always enabled and never hidden (fixed policy)
// - description is "<title> by <login>: <html_url>" verbatim
// - on a name collision the last entry wins, matching the historical behavior
// errors: none; the typed model guarantees the fields this module reads
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::config::JobConfig;
use crate::definition::MakeDefinition;
use crate::github::{PullRequest, PullRequestSet};
use crate::hydra::{DeclarativeJobsets, Jobset};

/// Combine one pull request with the run's policy and the bound strategy
/// into a full jobset record.
pub fn build_jobset(pr: &PullRequest, config: &JobConfig, make_definition: MakeDefinition) -> Jobset {
  Jobset {
    enabled: true,
    hidden: false,
    description: format!("{} by {}: {}", pr.title, pr.user.login, pr.html_url),
    checkinterval: config.checkinterval,
    schedulingshares: config.schedulingshares,
    enableemail: config.enableemail,
    emailoverride: config.emailoverride.clone(),
    keepnr: config.keepnr,
    definition: make_definition(config, pr),
  }
}

/// Build and flatten a jobset for every pull request in the batch, keyed
/// "pr-<id>". With distinct input keys the prefixed names are distinct too;
/// should a name repeat anyway, the later entry wins and we say so on stderr.
pub fn build_jobsets(
  prs: &PullRequestSet,
  config: &JobConfig,
  make_definition: MakeDefinition,
) -> DeclarativeJobsets {
  let mut jobsets = DeclarativeJobsets::new();

  for (prkey, pr) in prs {
    let jobset = build_jobset(pr, config, make_definition);
    let name = format!("pr-{prkey}");
    if jobsets.insert(name.clone(), jobset.flatten()).is_some() {
      eprintln!("[jobsets] duplicate jobset name {name}; keeping the last entry");
    }
  }

  jobsets
}
