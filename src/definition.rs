// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build one Hydra input definition per pull request, in flake-URI or legacy nix-expression flavor
// role: strategy/construction
// inputs: JobConfig plus one PullRequest
// outputs: InputDefinition (exactly one variant; the strategy is chosen once per batch run, never per entry)
// invariants: legacy_definition never mutates the configured template (fresh map per call); flake query pairs are form-urlencoded in ref, rev order
// errors: none (the typed payload model guarantees every field this module reads)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use url::form_urlencoded;

use crate::config::JobConfig;
use crate::github::PullRequest;
use crate::hydra::{InputDefinition, JobsetInput};

/// A definition strategy, bound once for a whole batch run.
pub type MakeDefinition = fn(&JobConfig, &PullRequest) -> InputDefinition;

pub fn select_strategy(use_flakes: bool) -> MakeDefinition {
  if use_flakes {
    flake_definition
  } else {
    legacy_definition
  }
}

/// Point Hydra at the head commit via a flake URI:
/// `git+ssh://<ssh_url>?ref=<branch>&rev=<sha>`, query-encoded.
pub fn flake_definition(_config: &JobConfig, pr: &PullRequest) -> InputDefinition {
  let query = form_urlencoded::Serializer::new(String::new())
    .append_pair("ref", &pr.head.r#ref)
    .append_pair("rev", &pr.head.sha)
    .finish();

  InputDefinition::Flake {
    uri: format!("git+ssh://{}?{}", pr.head.repo.ssh_url, query),
  }
}

/// Extend the configured input template with a synthesized `src` input
/// pointing at the head commit. The template itself is left untouched:
/// every call gets its own copy, so one pull request's coordinates can
/// never leak into another's inputs table.
pub fn legacy_definition(config: &JobConfig, pr: &PullRequest) -> InputDefinition {
  let mut inputs = config.input_template.clone();

  inputs.insert(
    String::from("src"),
    JobsetInput {
      r#type: String::from("git"),
      value: format!("{} {}", pr.head.repo.git_url, pr.head.sha),
      emailresponsible: config.email_responsible,
    },
  );

  InputDefinition::Legacy {
    nixexprinput: config.inputname.clone(),
    nixexprpath: config.inputpath.clone(),
    inputs,
  }
}
