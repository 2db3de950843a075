// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Nominal model for the GitHub pull-request payload the generator consumes
// role: model/types
// inputs: Pull-request JSON keyed by an opaque identifier (as fetched from the GitHub list API)
// outputs: Typed PullRequest records; PullRequestSet batch keyed like the input document
// invariants: Every field of the payload shape is required at parse time; unknown JSON fields are ignored; unknown author associations parse as Other
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

// The full payload shape is modeled even where the generator consumes a subset.
#![allow(dead_code)]

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub enum AuthorAssociation {
  #[serde(rename = "MEMBER")]
  Member,
  #[serde(other)]
  Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
  pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
  pub git_url: String,
  pub ssh_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
  pub r#ref: String,
  pub repo: Repo,
  pub sha: String,
  pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
  pub title: String,
  pub author_association: AuthorAssociation,
  pub head: Branch,
  pub base: Branch,
  pub user: User,
  pub html_url: String,
  pub number: u64,
}

/// Pull requests keyed by an opaque identifier, typically the PR number as a string.
pub type PullRequestSet = BTreeMap<String, PullRequest>;
