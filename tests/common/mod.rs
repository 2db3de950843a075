use std::path::{Path, PathBuf};

/// One pull request as GitHub's list endpoint reports it, trimmed to the
/// fields the generator consumes plus a few it ignores.
#[allow(dead_code)]
pub fn pull_request(title: &str, login: &str, number: u64, head_ref: &str, sha: &str) -> serde_json::Value {
  serde_json::json!({
    "title": title,
    "number": number,
    "html_url": format!("https://github.com/example/widgets/pull/{number}"),
    "author_association": "MEMBER",
    "user": { "login": login },
    "head": {
      "ref": head_ref,
      "sha": sha,
      "user": { "login": login },
      "repo": {
        "git_url": "git://github.com/example/widgets.git",
        "ssh_url": "git@github.com:example/widgets.git"
      }
    },
    "base": {
      "ref": "main",
      "sha": "5b7a9e0d4c1f2a6b8e3d0c9f1a2b3c4d5e6f7a8b",
      "user": { "login": "example" },
      "repo": {
        "git_url": "git://github.com/example/widgets.git",
        "ssh_url": "git@github.com:example/widgets.git"
      }
    }
  })
}

/// The standard two-entry batch used across the end-to-end tests.
#[allow(dead_code)]
pub fn two_pull_requests() -> serde_json::Value {
  serde_json::json!({
    "1": pull_request("Fix bug", "alice", 1, "feature/x", "abc123"),
    "2": pull_request("Add feature", "bob", 2, "feature/y", "def456"),
  })
}

#[allow(dead_code)]
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
  let path = dir.join(name);
  std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
  path
}

#[allow(dead_code)]
pub fn bin() -> assert_cmd::Command {
  assert_cmd::Command::cargo_bin("hydra-jobset-generator").expect("binary under test")
}

/// Run the generator over `batch` with `extra` flags and parse its stdout.
#[allow(dead_code)]
pub fn generate(batch: &serde_json::Value, extra: &[&str]) -> serde_json::Value {
  let dir = tempfile::TempDir::new().unwrap();
  let input = write_json(dir.path(), "pull-requests.json", batch);

  let out = bin().arg(&input).args(extra).output().unwrap();
  assert!(
    out.status.success(),
    "generator failed: {}",
    String::from_utf8_lossy(&out.stderr)
  );
  serde_json::from_slice(&out.stdout).expect("stdout is a JSON document")
}
