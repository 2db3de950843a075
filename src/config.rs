use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::hydra::InputCollection;

/// Per-run jobset policy: scheduling and notification fields copied into
/// every generated jobset, plus the base material for the legacy strategy.
#[derive(Debug, Clone)]
pub struct JobConfig {
  pub checkinterval: u64,
  pub emailoverride: String,
  pub enableemail: bool,
  pub keepnr: u64,
  pub schedulingshares: u64,
  pub input_template: InputCollection,
  pub email_responsible: bool,
  pub inputname: String,
  pub inputpath: String,
}

/// Read a jobset input template (a name → input mapping) from disk.
pub fn load_template(path: &Path) -> Result<InputCollection> {
  let file = File::open(path).with_context(|| format!("opening input template {}", path.display()))?;
  let reader = BufReader::new(file);

  serde_json::from_reader(reader).with_context(|| format!("parsing input template {}", path.display()))
}
