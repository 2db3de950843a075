// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the Hydra jobset model and the flattening into the declarative-jobset wire shape
// role: model/types
// outputs: Serializable records whose field names match Hydra's declarative format verbatim
// invariants: InputDefinition is an explicit sum type; flatten populates exactly one of {flake} / {nixexprinput, nixexprpath, inputs}; absent optionals serialize as omitted, never null
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of a jobset's `inputs` table, e.g. a git checkout or a nixpkgs pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsetInput {
  pub r#type: String,
  pub value: String,
  pub emailresponsible: bool,
}

pub type InputCollection = BTreeMap<String, JobsetInput>;

/// How Hydra should locate the thing to evaluate: a flake URI, or a nix
/// expression resolved against a named input.
#[derive(Debug, Clone)]
pub enum InputDefinition {
  Flake { uri: String },
  Legacy { nixexprinput: String, nixexprpath: String, inputs: InputCollection },
}

#[derive(Debug, Clone)]
pub struct Jobset {
  pub enabled: bool,
  pub hidden: bool,
  pub description: String,
  pub checkinterval: u64,
  pub schedulingshares: u64,
  pub enableemail: bool,
  pub emailoverride: String,
  pub keepnr: u64,
  pub definition: InputDefinition,
}

/// The flat record Hydra's declarative-jobset format expects: one shape for
/// both kinds of jobset, with the variant-specific fields optional.
#[derive(Debug, Serialize)]
pub struct DeclarativeJobset {
  pub enabled: bool,
  pub hidden: bool,
  pub description: String,
  pub checkinterval: u64,
  pub schedulingshares: u64,
  pub enableemail: bool,
  pub emailoverride: String,
  pub keepnr: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub flake: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub nixexprinput: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub nixexprpath: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inputs: Option<InputCollection>,
}

/// The generated document: declarative jobsets keyed by jobset name.
pub type DeclarativeJobsets = BTreeMap<String, DeclarativeJobset>;

impl Jobset {
  /// Project the tagged definition into the flat declarative shape.
  pub fn flatten(self) -> DeclarativeJobset {
    let mut flat = DeclarativeJobset {
      enabled: self.enabled,
      hidden: self.hidden,
      description: self.description,
      checkinterval: self.checkinterval,
      schedulingshares: self.schedulingshares,
      enableemail: self.enableemail,
      emailoverride: self.emailoverride,
      keepnr: self.keepnr,
      flake: None,
      nixexprinput: None,
      nixexprpath: None,
      inputs: None,
    };

    match self.definition {
      InputDefinition::Flake { uri } => {
        flat.flake = Some(uri);
      }
      InputDefinition::Legacy { nixexprinput, nixexprpath, inputs } => {
        flat.nixexprinput = Some(nixexprinput);
        flat.nixexprpath = Some(nixexprpath);
        flat.inputs = Some(inputs);
      }
    }

    flat
  }
}
