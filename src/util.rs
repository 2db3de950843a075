// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: JSON plumbing for the driver layer (file-or-stdin read, stdout-or-file write) and man page rendering
// role: utilities/helpers
// inputs: Paths ("-" means the standard stream), serializable values, clap CommandFactory
// outputs: Deserialized documents, pretty-printed JSON, troff man page text
// side_effects: Reads stdin or files; writes stdout or files
// errors: IO and parse errors bubble with the offending path attached
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::CommandFactory;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read a JSON document from a file path, or from stdin when the path is "-".
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
  if path == "-" {
    let stdin = std::io::stdin();
    return serde_json::from_reader(stdin.lock()).context("parsing JSON from stdin");
  }

  let file = File::open(path).with_context(|| format!("opening {path}"))?;
  let reader = BufReader::new(file);

  serde_json::from_reader(reader).with_context(|| format!("parsing {path}"))
}

/// Pretty-print a value as JSON to stdout ("-") or to the given file.
pub fn write_json_pretty<T: Serialize>(out: &str, value: &T) -> Result<()> {
  if out == "-" {
    println!("{}", serde_json::to_string_pretty(value)?);
    return Ok(());
  }

  std::fs::write(out, serde_json::to_vec_pretty(value)?).with_context(|| format!("writing {out}"))?;

  Ok(())
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
