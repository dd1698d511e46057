//! Line-oriented stdin helpers.
//!
//! Free text is accepted as-is, empty strings included; only numeric entry
//! is validated, by re-prompting.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};

/// Print `label` without a newline and read one line, stripped of its
/// terminator. Fails on end of input.
pub fn read_line(label: &str) -> Result<String> {
  print!("{label}");
  io::stdout().flush().context("flushing prompt")?;

  let mut buf = String::new();
  let n = io::stdin().read_line(&mut buf).context("reading stdin")?;
  if n == 0 {
    bail!("end of input");
  }
  Ok(buf.trim_end_matches(['\r', '\n']).to_owned())
}

/// Read a non-negative integer, re-prompting until one parses.
pub fn read_u32(label: &str) -> Result<u32> {
  loop {
    match read_line(label)?.trim().parse() {
      Ok(n) => return Ok(n),
      Err(_) => println!("Enter a number"),
    }
  }
}

/// Read an index into a list of `len` items. An out-of-range entry yields
/// `None` rather than re-prompting; the menu flows abort on invalid input.
pub fn read_index(label: &str, len: usize) -> Result<Option<usize>> {
  let n = read_u32(label)? as usize;
  Ok((n < len).then_some(n))
}
