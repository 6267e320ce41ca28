// crates/rotor-cli/src/io/jsonl.rs

use std::io::Write;

use anyhow::Context;
use rotor_core::RotationStatus;

fn write_statuses<W: Write>(w: &mut W, statuses: &[RotationStatus]) -> anyhow::Result<()> {
    for s in statuses {
        serde_json::to_writer(&mut *w, s)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

/// One status object per line.
pub fn write_statuses_file(path: &str, statuses: &[RotationStatus]) -> anyhow::Result<()> {
    let f = std::fs::File::create(path).with_context(|| format!("create status jsonl: {path}"))?;
    let mut w = std::io::BufWriter::new(f);
    write_statuses(&mut w, statuses).with_context(|| format!("write status jsonl: {path}"))
}

pub fn write_statuses_stdout(statuses: &[RotationStatus]) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_statuses(&mut lock, statuses).context("write status jsonl to stdout")
}

/// File when `out` is set, stdout otherwise.
pub fn write_statuses_to(out: Option<&str>, statuses: &[RotationStatus]) -> anyhow::Result<()> {
    match out {
        Some(path) => write_statuses_file(path, statuses),
        None => write_statuses_stdout(statuses),
    }
}
