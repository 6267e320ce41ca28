// crates/rotor-cli/src/cmd/script.rs

use rotor_core::Maneuver;

/// Longest script, in steps, after repeat counts are expanded.
pub const MAX_SCRIPT_STEPS: usize = 10_000_000;

/// One entry of a maneuver script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Tick(Maneuver),
    Halt,
}

/// Parse a maneuver script.
///
/// `R` right, `L` left, `-`/`N` coast, `.` halt. A decimal count repeats the
/// next step (`10R.10L`). Whitespace and commas are ignored.
pub fn parse(script: &str) -> anyhow::Result<Vec<Step>> {
    let mut out = Vec::new();
    let mut count: Option<usize> = None;

    for (pos, ch) in script.chars().enumerate() {
        let step = match ch {
            d if d.is_ascii_digit() => {
                let v = count.unwrap_or(0);
                count = Some(
                    v.checked_mul(10)
                        .and_then(|v| v.checked_add(d.to_digit(10).unwrap_or(0) as usize))
                        .ok_or_else(|| anyhow::anyhow!("repeat count too large at {pos}"))?,
                );
                continue;
            }
            c if c.is_whitespace() || c == ',' => continue,
            'R' | 'r' => Step::Tick(Maneuver::RotateRight),
            'L' | 'l' => Step::Tick(Maneuver::RotateLeft),
            '-' | 'N' | 'n' => Step::Tick(Maneuver::None),
            '.' => Step::Halt,
            other => anyhow::bail!("invalid script character '{other}' at {pos}"),
        };
        let n = count.take().unwrap_or(1);
        if n > MAX_SCRIPT_STEPS - out.len() {
            anyhow::bail!("script expands past {MAX_SCRIPT_STEPS} steps at {pos}");
        }
        out.extend(std::iter::repeat(step).take(n));
    }

    if count.is_some() {
        anyhow::bail!("script ends with a dangling repeat count");
    }
    Ok(out)
}
