// crates/rotor-core/src/dynamics/diagnostics.rs

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{error, warn};

use crate::dynamics::controller::RotationController;
use crate::dynamics::maneuver::Maneuver;
use crate::dynamics::status::RotationStatus;
use crate::error::{Result, RotorError};
use crate::profile::profile::RotationProfile;

/// Ticks per leg of the symmetry run.
pub const TURN_COUNT: usize = 10;

pub const ASYMMETRY_MESSAGE: &str = "Asymmetric rotation detected.";

#[derive(Clone, Debug, Default)]
pub struct DiagnosticReport {
    pub statuses: Vec<RotationStatus>,
    pub failures: Vec<String>,
}

impl DiagnosticReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Turn one way, halt, turn back, and check the body returned to where it
/// started; then the same with the directions swapped.
///
/// Rates are degrees per tick, as a body class describes them. Never panics:
/// a bad profile comes back as `Validation`, and anything that blows up inside
/// the run comes back as `Diagnostic`.
pub fn run_diagnostics(
    frame_count: i32,
    max_degrees_per_tick: f64,
    accel_degrees: f64,
    accel_stop_degrees: f64,
) -> Result<DiagnosticReport> {
    let p = RotationProfile::from_degrees(
        frame_count,
        max_degrees_per_tick,
        accel_degrees,
        accel_stop_degrees,
    )?;
    run_profile_diagnostics(&p)
}

/// Same run against an already-built profile.
pub fn run_profile_diagnostics(p: &RotationProfile) -> Result<DiagnosticReport> {
    guarded(|| symmetry_run(p))
}

/// Turn a panic inside `run` into an error value.
fn guarded<F: FnOnce() -> DiagnosticReport>(run: F) -> Result<DiagnosticReport> {
    catch_unwind(AssertUnwindSafe(run)).map_err(|_| {
        error!("rotation diagnostics crashed");
        RotorError::Diagnostic("crash in rotation diagnostics".into())
    })
}

fn symmetry_run(p: &RotationProfile) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();
    let mut c = RotationController::new(p);
    let start = c.position_units();

    for first in [Maneuver::RotateRight, Maneuver::RotateLeft] {
        c.init(p, 0.0);
        report.statuses.push(c.status(p));

        leg(p, &mut c, first, &mut report);
        c.halt();
        report.statuses.push(c.status(p));
        leg(p, &mut c, first.mirrored(), &mut report);

        if c.position_units() != start {
            warn!(
                first = %first,
                start,
                end = c.position_units(),
                "asymmetric rotation"
            );
            report.failures.push(ASYMMETRY_MESSAGE.to_string());
        }
    }

    report
}

fn leg(p: &RotationProfile, c: &mut RotationController, m: Maneuver, report: &mut DiagnosticReport) {
    for _ in 0..TURN_COUNT {
        c.update(p, m);
        report.statuses.push(c.status(p));
    }
}
