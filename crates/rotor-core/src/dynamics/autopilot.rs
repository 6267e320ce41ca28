// crates/rotor-core/src/dynamics/autopilot.rs

use tracing::debug;

use crate::dynamics::controller::RotationController;
use crate::dynamics::maneuver::Maneuver;
use crate::dynamics::status::RotationStatus;
use crate::profile::profile::RotationProfile;

/// Result of driving a controller toward a heading.
#[derive(Clone, Debug)]
pub struct FaceRun {
    /// Status after every applied tick.
    pub statuses: Vec<RotationStatus>,
    pub desired_frame: i32,
    /// Ticks applied before the body came to rest on the desired frame.
    /// `None` when `max_ticks` ran out first.
    pub settled: Option<u64>,
}

/// Whether the body is at rest on `desired_frame`. Recommend-then-update
/// leaves such a state untouched.
pub fn is_settled(c: &RotationController, p: &RotationProfile, desired_frame: i32) -> bool {
    c.speed_units() == 0 && c.coasting_frame_index(p) == desired_frame
}

/// Apply the recommended maneuver each tick until settled or `max_ticks`.
pub fn face(
    p: &RotationProfile,
    c: &mut RotationController,
    angle: f64,
    max_ticks: u64,
) -> FaceRun {
    let desired_frame = p.frame_index_from_angle(angle);
    let mut run = FaceRun {
        statuses: Vec::new(),
        desired_frame,
        settled: None,
    };

    if is_settled(c, p, desired_frame) {
        run.settled = Some(0);
        return run;
    }

    for tick in 1..=max_ticks {
        let m = c.maneuver_to_face(p, angle);
        c.update(p, m);
        run.statuses.push(c.status(p));

        if is_settled(c, p, desired_frame) {
            debug!(tick, frame = desired_frame, "settled on heading");
            run.settled = Some(tick);
            break;
        }
    }

    run
}

/// Apply a fixed maneuver sequence; one status per tick.
pub fn run_script(
    p: &RotationProfile,
    c: &mut RotationController,
    script: &[Maneuver],
) -> Vec<RotationStatus> {
    script
        .iter()
        .map(|&m| {
            c.update(p, m);
            c.status(p)
        })
        .collect()
}
