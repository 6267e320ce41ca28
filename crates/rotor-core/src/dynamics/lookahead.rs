// crates/rotor-core/src/dynamics/lookahead.rs

use crate::dynamics::controller::{advance, coast_to_rest, next_speed, RotationController};
use crate::dynamics::maneuver::Maneuver;
use crate::fixed::math::{clock_diff, clock_diff_degrees};
use crate::profile::profile::RotationProfile;

impl RotationController {
    /// Best single-tick maneuver toward `angle` (degrees, any range).
    ///
    /// Works on where the body would come to rest if it coasted, so a body
    /// already drifting onto the target is left alone. Near the target it
    /// simulates one tick of the candidate turn and only commits when that does
    /// not carry the resting frame past the target.
    pub fn maneuver_to_face(&self, p: &RotationProfile, angle: f64) -> Maneuver {
        let current = self.coasting_frame_index(p);
        let desired = p.frame_index_from_angle(angle);
        if current == desired {
            return Maneuver::None;
        }

        let frame_diff = clock_diff(desired, current, p.frame_count());
        let degree_diff = clock_diff_degrees(angle, p.angle_from_frame_index(current));
        let candidate = Maneuver::toward(frame_diff);

        // Far away: just turn.
        if frame_diff.abs() > p.max_frame_step_per_tick() {
            return candidate;
        }

        let (speed, _) = next_speed(p, self.speed_units, candidate);
        let position = advance(p, self.position_units, speed);
        let predicted = p.frame_index_from_units(coast_to_rest(p, position, speed));
        let predicted_diff = clock_diff_degrees(angle, p.angle_from_frame_index(predicted));

        if predicted == current || predicted_diff.abs() < degree_diff.abs() {
            candidate
        } else {
            Maneuver::None
        }
    }
}
