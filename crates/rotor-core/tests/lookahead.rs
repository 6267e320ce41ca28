use rotor_core::dynamics::autopilot::face;
use rotor_core::fixed::math::clock_diff;
use rotor_core::profile::defaults::default_profile;
use rotor_core::{Maneuver, RotationController, RotationProfile};

fn tick_bound(p: &RotationProfile) -> u64 {
    let ramp = (p.max_speed() + p.accel() - 1) / p.accel();
    let stop = (p.max_speed() + p.accel_stop() - 1) / p.accel_stop();
    (p.frame_count() / 2 + ramp + stop) as u64
}

#[test]
fn facing_target_already_returns_none() {
    let p = default_profile();
    let c = RotationController::facing(&p, 90.0);
    assert_eq!(c.maneuver_to_face(&p, 90.0), Maneuver::None);
    // Same frame, different literal angle.
    assert_eq!(c.maneuver_to_face(&p, 95.0), Maneuver::None);
    assert_eq!(c.maneuver_to_face(&p, 90.0 - 360.0), Maneuver::None);
}

#[test]
fn far_targets_turn_the_short_way() {
    let p = default_profile();
    let c = RotationController::new(&p);
    assert_eq!(c.maneuver_to_face(&p, 90.0), Maneuver::RotateRight);
    assert_eq!(c.maneuver_to_face(&p, 270.0), Maneuver::RotateLeft);
    assert_eq!(c.maneuver_to_face(&p, -90.0), Maneuver::RotateLeft);
    // Half a turn away counts as right.
    assert_eq!(c.maneuver_to_face(&p, 180.0), Maneuver::RotateRight);
}

#[test]
fn near_target_turns_when_it_lands() {
    let p = default_profile();
    let c = RotationController::new(&p);
    assert_eq!(c.maneuver_to_face(&p, 22.5), Maneuver::RotateRight);
    assert_eq!(c.maneuver_to_face(&p, 337.5), Maneuver::RotateLeft);
}

#[test]
fn near_target_coasts_instead_of_overshooting() {
    let p = default_profile();
    // Drifting right at half speed: comes to rest on frame 0, target is frame 1.
    // Another push would rest on frame 2, so coast.
    let c = RotationController::with_state(&p, 0, 4);
    assert_eq!(c.coasting_frame_index(&p), 0);
    assert_eq!(c.maneuver_to_face(&p, 22.5), Maneuver::None);

    let c = RotationController::with_state(&p, 0, -4);
    assert_eq!(c.maneuver_to_face(&p, 337.5), Maneuver::None);
}

#[test]
fn lookahead_does_not_mutate() {
    let p = default_profile();
    let c = RotationController::with_state(&p, 17, 6);
    let before = c;
    let _ = c.maneuver_to_face(&p, 300.0);
    assert_eq!(c, before);
}

#[test]
fn converges_within_bound_and_stays() {
    let profiles = [
        default_profile(),
        RotationProfile::new(40, 12, 3, 6).unwrap(),
        RotationProfile::new(8, 4, 1, 1).unwrap(),
        RotationProfile::new(64, 30, 4, 8).unwrap(),
        RotationProfile::new(120, 40, 4, 12).unwrap(),
        RotationProfile::new(32, 4, 4, 4).unwrap(),
    ];

    for p in profiles.iter() {
        let bound = tick_bound(p);
        for start in (0..360).step_by(15) {
            for target in (-360..720).step_by(7) {
                let target = target as f64;
                let mut c = RotationController::facing(p, start as f64);
                let run = face(p, &mut c, target, 200);

                let settled = run
                    .settled
                    .unwrap_or_else(|| panic!("{p:?} start={start} target={target} did not settle"));
                assert!(
                    settled <= bound,
                    "{p:?} start={start} target={target}: {settled} ticks > {bound}"
                );
                assert_eq!(c.frame_index(p), p.frame_index_from_angle(target));

                for _ in 0..50 {
                    let m = c.maneuver_to_face(p, target);
                    assert_eq!(m, Maneuver::None);
                    c.update(p, m);
                }
                assert_eq!(c.frame_index(p), run.desired_frame);
            }
        }
    }
}

#[test]
fn crosses_target_frame_at_most_once() {
    let profiles = [
        default_profile(),
        RotationProfile::new(8, 4, 1, 1).unwrap(),
        RotationProfile::new(32, 4, 4, 4).unwrap(),
    ];

    for p in profiles.iter() {
        for start in (0..360).step_by(15) {
            for target in (-360..720).step_by(7) {
                let target = target as f64;
                let mut c = RotationController::facing(p, start as f64);
                let run = face(p, &mut c, target, 200);

                let mut crossings = 0;
                let mut prev_side = 0;
                for s in run.statuses.iter() {
                    let side = clock_diff(run.desired_frame, s.frame, p.frame_count()).signum();
                    if side != 0 {
                        if prev_side != 0 && side != prev_side {
                            crossings += 1;
                        }
                        prev_side = side;
                    }
                }
                assert!(crossings <= 1, "{p:?} start={start} target={target}: {crossings}");
            }
        }
    }
}

#[test]
fn stalling_profile_reports_unsettled() {
    // Equal small rates: a single push cannot leave the frame, and the coast
    // snaps back, so the body chatters one frame short.
    let p = RotationProfile::new(16, 8, 2, 2).unwrap();
    let mut c = RotationController::new(&p);
    let run = face(&p, &mut c, -220.0, 100);
    assert_eq!(run.settled, None);
    assert_eq!(run.statuses.len(), 100);
}

#[test]
fn already_settled_takes_no_ticks() {
    let p = default_profile();
    let mut c = RotationController::facing(&p, 180.0);
    let run = face(&p, &mut c, 181.0, 100);
    assert_eq!(run.settled, Some(0));
    assert!(run.statuses.is_empty());
}

#[test]
fn runaway_loaded_speed_is_projected_without_stepping() {
    let p = RotationProfile::new(16, 8, 2, 1).unwrap();
    let mut record = [0u8; 8];
    record[0..4].copy_from_slice(&2u32.to_le_bytes());
    record[4..8].copy_from_slice(&(i32::MAX as u32).to_le_bytes());

    let mut c = RotationController::new(&p);
    c.load_record(&p, &record);
    assert_eq!(c.speed_units(), i32::MAX);

    let started = std::time::Instant::now();
    assert_eq!(c.final_rotation_frame(&p), 3);
    assert_eq!(c.coasting_frame_index(&p), 0);
    assert_eq!(c.maneuver_to_face(&p, 90.0), Maneuver::RotateRight);
    assert!(started.elapsed() < std::time::Duration::from_secs(1));
}
