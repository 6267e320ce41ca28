use std::io::Cursor;

use rotor_core::profile::defaults::default_profile;
use rotor_core::profile::format::{profile_id_16, profile_id_hex};
use rotor_core::state::snapshot::{self, Snapshot, SNAPSHOT_LEN};
use rotor_core::{Maneuver, RotationController, RotationProfile, RotorError};

#[test]
fn record_layout_is_two_le_words() {
    let p = default_profile();
    let c = RotationController::with_state(&p, 50, -6);
    let mut buf = Vec::new();
    c.write_to(&mut buf).unwrap();
    assert_eq!(buf, vec![50, 0, 0, 0, 0xFA, 0xFF, 0xFF, 0xFF]);
    assert_eq!(buf.as_slice(), c.to_record().as_slice());
}

#[test]
fn write_then_read_reproduces_state() {
    let p = default_profile();
    let mut c = RotationController::facing(&p, 200.0);
    for m in [Maneuver::RotateLeft, Maneuver::RotateLeft, Maneuver::RotateLeft] {
        c.update(&p, m);
    }

    let mut buf = Vec::new();
    c.write_to(&mut buf).unwrap();

    let mut back = RotationController::new(&p);
    back.read_from(&p, &mut Cursor::new(&buf)).unwrap();
    assert_eq!(back.position_units(), c.position_units());
    assert_eq!(back.speed_units(), c.speed_units());
    assert_eq!(back.last_maneuver(), Maneuver::None);
}

#[test]
fn shrunk_frame_count_resets_position_but_keeps_speed() {
    let p16 = default_profile();
    let p8 = RotationProfile::new(8, 8, 2, 4).unwrap();

    let c = RotationController::with_state(&p16, 50, -6);
    assert_eq!(c.frame_index(&p16), 12);
    let mut buf = Vec::new();
    c.write_to(&mut buf).unwrap();

    let mut back = RotationController::new(&p8);
    back.read_from(&p8, &mut Cursor::new(&buf)).unwrap();
    assert_eq!(back.position_units(), 2);
    assert_eq!(back.frame_index(&p8), 0);
    assert_eq!(back.speed_units(), -6);
}

#[test]
fn shrunk_frame_count_keeps_position_still_in_range() {
    let p16 = default_profile();
    let p8 = RotationProfile::new(8, 8, 2, 4).unwrap();

    let c = RotationController::with_state(&p16, 10, 3);
    let mut back = RotationController::new(&p8);
    back.load_record(&p8, &c.to_record());
    assert_eq!(back.position_units(), 10);
    assert_eq!(back.speed_units(), 3);
}

#[test]
fn negative_stored_position_resets() {
    let p = default_profile();
    let mut rec = [0u8; 8];
    rec[0..4].copy_from_slice(&u32::MAX.to_le_bytes());
    rec[4..8].copy_from_slice(&2u32.to_le_bytes());

    let mut c = RotationController::new(&p);
    c.read_from(&p, &mut Cursor::new(&rec)).unwrap();
    assert_eq!(c.position_units(), 2);
    assert_eq!(c.speed_units(), 2);
}

#[test]
fn short_stream_is_io_error() {
    let p = default_profile();
    let mut c = RotationController::new(&p);
    let err = c.read_from(&p, &mut Cursor::new(&[1u8, 2, 3, 4, 5])).unwrap_err();
    assert!(matches!(err, RotorError::Io(_)), "{err}");
}

#[test]
fn snapshot_roundtrip_and_restore() {
    let p = RotationProfile::with_subdivision(40, 12, 3, 6, 8).unwrap();
    let c = RotationController::with_state(&p, 301, -9);

    let bytes = snapshot::encode(&Snapshot::capture(&p, &c));
    assert_eq!(bytes.len(), SNAPSHOT_LEN);

    let s = snapshot::decode(&bytes).unwrap();
    assert_eq!(s.profile, p);
    assert_eq!(s.restore(&s.profile), c);

    // Restoring against a smaller profile goes through the frame check.
    let small = RotationProfile::with_subdivision(20, 12, 3, 6, 8).unwrap();
    let r = s.restore(&small);
    assert_eq!(r.position_units(), 4);
    assert_eq!(r.speed_units(), -9);
}

#[test]
fn snapshot_rejects_corruption() {
    let p = default_profile();
    let c = RotationController::with_state(&p, 33, 4);
    let bytes = snapshot::encode(&Snapshot::capture(&p, &c));

    let mut flipped = bytes.clone();
    flipped[8] ^= 0x01;
    let err = snapshot::decode(&flipped).unwrap_err();
    assert!(err.to_string().contains("crc32 mismatch"), "{err}");

    let mut magic = bytes.clone();
    magic[0] = b'X';
    assert!(snapshot::decode(&magic).unwrap_err().to_string().contains("bad magic"));

    let err = snapshot::decode(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(matches!(err, RotorError::StateFormat(_)), "{err}");
}

#[test]
fn profile_id_tracks_every_field() {
    let base = default_profile();
    assert_eq!(profile_id_16(&base), profile_id_16(&default_profile()));
    assert_eq!(profile_id_hex(&base).len(), 32);

    let variants = [
        RotationProfile::new(17, 8, 2, 4).unwrap(),
        RotationProfile::new(16, 9, 2, 4).unwrap(),
        RotationProfile::new(16, 8, 3, 4).unwrap(),
        RotationProfile::new(16, 8, 2, 5).unwrap(),
        RotationProfile::with_subdivision(16, 8, 2, 4, 8).unwrap(),
    ];
    for v in variants.iter() {
        assert_ne!(profile_id_16(v), profile_id_16(&base), "{v:?}");
    }
}
