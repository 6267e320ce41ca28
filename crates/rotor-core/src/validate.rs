use crate::error::{Result, RotorError};
use crate::profile::profile::RotationProfile;

pub fn validate_profile(p: &RotationProfile) -> Result<()> {
    if p.frame_count < 1 {
        return Err(RotorError::Validation(format!(
            "frame_count must be >= 1 (got {})",
            p.frame_count
        )));
    }
    if p.subdivision < 1 {
        return Err(RotorError::Validation(format!(
            "subdivision must be >= 1 (got {})",
            p.subdivision
        )));
    }
    if p.max_speed < 0 {
        return Err(RotorError::Validation(format!(
            "max_speed must be >= 0 (got {})",
            p.max_speed
        )));
    }
    // Zero rates would leave a turning body unable to stop.
    if p.accel < 1 {
        return Err(RotorError::Validation(format!("accel must be >= 1 (got {})", p.accel)));
    }
    if p.accel_stop < 1 {
        return Err(RotorError::Validation(format!(
            "accel_stop must be >= 1 (got {})",
            p.accel_stop
        )));
    }

    // Position + speed must stay representable before wrapping.
    let range = p.frame_count.checked_mul(p.subdivision).ok_or_else(|| {
        RotorError::Validation(format!(
            "frame_count * subdivision overflows ({} * {})",
            p.frame_count, p.subdivision
        ))
    })?;
    if range.checked_add(p.max_speed).is_none() {
        return Err(RotorError::Validation(format!(
            "max_speed {} too large for a {}-unit turn",
            p.max_speed, range
        )));
    }

    Ok(())
}
