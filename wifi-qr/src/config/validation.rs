//! Setting value validation.

use super::defaults::{LOGO_SCALE, MARGIN_SCALE, MAX_SIZE, MIN_SIZE, QUIET_ZONE, SIZE};

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        SIZE => {
            let v: u32 = value.parse().map_err(|_| "must be an integer")?;
            if !(MIN_SIZE..=MAX_SIZE).contains(&v) {
                return Err(format!("must be between {MIN_SIZE} and {MAX_SIZE} pixels"));
            }
        }
        LOGO_SCALE => validate_float_range(value, 0.05, 0.30)?,
        MARGIN_SCALE => validate_float_range(value, 1.0, 3.0)?,
        QUIET_ZONE => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_float_range(value: &str, min: f64, max: f64) -> Result<(), String> {
    let v: f64 = value.parse().map_err(|_| "must be a float")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
