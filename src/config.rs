use crate::constants::{TILT_RANGE_MAX_DEG, TILT_RANGE_MIN_DEG};
use folio_core::CardConfig;

/// Parses a `data-tilt-range` value in degrees.
///
/// Returns `None` for missing, unparsable or out-of-range values so the
/// caller falls back to the default swing.
pub fn parse_tilt_range(raw: Option<&str>) -> Option<f32> {
    let value: f32 = raw?.trim().parse().ok()?;
    (value.is_finite() && (TILT_RANGE_MIN_DEG..=TILT_RANGE_MAX_DEG).contains(&value))
        .then_some(value)
}

/// Card configuration for the page, with any attribute override applied.
pub fn card_config(tilt_range_attr: Option<&str>) -> CardConfig {
    let base = CardConfig::default();
    match parse_tilt_range(tilt_range_attr) {
        Some(range) => base.with_tilt_range(range),
        None => {
            if let Some(raw) = tilt_range_attr {
                log::warn!("ignoring tilt range '{}'; using default", raw);
            }
            base
        }
    }
}
