//! Wheel-event normalisation.
//!
//! Different input sources report wheel motion in different units: legacy
//! line-based events carry a `detail` count (positive = down), modern events
//! carry a `wheelDelta` in multiples of 120 (positive = up).  [`normalize`]
//! folds both into one signed number of "notches" where positive means
//! "towards the top".

/// `wheelDelta` reported for a single notch by modern sources.
pub const WHEEL_DELTA_PER_NOTCH: f64 = 120.0;

/// Raw delta fields of a single wheel event.  Either field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelSample {
    /// Legacy line count (`detail`), positive when scrolling down.
    pub legacy_detail: Option<f64>,
    /// Modern delta (`wheelDelta`), positive when scrolling up.
    pub wheel_delta: Option<f64>,
}

impl WheelSample {
    /// A modern sample worth `notches` clicks (positive = up).
    pub fn from_notches(notches: f64) -> Self {
        Self {
            legacy_detail: None,
            wheel_delta: Some(notches * WHEEL_DELTA_PER_NOTCH),
        }
    }
}

/// Present, non-zero and not NaN.  Zero and NaN fields are treated as absent.
fn truthy(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x != 0.0 && !x.is_nan())
}

/// Convert a wheel sample into signed notches (positive = scroll up).
///
/// Never fails; missing or malformed fields contribute zero.
pub fn normalize(sample: WheelSample) -> f64 {
    let notches = match truthy(sample.legacy_detail) {
        Some(detail) => match truthy(sample.wheel_delta) {
            Some(wheel) => {
                let sign = if detail > 0.0 { 1.0 } else { -1.0 };
                (wheel / detail / 40.0) * sign
            }
            None => -detail / 3.0,
        },
        None => sample.wheel_delta.unwrap_or(0.0) / WHEEL_DELTA_PER_NOTCH,
    };

    if notches.is_finite() {
        notches
    } else {
        0.0
    }
}
