//! Scroll-driven interpolation for parallax-style effects.
//!
//! Pure functions: given a section's geometry and the page scroll offset,
//! work out how far through the section the reader is, or what value an
//! animated property should have at this point.

/// Vertical geometry of one section of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    /// Offset of the section's top edge from the top of the page.
    pub offset_top: f64,
    /// Scrollable span of the section: its height minus one viewport.
    pub offset_height: f64,
}

/// Capture a section's scroll geometry.
pub fn set_layout(offset_top: f64, element_height: f64, viewport_height: f64) -> SectionLayout {
    SectionLayout {
        offset_top,
        offset_height: element_height - viewport_height,
    }
}

/// Where an animated value starts and ends, as fractions of the element
/// height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOptions {
    pub start_point: f64,
    pub end_point: f64,
    pub start_value: f64,
    pub end_value: f64,
}

impl MotionOptions {
    pub fn new(start_point: f64, end_point: f64, start_value: f64, end_value: f64) -> Self {
        Self {
            start_point,
            end_point,
            start_value,
            end_value,
        }
    }
}

/// Round to four decimal places, half away from zero.
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Piecewise-linear value of a property at `scroll`.
///
/// Before `start_point * element_height` this is `start_value`, at or past
/// `end_point * element_height` it is `end_value`, and in between the
/// progress fraction is rounded to four decimals before interpolating.
pub fn calc_value(element_height: f64, options: &MotionOptions, scroll: f64) -> f64 {
    let part_start = element_height * options.start_point;
    let part_end = element_height * options.end_point;

    if scroll <= part_start {
        return options.start_value;
    }
    if scroll >= part_end {
        return options.end_value;
    }

    let part_scroll = (scroll - part_start).max(0.0);
    let part_ratio = (part_scroll / (part_end - part_start)).min(1.0);
    round4(part_ratio) * (options.end_value - options.start_value) + options.start_value
}

/// Progress through a section in `[0, ∞)`, rounded to four decimals.
///
/// Scrolling above the section yields `0`, never a negative value.  A
/// section with no scrollable span (shorter than the viewport) reports `0`
/// until it is reached and `1` once it has been.
pub fn ratio(layout: &SectionLayout, scroll: f64) -> f64 {
    let current = (scroll - layout.offset_top).max(0.0);
    if layout.offset_height <= 0.0 {
        return if current > 0.0 { 1.0 } else { 0.0 };
    }
    round4(current / layout.offset_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_range() -> MotionOptions {
        MotionOptions::new(0.0, 1.0, 0.0, 100.0)
    }

    #[test]
    fn calc_value_endpoints_and_midpoint() {
        let h = 800.0;
        assert_eq!(calc_value(h, &full_range(), 0.0), 0.0);
        assert_eq!(calc_value(h, &full_range(), h), 100.0);
        assert_eq!(calc_value(h, &full_range(), h / 2.0), 50.0);
    }

    #[test]
    fn calc_value_outside_zone_clamps() {
        let opts = MotionOptions::new(0.25, 0.75, 10.0, 20.0);
        assert_eq!(calc_value(400.0, &opts, 50.0), 10.0);
        assert_eq!(calc_value(400.0, &opts, 100.0), 10.0);
        assert_eq!(calc_value(400.0, &opts, 300.0), 20.0);
        assert_eq!(calc_value(400.0, &opts, 5000.0), 20.0);
        // Halfway through the 100..300 zone.
        assert_eq!(calc_value(400.0, &opts, 200.0), 15.0);
    }

    #[test]
    fn calc_value_rounds_progress_to_four_places() {
        // 1/3 of the way → 0.3333, not 0.33333…
        let v = calc_value(3.0, &full_range(), 1.0);
        assert!((v - 33.33).abs() < 1e-9, "got {v}");
    }

    #[test]
    fn calc_value_supports_descending_values() {
        let opts = MotionOptions::new(0.0, 1.0, 1.0, 0.0);
        assert_eq!(calc_value(100.0, &opts, 25.0), 0.75);
    }

    #[test]
    fn ratio_is_never_negative() {
        let layout = set_layout(500.0, 1500.0, 500.0);
        assert_eq!(ratio(&layout, 0.0), 0.0);
        assert_eq!(ratio(&layout, 499.0), 0.0);
    }

    #[test]
    fn ratio_tracks_progress() {
        let layout = set_layout(500.0, 1500.0, 500.0);
        assert_eq!(layout.offset_height, 1000.0);
        assert_eq!(ratio(&layout, 750.0), 0.25);
        assert_eq!(ratio(&layout, 1500.0), 1.0);
        assert_eq!(ratio(&layout, 1234.567), 0.7346);
    }

    #[test]
    fn ratio_handles_sections_shorter_than_viewport() {
        let layout = set_layout(100.0, 300.0, 400.0);
        assert_eq!(ratio(&layout, 50.0), 0.0);
        assert_eq!(ratio(&layout, 150.0), 1.0);
    }

    #[test]
    fn round4_keeps_four_places() {
        assert_eq!(round4(0.12346), 0.1235);
        assert_eq!(round4(-0.5), -0.5);
        assert_eq!(round4(2.0 / 3.0), 0.6667);
    }
}
