//! Stateless arithmetic shared by the viewport controller and renderers.
//!
//! Horizontal positions are fractions of the current time range (the unit
//! interval), vertical positions are CSS pixels into the full content.

/// Clamp `value` into `[min, max]`.
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    min.max(max.min(value))
}

/// Where `position` sits inside `[origin, origin + extent]`, as a fraction.
/// Returns `None` for an extent that is not laid out yet.
pub fn fraction_of(position: f64, origin: f64, extent: f64) -> Option<f64> {
    if extent > 0.0 && extent.is_finite() {
        Some((position - origin) / extent)
    } else {
        None
    }
}

/// Map a unit-interval value to a pixel offset inside a container showing
/// the window `[left, right]`.
pub fn unit_to_pixels(unit: f64, left: f64, right: f64, container_width: f64) -> f64 {
    let length = right - left;
    if length <= 0.0 {
        return 0.0;
    }
    (unit - left) / length * container_width
}

/// Inverse of [`unit_to_pixels`].
pub fn pixels_to_unit(pixels: f64, left: f64, right: f64, container_width: f64) -> f64 {
    if container_width <= 0.0 {
        return left;
    }
    left + (right - left) * pixels / container_width
}

/// Signed amount by which a window of `length` grows (positive) or shrinks
/// (negative) for a wheel delta already expressed in pixels.
///
/// The divisor is kept positive so a very large zoom-in delta keeps zooming
/// in instead of flipping sign.
pub fn zoom_scale(length: f64, delta_pixels: f64, sensitivity: f64) -> f64 {
    let divisor = (1.0 + delta_pixels * sensitivity).max(f64::EPSILON);
    length - length / divisor
}

/// Slide `[left, right]` back inside `[0, 1]` without changing its width.
///
/// The left edge is checked first, then the right edge, so a window wider
/// than the unit interval ends up anchored to the right.
pub fn shift_into_unit_interval(left: f64, right: f64) -> (f64, f64) {
    let length = right - left;
    let (mut left, mut right) = (left, right);
    if left < 0.0 {
        left = 0.0;
        right = length;
    }
    if right > 1.0 {
        left = 1.0 - length;
        right = 1.0;
    }
    (left, right)
}

/// Constrain a vertical window of `container_height` starting at `top` to the
/// content, returning `(top, bottom)`.
///
/// The bottom edge is applied before the top edge: on content shorter than
/// the container the window ends up anchored to the top.
pub fn clamp_vertical(top: f64, container_height: f64, max_height: f64) -> (f64, f64) {
    let mut top = top;
    let mut bottom = top + container_height;

    if bottom > max_height {
        top = max_height - container_height;
        bottom = max_height;
    }

    if top < 0.0 {
        top = 0.0;
        bottom = container_height;
    }

    (top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_both_sides() {
        assert_eq!(clamp(0.0, 1.0, -0.5), 0.0);
        assert_eq!(clamp(0.0, 1.0, 1.5), 1.0);
        assert_eq!(clamp(0.0, 1.0, 0.25), 0.25);
    }

    #[test]
    fn fraction_rejects_unmeasured_extent() {
        assert_eq!(fraction_of(10.0, 0.0, 0.0), None);
        assert_eq!(fraction_of(10.0, 0.0, -5.0), None);
        assert_eq!(fraction_of(60.0, 10.0, 100.0), Some(0.5));
    }

    #[test]
    fn pixel_conversions_are_inverse() {
        let px = unit_to_pixels(0.3, 0.2, 0.4, 1000.0);
        assert!((px - 500.0).abs() < 1e-9);
        let unit = pixels_to_unit(px, 0.2, 0.4, 1000.0);
        assert!((unit - 0.3).abs() < 1e-12);
    }

    #[test]
    fn zoom_scale_sign_follows_scroll_direction() {
        assert!(zoom_scale(1.0, 100.0, 0.001) > 0.0);
        assert!(zoom_scale(1.0, -100.0, 0.001) < 0.0);
        assert_eq!(zoom_scale(1.0, 0.0, 0.001), 0.0);
    }

    #[test]
    fn shift_preserves_width() {
        let (left, right) = shift_into_unit_interval(-0.1, 0.2);
        assert_eq!(left, 0.0);
        assert!((right - 0.3).abs() < 1e-12);
        let (left, right) = shift_into_unit_interval(0.9, 1.1);
        assert!((right - 1.0).abs() < f64::EPSILON);
        assert!((left - 0.8).abs() < 1e-12);
    }

    #[test]
    fn vertical_clamp_prefers_top_on_short_content() {
        assert_eq!(clamp_vertical(50.0, 500.0, 200.0), (0.0, 500.0));
        assert_eq!(clamp_vertical(1800.0, 500.0, 2000.0), (1500.0, 2000.0));
        assert_eq!(clamp_vertical(-20.0, 500.0, 2000.0), (0.0, 500.0));
    }
}
