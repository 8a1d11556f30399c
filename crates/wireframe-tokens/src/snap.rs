/// Layout grid unit in pixels. Derived magnitudes are multiples of this.
pub const GRID_UNIT: f64 = 4.0;

/// Snap a pixel value to the nearest multiple of [`GRID_UNIT`].
///
/// Ties round away from zero (`f64::round`), so `18.0` snaps to `20` and
/// `10.0` to `12`. The result is a whole number of pixels kept as `f64`, so
/// it stays a multiple of four over the whole finite range.
pub fn snap4(px: f64) -> f64 {
    (px / GRID_UNIT).round() * GRID_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snaps_to_nearest_multiple() {
        assert_eq!(snap4(19.2), 20.0);
        assert_eq!(snap4(23.04), 24.0);
        assert_eq!(snap4(27.648), 28.0);
        assert_eq!(snap4(13.9), 12.0);
        assert_eq!(snap4(1.9), 0.0);
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(snap4(18.0), 20.0);
        assert_eq!(snap4(10.0), 12.0);
        assert_eq!(snap4(2.0), 4.0);
    }

    #[test]
    fn test_aligned_values_unchanged() {
        for k in 0..64u32 {
            let px = f64::from(k * 4);
            assert_eq!(snap4(px), px);
        }
    }

    #[test]
    fn test_large_values_stay_on_grid() {
        for px in [4.3e9, 5.184e9, 7.5e9, 1.0e15, 3.7e20] {
            let snapped = snap4(px);
            assert_eq!(snapped % GRID_UNIT, 0.0, "{px} -> {snapped}");
            assert_eq!(snapped.fract(), 0.0);
        }
    }
}
