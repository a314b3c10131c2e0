//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.
//! Dimension math is done in integers with truncating division: the crop
//! never rounds up, so it always fits inside the source. Sub-pixel
//! centering is not attempted.

use super::backend::Dimensions;
use super::params::{AspectRatio, CropFrame, ScaleFactor};

/// Compute the largest centered rectangle inside `source` that matches `ratio`.
///
/// Aspect ratios are compared by cross-multiplication (in `u64`, so no `u32`
/// input can overflow):
///
/// - source relatively **wider** than the target → height binds, the full
///   source height is kept and the width is derived from it;
/// - source relatively **taller or equal** → width binds, the full source
///   width is kept and the height is derived from it.
///
/// Offsets split the leftover evenly, truncating, so odd differences leave
/// the extra pixel on the right/bottom.
///
/// # Examples
/// ```
/// # use reframe::imaging::{AspectRatio, Dimensions, compute_crop_frame};
/// // 4000x3000 to 1:1 → 3000x3000, shifted 500px in from the left
/// let frame = compute_crop_frame(
///     AspectRatio::new(1, 1),
///     Dimensions { width: 4000, height: 3000 },
/// );
/// assert_eq!((frame.width, frame.height), (3000, 3000));
/// assert_eq!((frame.x_offset, frame.y_offset), (500, 0));
/// ```
pub fn compute_crop_frame(ratio: AspectRatio, source: Dimensions) -> CropFrame {
    let (src_w, src_h) = (u64::from(source.width), u64::from(source.height));
    let (ratio_w, ratio_h) = (u64::from(ratio.width), u64::from(ratio.height));

    let (crop_w, crop_h) = if src_w * ratio_h > src_h * ratio_w {
        // Wider than target: height is the binding dimension
        (src_h * ratio_w / ratio_h, src_h)
    } else {
        // Taller than or equal to target: width is the binding dimension
        (src_w, src_w * ratio_h / ratio_w)
    };

    // Extreme ratios can truncate the derived side to zero
    let crop_w = crop_w.max(1);
    let crop_h = crop_h.max(1);

    // Both sides are bounded by the source sides, so they fit back into u32
    CropFrame {
        width: crop_w as u32,
        height: crop_h as u32,
        x_offset: ((src_w - crop_w) / 2) as u32,
        y_offset: ((src_h - crop_h) / 2) as u32,
    }
}

/// Resize factor that brings `crop_height` to `target_height`.
///
/// `crop_height` comes from [`compute_crop_frame`] and is never zero.
pub fn compute_scale_factor(target_height: u32, crop_height: u32) -> ScaleFactor {
    ScaleFactor(f64::from(target_height) / f64::from(crop_height))
}

/// Output size after scaling `size` isotropically by `scale`.
///
/// Each side is rounded to the nearest pixel with a floor of 1. Applied to a
/// crop whose height produced `scale`, the height lands exactly on the
/// target height.
pub fn scaled_dimensions(size: Dimensions, scale: ScaleFactor) -> Dimensions {
    let scale_side = |side: u32| ((f64::from(side) * scale.value()).round() as u32).max(1);
    Dimensions {
        width: scale_side(size.width),
        height: scale_side(size.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    // =========================================================================
    // compute_crop_frame tests
    // =========================================================================

    #[test]
    fn matching_ratio_keeps_full_image() {
        // 4000x3000 is already 4:3
        let frame = compute_crop_frame(AspectRatio::new(4, 3), dims(4000, 3000));
        assert_eq!(
            frame,
            CropFrame {
                width: 4000,
                height: 3000,
                x_offset: 0,
                y_offset: 0,
            }
        );
    }

    #[test]
    fn landscape_to_square_is_height_bound() {
        let frame = compute_crop_frame(AspectRatio::new(1, 1), dims(4000, 3000));
        assert_eq!(
            frame,
            CropFrame {
                width: 3000,
                height: 3000,
                x_offset: 500,
                y_offset: 0,
            }
        );
    }

    #[test]
    fn portrait_to_landscape_is_width_bound() {
        // 3000x4000 → 16:9: width 3000, height 3000*9/16 = 1687 (truncated)
        let frame = compute_crop_frame(AspectRatio::new(16, 9), dims(3000, 4000));
        assert_eq!(frame.width, 3000);
        assert_eq!(frame.height, 1687);
        assert_eq!(frame.x_offset, 0);
        assert_eq!(frame.y_offset, (4000 - 1687) / 2);
    }

    #[test]
    fn crop_width_truncates_instead_of_rounding() {
        // 1000x1000 → 2:3 is 666.67 wide exactly
        let frame = compute_crop_frame(AspectRatio::new(2, 3), dims(1000, 1000));
        assert_eq!(frame.width, 666);
        assert_eq!(frame.height, 1000);
    }

    #[test]
    fn odd_leftover_truncates_offset() {
        // 101x100 → 1:1: leftover 1px, offset 0
        let frame = compute_crop_frame(AspectRatio::new(1, 1), dims(101, 100));
        assert_eq!(frame.width, 100);
        assert_eq!(frame.x_offset, 0);

        // 103x100 → leftover 3px, offset 1
        let frame = compute_crop_frame(AspectRatio::new(1, 1), dims(103, 100));
        assert_eq!(frame.x_offset, 1);
    }

    #[test]
    fn unreduced_ratio_matches_reduced() {
        let a = compute_crop_frame(AspectRatio::new(16, 16), dims(1920, 1080));
        let b = compute_crop_frame(AspectRatio::new(1, 1), dims(1920, 1080));
        assert_eq!(a, b);
    }

    #[test]
    fn extreme_ratio_never_yields_empty_frame() {
        // 1x1000 at 3:1 truncates the derived height to 0
        let frame = compute_crop_frame(AspectRatio::new(3, 1), dims(1, 1000));
        assert_eq!(frame.width, 1);
        assert_eq!(frame.height, 1);

        let frame = compute_crop_frame(AspectRatio::new(1, 3), dims(1000, 1));
        assert_eq!(frame.height, 1);
        assert_eq!(frame.width, 1);
        assert_eq!(frame.x_offset, 499);
    }

    #[test]
    fn huge_dimensions_do_not_overflow() {
        let frame = compute_crop_frame(AspectRatio::new(u32::MAX, 1), dims(u32::MAX, u32::MAX));
        assert_eq!(frame.width, u32::MAX);
        assert_eq!(frame.height, 1);
    }

    // =========================================================================
    // compute_scale_factor / scaled_dimensions tests
    // =========================================================================

    #[test]
    fn scale_factor_for_full_frame() {
        let scale = compute_scale_factor(1280, 3000);
        assert!((scale.value() - 0.426_666).abs() < 1e-5);
    }

    #[test]
    fn scale_factor_for_square_crop() {
        let scale = compute_scale_factor(1000, 3000);
        assert!((scale.value() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn scale_factor_can_upscale() {
        assert_eq!(compute_scale_factor(2000, 1000), ScaleFactor(2.0));
    }

    #[test]
    fn scaled_dimensions_hit_target_height() {
        let frame = compute_crop_frame(AspectRatio::new(4, 3), dims(4000, 3000));
        let scale = compute_scale_factor(1280, frame.height);
        assert_eq!(scaled_dimensions(frame.dimensions(), scale), dims(1707, 1280));
    }

    #[test]
    fn scaled_dimensions_never_zero() {
        let scale = compute_scale_factor(10, 5000);
        assert_eq!(scaled_dimensions(dims(1, 5000), scale), dims(1, 10));
    }

    // =========================================================================
    // Properties over all positive inputs
    // =========================================================================

    proptest! {
        #[test]
        fn frame_is_contained_and_matches_ratio(
            w in 1u32..20_000,
            h in 1u32..20_000,
            rw in 1u32..64,
            rh in 1u32..64,
        ) {
            let frame = compute_crop_frame(AspectRatio::new(rw, rh), dims(w, h));

            prop_assert!(frame.width >= 1 && frame.height >= 1);
            prop_assert!(frame.x_offset + frame.width <= w);
            prop_assert!(frame.y_offset + frame.height <= h);

            // Truncation loses less than one ratio step
            let lhs = i128::from(frame.width) * i128::from(rh);
            let rhs = i128::from(frame.height) * i128::from(rw);
            prop_assert!((lhs - rhs).abs() < i128::from(rw.max(rh)));
        }

        #[test]
        fn frame_is_deterministic(
            w in 1u32..20_000,
            h in 1u32..20_000,
            rw in 1u32..64,
            rh in 1u32..64,
        ) {
            let ratio = AspectRatio::new(rw, rh);
            prop_assert_eq!(compute_crop_frame(ratio, dims(w, h)), compute_crop_frame(ratio, dims(w, h)));
        }

        #[test]
        fn transposed_inputs_give_transposed_frame(
            w in 1u32..20_000,
            h in 1u32..20_000,
            rw in 1u32..64,
            rh in 1u32..64,
        ) {
            let frame = compute_crop_frame(AspectRatio::new(rw, rh), dims(w, h));
            let flipped = compute_crop_frame(AspectRatio::new(rh, rw), dims(h, w));
            prop_assert_eq!((frame.width, frame.height), (flipped.height, flipped.width));
        }

        #[test]
        fn matching_source_is_untouched(
            k in 1u32..500,
            rw in 1u32..40,
            rh in 1u32..40,
        ) {
            let source = dims(k * rw, k * rh);
            let frame = compute_crop_frame(AspectRatio::new(rw, rh), source);
            prop_assert_eq!(frame, CropFrame {
                width: source.width,
                height: source.height,
                x_offset: 0,
                y_offset: 0,
            });
        }

        #[test]
        fn scaled_height_is_target_height(
            crop_h in 1u32..20_000,
            target in 1u32..8_000,
        ) {
            let scale = compute_scale_factor(target, crop_h);
            prop_assert_eq!(scaled_dimensions(dims(crop_h, crop_h), scale).height, target);
        }
    }
}
