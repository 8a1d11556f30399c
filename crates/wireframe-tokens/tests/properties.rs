//! Property tests for token derivation.

use proptest::prelude::*;
use wireframe_tokens::snap::snap4;
use wireframe_tokens::{derive_tokens, Configuration, GridSystem, TokenError, TokenSet};

fn grid_system() -> impl Strategy<Value = GridSystem> {
    prop_oneof![Just(GridSystem::EightPoint), Just(GridSystem::TwoX)]
}

/// Bases from sub-pixel to far beyond any screen, ratios shrinking or growing.
fn configuration() -> impl Strategy<Value = Configuration> {
    (grid_system(), 1e-3f64..1e12, 0.1f64..4.0).prop_map(|(grid_system, base, ratio)| {
        Configuration {
            grid_system,
            base_font_size: base,
            contrast_ratio: ratio,
        }
    })
}

fn on_grid(px: f64) -> bool {
    px.fract() == 0.0 && px % 4.0 == 0.0
}

/// Recover the snapped pixel line height from a ratio and the size it was
/// divided by.
fn numerator(ratio: f64, size: f64) -> f64 {
    (ratio * size).round()
}

fn assert_on_grid(tokens: &TokenSet) -> Result<(), TestCaseError> {
    let fs = &tokens.font_sizes;
    for (name, px) in [("h3", fs.h3), ("h2", fs.h2), ("h1", fs.h1)] {
        prop_assert!(on_grid(px), "fontSizes.{} = {}", name, px);
    }
    for (name, px) in tokens.spacing.entries() {
        prop_assert!(on_grid(px), "spacing.{} = {}", name, px);
    }

    let lh = &tokens.line_heights;
    let base = tokens.base_font_size;
    prop_assert!(on_grid(numerator(lh.body, base)));
    prop_assert!(on_grid(numerator(lh.small, base * 0.875)));
    for (ratio, size) in [(lh.h3, fs.h3), (lh.h2, fs.h2), (lh.h1, fs.h1)] {
        if size > 0.0 {
            prop_assert!(on_grid(numerator(ratio, size)), "{} * {}", ratio, size);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn snapping_aligned_values_is_identity(k in 0u64..1_000_000_000_000) {
        let px = (k * 4) as f64;
        prop_assert_eq!(snap4(px), px);
    }

    #[test]
    fn snapped_values_are_multiples_of_four(px in 0.0f64..1e15) {
        let snapped = snap4(px);
        prop_assert!(on_grid(snapped));
        prop_assert!((snapped - px).abs() <= 2.0);
    }

    #[test]
    fn derived_pixels_are_on_grid(config in configuration()) {
        let tokens = derive_tokens(&config).unwrap();
        assert_on_grid(&tokens)?;
    }

    #[test]
    fn heading_scale_is_monotonic(config in configuration()) {
        prop_assume!(config.contrast_ratio >= 1.0);
        let tokens = derive_tokens(&config).unwrap();
        let fs = &tokens.font_sizes;
        prop_assert!(fs.h1 >= fs.h2);
        prop_assert!(fs.h2 >= fs.h3);
        // body is unsnapped; h3 can sit up to 2px under it
        prop_assert!(fs.h3 + 2.0 >= fs.body);
    }

    #[test]
    fn shrinking_ratio_reverses_scale(config in configuration()) {
        prop_assume!(config.contrast_ratio <= 1.0);
        let tokens = derive_tokens(&config).unwrap();
        let fs = &tokens.font_sizes;
        prop_assert!(fs.h1 <= fs.h2);
        prop_assert!(fs.h2 <= fs.h3);
    }

    #[test]
    fn derivation_is_deterministic(config in configuration()) {
        let first = derive_tokens(&config).unwrap();
        let second = derive_tokens(&config).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            first.line_heights.h1.to_bits(),
            second.line_heights.h1.to_bits()
        );
    }

    #[test]
    fn duplicate_spacing_steps_match(config in configuration()) {
        let tokens = derive_tokens(&config).unwrap();
        prop_assert_eq!(tokens.spacing.xs, tokens.spacing.s);
    }

    #[test]
    fn line_heights_are_finite(config in configuration()) {
        let tokens = derive_tokens(&config).unwrap();
        for (name, ratio) in tokens.line_heights.entries() {
            prop_assert!(ratio.is_finite() && ratio >= 0.0, "{} = {}", name, ratio);
        }
    }

    #[test]
    fn non_positive_base_is_rejected(base in -100.0f64..=0.0, grid in grid_system()) {
        let config = Configuration {
            grid_system: grid,
            base_font_size: base,
            contrast_ratio: 1.2,
        };
        prop_assert!(matches!(
            derive_tokens(&config),
            Err(TokenError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn large_base_keeps_headings_on_grid() {
    let config = Configuration::new(GridSystem::EightPoint, 3.0e9, 1.2).unwrap();
    let tokens = derive_tokens(&config).unwrap();
    assert_eq!(tokens.font_sizes.h1 % 4.0, 0.0);
    assert_eq!(tokens.font_sizes.h2 % 4.0, 0.0);
    assert_eq!(tokens.spacing.xxxl % 4.0, 0.0);
    assert!(tokens.line_heights.h1 > 1.19 && tokens.line_heights.h1 < 1.21);
}
