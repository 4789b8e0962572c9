//! Timings and scroll math for the landing page decorations.

/// The splash screen is removed after this long.
pub const LOADING_SCREEN_MS: u32 = 1500;
/// Hero content starts its entrance transition after this long.
pub const CONTENT_REVEAL_MS: u32 = 1600;

const OVERLAY_BASE_ALPHA: f64 = 0.03;
const OVERLAY_MAX_ALPHA: f64 = 0.12;
const OVERLAY_SCROLL_RANGE: f64 = 2000.0;

/// A background layer moves at `factor` times the scroll speed.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

pub fn translate_y(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, factor))
}

pub fn translate(scroll_y: f64, factor_x: f64, factor_y: f64) -> String {
    format!(
        "translate({}px, {}px)",
        parallax_offset(scroll_y, factor_x),
        parallax_offset(scroll_y, factor_y)
    )
}

/// White wash over the background, thickening as the page scrolls.
pub fn overlay_alpha(scroll_y: f64) -> f64 {
    (OVERLAY_BASE_ALPHA + scroll_y.max(0.0) / OVERLAY_SCROLL_RANGE).min(OVERLAY_MAX_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_is_clamped() {
        assert_eq!(overlay_alpha(0.0), 0.03);
        assert!((overlay_alpha(100.0) - 0.08).abs() < 1e-9);
        assert_eq!(overlay_alpha(10_000.0), 0.12);
    }

    #[test]
    fn transforms_scale_with_scroll() {
        assert_eq!(translate_y(100.0, -0.2), "translateY(-20px)");
        assert_eq!(translate(200.0, 0.5, -0.25), "translate(100px, -50px)");
        assert_eq!(translate_y(0.0, 0.2), "translateY(0px)");
    }

    #[test]
    fn content_reveals_after_the_splash() {
        assert!(CONTENT_REVEAL_MS > LOADING_SCREEN_MS);
    }
}
