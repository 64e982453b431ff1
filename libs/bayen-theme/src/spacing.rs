//! Shape, spacing and motion constants for the BayenTV theme
//!
//! Shared by the CSS component rules and the iced style functions so both
//! renderers agree on corner radii and timings.

/// Corner radii and spacing in px
#[derive(Debug, Clone, Copy)]
pub struct Spacing;

impl Spacing {
    // ═══════════════════════════════════════════════════════════════════════════
    // BORDER RADIUS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Tooltips (8px)
    pub const RADIUS_SM: f32 = 8.0;
    /// Text inputs (10px)
    pub const RADIUS_INPUT: f32 = 10.0;
    /// Buttons, panels and avatars (12px)
    pub const RADIUS_MD: f32 = 12.0;
    /// Cards (16px)
    pub const RADIUS_LG: f32 = 16.0;

    // ═══════════════════════════════════════════════════════════════════════════
    // SPACING
    // ═══════════════════════════════════════════════════════════════════════════

    /// Horizontal button padding
    pub const BUTTON_PADDING_X: f32 = 16.0;
    /// Surface bar backdrop blur radius
    pub const BAR_BLUR: f32 = 6.0;
    /// Upward shift of the primary action on hover
    pub const HOVER_LIFT: f32 = 1.0;
}

/// Transition and animation timings in milliseconds
#[derive(Debug, Clone, Copy)]
pub struct Motion;

impl Motion {
    /// Background and text color fades
    pub const COLOR_FADE_MS: u32 = 180;
    /// Primary action gradient sweep
    pub const GRADIENT_SWEEP_MS: u32 = 400;
    /// Primary action hover lift
    pub const LIFT_MS: u32 = 120;
    /// One full brand mark gradient cycle
    pub const BRAND_CYCLE_MS: u32 = 4000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_scale_is_ordered() {
        assert!(Spacing::RADIUS_SM < Spacing::RADIUS_INPUT);
        assert!(Spacing::RADIUS_INPUT < Spacing::RADIUS_MD);
        assert!(Spacing::RADIUS_MD < Spacing::RADIUS_LG);
    }

    #[test]
    fn test_lift_is_faster_than_sweep() {
        assert!(Motion::LIFT_MS < Motion::GRADIENT_SWEEP_MS);
    }
}
