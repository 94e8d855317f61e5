//! Scroll-linked values and motion presets
//!
//! Everything in here is a pure function of its inputs:
//! - `ScrollProgress` normalizes raw viewport geometry to [0, 1]
//! - `header_opacity` / `hero_offset` map progress to style values
//! - `Entrance`, `Hover` and `Spin` describe the declarative animations as
//!   plain data that the UI layer turns into inline styles

/// Scroll range over which the header fades.
pub const HEADER_FADE_RANGE: (f64, f64) = (0.0, 0.1);
/// Header opacity at the start and end of the fade range.
pub const HEADER_OPACITY_RANGE: (f64, f64) = (1.0, 0.9);

/// Scroll range over which the hero block rises.
pub const HERO_PARALLAX_RANGE: (f64, f64) = (0.0, 0.5);
/// Hero translation (px) at the start and end of the parallax range.
pub const HERO_OFFSET_RANGE: (f64, f64) = (0.0, -100.0);

/// Linear interpolation from `input` onto `output`, clamped at both ends.
///
/// Values below `input.0` map to `output.0`, values above `input.1` map to
/// `output.1`. A degenerate input range maps everything to `output.1` once
/// it is reached and `output.0` before. NaN maps to `output.0`.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;

    if value.is_nan() || value <= in_start {
        return out_start;
    }
    if value >= in_end {
        return out_end;
    }

    let t = (value - in_start) / (in_end - in_start);
    out_start + (out_end - out_start) * t
}

/// Vertical scroll position normalized to the scrollable document height.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const TOP: ScrollProgress = ScrollProgress(0.0);

    /// Build from an already normalized value, clamping into [0, 1].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::TOP;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Build from raw viewport geometry.
    ///
    /// `scroll_y` is the current offset, `document_height` the full
    /// scrollable height and `viewport_height` the visible height. A
    /// document that does not scroll always reports the top.
    pub fn from_geometry(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        let scrollable = document_height - viewport_height;
        if !(scrollable > 0.0) {
            return Self::TOP;
        }
        Self::new(scroll_y / scrollable)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Header opacity for a given scroll position.
pub fn header_opacity(progress: ScrollProgress) -> f64 {
    interpolate(progress.value(), HEADER_FADE_RANGE, HEADER_OPACITY_RANGE)
}

/// Hero parallax offset in pixels for a given scroll position.
pub fn hero_offset(progress: ScrollProgress) -> f64 {
    interpolate(progress.value(), HERO_PARALLAX_RANGE, HERO_OFFSET_RANGE)
}

/// Target visual state: the subset of CSS the presets animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// CSS transform for this pose.
    pub fn transform(self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            trim_float(self.x),
            trim_float(self.y),
            trim_float(self.scale)
        )
    }

    /// Inline style for this pose.
    pub fn to_style(self) -> String {
        format!(
            "opacity: {}; transform: {};",
            trim_float(self.opacity),
            self.transform()
        )
    }
}

/// One-shot entrance presets played when a block is first revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Entrance {
    /// Section headers: rise 60px while fading in
    #[default]
    FadeUp,
    /// Cards and steps: rise 50px while fading in
    RiseIn,
    SlideFromLeft,
    SlideFromRight,
    ZoomIn,
}

impl Entrance {
    /// Pose before the entrance plays.
    pub fn initial(self) -> Pose {
        let hidden = Pose {
            opacity: 0.0,
            ..Pose::REST
        };
        match self {
            Entrance::FadeUp => Pose { y: 60.0, ..hidden },
            Entrance::RiseIn => Pose { y: 50.0, ..hidden },
            Entrance::SlideFromLeft => Pose { x: -50.0, ..hidden },
            Entrance::SlideFromRight => Pose { x: 50.0, ..hidden },
            Entrance::ZoomIn => Pose {
                scale: 0.8,
                ..hidden
            },
        }
    }

    /// Duration of the entrance in seconds.
    pub fn duration(self) -> f64 {
        match self {
            Entrance::FadeUp | Entrance::RiseIn => 0.6,
            Entrance::SlideFromLeft | Entrance::SlideFromRight | Entrance::ZoomIn => 0.8,
        }
    }

    /// Pose for a reveal state: initial until revealed, rest afterwards.
    pub fn pose(self, revealed: bool) -> Pose {
        if revealed { Pose::REST } else { self.initial() }
    }

    /// Complete inline style including the transition timing.
    pub fn style(self, revealed: bool, delay: f64) -> String {
        format!(
            "{} transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
            self.pose(revealed).to_style(),
            d = trim_float(self.duration()),
            delay = trim_float(delay.max(0.0)),
        )
    }
}

/// Delay for the `index`-th item of a staggered group.
pub fn stagger(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// Hover/tap feedback presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    /// Buttons: grow on hover, shrink on press
    Press,
    /// Navigation links
    Lift,
    /// Testimonial cards
    Float,
    /// Social icons
    Pop,
}

impl Hover {
    /// CSS class carrying the preset (rules live in the page stylesheet).
    pub fn class(self) -> &'static str {
        match self {
            Hover::Press => "motion-press",
            Hover::Lift => "motion-lift",
            Hover::Float => "motion-float",
            Hover::Pop => "motion-pop",
        }
    }

    /// Target pose while hovered.
    pub fn hovered(self) -> Pose {
        match self {
            Hover::Press => Pose {
                scale: 1.05,
                ..Pose::REST
            },
            Hover::Lift => Pose {
                y: -2.0,
                ..Pose::REST
            },
            Hover::Float => Pose {
                y: -5.0,
                ..Pose::REST
            },
            Hover::Pop => Pose {
                scale: 1.1,
                ..Pose::REST
            },
        }
    }

    /// Target pose while pressed. Only buttons react to taps.
    pub fn pressed(self) -> Pose {
        match self {
            Hover::Press => Pose {
                scale: 0.95,
                ..Pose::REST
            },
            other => other.hovered(),
        }
    }

    pub const ALL: [Hover; 4] = [Hover::Press, Hover::Lift, Hover::Float, Hover::Pop];

    /// Stylesheet rules for every preset.
    pub fn css_rules() -> String {
        Self::ALL
            .iter()
            .map(|preset| {
                let class = preset.class();
                format!(
                    ".{class} {{ transition: transform 0.2s ease-out; }}\n\
                     .{class}:hover {{ transform: {}; }}\n\
                     .{class}:active {{ transform: {}; }}\n",
                    preset.hovered().transform(),
                    preset.pressed().transform(),
                )
            })
            .collect()
    }
}

/// Unbounded linear rotation for decorative ornaments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    /// Seconds per full turn
    pub period: f64,
}

impl Spin {
    pub const ORNAMENT: Spin = Spin { period: 20.0 };

    /// One full clockwise turn, referenced by `animation()`.
    pub const KEYFRAMES: &'static str =
        "@keyframes motion-spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }";

    /// CSS animation shorthand for the `motion-spin` keyframes.
    pub fn animation(self) -> String {
        format!("motion-spin {}s linear infinite", trim_float(self.period))
    }
}

/// Format a float without trailing zeros so styles stay stable and short.
fn trim_float(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let formatted = format!("{:.3}", value);
    match formatted.trim_end_matches('0').trim_end_matches('.') {
        "-0" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ========================================================================
    // Interpolation
    // ========================================================================

    #[test]
    fn test_interpolate_clamps_below_and_above() {
        assert_eq!(interpolate(-5.0, (0.0, 1.0), (10.0, 20.0)), 10.0);
        assert_eq!(interpolate(5.0, (0.0, 1.0), (10.0, 20.0)), 20.0);
    }

    #[test]
    fn test_interpolate_midpoint() {
        assert!((interpolate(0.5, (0.0, 1.0), (10.0, 20.0)) - 15.0).abs() < EPS);
    }

    #[test]
    fn test_interpolate_nan_maps_to_start() {
        assert_eq!(interpolate(f64::NAN, (0.0, 1.0), (3.0, 4.0)), 3.0);
    }

    #[test]
    fn test_interpolate_degenerate_range() {
        assert_eq!(interpolate(0.0, (0.2, 0.2), (1.0, 2.0)), 1.0);
        assert_eq!(interpolate(0.3, (0.2, 0.2), (1.0, 2.0)), 2.0);
    }

    // ========================================================================
    // Scroll progress
    // ========================================================================

    #[test]
    fn test_progress_from_geometry() {
        let p = ScrollProgress::from_geometry(500.0, 3000.0, 1000.0);
        assert!((p.value() - 0.25).abs() < EPS);
    }

    #[test]
    fn test_progress_non_scrolling_document_is_top() {
        assert_eq!(ScrollProgress::from_geometry(100.0, 800.0, 800.0), ScrollProgress::TOP);
        assert_eq!(ScrollProgress::from_geometry(100.0, 600.0, 800.0), ScrollProgress::TOP);
    }

    #[test]
    fn test_progress_clamped_on_overscroll() {
        assert_eq!(ScrollProgress::from_geometry(-40.0, 2000.0, 1000.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_geometry(1300.0, 2000.0, 1000.0).value(), 1.0);
        assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::TOP);
    }

    // ========================================================================
    // Header opacity
    // ========================================================================

    #[test]
    fn test_header_opacity_endpoints() {
        assert_eq!(header_opacity(ScrollProgress::new(0.0)), 1.0);
        assert_eq!(header_opacity(ScrollProgress::new(0.1)), 0.9);
        assert_eq!(header_opacity(ScrollProgress::new(0.75)), 0.9);
        assert_eq!(header_opacity(ScrollProgress::new(1.0)), 0.9);
    }

    #[test]
    fn test_header_opacity_non_increasing() {
        let mut previous = header_opacity(ScrollProgress::TOP);
        for step in 1..=100 {
            let current = header_opacity(ScrollProgress::new(step as f64 * 0.001));
            assert!(current <= previous + EPS, "opacity rose at step {}", step);
            previous = current;
        }
    }

    #[test]
    fn test_header_opacity_halfway() {
        assert!((header_opacity(ScrollProgress::new(0.05)) - 0.95).abs() < EPS);
    }

    // ========================================================================
    // Hero offset
    // ========================================================================

    #[test]
    fn test_hero_offset_endpoints() {
        assert_eq!(hero_offset(ScrollProgress::TOP), 0.0);
        assert_eq!(hero_offset(ScrollProgress::new(0.5)), -100.0);
        assert_eq!(hero_offset(ScrollProgress::new(0.9)), -100.0);
    }

    #[test]
    fn test_hero_offset_linear() {
        for (p, expected) in [(0.1, -20.0), (0.25, -50.0), (0.4, -80.0)] {
            let actual = hero_offset(ScrollProgress::new(p));
            assert!((actual - expected).abs() < EPS, "p={} got {}", p, actual);
        }
    }

    // ========================================================================
    // Presets
    // ========================================================================

    #[test]
    fn test_entrance_initial_poses() {
        assert_eq!(Entrance::FadeUp.initial().y, 60.0);
        assert_eq!(Entrance::RiseIn.initial().y, 50.0);
        assert_eq!(Entrance::SlideFromLeft.initial().x, -50.0);
        assert_eq!(Entrance::SlideFromRight.initial().x, 50.0);
        assert_eq!(Entrance::ZoomIn.initial().scale, 0.8);
        assert_eq!(Entrance::ZoomIn.initial().opacity, 0.0);
    }

    #[test]
    fn test_entrance_revealed_is_rest() {
        for preset in [
            Entrance::FadeUp,
            Entrance::RiseIn,
            Entrance::SlideFromLeft,
            Entrance::SlideFromRight,
            Entrance::ZoomIn,
        ] {
            assert_eq!(preset.pose(true), Pose::REST);
        }
    }

    #[test]
    fn test_entrance_style_contains_timing() {
        let style = Entrance::SlideFromLeft.style(false, 0.2);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translate3d(-50px, 0px, 0)"));
        assert!(style.contains("opacity 0.8s ease-out 0.2s"));
    }

    #[test]
    fn test_rest_pose_style() {
        assert_eq!(
            Pose::REST.to_style(),
            "opacity: 1; transform: translate3d(0px, 0px, 0) scale(1);"
        );
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 0.2), 0.0);
        assert!((stagger(3, 0.1) - 0.3).abs() < EPS);
    }

    #[test]
    fn test_hover_presets() {
        assert_eq!(Hover::Press.hovered().scale, 1.05);
        assert_eq!(Hover::Press.pressed().scale, 0.95);
        assert_eq!(Hover::Lift.hovered().y, -2.0);
        assert_eq!(Hover::Float.pressed().y, -5.0);
        assert_eq!(Hover::Pop.hovered().scale, 1.1);
    }

    #[test]
    fn test_hover_css_rules() {
        let css = Hover::css_rules();
        assert!(css.contains(".motion-press:hover { transform: translate3d(0px, 0px, 0) scale(1.05); }"));
        assert!(css.contains(".motion-press:active { transform: translate3d(0px, 0px, 0) scale(0.95); }"));
        assert!(css.contains(".motion-lift:hover { transform: translate3d(0px, -2px, 0) scale(1); }"));
    }

    #[test]
    fn test_spin_ornament_animation() {
        assert_eq!(Spin::ORNAMENT.animation(), "motion-spin 20s linear infinite");
        assert_eq!(Spin { period: 7.5 }.animation(), "motion-spin 7.5s linear infinite");
    }

    #[test]
    fn test_spin_keyframes_make_a_full_turn() {
        assert!(Spin::KEYFRAMES.starts_with("@keyframes motion-spin "));
        assert!(Spin::KEYFRAMES.contains("rotate(0deg)"));
        assert!(Spin::KEYFRAMES.contains("rotate(360deg)"));
    }
}
