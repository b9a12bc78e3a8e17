use std::fmt::Write;

/// The closed set of style properties a motion target drives.
///
/// Translations are in pixels, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation: f64,
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl StyleSnapshot {
    /// Fully opaque, untransformed.
    pub const VISIBLE: StyleSnapshot = StyleSnapshot {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        rotation: 0.0,
    };

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_translate_x(mut self, x: f64) -> Self {
        self.translate_x = x;
        self
    }

    pub fn with_translate_y(mut self, y: f64) -> Self {
        self.translate_y = y;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Interpolates each property from `self` toward `to`. `t` is clamped to [0, 1].
    pub fn lerp(&self, to: &StyleSnapshot, t: f64) -> StyleSnapshot {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        StyleSnapshot {
            opacity: mix(self.opacity, to.opacity),
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
            rotation: mix(self.rotation, to.rotation),
        }
    }

    /// Inline CSS declarations for this snapshot.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        // writing into a String cannot fail
        let _ = write!(
            css,
            "opacity: {}; transform: translate3d({}px, {}px, 0px) rotate({}deg);",
            round(self.opacity),
            round(self.translate_x),
            round(self.translate_y),
            round(self.rotation),
        );
        css
    }
}

// Keeps the emitted CSS short and stable across tiny float differences.
fn round(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// CSS transition timing applied alongside a snapshot so the browser smooths between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            delay_ms: 0,
        }
    }
}

impl RevealTiming {
    pub fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
        }
    }

    /// Timing for the `index`th item of a staggered group.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let extra = step_ms.saturating_mul(index.min(u32::MAX as usize) as u32);
        Self {
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms.saturating_add(extra),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transition: opacity {d}ms ease-out {w}ms, transform {d}ms ease-out {w}ms;",
            d = self.duration_ms,
            w = self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let from = StyleSnapshot::VISIBLE
            .with_opacity(0.0)
            .with_translate_y(50.0);
        let to = StyleSnapshot::VISIBLE;

        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);

        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.translate_y, 25.0);

        // out of range is clamped
        assert_eq!(from.lerp(&to, 7.0), to);
        assert_eq!(from.lerp(&to, -3.0), from);
    }

    #[test]
    fn test_css_output() {
        let style = StyleSnapshot::VISIBLE
            .with_opacity(0.25)
            .with_translate_x(-50.0)
            .with_rotation(-15.0);
        assert_eq!(
            style.to_css(),
            "opacity: 0.25; transform: translate3d(-50px, 0px, 0px) rotate(-15deg);"
        );

        // negative zero never leaks into the markup
        let neg_zero = StyleSnapshot::VISIBLE.with_translate_y(-0.0);
        assert!(!neg_zero.to_css().contains("-0px"));
    }

    #[test]
    fn test_stagger() {
        let base = RevealTiming::new(800, 100);
        assert_eq!(base.staggered(0, 200), RevealTiming::new(800, 100));
        assert_eq!(base.staggered(3, 200), RevealTiming::new(800, 700));
        assert_eq!(
            base.to_css(),
            "transition: opacity 800ms ease-out 100ms, transform 800ms ease-out 100ms;"
        );
    }
}
