use super::{ease::Ease, style::StyleSnapshot, TargetId};

/// Distance an element travels during a directional reveal, in pixels.
pub const REVEAL_DISTANCE: f64 = 50.0;

/// One scroll-event sample, as seen by a single target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Vertical document scroll offset.
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Top edge of the target element relative to the viewport, if the environment has layout.
    pub element_top: Option<f64>,
}

impl ScrollSample {
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            element_top: None,
        }
    }

    pub fn with_element_top(mut self, top: f64) -> Self {
        self.element_top = Some(top);
        self
    }
}

/// When a reveal starts and when it is complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Absolute document scroll offsets.
    Offset { start: f64, end: f64 },
    /// Fractions of viewport height the element's top edge crosses on the way up,
    /// e.g. start at `0.8` (80% down the viewport) and end at `0.2`.
    Viewport { start: f64, end: f64 },
}

impl Trigger {
    /// "top 80%" style trigger: starts when the top edge crosses `start` of the viewport
    /// and completes at `end`.
    pub fn viewport(start: f64, end: f64) -> Self {
        Self::Viewport { start, end }
    }

    pub fn offset(start: f64, end: f64) -> Self {
        Self::Offset { start, end }
    }

    /// Fraction of the way from start to end, clamped to [0, 1].
    ///
    /// Degenerate thresholds, non-finite input, and a missing element position all resolve to
    /// `1.0` so that the element is shown in its rest state.
    pub fn progress(&self, sample: &ScrollSample) -> f64 {
        let (position, start, end) = match *self {
            Trigger::Offset { start, end } => (sample.scroll_y, start, end),
            Trigger::Viewport { start, end } => {
                let Some(top) = sample.element_top else {
                    return 1.0;
                };
                // top edge moves toward zero as the page scrolls down, so negate to keep
                // "further along" increasing
                let vh = sample.viewport_height;
                (-top, -(start * vh), -(end * vh))
            }
        };
        let span = end - start;
        if span == 0.0 || !span.is_finite() {
            return 1.0;
        }
        let fraction = (position - start) / span;
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replay {
    /// Play once, never again, even scrolling back up.
    #[default]
    Never,
    /// Rewind after the element has fully left (progress back at zero).
    OnReenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Once(Replay),
    Continuous,
}

impl Mode {
    pub const ONCE: Mode = Mode::Once(Replay::Never);
}

/// Preset initial states for the usual entrance directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Rises into place from below.
    #[default]
    Up,
    Down,
    /// Slides in from the right.
    Left,
    Right,
    Fade,
}

impl Direction {
    pub fn initial_state(self) -> StyleSnapshot {
        let hidden = StyleSnapshot::VISIBLE.with_opacity(0.0);
        match self {
            Direction::Up => hidden.with_translate_y(REVEAL_DISTANCE),
            Direction::Down => hidden.with_translate_y(-REVEAL_DISTANCE),
            Direction::Left => hidden.with_translate_x(REVEAL_DISTANCE),
            Direction::Right => hidden.with_translate_x(-REVEAL_DISTANCE),
            Direction::Fade => hidden,
        }
    }
}

/// Immutable description of one animatable element.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub id: TargetId,
    pub initial: StyleSnapshot,
    pub rest: StyleSnapshot,
    pub trigger: Trigger,
    pub mode: Mode,
    pub ease: Ease,
}

impl RevealTarget {
    pub fn new(id: TargetId, initial: StyleSnapshot, rest: StyleSnapshot, trigger: Trigger) -> Self {
        Self {
            id,
            initial,
            rest,
            trigger,
            mode: Mode::ONCE,
            ease: Ease::Linear,
        }
    }

    /// A one-shot entrance from `direction`, starting when the element's top reaches 80% of the
    /// viewport and complete at 20%.
    pub fn entrance(id: TargetId, direction: Direction) -> Self {
        Self::new(
            id,
            direction.initial_state(),
            StyleSnapshot::VISIBLE,
            Trigger::viewport(0.8, 0.2),
        )
    }

    /// A continuous vertical drift of `distance` pixels while the element crosses the viewport,
    /// from its top entering at the bottom to its bottom leaving at the top.
    pub fn scrub_y(id: TargetId, distance: f64, element_height: f64, viewport_height: f64) -> Self {
        let span = if viewport_height > 0.0 {
            1.0 + element_height / viewport_height
        } else {
            1.0
        };
        Self::new(
            id,
            StyleSnapshot::VISIBLE,
            StyleSnapshot::VISIBLE.with_translate_y(distance),
            Trigger::viewport(1.0, 1.0 - span),
        )
        .with_mode(Mode::Continuous)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Style at a given progress, after easing.
    pub fn style_at(&self, progress: f64) -> StyleSnapshot {
        self.initial.lerp_unclamped(&self.rest, self.ease.apply(progress))
    }
}

impl StyleSnapshot {
    // back.out overshoots past 1, so easing output is not clamped here
    fn lerp_unclamped(&self, to: &StyleSnapshot, t: f64) -> StyleSnapshot {
        if (0.0..=1.0).contains(&t) {
            return self.lerp(to, t);
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        StyleSnapshot {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
            rotation: mix(self.rotation, to.rotation),
        }
    }
}

/// Per-target evaluation state while mounted.
#[derive(Debug, Clone)]
pub struct Reveal {
    target: RevealTarget,
    frozen: bool,
}

impl Reveal {
    pub fn new(target: RevealTarget) -> Self {
        Self {
            target,
            frozen: false,
        }
    }

    pub fn target(&self) -> &RevealTarget {
        &self.target
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Frozen for good: every later sample evaluates to the rest state.
    pub fn is_settled(&self) -> bool {
        self.frozen && self.target.mode == Mode::ONCE
    }

    /// Current progress in [0, 1] given the sample, updating once-mode state.
    ///
    /// `Continuous` targets follow the scroll position. `Once` targets play through to rest as
    /// soon as the start line is crossed, so they report either 0 or 1; the CSS transition
    /// animates between the two.
    pub fn progress(&mut self, sample: &ScrollSample) -> f64 {
        let raw = self.target.trigger.progress(sample);
        match self.target.mode {
            Mode::Continuous => raw,
            Mode::Once(replay) => {
                if self.frozen {
                    if replay == Replay::OnReenter && raw <= 0.0 {
                        log::debug!("reveal {:?} rewound for replay", self.target.id);
                        self.frozen = false;
                        return 0.0;
                    }
                    return 1.0;
                }
                if raw > 0.0 {
                    log::debug!("reveal {:?} triggered", self.target.id);
                    self.frozen = true;
                    return 1.0;
                }
                0.0
            }
        }
    }

    /// Style to apply for this sample.
    pub fn evaluate(&mut self, sample: &ScrollSample) -> StyleSnapshot {
        if self.is_settled() {
            return self.target.rest;
        }
        let progress = self.progress(sample);
        self.target.style_at(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn at_top(top: f64) -> ScrollSample {
        ScrollSample::new(0.0, VH).with_element_top(top)
    }

    fn entrance() -> Reveal {
        Reveal::new(RevealTarget::entrance(TargetId(1), Direction::Up))
    }

    #[test]
    fn test_viewport_progress() {
        let trigger = Trigger::viewport(0.8, 0.2);

        // below the start line: nothing yet
        assert_eq!(trigger.progress(&at_top(900.0)), 0.0);
        assert_eq!(trigger.progress(&at_top(800.0)), 0.0);
        // halfway between 800 and 200
        assert!((trigger.progress(&at_top(500.0)) - 0.5).abs() < 1e-9);
        // past the end line
        assert_eq!(trigger.progress(&at_top(200.0)), 1.0);
        assert_eq!(trigger.progress(&at_top(-400.0)), 1.0);
    }

    #[test]
    fn test_offset_progress() {
        let trigger = Trigger::offset(100.0, 300.0);
        assert_eq!(trigger.progress(&ScrollSample::new(0.0, VH)), 0.0);
        assert!((trigger.progress(&ScrollSample::new(150.0, VH)) - 0.25).abs() < 1e-9);
        assert_eq!(trigger.progress(&ScrollSample::new(1000.0, VH)), 1.0);
    }

    #[test]
    fn test_once_never_decreases_after_full_reveal() {
        let mut reveal = entrance();
        let rest = reveal.target().rest;

        // scroll down through the reveal, then back up past the start line
        let tops = [950.0, 700.0, 400.0, 100.0, 400.0, 700.0, 950.0, 2000.0];
        let mut reached = false;
        let mut last = 0.0;
        for top in tops {
            let p = reveal.progress(&at_top(top));
            if reached {
                assert_eq!(p, 1.0, "regressed at top={top}");
            }
            assert!(p >= last, "progress went backward at top={top}");
            reached |= p >= 1.0;
            last = p;
        }
        assert!(reached);
        assert!(reveal.is_frozen());
        assert_eq!(reveal.evaluate(&at_top(5000.0)), rest);
    }

    #[test]
    fn test_once_plays_to_rest_after_start_line() {
        // above the fold on load: past the start line, short of the end line
        let mut reveal = entrance();
        let rest = reveal.target().rest;
        assert_eq!(reveal.evaluate(&at_top(700.0)), rest);
        assert!(reveal.is_frozen());

        // near the bottom of the page the end line is never reached
        let mut reveal = entrance();
        let bottom = ScrollSample::new(5000.0, VH).with_element_top(550.0);
        let style = reveal.evaluate(&bottom);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translate_y, 0.0);
        assert!(reveal.is_frozen());

        // still hidden until the start line is crossed
        let mut reveal = entrance();
        assert_eq!(reveal.evaluate(&at_top(850.0)), reveal.target().initial);
        assert!(!reveal.is_frozen());
    }

    #[test]
    fn test_only_never_replaying_reveals_settle() {
        let mut once = entrance();
        assert!(!once.is_settled());
        once.evaluate(&at_top(500.0));
        assert!(once.is_settled());

        let mut replaying = Reveal::new(
            RevealTarget::entrance(TargetId(6), Direction::Up)
                .with_mode(Mode::Once(Replay::OnReenter)),
        );
        replaying.evaluate(&at_top(500.0));
        assert!(replaying.is_frozen());
        assert!(!replaying.is_settled());

        let mut drift = Reveal::new(RevealTarget::scrub_y(TargetId(7), -60.0, 500.0, VH));
        drift.evaluate(&at_top(-500.0));
        assert!(!drift.is_settled());
    }

    #[test]
    fn test_replay_on_reenter() {
        let mut reveal = Reveal::new(
            RevealTarget::entrance(TargetId(2), Direction::Left)
                .with_mode(Mode::Once(Replay::OnReenter)),
        );
        assert_eq!(reveal.progress(&at_top(100.0)), 1.0);

        // partially back out: still frozen
        assert_eq!(reveal.progress(&at_top(600.0)), 1.0);
        assert!(reveal.is_frozen());

        // fully below the start line again: rewinds
        assert_eq!(reveal.progress(&at_top(900.0)), 0.0);
        assert!(!reveal.is_frozen());
        let initial = reveal.target().initial;
        assert_eq!(reveal.evaluate(&at_top(900.0)), initial);
    }

    #[test]
    fn test_degenerate_threshold_reveals() {
        let target = RevealTarget::entrance(TargetId(3), Direction::Up)
            .with_trigger(Trigger::viewport(0.5, 0.5));
        let rest = target.rest;
        let mut reveal = Reveal::new(target);
        let style = reveal.evaluate(&at_top(900.0));
        assert_eq!(style, rest);
        assert!(!style.opacity.is_nan());

        let offset = Trigger::offset(400.0, 400.0);
        assert_eq!(offset.progress(&ScrollSample::new(0.0, VH)), 1.0);

        // zero-height viewport collapses both lines onto the same point
        let zero_vh = ScrollSample::new(0.0, 0.0).with_element_top(10.0);
        assert_eq!(Trigger::viewport(0.8, 0.2).progress(&zero_vh), 1.0);

        let nan = ScrollSample::new(f64::NAN, VH);
        assert_eq!(Trigger::offset(0.0, 100.0).progress(&nan), 1.0);
    }

    #[test]
    fn test_deep_link_starts_at_rest() {
        // page loaded already scrolled past the section
        let mut reveal = entrance();
        let rest = reveal.target().rest;
        assert_eq!(reveal.evaluate(&at_top(-1200.0)), rest);
        assert!(reveal.is_frozen());
    }

    #[test]
    fn test_missing_layout_shows_rest_state() {
        let mut reveal = entrance();
        let rest = reveal.target().rest;
        assert_eq!(reveal.evaluate(&ScrollSample::new(0.0, VH)), rest);
    }

    #[test]
    fn test_continuous_is_pure() {
        let target = RevealTarget::scrub_y(TargetId(4), -60.0, 500.0, VH);
        let mut reveal = Reveal::new(target);

        let first = reveal.evaluate(&at_top(400.0));
        let _ = reveal.evaluate(&at_top(-300.0));
        let _ = reveal.evaluate(&at_top(900.0));
        let again = reveal.evaluate(&at_top(400.0));
        assert_eq!(first, again);

        // entering at the bottom edge: no drift yet; bottom edge leaving the top: full drift
        assert_eq!(reveal.evaluate(&at_top(VH)).translate_y, 0.0);
        assert_eq!(reveal.evaluate(&at_top(-500.0)).translate_y, -60.0);
        assert!(!reveal.is_frozen());
    }

    #[test]
    fn test_direction_presets() {
        assert_eq!(Direction::Up.initial_state().translate_y, REVEAL_DISTANCE);
        assert_eq!(Direction::Down.initial_state().translate_y, -REVEAL_DISTANCE);
        assert_eq!(Direction::Left.initial_state().translate_x, REVEAL_DISTANCE);
        assert_eq!(Direction::Right.initial_state().translate_x, -REVEAL_DISTANCE);
        let fade = Direction::Fade.initial_state();
        assert_eq!((fade.opacity, fade.translate_x, fade.translate_y), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_eased_reveal_overshoot_keeps_opacity_in_range() {
        let target =
            RevealTarget::entrance(TargetId(5), Direction::Up).with_ease(Ease::BackOut);
        let style = target.style_at(0.8);
        assert!(style.opacity <= 1.0);
        // overshoots past the rest position
        assert!(style.translate_y < 0.0);
    }
}
