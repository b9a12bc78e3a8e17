/// Easing curves applied to reveal progress before interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    /// Quadratic deceleration.
    Power2Out,
    /// Cubic deceleration.
    Power3Out,
    /// Overshoots slightly past the end before settling.
    BackOut,
}

const BACK_OVERSHOOT: f64 = 1.7;

impl Ease {
    /// Maps `t` in [0, 1] to eased progress. `apply(0) == 0` and `apply(1) == 1` for every curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(2),
            Self::Power3Out => 1.0 - (1.0 - t).powi(3),
            Self::BackOut => {
                let c = BACK_OVERSHOOT;
                let u = t - 1.0;
                1.0 + (c + 1.0) * u.powi(3) + c * u.powi(2)
            }
        }
    }
}
