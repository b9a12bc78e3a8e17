//! Scroll-linked reveal and parallax evaluation.
//!
//! Everything here is a pure function of scroll samples; the page components feed browser
//! positions in and apply the resulting [`StyleSnapshot`]s.

mod controller;
mod ease;
mod parallax;
mod reveal;
mod style;

pub use controller::MotionController;
pub use ease::Ease;
pub use parallax::{Axis, ParallaxLayer};
pub use reveal::{
    Direction, Mode, Replay, Reveal, RevealTarget, ScrollSample, Trigger, REVEAL_DISTANCE,
};
pub use style::{RevealTiming, StyleSnapshot};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub u32);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("parallax speed {0} is outside [0, 1]")]
    SpeedOutOfRange(f64),
    #[error("motion target {0:?} is already registered")]
    DuplicateTarget(TargetId),
    #[error("section has been unmounted")]
    Unmounted,
}
