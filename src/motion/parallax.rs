use super::{style::StyleSnapshot, MotionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// A decorative element whose offset is coupled to the scroll position.
///
/// `speed` is 0 for an element pinned to the viewport and 1 for one that scrolls with the
/// document. The mapping is direct: there is no smoothing state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    speed: f64,
    axis: Axis,
}

impl ParallaxLayer {
    pub fn new(speed: f64) -> Result<Self, MotionError> {
        if !(0.0..=1.0).contains(&speed) {
            return Err(MotionError::SpeedOutOfRange(speed));
        }
        Ok(Self {
            speed,
            axis: Axis::Vertical,
        })
    }

    pub fn horizontal(mut self) -> Self {
        self.axis = Axis::Horizontal;
        self
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn offset(&self, scroll_offset: f64) -> f64 {
        -scroll_offset * self.speed
    }

    pub fn style_at(&self, scroll_offset: f64) -> StyleSnapshot {
        let offset = self.offset(scroll_offset);
        match self.axis {
            Axis::Vertical => StyleSnapshot::VISIBLE.with_translate_y(offset),
            Axis::Horizontal => StyleSnapshot::VISIBLE.with_translate_x(offset),
        }
    }
}
