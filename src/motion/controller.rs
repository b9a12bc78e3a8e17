use std::collections::BTreeMap;

use super::{
    parallax::ParallaxLayer,
    reveal::{Reveal, RevealTarget, ScrollSample},
    style::StyleSnapshot,
    MotionError, TargetId,
};

#[derive(Debug, Clone)]
enum Entry {
    Reveal(Reveal),
    Parallax(ParallaxLayer),
}

/// The motion targets owned by one mounted section.
///
/// Targets are registered while the section mounts, evaluated on every scroll tick, and all
/// dropped at once when it unmounts. Ticks after unmount produce nothing.
#[derive(Debug, Clone)]
pub struct MotionController {
    entries: BTreeMap<TargetId, Entry>,
    next_id: u32,
    mounted: bool,
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionController {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
            mounted: true,
        }
    }

    /// Hands out a fresh id for a target about to be registered.
    ///
    /// Skips ids that callers already registered by hand.
    pub fn allocate_id(&mut self) -> TargetId {
        loop {
            let id = TargetId(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.entries.contains_key(&id) {
                return id;
            }
        }
    }

    fn insert(&mut self, id: TargetId, entry: Entry) -> Result<TargetId, MotionError> {
        if !self.mounted {
            return Err(MotionError::Unmounted);
        }
        if self.entries.contains_key(&id) {
            return Err(MotionError::DuplicateTarget(id));
        }
        self.entries.insert(id, entry);
        Ok(id)
    }

    pub fn register_reveal(&mut self, target: RevealTarget) -> Result<TargetId, MotionError> {
        let id = target.id;
        self.insert(id, Entry::Reveal(Reveal::new(target)))
    }

    pub fn register_parallax(&mut self, layer: ParallaxLayer) -> Result<TargetId, MotionError> {
        let id = self.allocate_id();
        self.insert(id, Entry::Parallax(layer))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Evaluates every live target against the current scroll position.
    ///
    /// `locate` reports the viewport-relative top edge of a target's element when known.
    pub fn tick<F>(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        locate: F,
    ) -> Vec<(TargetId, StyleSnapshot)>
    where
        F: Fn(TargetId) -> Option<f64>,
    {
        if !self.mounted {
            return Vec::new();
        }
        self.entries
            .iter_mut()
            .map(|(id, entry)| {
                let style = match entry {
                    Entry::Parallax(layer) => layer.style_at(scroll_y),
                    Entry::Reveal(reveal) => {
                        let mut sample = ScrollSample::new(scroll_y, viewport_height);
                        sample.element_top = locate(*id);
                        reveal.evaluate(&sample)
                    }
                };
                (*id, style)
            })
            .collect()
    }

    /// Drops a single target. Returns whether it was live.
    pub fn dispose(&mut self, id: TargetId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            log::debug!("disposed motion target {id:?}");
        }
        removed
    }

    /// Drops every target and refuses further registration.
    pub fn unmount(&mut self) {
        log::debug!("unmounting {} motion targets", self.entries.len());
        self.entries.clear();
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::reveal::Direction;

    fn section() -> (MotionController, TargetId, TargetId) {
        let mut controller = MotionController::new();
        let reveal_id = controller.allocate_id();
        controller
            .register_reveal(RevealTarget::entrance(reveal_id, Direction::Up))
            .unwrap();
        let layer_id = controller
            .register_parallax(ParallaxLayer::new(0.3).unwrap())
            .unwrap();
        (controller, reveal_id, layer_id)
    }

    #[test]
    fn test_tick_evaluates_every_target() {
        let (mut controller, reveal_id, layer_id) = section();
        assert_ne!(reveal_id, layer_id);

        let styles = controller.tick(1000.0, 1000.0, |_| Some(100.0));
        assert_eq!(styles.len(), 2);
        let lookup = |id| styles.iter().find(|(i, _)| *i == id).map(|(_, s)| *s);

        assert_eq!(lookup(reveal_id), Some(StyleSnapshot::VISIBLE));
        let layer = lookup(layer_id).unwrap();
        assert!((layer.translate_y + 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_position_is_revealed() {
        let (mut controller, reveal_id, _) = section();
        let styles = controller.tick(0.0, 800.0, |_| None);
        let style = styles.iter().find(|(i, _)| *i == reveal_id).unwrap().1;
        assert_eq!(style, StyleSnapshot::VISIBLE);
    }

    #[test]
    fn test_disposed_targets_never_reappear() {
        let (mut controller, reveal_id, layer_id) = section();

        assert!(controller.dispose(layer_id));
        assert!(!controller.dispose(layer_id));
        let styles = controller.tick(500.0, 1000.0, |_| Some(900.0));
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].0, reveal_id);

        controller.unmount();
        assert!(controller.is_empty());
        assert!(controller.tick(900.0, 1000.0, |_| Some(0.0)).is_empty());
        assert!(matches!(
            controller.register_parallax(ParallaxLayer::new(0.1).unwrap()),
            Err(MotionError::Unmounted)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let (mut controller, reveal_id, _) = section();
        let again = RevealTarget::entrance(reveal_id, Direction::Fade);
        assert!(matches!(
            controller.register_reveal(again),
            Err(MotionError::DuplicateTarget(id)) if id == reveal_id
        ));
        assert_eq!(controller.len(), 2);
    }

    #[test]
    fn test_caller_ids_and_allocated_ids_share_the_registry() {
        let mut controller = MotionController::new();
        controller
            .register_reveal(RevealTarget::entrance(TargetId(0), Direction::Up))
            .unwrap();
        controller
            .register_reveal(RevealTarget::entrance(TargetId(1), Direction::Left))
            .unwrap();

        let layer_id = controller
            .register_parallax(ParallaxLayer::new(0.3).unwrap())
            .unwrap();
        assert_eq!(layer_id, TargetId(2));
        let next = controller
            .register_parallax(ParallaxLayer::new(0.5).unwrap())
            .unwrap();
        assert_eq!(next, TargetId(3));
        assert_eq!(controller.len(), 4);

        let styles = controller.tick(1000.0, 1000.0, |_| Some(100.0));
        assert_eq!(styles.len(), 4);
    }
}
