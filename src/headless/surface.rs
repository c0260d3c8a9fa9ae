use std::fmt::Debug;
use std::time::Duration;

use log::{trace, warn};

use crate::surface::{Motion, Placement, RenderSurface};

/// One command received by a [`HeadlessSurface`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp<H> {
    Insert { anchor: H, handle: H, placement: Placement },
    Remove(H),
    SetOffset { px: f32, motion: Motion },
    SetVisible { handle: H, visible: bool },
    Subscribe,
}

#[derive(Debug, Clone)]
struct OffsetAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

/// In-memory render surface. Timed offsets are interpolated linearly by
/// [`HeadlessSurface::update`], which also reports when an armed completion
/// fires.
#[derive(Debug, Clone)]
pub struct HeadlessSurface<H> {
    nodes: Vec<H>,
    visible: Vec<H>,
    offset: f32,
    animation: Option<OffsetAnimation>,
    completion_armed: bool,
    ops: Vec<SurfaceOp<H>>,
}

impl<H: Clone + PartialEq + Debug> HeadlessSurface<H> {
    /// A surface with every slide of the initial markup attached.
    pub fn new(nodes: Vec<H>) -> Self {
        Self {
            nodes,
            visible: Vec::new(),
            offset: 0.0,
            animation: None,
            completion_armed: false,
            ops: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[H] {
        &self.nodes
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_visible(&self, handle: &H) -> bool {
        self.visible.contains(handle)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn completion_armed(&self) -> bool {
        self.completion_armed
    }

    pub fn ops(&self) -> &[SurfaceOp<H>] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Advances the offset animation by `dt`. Returns `true` when an armed
    /// completion fires; the caller forwards it to the carousel.
    pub fn update(&mut self, dt: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        animation.elapsed += dt;
        let t = if animation.duration.is_zero() {
            1.0
        } else {
            (animation.elapsed.as_secs_f32() / animation.duration.as_secs_f32()).min(1.0)
        };
        self.offset = animation.from + (animation.to - animation.from) * t;

        if animation.elapsed < animation.duration {
            return false;
        }

        self.offset = animation.to;
        self.animation = None;
        if self.completion_armed {
            self.completion_armed = false;
            trace!("offset animation finished, delivering completion");
            true
        } else {
            false
        }
    }
}

impl<H: Clone + PartialEq + Debug> RenderSurface for HeadlessSurface<H> {
    type Handle = H;

    fn insert_adjacent(&mut self, anchor: &H, handle: &H, placement: Placement) {
        self.ops.push(SurfaceOp::Insert {
            anchor: anchor.clone(),
            handle: handle.clone(),
            placement,
        });

        // Attaching an already attached node moves it.
        self.nodes.retain(|node| node != handle);
        match self.nodes.iter().position(|node| node == anchor) {
            Some(pos) => {
                let at = match placement {
                    Placement::Before => pos,
                    Placement::After => pos + 1,
                };
                self.nodes.insert(at, handle.clone());
            }
            None => {
                warn!("anchor {:?} is not attached, appending {:?}", anchor, handle);
                self.nodes.push(handle.clone());
            }
        }
    }

    fn remove(&mut self, handle: &H) {
        self.ops.push(SurfaceOp::Remove(handle.clone()));
        self.nodes.retain(|node| node != handle);
    }

    fn set_offset(&mut self, px: f32, motion: Motion) {
        self.ops.push(SurfaceOp::SetOffset { px, motion });
        match motion {
            Motion::Instant => {
                self.offset = px;
                self.animation = None;
            }
            Motion::Timed(duration) => {
                self.animation = Some(OffsetAnimation {
                    from: self.offset,
                    to: px,
                    duration,
                    elapsed: Duration::ZERO,
                });
            }
        }
    }

    fn set_visible(&mut self, handle: &H, visible: bool) {
        self.ops.push(SurfaceOp::SetVisible {
            handle: handle.clone(),
            visible,
        });
        self.visible.retain(|h| h != handle);
        if visible {
            self.visible.push(handle.clone());
        }
    }

    fn subscribe_completion(&mut self) {
        self.ops.push(SurfaceOp::Subscribe);
        self.completion_armed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_places_node_next_to_anchor() {
        let mut surface = HeadlessSurface::new(vec![1, 2]);
        surface.insert_adjacent(&1, &3, Placement::After);
        surface.insert_adjacent(&1, &4, Placement::Before);
        assert_eq!(surface.nodes(), [4, 1, 3, 2]);
    }

    #[test]
    fn inserting_attached_node_moves_it() {
        let mut surface = HeadlessSurface::new(vec![1, 2, 3]);
        surface.insert_adjacent(&1, &3, Placement::Before);
        assert_eq!(surface.nodes(), [3, 1, 2]);
    }

    #[test]
    fn timed_offset_interpolates_and_completes_once() {
        let mut surface = HeadlessSurface::new(vec!['a']);
        surface.set_offset(-100.0, Motion::Timed(Duration::from_millis(100)));
        surface.subscribe_completion();

        assert!(!surface.update(Duration::from_millis(50)));
        assert!((surface.offset() + 50.0).abs() < 0.01);

        assert!(surface.update(Duration::from_millis(50)));
        assert_eq!(surface.offset(), -100.0);
        assert!(!surface.is_animating());
        assert!(!surface.update(Duration::from_millis(50)));
    }

    #[test]
    fn instant_offset_never_completes() {
        let mut surface = HeadlessSurface::new(vec!['a']);
        surface.subscribe_completion();
        surface.set_offset(-100.0, Motion::Instant);
        assert_eq!(surface.offset(), -100.0);
        assert!(!surface.update(Duration::from_secs(1)));
        assert!(surface.completion_armed());
    }

    #[test]
    fn timed_offset_without_subscription_is_silent() {
        let mut surface = HeadlessSurface::new(vec!['a']);
        surface.set_offset(10.0, Motion::Timed(Duration::from_millis(10)));
        assert!(!surface.update(Duration::from_millis(20)));
        assert_eq!(surface.offset(), 10.0);
    }

    #[test]
    fn visibility_is_tracked_per_handle() {
        let mut surface = HeadlessSurface::new(vec!['a', 'b']);
        surface.set_visible(&'a', true);
        surface.set_visible(&'b', true);
        surface.set_visible(&'a', false);
        assert!(!surface.is_visible(&'a'));
        assert!(surface.is_visible(&'b'));
    }
}
