//! Cyclic slide rotation with a single transition in flight.
//!
//! The rotator keeps one slide attached to the surface while idle. Advancing
//! attaches the next (or previous) slide beside it, slides the strip by one
//! slide width and waits for the surface to report completion before the
//! outgoing slide is detached and a new advance is accepted.
//!
//! Forward steps need one animation: the incoming slide sits to the right, the
//! strip slides left, and on completion the offset snaps back to zero as the
//! outgoing slide is removed. Backward steps attach the incoming slide to the
//! left, so the strip first snaps left to keep the current slide in place and
//! then animates back to zero. The outgoing slide is removed, and the lock
//! released, only after that second animation.

use std::time::Duration;

use log::{debug, info, trace};

use crate::config::CarouselConfig;
use crate::constants::SNAP_DURATION;
use crate::error::{CarouselError, Result};
use crate::state::{Direction, RotatorState, TransitionPhase};
use crate::surface::{Motion, Placement, RenderSurface};

pub struct SlideRotator<S: RenderSurface> {
    slides: Vec<S::Handle>,
    surface: S,

    animation_speed: Duration,
    slide_width: f32,

    state: RotatorState,
    active_index: usize,
    outgoing_index: usize,

    // Indices of attached slides, in surface order.
    window: Vec<usize>,
}

impl<S: RenderSurface> SlideRotator<S> {
    /// Takes over `surface`, detaching every slide except the first.
    /// Handles must be distinct: the surface tells slides apart by equality.
    pub fn new(slides: Vec<S::Handle>, mut surface: S, config: &CarouselConfig) -> Result<Self> {
        let Some(first) = slides.first() else {
            return Err(CarouselError::NoSlides);
        };
        for (index, slide) in slides.iter().enumerate() {
            if let Some(earlier) = slides[..index].iter().position(|other| other == slide) {
                return Err(CarouselError::DuplicateSlide {
                    index,
                    first: earlier,
                });
            }
        }

        for slide in slides.iter().skip(1) {
            surface.remove(slide);
        }
        surface.set_visible(first, true);
        info!("carousel ready with {} slides", slides.len());

        Ok(Self {
            slides,
            surface,
            animation_speed: config.animation_speed,
            slide_width: config.slide_width,
            state: RotatorState::Idle,
            active_index: 0,
            outgoing_index: 0,
            window: vec![0],
        })
    }

    /// Starts a transition towards `direction`. Returns `false` when the
    /// request is ignored because a transition is already in flight or there
    /// is no other slide to bring in.
    pub fn request_advance(&mut self, direction: Direction) -> bool {
        if self.state.is_transitioning() {
            debug!("ignoring {:?} advance, transition in flight", direction);
            return false;
        }
        if self.slides.len() == 1 {
            debug!("ignoring {:?} advance, single slide", direction);
            return false;
        }

        let outgoing = self.active_index;
        let incoming = self.wrap(outgoing, direction);
        self.state = RotatorState::Transitioning {
            direction,
            phase: TransitionPhase::Sliding,
        };
        self.outgoing_index = outgoing;
        self.active_index = incoming;

        let (current, next) = (&self.slides[outgoing], &self.slides[incoming]);
        match direction {
            Direction::Forward => {
                self.surface.insert_adjacent(current, next, Placement::After);
                self.window = vec![outgoing, incoming];
                self.surface.set_offset(-self.slide_width, Motion::Timed(self.animation_speed));
            }
            Direction::Backward => {
                self.surface.insert_adjacent(current, next, Placement::Before);
                self.window = vec![incoming, outgoing];
                // Keeps the outgoing slide centered behind the new one.
                self.surface.set_offset(-self.slide_width, Motion::Timed(SNAP_DURATION));
            }
        }
        self.surface.set_visible(current, false);
        self.surface.set_visible(next, true);
        self.surface.subscribe_completion();

        debug!("advancing {:?}: slide {} -> {}", direction, outgoing, incoming);
        true
    }

    /// Delivered by the host once per subscribed completion.
    pub fn on_transition_complete(&mut self) {
        let RotatorState::Transitioning { direction, phase } = self.state else {
            trace!("stray transition completion while idle");
            return;
        };

        match (direction, phase) {
            (Direction::Backward, TransitionPhase::Sliding) => {
                self.surface.set_offset(0.0, Motion::Timed(self.animation_speed));
                self.surface.subscribe_completion();
                self.state = RotatorState::Transitioning {
                    direction,
                    phase: TransitionPhase::Centering,
                };
            }
            (Direction::Backward, TransitionPhase::Centering) => self.finish(),
            (Direction::Forward, _) => {
                self.surface.set_offset(0.0, Motion::Instant);
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.surface.remove(&self.slides[self.outgoing_index]);
        self.window = vec![self.active_index];
        self.state = RotatorState::Idle;
        trace!("transition to slide {} complete", self.active_index);
    }

    fn wrap(&self, index: usize, direction: Direction) -> usize {
        let len = self.slides.len() as isize;
        (index as isize + direction.step()).rem_euclid(len) as usize
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn state(&self) -> RotatorState {
        self.state
    }

    /// Indices of the attached slides in surface order.
    pub fn visible_window(&self) -> &[usize] {
        &self.window
    }

    pub fn visible_slides(&self) -> Vec<&S::Handle> {
        self.window.iter().map(|&i| &self.slides[i]).collect()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[S::Handle] {
        &self.slides
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
