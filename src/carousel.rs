use std::time::Duration;

use log::trace;

use crate::autoplay::AutoAdvance;
use crate::config::CarouselConfig;
use crate::error::Result;
use crate::rotator::SlideRotator;
use crate::state::Direction;
use crate::surface::RenderSurface;

/// The two navigation arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

impl Control {
    pub fn direction(self) -> Direction {
        match self {
            Control::Previous => Direction::Backward,
            Control::Next => Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Everything the host can tell a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Tick,
    Click(Control),
    KeyDown(Control, Key),
    FocusIn,
    FocusOut,
    TransitionEnd,
}

/// One carousel instance: the rotator, its timer and its controls.
pub struct Carousel<S: RenderSurface> {
    rotator: SlideRotator<S>,
    autoplay: AutoAdvance,
}

impl<S: RenderSurface> Carousel<S> {
    pub fn new(slides: Vec<S::Handle>, surface: S, config: &CarouselConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rotator: SlideRotator::new(slides, surface, config)?,
            autoplay: AutoAdvance::new(config.interval_delay),
        })
    }

    pub fn handle(&mut self, message: Message) {
        trace!("message {:?}", message);
        match message {
            Message::Tick => {
                self.rotator.request_advance(Direction::Forward);
            }
            Message::Click(control) | Message::KeyDown(control, Key::Enter) => {
                self.rotator.request_advance(control.direction());
            }
            Message::KeyDown(_, Key::Other) => {}
            Message::FocusIn => self.autoplay.pause(),
            Message::FocusOut => self.autoplay.resume(),
            Message::TransitionEnd => self.rotator.on_transition_complete(),
        }
    }

    /// Advances the automatic timer, ticking the carousel when due.
    pub fn update(&mut self, dt: Duration) {
        if self.autoplay.update(dt) {
            self.handle(Message::Tick);
        }
    }

    pub fn rotator(&self) -> &SlideRotator<S> {
        &self.rotator
    }

    pub fn rotator_mut(&mut self) -> &mut SlideRotator<S> {
        &mut self.rotator
    }

    pub fn autoplay(&self) -> &AutoAdvance {
        &self.autoplay
    }
}
