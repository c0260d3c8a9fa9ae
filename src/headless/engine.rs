use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::debug;

use crate::carousel::{Carousel, Control, Key, Message};
use crate::error::{CarouselError, Result};
use crate::headless::surface::HeadlessSurface;
use crate::slide::Slide;
use crate::state::RotatorState;

/// Host input delivered once the clock reaches `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub at: Duration,
    pub message: Message,
}

impl FromStr for ScheduledEvent {
    type Err = CarouselError;

    /// Parses `<ms>=<event>`, e.g. `1500=next`.
    fn from_str(entry: &str) -> Result<Self> {
        let invalid = |reason: &str| CarouselError::InvalidEvent {
            entry: entry.to_string(),
            reason: reason.to_string(),
        };

        let (at, name) = entry
            .trim()
            .split_once('=')
            .ok_or_else(|| invalid("expected <ms>=<event>"))?;
        let at: u64 = at.trim().parse().map_err(|_| invalid("time is not a number"))?;
        let message = match name.trim() {
            "next" => Message::Click(Control::Next),
            "prev" => Message::Click(Control::Previous),
            "enter-next" => Message::KeyDown(Control::Next, Key::Enter),
            "enter-prev" => Message::KeyDown(Control::Previous, Key::Enter),
            "focus-in" => Message::FocusIn,
            "focus-out" => Message::FocusOut,
            _ => return Err(invalid("unknown event")),
        };

        Ok(Self {
            at: Duration::from_millis(at),
            message,
        })
    }
}

/// Parses a comma separated event list. Empty entries are skipped.
pub fn parse_events(list: &str) -> Result<Vec<ScheduledEvent>> {
    list.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse::<ScheduledEvent>)
        .collect()
}

/// What the carousel shows after a frame in which something changed.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub at: Duration,
    pub active: usize,
    pub window: Vec<String>,
    pub state: RotatorState,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={}ms active={} window=[{}] state={}",
            self.at.as_millis(),
            self.active,
            self.window.join("|"),
            self.state
        )
    }
}

pub struct HeadlessEngine {
    carousel: Carousel<HeadlessSurface<Slide>>,
    events: VecDeque<ScheduledEvent>,
    clock: Duration,
    // Window and lock as last printed.
    last: Option<(Vec<usize>, bool)>,
}

impl HeadlessEngine {
    pub fn new(
        carousel: Carousel<HeadlessSurface<Slide>>,
        mut events: Vec<ScheduledEvent>,
    ) -> Self {
        events.sort_by_key(|event| event.at);
        Self {
            carousel,
            events: events.into(),
            clock: Duration::ZERO,
            last: None,
        }
    }

    /// Runs one fixed step: the surface animation already in flight, then
    /// scripted input, then the timer. Animations started during the frame
    /// only begin to move on the next one. Returns a report when the visible
    /// window or state changed.
    pub fn render_frame(&mut self, dt: Duration) -> Option<FrameReport> {
        self.clock += dt;

        if self.carousel.rotator_mut().surface_mut().update(dt) {
            self.carousel.handle(Message::TransitionEnd);
        }

        while let Some(event) = self.events.pop_front() {
            if event.at > self.clock {
                self.events.push_front(event);
                break;
            }
            debug!("t={}ms delivering {:?}", self.clock.as_millis(), event.message);
            self.carousel.handle(event.message);
        }

        self.carousel.update(dt);

        self.report_if_changed()
    }

    /// The frame before any time has passed.
    pub fn initial_frame(&mut self) -> FrameReport {
        self.last = None;
        self.report_if_changed().unwrap_or_else(|| self.snapshot())
    }

    fn report_if_changed(&mut self) -> Option<FrameReport> {
        let rotator = self.carousel.rotator();
        let current = (rotator.visible_window().to_vec(), rotator.is_locked());
        if self.last.as_ref() == Some(&current) {
            return None;
        }
        self.last = Some(current);
        Some(self.snapshot())
    }

    fn snapshot(&self) -> FrameReport {
        let rotator = self.carousel.rotator();
        FrameReport {
            at: self.clock,
            active: rotator.active_index(),
            window: rotator.visible_slides().iter().map(|s| s.to_string()).collect(),
            state: rotator.state(),
        }
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn carousel(&self) -> &Carousel<HeadlessSurface<Slide>> {
        &self.carousel
    }
}
