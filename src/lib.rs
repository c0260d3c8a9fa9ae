//! A cyclic slide carousel.
//!
//! [`SlideRotator`] is the state machine: it keeps exactly one slide
//! transition in flight and drives an abstract [`RenderSurface`].
//! [`Carousel`] wraps it with the automatic rotation timer and the
//! navigation controls, taking host input as [`Message`]s. The
//! [`headless`] module provides an in-memory surface and a frame loop.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod headless;
pub mod rotator;
pub mod slide;
pub mod slide_loader;
pub mod state;
pub mod surface;

#[cfg(test)]
mod rotator_proptest;

pub use autoplay::AutoAdvance;
pub use carousel::{Carousel, Control, Key, Message};
pub use config::CarouselConfig;
pub use error::{CarouselError, ConfigError, Result};
pub use rotator::SlideRotator;
pub use slide::Slide;
pub use state::{Direction, RotatorState, TransitionPhase};
pub use surface::{Motion, Placement, RenderSurface};
