//! Headless rendering: an in-memory surface and a fixed-step frame loop that
//! drives a carousel without any display.

pub mod engine;
pub mod surface;

pub use engine::{FrameReport, HeadlessEngine, ScheduledEvent, parse_events};
pub use surface::{HeadlessSurface, SurfaceOp};
