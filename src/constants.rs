use std::time::Duration;

pub const SLIDE_WIDTH: f32 = 1920.0;                                // Width of one slide on the render surface (px)
pub const FPS: u32 = 60;                                            // Frames per second of the headless loop

pub const ANIMATION_SPEED: Duration = Duration::from_millis(500);   // Duration of one slide offset animation
pub const INTERVAL_DELAY: Duration = Duration::from_millis(2000);   // Delay between automatic advances
pub const SNAP_DURATION: Duration = Duration::from_micros(1);       // Near-instant offset change that still completes

pub const ANIMATION_SPEED_ATTR: &str = "data-animation-speed";
pub const INTERVAL_DELAY_ATTR: &str = "data-interval-delay";
