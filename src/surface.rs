//! The render surface the rotator drives.
//!
//! A surface holds the slides currently attached to it in display order and a
//! horizontal offset applied to the whole strip. The rotator never looks at
//! how a surface draws anything; it only issues the commands below and waits
//! for the host to deliver a completion once a timed offset change finishes.

use std::fmt::Debug;
use std::time::Duration;

/// Where a slide is attached relative to an anchor slide.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Placement {
    Before,
    After,
}

/// How an offset change is applied.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Motion {
    /// Applied immediately. Produces no completion.
    Instant,
    /// Animated over the given duration. Produces a completion when done.
    Timed(Duration),
}

pub trait RenderSurface {
    type Handle: Clone + PartialEq + Debug;

    /// Attach `handle` next to `anchor`, which is already attached.
    fn insert_adjacent(
        &mut self,
        anchor: &Self::Handle,
        handle: &Self::Handle,
        placement: Placement,
    );

    /// Detach `handle`. Detaching a slide that is not attached does nothing.
    fn remove(&mut self, handle: &Self::Handle);

    /// Move the strip to `px` (negative values shift it left).
    fn set_offset(&mut self, px: f32, motion: Motion);

    fn set_visible(&mut self, handle: &Self::Handle, visible: bool);

    /// Arm a one-shot completion for the offset change in flight.
    fn subscribe_completion(&mut self);
}
