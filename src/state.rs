use std::fmt;

/// Which way the carousel travels.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // Next slide comes in from the right
    Backward, // Previous slide comes in from the left
}

impl Direction {
    /// Index step applied to the active slide.
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionPhase {
    Sliding,   // First offset animation in flight
    Centering, // Backward only: offset animating back to zero
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RotatorState {
    Idle,
    Transitioning {
        direction: Direction,
        phase: TransitionPhase,
    },
}

impl RotatorState {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, RotatorState::Transitioning { .. })
    }
}

impl fmt::Display for RotatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotatorState::Idle => write!(f, "Idle"),
            RotatorState::Transitioning { .. } => write!(f, "Transitioning"),
        }
    }
}
