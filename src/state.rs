#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // Moving to a higher slide number
    Backward, // Moving to a lower slide number
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AutoPlayState {
    Stopped, // No automatic advancement
    Running, // One advance timer is pending
    Paused,  // Autoplay armed, timer suspended
}
