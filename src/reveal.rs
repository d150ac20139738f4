use raylib::ease;
use raylib::prelude::*;
use crate::deck::ElementGroup;

/// Offset, scale and opacity of one element relative to its resting cell.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Pose {
    pub offset: Vector2,
    pub scale: f32,
    pub opacity: f32,
}

impl Pose {
    pub const HIDDEN: Pose = Pose {
        offset: Vector2 { x: 0.0, y: 0.0 },
        scale: 1.0,
        opacity: 0.0,
    };

    pub const RESTING: Pose = Pose {
        offset: Vector2 { x: 0.0, y: 0.0 },
        scale: 1.0,
        opacity: 1.0,
    };
}

/// Pose of element `index` of `group`, `elapsed_ms` after the slide's
/// choreography started. `None` means the choreography has not started yet.
pub fn pose(group: &ElementGroup, index: usize, elapsed_ms: Option<f32>) -> Pose {
    let Some(elapsed_ms) = elapsed_ms else {
        return Pose::HIDDEN;
    };

    let delay = group.start_ms as f32 + group.stagger_ms as f32 * index as f32;
    let local = elapsed_ms - delay;
    if local < 0.0 {
        return Pose::HIDDEN;
    }

    let duration = group.duration_ms.max(1) as f32;
    if local >= duration {
        return Pose::RESTING;
    }

    let t = ease::expo_out(local, 0.0, 1.0, duration);

    let entrance = &group.entrance;
    let dx = if entrance.alternate && index % 2 == 1 {
        -entrance.dx
    } else {
        entrance.dx
    };

    Pose {
        offset: Vector2::new(dx * (1.0 - t), entrance.dy * (1.0 - t)),
        scale: entrance.scale + (1.0 - entrance.scale) * t,
        opacity: t,
    }
}
