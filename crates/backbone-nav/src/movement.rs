//! Moving things along world-space paths, one tick at a time.

use backbone_core::Vec2;

use crate::converter::WorldPath;

/// Anything with a world position that can be moved.
pub trait Movable {
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);

    /// Turn to face `radians` (measured from +x towards +y).
    fn face(&mut self, _radians: f32) {}
}

impl Movable for Vec2 {
    fn position(&self) -> Vec2 {
        *self
    }

    fn set_position(&mut self, position: Vec2) {
        *self = position;
    }
}

/// Result of one bounded step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Position after the step.
    pub position: Vec2,
    /// Distance to the destination before the step.
    pub distance: f32,
    /// Heading towards the destination in radians.
    pub angle: f32,
}

/// Move from `position` at most `max_step` towards `destination`.
///
/// Lands exactly on `destination` when it is within reach, so callers can
/// compare positions for arrival.
pub fn step_towards(position: Vec2, destination: Vec2, max_step: f32) -> Step {
    let angle = (destination - position).angle();
    let distance = position.distance(destination);
    let position = if distance <= max_step {
        destination
    } else {
        position + Vec2::new(angle.cos(), angle.sin()) * max_step
    };
    Step {
        position,
        distance,
        angle,
    }
}

/// Step `mover` towards `destination`, optionally turning it to face the
/// direction of travel. A mover already at its destination is not turned.
pub fn move_toward<M: Movable + ?Sized>(
    mover: &mut M,
    destination: Vec2,
    max_step: f32,
    orient: bool,
) -> Step {
    let step = step_towards(mover.position(), destination, max_step);
    mover.set_position(step.position);
    if orient && step.distance != 0.0 {
        mover.face(step.angle);
    }
    step
}

/// Advance `mover` towards the front waypoint of `path`, popping the waypoint
/// once it is reached.
///
/// The mover travels at most `elapsed_ms × speed_per_ms` and always stops at
/// the waypoint, even if it could have gone further this tick. Returns `None`
/// without moving when the path is empty.
pub fn move_along_path<M: Movable + ?Sized>(
    mover: &mut M,
    path: &mut WorldPath,
    elapsed_ms: u64,
    speed_per_ms: f32,
    orient: bool,
) -> Option<Step> {
    let destination = *path.front()?;
    let step = move_toward(mover, destination, elapsed_ms as f32 * speed_per_ms, orient);
    if mover.position() == destination {
        path.pop_front();
    }
    Some(step)
}
