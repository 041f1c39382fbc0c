/// Movement system for tank point-to-point driving
///
/// Handles path kinematics: distance, rotation and durations

pub mod path;
pub mod place;
pub mod plan;

pub use path::{normalize_degrees, MovementPath, NO_SPEED_CORRECTION};
pub use place::{GridPlace, Place};
pub use plan::MovementPlan;
