/// Snapshot of an issued movement path
///
/// What a tank controller needs to schedule the turn and the drive.

use glam::DVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementPlan {
    pub start: DVec2,
    pub destination: DVec2,

    pub starting_angle: f64,
    pub distance: f64,
    pub rotation_angle: f64,
    pub rotation_duration_ms: f64,
    pub movement_duration_ms: f64,

    /// Percent, 100 = none
    pub speed_correction: f64,
}

impl MovementPlan {
    /// Heading the tank ends up with after the rotation, in [-180, 180]
    pub fn final_angle(&self) -> f64 {
        super::path::normalize_degrees(self.starting_angle + self.rotation_angle)
    }

    /// Rotate first, then drive
    pub fn total_duration_ms(&self) -> f64 {
        self.rotation_duration_ms + self.movement_duration_ms
    }
}
