/// Point-to-point tank movement path
///
/// A path stores where a tank starts, where it drives to, which way it is
/// facing and how fast it drives and turns. Everything else (distance,
/// rotation, durations) is derived on demand from those five values.

use super::place::{format_rounded, Place};
use super::plan::MovementPlan;
use std::fmt;

/// Speed correction that leaves the configured speed untouched (percent)
pub const NO_SPEED_CORRECTION: f64 = 100.0;

/// Immutable route a tank takes from a starting place to a destination
///
/// Angles are in degrees, counter-clockwise, with 0 pointing along +X.
/// Places use screen coordinates (Y grows downward), so the Y delta is
/// inverted before computing the heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementPath<P: Place> {
    starting_place: P,
    destination_place: P,
    /// Current facing of the tank (degrees)
    starting_angle: f64,
    /// Units per second
    movement_speed: f64,
    /// Degrees per second
    rotation_speed: f64,
}

impl<P: Place> MovementPath<P> {
    /// Create a path. Speeds are expected to be > 0 and `starting_angle`
    /// within [-180, 180]; neither is checked.
    pub fn new(
        starting_place: P,
        destination_place: P,
        starting_angle: f64,
        movement_speed: f64,
        rotation_speed: f64,
    ) -> Self {
        Self {
            starting_place,
            destination_place,
            starting_angle,
            movement_speed,
            rotation_speed,
        }
    }

    /// Straight-line distance between the two places
    ///
    /// The route the tank actually drives may be longer.
    pub fn distance(&self) -> f64 {
        let dx = (self.destination_place.x() - self.starting_place.x()).abs();
        let dy = (self.destination_place.y() - self.starting_place.y()).abs();
        (dx * dx + dy * dy).sqrt()
    }

    /// Signed rotation (degrees, [-180, 180]) needed to face the destination
    /// from the starting angle. Positive is counter-clockwise.
    pub fn rotation_angle(&self) -> f64 {
        let dx = self.destination_place.x() - self.starting_place.x();
        // Screen Y grows downward
        let dy = -(self.destination_place.y() - self.starting_place.y());

        let heading = dy.atan2(dx).to_degrees();
        let rotation = normalize_degrees(heading - self.starting_angle);

        debug_assert!(
            rotation.is_nan() || (-180.0..=180.0).contains(&rotation),
            "rotation angle {} out of range",
            rotation
        );

        rotation
    }

    /// Time to drive the full distance at full speed (milliseconds)
    pub fn movement_duration(&self) -> f64 {
        (self.distance() / self.movement_speed) * 1000.0
    }

    /// Time to drive the full distance with a percentage speed correction
    /// applied (100 = no correction, 50 = half speed). Milliseconds.
    pub fn movement_duration_with(&self, speed_correction: f64) -> f64 {
        (self.distance() / corrected_rate(self.movement_speed, speed_correction)) * 1000.0
    }

    /// Time to turn towards the destination at full rotation speed (milliseconds)
    pub fn rotation_duration(&self) -> f64 {
        (self.rotation_angle() / self.rotation_speed).abs() * 1000.0
    }

    /// Time to turn towards the destination with a percentage speed
    /// correction applied. Scales the same way as `movement_duration_with`:
    /// the rate becomes `rotation_speed * correction / 100`, so 200 halves
    /// the duration.
    ///
    /// The legacy tank code used `rotation_speed * 100 / correction` here,
    /// which slowed rotation down for corrections above 100. Tuning values
    /// ported from it need their correction inverted (`10_000 / c`).
    pub fn rotation_duration_with(&self, speed_correction: f64) -> f64 {
        (self.rotation_angle() / corrected_rate(self.rotation_speed, speed_correction)).abs()
            * 1000.0
    }

    pub fn starting_place(&self) -> &P {
        &self.starting_place
    }

    pub fn destination_place(&self) -> &P {
        &self.destination_place
    }

    pub fn starting_angle(&self) -> f64 {
        self.starting_angle
    }

    pub fn movement_speed(&self) -> f64 {
        self.movement_speed
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    /// Snapshot the derived quantities for a given speed correction
    pub fn plan(&self, speed_correction: f64) -> MovementPlan {
        MovementPlan {
            start: self.starting_place.to_dvec2(),
            destination: self.destination_place.to_dvec2(),
            starting_angle: self.starting_angle,
            distance: self.distance(),
            rotation_angle: self.rotation_angle(),
            rotation_duration_ms: self.rotation_duration_with(speed_correction),
            movement_duration_ms: self.movement_duration_with(speed_correction),
            speed_correction,
        }
    }
}

impl<P: Place + Clone> MovementPath<P> {
    /// The same path driven the other way, keeping angle and speeds
    pub fn reversed(&self) -> Self {
        Self::new(
            self.destination_place.clone(),
            self.starting_place.clone(),
            self.starting_angle,
            self.movement_speed,
            self.rotation_speed,
        )
    }
}

impl<P: Place> fmt::Display for MovementPath<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From: ({}, {}), to: ({}, {}), distance: {}, rotation angle: {}",
            format_rounded(self.starting_place.x()),
            format_rounded(self.starting_place.y()),
            format_rounded(self.destination_place.x()),
            format_rounded(self.destination_place.y()),
            format_rounded(self.distance()),
            format_rounded(self.rotation_angle()),
        )
    }
}

/// Apply a percentage correction to a rate (100 leaves it unchanged)
fn corrected_rate(rate: f64, speed_correction: f64) -> f64 {
    rate * (speed_correction / 100.0)
}

/// Wrap an angle in degrees into [-180, 180]
///
/// Values within one turn of the range get a single +-360 correction, so
/// +-180 stay as they are. Anything further out is wrapped fully.
/// Non-finite input yields NaN.
pub fn normalize_degrees(angle: f64) -> f64 {
    let mut wrapped = angle;
    if wrapped < -180.0 {
        wrapped += 360.0;
    } else if wrapped > 180.0 {
        wrapped -= 360.0;
    }

    if wrapped < -180.0 || wrapped > 180.0 {
        wrapped = (wrapped + 180.0).rem_euclid(360.0) - 180.0;
    }

    wrapped
}
