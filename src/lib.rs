//! Point-to-point tank movement kinematics
//!
//! Distance, heading change and timing for a single tank move between
//! two places on a 2D battlefield.

pub mod config;
pub mod movement;

pub use config::TankoidConfig;
pub use movement::{MovementPath, Place};
