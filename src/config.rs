use anyhow::{ensure, Context, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete tankoid configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TankoidConfig {
    pub tank: TankConfigData,
    pub demo_path: PathConfigData,
}

impl TankoidConfig {
    /// Load configuration from JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: TankoidConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to JSON file with pretty formatting
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load or create default configuration
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("using default config ({:#})", e);
            let config = Self::default();
            // Try to save the default config
            if let Err(e) = config.save(path) {
                log::debug!("could not write default config: {:#}", e);
            }
            config
        })
    }

    /// Reject speeds and corrections that would make durations infinite or NaN
    pub fn validate(&self) -> Result<()> {
        let tank = &self.tank;
        ensure!(
            tank.movement_speed.is_finite() && tank.movement_speed > 0.0,
            "movement_speed must be positive, got {}",
            tank.movement_speed
        );
        ensure!(
            tank.rotation_speed.is_finite() && tank.rotation_speed > 0.0,
            "rotation_speed must be positive, got {}",
            tank.rotation_speed
        );
        ensure!(
            tank.speed_correction.is_finite() && tank.speed_correction > 0.0,
            "speed_correction must be positive, got {}",
            tank.speed_correction
        );
        ensure!(
            (-180.0..=180.0).contains(&self.demo_path.starting_angle),
            "starting_angle must be within [-180, 180], got {}",
            self.demo_path.starting_angle
        );
        Ok(())
    }
}

/// Tank motion parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankConfigData {
    /// Units per second
    pub movement_speed: f64,
    /// Degrees per second
    pub rotation_speed: f64,
    /// Percent, 100 = no correction
    #[serde(default = "default_speed_correction")]
    pub speed_correction: f64,
}

fn default_speed_correction() -> f64 {
    crate::movement::NO_SPEED_CORRECTION
}

impl Default for TankConfigData {
    fn default() -> Self {
        Self {
            movement_speed: 100.0,
            rotation_speed: 180.0,
            speed_correction: default_speed_correction(),
        }
    }
}

/// Path driven by the demo binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfigData {
    #[serde(with = "dvec2_serde")]
    pub start: DVec2,

    #[serde(with = "dvec2_serde")]
    pub destination: DVec2,

    pub starting_angle: f64,
}

impl Default for PathConfigData {
    fn default() -> Self {
        Self {
            start: DVec2::new(100.0, 100.0),
            destination: DVec2::new(400.0, 500.0),
            starting_angle: 90.0,
        }
    }
}

/// Custom serialization for DVec2 as an `{x, y}` object
mod dvec2_serde {
    use glam::DVec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct DVec2Data {
        x: f64,
        y: f64,
    }

    pub fn serialize<S>(vec: &DVec2, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DVec2Data { x: vec.x, y: vec.y }.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DVec2, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = DVec2Data::deserialize(deserializer)?;
        Ok(DVec2::new(data.x, data.y))
    }
}
