use tankoid::movement::{GridPlace, MovementPath};
use tankoid::TankoidConfig;

const DEFAULT_CONFIG_PATH: &str = "config/tankoid.json";

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_path =
        std::env::var("TANKOID_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    log::info!("loading config from {}", config_path);

    let config = TankoidConfig::load_or_default(&config_path);
    config.validate()?;

    let tank = &config.tank;
    let demo = &config.demo_path;
    let start = GridPlace::from(demo.start);
    let destination = GridPlace::from(demo.destination);

    let path = MovementPath::new(
        &start,
        &destination,
        demo.starting_angle,
        tank.movement_speed,
        tank.rotation_speed,
    );

    log::info!("{}", path);
    log::info!(
        "rotate {:.0} ms, drive {:.0} ms at {}% speed",
        path.rotation_duration_with(tank.speed_correction),
        path.movement_duration_with(tank.speed_correction),
        tank.speed_correction
    );

    let plan = path.plan(tank.speed_correction);
    log::info!(
        "arrives facing {:.2} after {:.0} ms",
        plan.final_angle(),
        plan.total_duration_ms()
    );

    Ok(())
}
