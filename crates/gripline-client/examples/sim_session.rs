//! Full session against the simulated gripper, no hardware needed.

use gripline_client::{GripperClient, GripperConfig, MoveOptions, Timing};
use gripline_sim::{DeviceModel, SimGripper};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let sim = SimGripper::spawn(DeviceModel::new())?;
    println!("simulated gripper at {}", sim.addr());

    let config = GripperConfig::default()
        .with_addr(sim.addr())
        .with_auto_init(false)
        .with_timing(Timing::fast());
    let mut gripper = GripperClient::new(config);

    gripper.connect()?;
    gripper.activate()?;

    let reached = gripper.move_to(128, MoveOptions::default().with_speed(100))?;
    println!("moved to {}", reached);
    gripper.grip(true)?;
    gripper.release(true)?;
    println!("done");
    Ok(())
}
