//! Grip cycle against real hardware.
//!
//! Connects to a gripper at the factory-default address, activates it and
//! runs one close/open cycle. Set `RUST_LOG=debug` for command traces.

use gripline_client::{GripperClient, GripperConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut gripper = GripperClient::new(GripperConfig::default());
    if !gripper.is_connected() {
        return Err("gripper did not initialize, check the connection".into());
    }

    println!("position: {}", gripper.position()?);
    println!("gripping...");
    let closed = gripper.grip(true)?;
    println!("closed at {}", closed);
    println!("releasing...");
    let open = gripper.release(true)?;
    println!("open at {}", open);
    Ok(())
}
