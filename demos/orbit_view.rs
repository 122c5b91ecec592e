//! Headless walk through the viewer lifecycle.
//!
//! Attaches an Earth–Moon scene, enters the interactive phase, then replays a few slider edits
//! (including a rejected one) and prints the resulting curve.
//!
//! ```text
//! RUST_LOG=keplerview=debug cargo run --example orbit_view -- legacy
//! ```

use keplerview::{
    config::ViewConfig,
    orbit_errors::OrbitError,
    orbit_view::OrbitView,
    orbital_elements::ElementName,
    orientation::OrientationPolicy,
    scene::Scene,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), OrbitError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let policy: OrientationPolicy = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => OrientationPolicy::default(),
    };

    let mut view = OrbitView::new(ViewConfig::default().with_orientation_policy(policy))?;
    view.attach_to(Scene::with_bodies())?;
    view.enter_interactive_phase()?;

    println!("Controls:");
    for name in ElementName::ALL {
        let range = name.control_range();
        println!(
            "  {:<5} {:<28} [{}, {}{}",
            name.key(),
            name.label(),
            range.min,
            range.max,
            if range.max_inclusive { "]" } else { ")" }
        );
    }

    let edits = [("a", 8.0), ("e", 0.7), ("inc", 98.0), ("e", 1.2), ("RAAN", 300.0)];
    for (name, value) in edits {
        match view.set_orbital_element(name, value) {
            Ok(()) => println!("set {name} = {value}"),
            Err(err) => println!("rejected {name} = {value}: {err}"),
        }
    }

    println!("\n{}", view.elements());

    let curve = view.orbit_curve()?;
    let reach = curve.max_focus_distance();
    println!("{} points, apoapsis {reach:.3} Moon radii", curve.len());
    for p in curve.world_points().iter().step_by(25) {
        println!("  ({:>8.3}, {:>8.3}, {:>8.3})", p.x, p.y, p.z);
    }
    Ok(())
}
