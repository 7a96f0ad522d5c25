//! Propagate the reference low Earth orbit for its full step budget.
//!
//! Prints the orbit classification up front and a run summary with the
//! energy drift the integrator accumulated.
//!
//! Run with: cargo run --example low_orbit

use impactor::outcome::{classify_orbit, energy_drift, OrbitClass};
use impactor::scenarios::LOW_CIRCULAR_ORBIT;
use impactor::TerminalState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scenario = &LOW_CIRCULAR_ORBIT;
    println!("=== {} ===", scenario.name);
    println!("{}\n", scenario.description);

    let mut driver = scenario.build()?;
    let initial = *driver.state();

    match classify_orbit(&initial, driver.constants()) {
        Some(OrbitClass::Bound { perigee, apogee, period }) => println!(
            "  Bound orbit: perigee {:.1} km, apogee {:.1} km, period {:.1} min",
            perigee / 1000.0,
            apogee / 1000.0,
            period / 60.0
        ),
        Some(other) => println!("  {other:?}"),
        None => println!("  Initial position is singular"),
    }

    let run = driver.run()?;

    match run.terminal {
        TerminalState::Exhausted => println!("  Budget exhausted after {} steps", run.steps),
        TerminalState::Collided { step } => println!("  Collided at step {step}"),
    }
    println!("  Recorded points: {}", run.trajectory.len());
    if let (Some(min_r), Some(max_r)) = (run.trajectory.min_radius(), run.trajectory.max_radius()) {
        println!(
            "  Radius range: {:.1} km .. {:.1} km",
            min_r / 1000.0,
            max_r / 1000.0
        );
    }
    println!("  Path length: {:.1} km", run.trajectory.path_length() / 1000.0);

    if let Some(drift) = energy_drift(&initial, driver.state(), driver.constants()) {
        println!("  Energy drift: {drift:.3e}");
    }

    Ok(())
}
