//! Drop a slow object from 129 km and report the impact.
//!
//! Run with: cargo run --example suborbital_impact

use impactor::scenarios::SUBORBITAL_IMPACT;
use impactor::StepResult;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scenario = &SUBORBITAL_IMPACT;
    println!("=== {} ===", scenario.name);
    println!("{}\n", scenario.description);

    let mut driver = scenario.build()?;

    // Tick by hand to print the descent every 30 s
    loop {
        match driver.tick()? {
            StepResult::Continued(pos) => {
                if driver.steps_taken() % 30 == 0 {
                    println!(
                        "    t = {:>4.0} s: altitude {:>7.2} km",
                        driver.elapsed(),
                        (pos.length() - driver.constants().central_radius()) / 1000.0
                    );
                }
            }
            StepResult::Collided { .. } | StepResult::Halted(_) => break,
        }
    }

    match driver.impact() {
        Some(impact) => {
            println!("\n  IMPACT at step {} (t = {:.0} s)", impact.step, impact.time);
            println!("  Impact speed: {:.3} km/s", impact.impact_speed_km_s());
            println!(
                "  Overshoot below surface: {:.1} m",
                impact.penetration_depth(driver.constants())
            );
        }
        None => println!("\n  No impact within {} steps", driver.steps_taken()),
    }
    println!("  Recorded points: {}", driver.trajectory().len());

    Ok(())
}
