//! Generation command: runs the simulated generation flow for a project.

use anyhow::Result;
use appforge_application::{GenerationDriver, ProjectService};
use appforge_core::generation::GenerationStatus;

pub async fn run(
    projects: &ProjectService,
    driver: &GenerationDriver,
    project_id: &str,
    from: Option<u8>,
) -> Result<()> {
    let Some(project) = projects.get(project_id).await? else {
        println!("No project with id '{}'.", project_id);
        return Ok(());
    };

    println!("Generating {}...", project.name);
    let handle = driver.start_from(from.unwrap_or(0));
    let mut updates = handle.subscribe();
    let mut reported_phases = handle.snapshot().completed_phases().len();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                handle.cancel();
                println!("\nGeneration cancelled.");
                return Ok(());
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow().clone();
                let phases = state.completed_phases();
                for phase in &phases[reported_phases..] {
                    println!("  [{:>3}%] {}", phase.threshold(), phase.label());
                }
                reported_phases = phases.len();

                if state.is_terminal() {
                    match state.status {
                        GenerationStatus::Completed => println!("Generation complete."),
                        GenerationStatus::Failed => println!(
                            "Generation failed: {}",
                            state.failure.as_deref().unwrap_or("unknown error")
                        ),
                        _ => {}
                    }
                    break;
                }
            }
        }
    }

    Ok(())
}
