use anyhow::Result;

pub fn run() -> Result<()> {
    let detectors = solbench_detectors::all_detectors();

    println!("{:<20} {:<16} Description", "Name", "Category");
    println!("{}", "-".repeat(90));

    for d in &detectors {
        println!("{:<20} {:<16} {}", d.name(), d.category().as_str(), d.description());
    }

    println!("\nTotal: {} detectors", detectors.len());
    Ok(())
}
