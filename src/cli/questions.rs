//! Questions command - list the registry

use anyhow::Result;
use console::style;
use life_evaluator::Registry;

/// Print every question grouped by category, with weights
pub fn run() -> Result<()> {
    let registry = Registry::standard();

    for category in registry.categories() {
        println!("\n{}", style(category.heading()).bold());
        for q in registry.in_category(category) {
            let weight = if q.weight > 1 {
                style(format!("x{}", q.weight)).yellow().to_string()
            } else {
                style("x1".to_string()).dim().to_string()
            };
            println!("  {:>3}  {:<20} {}  {}", q.id.0 + 1, q.label, weight, q.prompt);
        }
    }

    println!(
        "\n{} questions, {} points possible, {}% needed to pass",
        registry.questions().len(),
        registry.max_score(),
        life_evaluator::scoring::PASS_PERCENT
    );
    Ok(())
}
