//! Requirements command handler

use degree_calc::config::Config;
use degree_calc::core::models::{ProgramCode, ProgramRequirements, ProgramTag};

/// Print the active requirement table, or one program's row
///
/// # Errors
/// Returns a `✗`-prefixed message when the table cannot be loaded or the
/// program code is invalid or missing from it
pub fn run(program: Option<&str>, config: &Config) -> Result<(), String> {
    let table = config.requirement_table().map_err(|e| format!("✗ {e}"))?;

    if config.audit.requirements_file.is_empty() {
        println!("Requirement table: built-in");
    } else {
        println!("Requirement table: {}", config.audit.requirements_file);
    }

    if let Some(code) = program {
        let code: ProgramCode = code.parse().map_err(|e| format!("✗ {e}"))?;
        let requirements = table
            .requirements_for(&code)
            .map_err(|e| format!("✗ {e}"))?;
        print_program(&code, requirements);
        return Ok(());
    }

    for (code, requirements) in table.iter() {
        print_program(code, requirements);
    }
    Ok(())
}

fn print_program(code: &ProgramCode, requirements: &ProgramRequirements) {
    println!("\n=== {code} ===");
    for (category, credits) in requirements.iter() {
        if credits > 0.0 {
            println!("  {:<4} {:<32} {credits:>6.1}", category.code(), category.name());
        }
    }
    println!("  {:<37} {:>6.1}", "Total", requirements.total());
    let secondary: f64 = requirements
        .iter()
        .filter(|(category, _)| category.tag() == ProgramTag::Secondary)
        .map(|(_, credits)| credits)
        .sum();
    if secondary > 0.0 {
        println!("  (of which {secondary:.1} secondary program)");
    }
}
