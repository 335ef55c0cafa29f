//! List command implementation
//!
//! Enumerates the registered host functions with their arities.

use xlpricer_registry::FunctionRegistry;

use crate::Result;

/// Run the list command
pub fn run() -> Result<()> {
    let registry = FunctionRegistry::builtin();

    println!("\n┌──────────────────────┬───────┐");
    println!("│ Function             │ Arity │");
    println!("├──────────────────────┼───────┤");
    for entry in registry.entries() {
        println!("│ {:<20} │ {:>5} │", entry.name(), entry.arity());
    }
    println!("└──────────────────────┴───────┘");

    Ok(())
}
