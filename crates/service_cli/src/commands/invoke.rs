//! Invoke command implementation
//!
//! Dispatches a registered host function by its stable external name,
//! exactly the path an external host takes.

use tracing::info;
use xlpricer_registry::FunctionRegistry;

use crate::Result;

/// Run the invoke command
pub fn run(name: &str, args: &[f64]) -> Result<()> {
    info!("Invoking {} with {} argument(s)", name, args.len());

    let registry = FunctionRegistry::builtin();
    let result = registry.invoke(name, args)?;

    println!("{result}");
    Ok(())
}
