//! Flatten command - nested JSON in, flattened pairs out.

use keypath::Node;

use crate::cli::FlattenArgs;
use crate::input::read_input;
use crate::output::{OutputFormat, print_json};

/// Run the flatten command
pub fn run(args: &FlattenArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args.input.as_ref())?;
    let tree: Node = serde_json::from_str(&text)
        .map_err(|e| format!("Input must be JSON built from strings, arrays and objects: {e}"))?;

    let flat = keypath::flatten(&tree);
    tracing::info!(keys = flat.len(), "Flattened tree");
    print_json(&flat, format)?;

    Ok(())
}
