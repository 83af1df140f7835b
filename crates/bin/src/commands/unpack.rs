//! Unpack command - flattened pairs in, nested JSON out.

use crate::cli::UnpackArgs;
use crate::input::{parse_pairs, read_input};
use crate::output::{OutputFormat, print_json};

/// Run the unpack command
pub fn run(args: &UnpackArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args.input.as_ref())?;
    let pairs = parse_pairs(&text, args.format)?;
    tracing::info!(pairs = pairs.len(), format = ?args.format, "Unpacking input");

    let tree = keypath::unpack(pairs)?;
    print_json(&tree, format)?;

    Ok(())
}
