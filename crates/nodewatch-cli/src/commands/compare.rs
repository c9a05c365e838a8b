//! Compare command
//!
//! Usage: nodewatch compare [--input <FILE>] [--output <FILE>]

use clap::Args;
use nodewatch_core::errors::{ExError, ExErrorKind};
use nodewatch_core::model::parse_node_objects;
use nodewatch_core::render::{comparable_nodes, render_node_comparison};
use nodewatch_core::{log_op_end, log_op_start};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// NodeList JSON file (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    log_op_start!("compare");

    let bytes = read_input(args.input.as_deref())?;
    let objects = parse_node_objects(&bytes).map_err(ExError::from)?;
    let nodes = comparable_nodes(objects);
    let html = render_node_comparison(&nodes);

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, html).map_err(|e| io_error(&output_path, e))?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        print!("{}", html);
    }

    log_op_end!(
        "compare",
        duration_ms = started.elapsed().as_millis() as u64,
        fetched = nodes.len(),
    );
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, ExError> {
    match path {
        Some(path) => std::fs::read(path).map_err(|e| io_error(path, e)),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| io_error(Path::new("<stdin>"), e))?;
            Ok(buf)
        }
    }
}

fn io_error(path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op("compare")
        .with_message(format!("{}: {}", path.display(), err))
}
