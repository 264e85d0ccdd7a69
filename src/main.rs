//! Cleaner documentation generator entry point
//!
//! Invocation takes no arguments: the tool reads the cleaner's bundled
//! JSON from its agreed location and prints the rendered Markdown on
//! stdout. Any failure surfaces on stderr with a non-zero exit status.

use std::{error::Error, path::Path};

use cleaner_docs::{document::Document, markdown, tracing_config};
use tracing::debug;

/// Location of the cleaner JSON this tool documents. The path is owned by
/// the cleaner component and agreed with it, not configurable here.
const DEFAULT_CLEANER_PATH: &str = "engine/default-cleaner.json";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_config::init()?;

    debug!(path = DEFAULT_CLEANER_PATH, "generating cleaner documentation");
    let document = Document::load(Path::new(DEFAULT_CLEANER_PATH))?;

    print!("{}", markdown::render(&document));

    Ok(())
}
