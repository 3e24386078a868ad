mod options;
mod result;
mod search;
mod probe;
mod output;

use std::io::Write;

pub use options::*;
pub use result::*;
pub use search::*;
pub use probe::*;
pub use output::*;

/// Probe the configured compiler and write its include paths
pub fn run(options: &Options, output: &mut impl Write) -> Result<()> {
    let paths = extract_include_paths(&options.compiler)?;

    write_include_paths(&paths, options.format, output)
}
