use std::{
    io::{Write, ErrorKind},
    process::{Command, Stdio},
};
use log::*;
use crate::{Error, Result, parse_search_list};

/// Preprocessor flags which make the compiler report its search list
const PROBE_ARGS: &[&str] = &["-E", "-Wp,-v", "-"];

/// Full argument vector used to probe the compiler
pub fn command_line(compiler: &str) -> Vec<String> {
    let mut args = vec![compiler.to_string()];
    args.extend(PROBE_ARGS.iter().map(|arg| arg.to_string()));
    args
}

/// Run the compiler on an empty translation unit and collect its default
/// include directories in search order.
pub fn extract_include_paths(compiler: &str) -> Result<Vec<String>> {
    info!("Probe compiler: {:?}", command_line(compiler));

    let mut child = Command::new(compiler)
        .args(PROBE_ARGS)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|error| if error.kind() == ErrorKind::NotFound {
            Error::ExecutableNotFound(compiler.into())
        } else {
            Error::Io(error)
        })?;

    let fed = feed_input(child.stdin.take());

    // reap the child before reporting a failed feed
    let output = child.wait_with_output()?;
    fed?;

    debug!("Compiler exited with {}", output.status);

    let diagnostics = String::from_utf8_lossy(&output.stderr);

    parse_search_list(&diagnostics)
}

/// Send an empty translation unit and close the input
fn feed_input(stdin: Option<impl Write>) -> Result<()> {
    if let Some(mut stdin) = stdin {
        // compiler may exit without reading its input
        match stdin.write_all(b"\n") {
            Err(error) if error.kind() == ErrorKind::BrokenPipe => {},
            result => result?,
        }
    }
    Ok(())
}
