use std::{
    path::PathBuf,
    fs::write,
    io::{stdout, Write},
    process::exit,
};
use log::{LevelFilter, error, info};

pub use frc_includes::{Format, Options, Result, Toolchain, run};

/// Command-line arguments
#[derive(Debug, structopt::StructOpt)]
#[structopt(about)]
struct Args {
    /// Print version number
    #[structopt(short = "V", long)]
    version: bool,

    /// Compiler executable to probe
    #[structopt(short, long, env = "CXX_FRC")]
    compiler: Option<String>,

    /// Toolchain which provides the default compiler (2019 or legacy)
    #[structopt(short, long, env = "FRC_TOOLCHAIN", parse(try_from_str), default_value = "2019")]
    toolchain: Toolchain,

    /// Print paths as -isystem flags
    #[structopt(short, long)]
    isystem: bool,

    /// Write paths to file instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Log level
    #[structopt(short, long, env, parse(try_from_str), default_value = "off")]
    log_level: LevelFilter,
}

#[paw::main]
fn main(args: Args) {
    if args.version {
        println!("Version: {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    {
        std::env::set_var("__LOG_LEVEL_FILTER__", args.log_level.to_string());
        pretty_env_logger::init_custom_env("__LOG_LEVEL_FILTER__");
    }

    if let Err(error) = execute(args) {
        error!("Extraction failed: {:?}", error);
        eprintln!("error: {}", error);
        exit(error.exit_code());
    }
}

fn execute(args: Args) -> Result<()> {
    let format = if args.isystem { Format::Isystem } else { Format::Plain };
    let options = Options::resolve(args.compiler, args.toolchain, format);

    let mut listing = Vec::new();
    run(&options, &mut listing)?;

    if let Some(output) = &args.output {
        info!("Write include paths to {}", output.display());
        write(output, &listing)?;
    } else {
        let out = stdout();
        let mut out = out.lock();
        out.write_all(&listing)?;
        out.flush()?;
    }

    Ok(())
}
