//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::{
    fs::{self, File},
    io::{self, Read},
    process::ExitCode,
};

use bwmtf::compression::run;
use bwmtf::error::Result;
use bwmtf::tools::cli::{opts_init, Opts};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace. The command line narrows this down.
    // Logs go to stderr since stdout may be carrying the output data.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    // A bad mode selector stops here, before anything is read
    let opts = opts_init();

    match transform(&opts) {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the selected stage. An output file is only created once the whole result is ready, so
/// the input and output may name the same file and a failed run leaves no partial output.
fn transform(opts: &Opts) -> Result<()> {
    let reader: Box<dyn Read> = match &opts.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    };

    match &opts.output {
        Some(path) => {
            let mut result = Vec::new();
            run(opts.stage, opts.mode, reader, &mut result)?;
            fs::write(path, &result)?;
            info!("Wrote {} bytes to {}", result.len(), path.display());
        }
        None => run(opts.stage, opts.mode, reader, io::stdout().lock())?,
    }
    Ok(())
}
