use std::path::PathBuf;
use std::str::FromStr;
use std::{fmt::Display, fmt::Formatter};

use clap::{ArgAction, Parser};
use log::{info, LevelFilter};

use crate::error::Error;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Which stage of the pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Stage {
    /// Burrows-Wheeler Transform only
    Bwt,
    /// Move-To-Front only
    Mtf,
    /// BWT followed by MTF (or the reverse when decoding)
    Pipeline,
}
impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Encode, Decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// '-' encodes and '+' decodes. The spelled out names are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "encode" => Ok(Mode::Encode),
            "+" | "decode" => Ok(Mode::Decode),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

fn parse_mode(s: &str) -> Result<Mode, Error> {
    s.parse()
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Burrows-Wheeler and Move-To-Front transforms for block-sorting compression",
    long_about = "
    Runs one stage of a block-sorting compressor, or both in sequence. The Burrows-Wheeler
    Transform groups bytes that share a context; Move-To-Front then turns those groups into
    runs of small numbers that an entropy coder can squeeze well.

    The whole input is held in memory. Output goes to stdout unless a file is given."
)]
pub struct Args {
    /// Stage to run
    #[clap(value_enum)]
    pub stage: Stage,

    /// '-' to encode, '+' to decode
    #[clap(value_parser = parse_mode)]
    pub mode: Mode,

    /// Read from this file instead of stdin
    #[clap(short, long, value_parser)]
    pub input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[clap(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log messages
    #[clap(short, long, action = ArgAction::SetTrue)]
    pub quiet: bool,
}

/// Run options for one invocation.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Stage of the pipeline
    pub stage: Stage,
    /// Encode or decode
    pub mode: Mode,
    /// Input file, or stdin when None
    pub input: Option<PathBuf>,
    /// Output file, or stdout when None
    pub output: Option<PathBuf>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl From<Args> for Opts {
    fn from(args: Args) -> Self {
        let verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Warnings,
                1 => Verbosity::Info,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        Self {
            stage: args.stage,
            mode: args.mode,
            input: args.input,
            output: args.output,
            verbose,
        }
    }
}

/// Parse the command line into Opts and set the log level. Exits through clap on a bad
/// argument, including an illegal mode selector.
pub fn opts_init() -> Opts {
    let opts = Opts::from(Args::parse());

    log::set_max_level(opts.verbose.level_filter());

    info!("Verbosity set to {}", log::max_level());
    info!("Running {} stage, mode {}", opts.stage, opts.mode);
    match &opts.input {
        Some(p) => info!("Getting input from the file {}", p.display()),
        None => info!("Getting input from stdin"),
    }
    match &opts.output {
        Some(p) => info!("Sending output to the file {}", p.display()),
        None => info!("Sending output to stdout"),
    }
    opts
}
