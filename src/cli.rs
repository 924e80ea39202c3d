use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Compute distance, mean speed and calories for workout sensor readings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// JSON file with samples to process instead of the built-in list.
    ///
    /// Entries are `["RUN", [15000, 1, 75]]` or `{"code": "RUN", "values": [...]}`.
    #[arg(long, value_name = "FILE")]
    pub samples: Option<PathBuf>,

    /// Print one JSON object per workout instead of the text summary.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

impl Cli {
    /// Parses the process arguments, exiting with a usage error on conflicts.
    pub fn parse_checked() -> Self {
        Self::try_parse_checked(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Like [`Parser::try_parse_from`], but rejects `--samples` combined with a
    /// subcommand instead of silently ignoring it.
    pub fn try_parse_checked<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        if cli.cmd.is_some() && cli.samples.is_some() {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "--samples cannot be used with a subcommand",
            ));
        }
        Ok(cli)
    }
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Compute a single workout.
    Calc {
        /// Workout type code: RUN, WLK or SWM.
        code: String,

        /// Positional readings: action, duration (h), weight (kg), then
        /// height (cm) for WLK or pool length (m) and laps for SWM.
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}
