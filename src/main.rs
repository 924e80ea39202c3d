#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use anyhow::Result;
use fitcalc::{cli, samples, types::Sample, utils};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse_checked();
    utils::init_logging(cli.verbose, cli.quiet);

    let input = match cli.cmd {
        Some(cli::Cmd::Calc { code, values }) => {
            dlog!("mode=calc code={code} values={values:?}");
            vec![Sample::new(code, values)]
        }
        None => match &cli.samples {
            Some(path) => {
                dlog!("mode=file samples={}", path.display());
                samples::load_samples(path)?
            }
            None => {
                dlog!("mode=builtin");
                samples::default_samples()
            }
        },
    };

    let done = fitcalc::process(&input, |info| {
        println!("{}", utils::render(info, cli.json));
    })?;

    tracing::info!(workouts = done, "done");
    Ok(())
}
