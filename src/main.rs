//! Gleaner binary entry point.
use log::debug;
use structopt::StructOpt;

use gleaner::cli;
use gleaner::error::Error;
use gleaner::filtering::SeedThresholds;
use gleaner::phrase::WindowConfig;
use gleaner::pipelines::{Pipeline, ReviewScores, SeedVocab};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Gleaner::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Gleaner::Seeds(s) => {
            let thresholds = SeedThresholds::with_limits(s.min_phrase_freq, s.min_abs_weight);
            let window = WindowConfig {
                min_len: s.min_len,
                max_len: s.max_len,
            };
            let pipeline = SeedVocab::new(s.src, s.dst, s.by_source, s.aspects, thresholds, window);
            pipeline.run()?;
        }
        cli::Gleaner::Reviews(r) => {
            let pipeline = ReviewScores::new(r.src, r.dst, r.aspects);
            pipeline.run()?;
        }
    };
    Ok(())
}
