//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "gleaner", about = "aspect seed vocabulary mining tool.")]
/// Holds every command that is callable by the `gleaner` command.
pub enum Gleaner {
    #[structopt(about = "Mine the weighted seed phrase tables")]
    Seeds(Seeds),
    #[structopt(about = "Score every review per aspect")]
    Reviews(Reviews),
}

#[derive(Debug, StructOpt)]
/// Seeds command and parameters.
pub struct Seeds {
    #[structopt(parse(from_os_str), help = "review corpus root")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of the global seed table")]
    pub dst: PathBuf,
    #[structopt(
        long = "by-source",
        parse(from_os_str),
        help = "also write the per-partition seed table here"
    )]
    pub by_source: Option<PathBuf>,
    #[structopt(
        long = "aspects",
        parse(from_os_str),
        help = "JSON aspect lexicon replacing the built-in table"
    )]
    pub aspects: Option<PathBuf>,
    #[structopt(
        long = "min-phrase-freq",
        default_value = "2",
        help = "minimum observations backing a phrase"
    )]
    pub min_phrase_freq: usize,
    #[structopt(
        long = "min-abs-weight",
        default_value = "1e-6",
        help = "minimum absolute average sentiment of a phrase"
    )]
    pub min_abs_weight: f64,
    #[structopt(
        long = "min-len",
        default_value = "2",
        help = "minimum phrase token count"
    )]
    pub min_len: usize,
    #[structopt(
        long = "max-len",
        default_value = "3",
        help = "maximum phrase token count"
    )]
    pub max_len: usize,
}

#[derive(Debug, StructOpt)]
/// Reviews command and parameters.
pub struct Reviews {
    #[structopt(parse(from_os_str), help = "review corpus root")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of the review score table")]
    pub dst: PathBuf,
    #[structopt(
        long = "aspects",
        parse(from_os_str),
        help = "JSON aspect lexicon replacing the built-in table"
    )]
    pub aspects: Option<PathBuf>,
}
