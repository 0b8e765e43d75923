use clap::ValueEnum;
use ladderlens_types::ModeFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// CLI-side mirror of `ModeFilter`; keeps clap out of the types crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeFilterArg {
    All,
    Ladder,
    Ranked,
    LadderRanked,
}

impl From<ModeFilterArg> for ModeFilter {
    fn from(arg: ModeFilterArg) -> Self {
        match arg {
            ModeFilterArg::All => ModeFilter::All,
            ModeFilterArg::Ladder => ModeFilter::Ladder,
            ModeFilterArg::Ranked => ModeFilter::Ranked,
            ModeFilterArg::LadderRanked => ModeFilter::LadderRanked,
        }
    }
}
