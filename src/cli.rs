use crate::error::{GitinkError, Result};
use crate::glyph::GlyphSet;
use crate::grid::Grid;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitink")]
#[command(about = "Paint text or images into a git contribution graph")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository (defaults to the current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Calendar year the pattern is drawn into")]
    pub year: i32,
}

#[derive(Args, Clone)]
pub struct SourceArgs {
    #[arg(long, help = "Text to render with the built-in 5x7 font", conflicts_with = "image")]
    pub text: Option<String>,

    #[arg(long, help = "Image to render; decoded as grayscale and resized to 52x7")]
    pub image: Option<PathBuf>,
}

impl SourceArgs {
    pub fn build_grid(&self) -> Result<Grid> {
        match (&self.text, &self.image) {
            (Some(text), _) => Ok(Grid::from_text(text, &GlyphSet::builtin())),
            (None, Some(path)) => Grid::from_image(path),
            (None, None) => Err(GitinkError::Parse(
                "either --text or --image is required".to_string(),
            )),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the grid without touching the repository
    Preview {
        #[clap(flatten)]
        source: SourceArgs,

        #[arg(
            long,
            conflicts_with = "json",
            help = "Show the weekday initial of every cell instead of the pattern"
        )]
        weekdays: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Print the commit schedule without touching the repository
    Plan {
        #[clap(flatten)]
        source: SourceArgs,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Create the backdated commits
    Apply {
        #[clap(flatten)]
        source: SourceArgs,

        #[arg(long, help = "Create and switch to a branch named after the year first")]
        branch: bool,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Preview { source, weekdays, json } => {
                crate::preview::exec(self.common, source, weekdays, json)
            }
            Commands::Plan { source, json } => crate::plan::exec(self.common, source, json),
            Commands::Apply { source, branch, yes } => {
                crate::apply::exec(self.common, source, branch, yes)
            }
        }
    }
}
