// src/cli.rs

use clap::Parser;
use just_blame::config::Theme;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Annotate files with git blame, tinted by age", long_about = None)]
pub struct Args {
    /// Files to blame
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Which color scale to use
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,

    /// TOML file with custom color scales
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show commit details for this 1-based line instead of the annotated file
    #[arg(short, long)]
    pub line: Option<usize>,

    /// Disable colors and styling
    #[arg(long)]
    pub no_color: bool,

    /// More logging, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
