//! Command-line interface implementation for Inlay.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::transform::Mode;

/// Command-line arguments structure for Inlay.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Inlay: inline (pack) or clear (unpack) file contents between comment markers",
    long_about = None
)]
pub struct Args {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Directory to process
    #[arg(value_name = "TARGET_DIR", default_value = ".")]
    pub target_dir: PathBuf,

    /// Remove inlined content between markers whose target file exists
    #[arg(short, long)]
    pub unpack: bool,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.unpack {
            Mode::Unpack
        } else {
            Mode::Pack
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if the config argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(err) = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                {
                    eprintln!("{}", err);
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
