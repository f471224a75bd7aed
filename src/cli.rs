use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "deploygen",
    version,
    about = "Generate typed path accessors from a deploy manifest"
)]
pub struct Args {
    /// Deploy manifest to read
    #[arg(default_value = "deploy.xml")]
    pub manifest: PathBuf,

    /// Base directory for glob expansion (default: manifest's directory)
    #[arg(short = 'b', long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Directory the generated sources are written to
    #[arg(short = 'o', long = "out-dir", default_value = "generated")]
    pub out_dir: PathBuf,

    /// Print generated sources to stdout instead of writing files
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Project file injected as the ProjectDirectory/ProjectFile entries
    #[arg(long = "project-file")]
    pub project_file: Option<PathBuf>,

    /// Solution file injected as the SolutionDirectory/SolutionFile entries
    /// (default: nearest workspace manifest above the project file)
    #[arg(long = "solution-file")]
    pub solution_file: Option<PathBuf>,

    /// Rust edition the generated code targets
    #[arg(long = "edition", default_value = "2021")]
    pub edition: String,

    /// Also emit a prelude re-exporting the generated accessors
    #[arg(long = "prelude")]
    pub prelude: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Log filter derived from the verbosity flags.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
