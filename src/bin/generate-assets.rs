#![forbid(unsafe_code)]

//! Builds the distributable shell completions and man page into `dist/`.

use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use deploygen::cli::Args;
use std::fs;
use std::path::Path;

const BIN_NAME: &str = "deploygen";

fn main() -> anyhow::Result<()> {
    let dist = Path::new("dist");

    write_completions(&dist.join("completions"))?;
    write_man_page(&dist.join("man"))?;

    eprintln!("generated shell completions and man page under {}", dist.display());
    Ok(())
}

fn write_completions(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let mut cmd = Args::command();
        generate_to(shell, &mut cmd, BIN_NAME, dir)?;
    }
    Ok(())
}

fn write_man_page(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    fs::write(dir.join(format!("{BIN_NAME}.1")), buffer)?;
    Ok(())
}
