#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use deploygen::cancel::CancelToken;
use deploygen::cli::Args;
use deploygen::expand::expand_patterns;
use deploygen::generator::{generate, Edition, GeneratedOutput, ProjectContext};
use deploygen::manifest::parse_manifest;
use std::path::Path;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("deploygen: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level())
        .init();

    let manifest_path = args
        .manifest
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve manifest", args.manifest.display()))?;

    anyhow::ensure!(manifest_path.is_file(), "{}: Not a file", manifest_path.display());

    let base_dir = match &args.base_dir {
        Some(dir) => dir
            .canonicalize()
            .with_context(|| format!("{}: failed to resolve base directory", dir.display()))?,
        None => manifest_path
            .parent()
            .context("manifest has no parent directory")?
            .to_path_buf(),
    };

    let edition: Edition = args
        .edition
        .parse()
        .map_err(anyhow::Error::msg)
        .context("invalid --edition")?;

    let context = ProjectContext {
        project_file: args.project_file.clone(),
        solution_file: args.solution_file.clone(),
        emit_prelude: args.prelude,
        edition,
    };

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel())
            .context("failed to install interrupt handler")?;
    }

    log::info!("reading manifest {}", manifest_path.display());
    let xml = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("{}: failed to read manifest", manifest_path.display()))?;
    let patterns = parse_manifest(&xml).context("failed to parse manifest")?;
    log::debug!("{} pattern(s) selected for deployment", patterns.len());

    let paths = expand_patterns(&patterns, &base_dir).context("glob expansion failed")?;
    let result = generate(&paths, &context, &cancel).context("generation failed")?;

    for diag in &result.diagnostics {
        eprintln!("deploygen: {diag}");
    }

    if let Some(output) = &result.output {
        if args.stdout {
            print_output(output);
        } else {
            write_output(&args.out_dir, output)?;
        }
    }

    if result.diagnostics.iter().any(|d| d.is_error()) {
        std::process::exit(1);
    }
    Ok(())
}

fn print_output(output: &GeneratedOutput) {
    print!("{}", output.scopes);
    println!();
    print!("{}", output.segments);
    if let Some(prelude) = &output.prelude {
        println!();
        print!("{prelude}");
    }
}

fn write_output(out_dir: &Path, output: &GeneratedOutput) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("{}: failed to create output directory", out_dir.display()))?;

    let write = |name: &str, contents: &str| -> Result<()> {
        let path = out_dir.join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("{}: failed to write", path.display()))?;
        log::info!("wrote {}", path.display());
        Ok(())
    };

    write("project_files.rs", &output.scopes)?;
    write("project_paths.rs", &output.segments)?;
    if let Some(prelude) = &output.prelude {
        write("prelude.rs", prelude)?;
    }
    Ok(())
}
