//! basediff
//!
//! Binary entry point: prints the files changed against the base reference.

mod cli;

use color_eyre::eyre::{Result, bail};
use tracing_subscriber::EnvFilter;

use basediff::app::App;
use basediff::outline::render_outline;

use crate::cli::{Cli, Command};

/// Environment variable naming the log file; logging is off when unset
const LOG_ENV: &str = "BASEDIFF_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let cli = Cli::parse_args();
    let mut app = App::from_config(&cli.config())?;

    match cli.command.clone().unwrap_or(Command::Tree) {
        Command::Tree => print_tree(&mut app),
        Command::Files => print_files(&mut app),
        Command::Branches => print_branches(&mut app),
        Command::Show { path } => print_base_side(&mut app, &path),
    }
}

fn print_tree(app: &mut App) -> Result<()> {
    app.refresh()?;
    let reference = app.comparison_ref().unwrap_or(app.base_reference());
    let branch = app.current_branch()?;
    if app.root().is_empty() {
        println!(
            "No changes on {branch} against {} ({reference})",
            app.base_reference()
        );
        return Ok(());
    }
    println!("{branch} against {} ({reference})", app.base_reference());
    print!("{}", render_outline(app.root()));
    Ok(())
}

fn print_files(app: &mut App) -> Result<()> {
    app.refresh()?;
    for file in app.root().files() {
        match file.record().old_path() {
            Some(old_path) => println!(
                "{}\t{}\t{}",
                file.status().indicator(),
                old_path,
                file.path()
            ),
            None => println!("{}\t{}", file.status().indicator(), file.path()),
        }
    }
    Ok(())
}

fn print_branches(app: &mut App) -> Result<()> {
    let base = app.base_reference().to_string();
    for branch in app.branches()? {
        let name = branch.full_name();
        let marker = if branch.is_current { '*' } else { ' ' };
        let kind = if branch.is_remote() { "remote" } else { "local" };
        let suffix = if name == base { "  (base)" } else { "" };
        println!("{marker} {name:<40} {kind}{suffix}");
    }
    Ok(())
}

fn print_base_side(app: &mut App, path: &str) -> Result<()> {
    app.refresh()?;
    let Some(file) = app.root().files().into_iter().find(|f| f.path() == path) else {
        bail!("{path} has no changes against {}", app.base_reference());
    };

    let target = app.diff_target(file);
    let Some(left) = target.left else {
        bail!("{path} does not exist at {}", app.base_reference());
    };
    print!("{}", app.git().file_at(&left.reference, &left.path)?);
    Ok(())
}

/// Send `tracing` output to the file named by `BASEDIFF_LOG`, filtered by `RUST_LOG`
fn init_tracing() -> Result<()> {
    use std::fs::File;
    use std::path::PathBuf;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_path = match std::env::var(LOG_ENV) {
        Ok(path) => PathBuf::from(path),
        Err(_) => return Ok(()),
    };

    let file = File::options().create(true).append(true).open(&log_path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .with(EnvFilter::from_default_env())
        .try_init()?;

    Ok(())
}
