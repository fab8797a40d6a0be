//! microk8s-status - MicroK8s cluster status check
//!
//! Reports whether the cluster runtime is operational and which add-ons are
//! enabled, by classifying each catalog entry against a live snapshot of
//! cluster resources. Read-only: nothing is installed, enabled, or disabled.

use std::time::Duration;

use clap::Parser;

mod catalog;
mod cli;
mod error;
mod evidence;
mod matcher;
mod output;
mod preflight;
mod readiness;
mod resolver;
mod snap;

use cli::{Cli, OutputFormat};
use error::Result;
use evidence::Kubectl;
use readiness::ReadinessProbe;
use snap::SnapPaths;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = SnapPaths::from_env();

    // Both gates abort before any readiness or classification work, so a
    // refused run never produces partial output.
    preflight::ensure_permissions(&paths)?;
    preflight::ensure_not_locked(&paths)?;

    let kubectl = Kubectl::new(&paths);

    let is_ready = if cli.wait_ready {
        readiness::wait_ready(
            &kubectl,
            Duration::from_secs(cli.timeout),
            readiness::POLL_INTERVAL,
        )?
    } else {
        kubectl.is_ready()?
    };

    let mut addons = catalog::list_available(&paths.addons_catalog(), catalog::current_arch())?;
    if let Some(name) = cli.single_addon() {
        addons = catalog::filter_by_name(addons, name);
    }

    let classification = resolver::resolve(&addons, &kubectl, is_ready)?;

    if cli.single_addon().is_some() {
        println!("{}", output::render_addon_status(&classification));
    } else {
        let report = match cli.output {
            OutputFormat::Console => output::render_console(is_ready, &classification),
            OutputFormat::Yaml => output::render_yaml(is_ready, &classification)?,
        };
        print!("{}", report);
    }

    Ok(())
}
