use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use viewstack::config::Scenario;
use viewstack::logging::init_tracing;
use viewstack::scenario::ScenarioRunner;

/// Replay a navigation scenario and print what the controller does.
#[derive(Debug, Parser)]
#[command(name = "viewstack", version, about)]
struct Cli {
    /// Scenario file (default: ~/.config/viewstack/scenario.toml).
    scenario: Option<PathBuf>,

    /// Only print the breadcrumb trail after each step.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let scenario = load_scenario(cli.scenario.as_deref())?;
    let mut runner = ScenarioRunner::new(&scenario).context("registering scenario views")?;

    for (index, report) in runner.run(&scenario.steps).iter().enumerate() {
        if cli.quiet {
            println!("{}", report.breadcrumbs());
            continue;
        }
        println!("{:>3}. {} => {}", index + 1, report.step, report.outcome);
        for event in &report.events {
            println!("       {}", event);
        }
        println!("       [{}]", report.breadcrumbs());
    }

    Ok(())
}

fn load_scenario(path: Option<&Path>) -> anyhow::Result<Scenario> {
    match path {
        Some(path) => Scenario::load_from(path)
            .with_context(|| format!("loading scenario {}", path.display())),
        None => Scenario::load().with_context(|| {
            format!("loading default scenario {}", Scenario::config_path().display())
        }),
    }
}
