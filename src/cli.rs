//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, ValueEnum};

/// Output renderer selection
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable console report
    Console,
    /// Structured YAML report
    Yaml,
}

/// microk8s-status - MicroK8s cluster status check
///
/// Reports whether the cluster is running and which add-ons are enabled,
/// by inspecting live cluster resource state.
#[derive(Parser, Debug)]
#[command(
    name = "microk8s-status",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "MicroK8s cluster status check",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  microk8s-status                        \x1b[90m# Full console report\x1b[0m\n   \
                  microk8s-status -o yaml                \x1b[90m# Structured report\x1b[0m\n   \
                  microk8s-status --wait-ready -t 60     \x1b[90m# Block up to 60s for readiness\x1b[0m\n   \
                  microk8s-status -a dns                 \x1b[90m# Single add-on: prints enabled/disabled\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Print cluster and addon status, output can be in yaml or console
    #[arg(long, short = 'o', value_enum, default_value = "console")]
    pub output: OutputFormat,

    /// Wait until the cluster is in ready state
    #[arg(long, short = 'w')]
    pub wait_ready: bool,

    /// Timeout in seconds when waiting for the cluster to be ready (0 = no limit)
    #[arg(long, short = 't', default_value_t = 0)]
    pub timeout: u64,

    /// Check the status of a single addon
    #[arg(long, short = 'a', default_value = "all")]
    pub addon: String,
}

impl Cli {
    /// Whether a single named add-on was requested instead of the full report
    pub fn single_addon(&self) -> Option<&str> {
        (self.addon != "all").then_some(self.addon.as_str())
    }
}
