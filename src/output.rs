//! Report rendering: console, YAML, and single-addon modes
//!
//! Renderers are pure string builders; `main` does the printing. Styling is
//! limited to the standalone summary lines so the aligned add-on columns
//! stay byte-stable for scripts that scrape them.

use console::Style;
use serde::Serialize;

use crate::error::{Result, StatusError};
use crate::resolver::Classification;

const RUNNING_MESSAGE: &str = "microk8s is running";
const NOT_RUNNING_MESSAGE: &str =
    "microk8s is not running. Use microk8s.inspect for a deeper inspection.";

/// Structured report, top-level `microk8s:` mapping
#[derive(Serialize)]
struct StatusReport<'a> {
    microk8s: RuntimeReport<'a>,
}

#[derive(Serialize)]
struct RuntimeReport<'a> {
    running: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    addons: Option<Vec<AddonReport<'a>>>,
}

#[derive(Serialize)]
struct AddonReport<'a> {
    name: &'a str,
    description: &'a str,
    version: &'a str,
    status: &'a str,
}

/// Render the human-readable console report
pub fn render_console(is_ready: bool, classification: &Classification) -> String {
    let mut out = String::new();

    if is_ready {
        out.push_str(&format!(
            "{}\n",
            Style::new().bold().green().apply_to(RUNNING_MESSAGE)
        ));
        out.push_str("addons:\n");
        if !classification.enabled.is_empty() {
            out.push_str("enabled:\n");
            for addon in &classification.enabled {
                out.push_str(&addon_row(&addon.name, "enabled", &addon.description));
            }
        }
        for addon in &classification.disabled {
            out.push_str(&addon_row(&addon.name, "disabled", &addon.description));
        }
    } else {
        out.push_str(&format!(
            "{}\n",
            Style::new().bold().red().apply_to(NOT_RUNNING_MESSAGE)
        ));
    }

    out
}

/// One aligned add-on row: ` name: status<pad> # description`
fn addon_row(name: &str, status: &str, description: &str) -> String {
    format!("{:>1} {:<30} # {}\n", "", format!("{name}: {status}"), description)
}

/// Render the structured YAML report
pub fn render_yaml(is_ready: bool, classification: &Classification) -> Result<String> {
    let addons = is_ready.then(|| {
        let mut addons = Vec::new();
        for addon in &classification.enabled {
            addons.push(AddonReport {
                name: &addon.name,
                description: &addon.description,
                version: &addon.version,
                status: "enabled",
            });
        }
        for addon in &classification.disabled {
            addons.push(AddonReport {
                name: &addon.name,
                description: &addon.description,
                version: &addon.version,
                status: "disabled",
            });
        }
        addons
    });

    let report = StatusReport {
        microk8s: RuntimeReport {
            running: is_ready,
            message: (!is_ready).then_some(NOT_RUNNING_MESSAGE),
            addons,
        },
    };

    serde_yaml::to_string(&report).map_err(|e| StatusError::YamlRenderFailed {
        reason: e.to_string(),
    })
}

/// Render the one-word status for a single named add-on.
///
/// An empty enabled set covers every negative case at once: the add-on is
/// disabled, the name matched nothing in the catalog, or the cluster is not
/// ready. All of them read `disabled`.
pub fn render_addon_status(classification: &Classification) -> &'static str {
    if classification.enabled.is_empty() {
        "disabled"
    } else {
        "enabled"
    }
}
