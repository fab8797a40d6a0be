//! Detection signature matching
//!
//! An add-on announces itself through one of two independent evidence
//! sources: a substring on some line of the live resource listing, or a
//! sentinel file written on disk at enable-time. Each catalog signature is
//! modeled as a tagged [`DetectionSignature`] so the priority between the
//! two sources is an explicit dispatch instead of string sniffing.
//!
//! Priority is fixed: the substring check runs first and short-circuits the
//! filesystem probe. File probes are comparatively expensive and can race
//! with a concurrent enable/disable, so they are only attempted when no
//! evidence line matched.

use std::path::Path;

use crate::evidence::EvidenceCorpus;

/// One detection rule for an add-on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionSignature {
    /// Literal substring expected on a line of the resource listing
    /// (e.g. a deployment or pod name containing the add-on identifier)
    Resource(String),
    /// Sentinel file path template; may contain `$VAR` / `${VAR}`
    /// environment placeholders (e.g. `$SNAP_COMMON/var/lock/storage.lock`)
    SentinelFile(String),
}

impl DetectionSignature {
    /// Build the ordered candidate list for a raw catalog signature.
    ///
    /// A raw `check_status` string can be satisfied either way, so both
    /// variants are produced; the vector order encodes the priority rule.
    pub fn candidates(raw: &str) -> Vec<DetectionSignature> {
        vec![
            DetectionSignature::Resource(raw.to_string()),
            DetectionSignature::SentinelFile(raw.to_string()),
        ]
    }

    /// Whether this signature is satisfied by a single evidence line.
    ///
    /// Only `Resource` signatures match against lines; sentinel files are
    /// line-independent and handled by [`DetectionSignature::satisfied_by`].
    pub fn matches_line(&self, line: &str) -> bool {
        match self {
            DetectionSignature::Resource(needle) => line.contains(needle),
            DetectionSignature::SentinelFile(_) => false,
        }
    }

    /// Whether this signature is satisfied against the evidence corpus.
    ///
    /// `Resource` scans lines and short-circuits on the first hit.
    /// `SentinelFile` expands environment placeholders and probes the
    /// filesystem exactly once; the corpus is not consulted.
    pub fn satisfied_by(&self, corpus: &EvidenceCorpus) -> bool {
        match self {
            DetectionSignature::Resource(_) => corpus.lines().any(|line| self.matches_line(line)),
            DetectionSignature::SentinelFile(template) => {
                Path::new(&expand_env_vars(template)).is_file()
            }
        }
    }
}

/// Expand `$VAR` and `${VAR}` placeholders from the process environment.
///
/// Unset variables and malformed references are left verbatim, matching
/// `os.path.expandvars` in the original wrappers: a template pointing at an
/// unset variable simply never names an existing file.
pub fn expand_env_vars(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        let (name, consumed) = if let Some(stripped) = after.strip_prefix('{') {
            match stripped.find('}') {
                Some(end) => (&stripped[..end], end + 3),
                // Unclosed brace: keep the rest verbatim
                None => {
                    out.push_str(&rest[dollar..]);
                    return out;
                }
            }
        } else {
            let end = after
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            (&after[..end], end + 1)
        };

        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            out.push('$');
            rest = after;
            continue;
        }

        match std::env::var(name) {
            Ok(value) => out.push_str(&value),
            Err(_) => out.push_str(&rest[dollar..dollar + consumed]),
        }
        rest = &rest[dollar + consumed..];
    }

    out.push_str(rest);
    out
}
