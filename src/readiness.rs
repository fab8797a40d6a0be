//! Cluster readiness probing and the bounded wait loop

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::evidence::Kubectl;

/// Cadence between readiness probes while waiting
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Point-in-time readiness query
///
/// Readiness is recomputed on demand and never cached across invocations.
/// Probe failures are not swallowed; they propagate to the caller.
pub trait ReadinessProbe {
    fn is_ready(&self) -> Result<bool>;
}

impl ReadinessProbe for Kubectl {
    /// The control plane is considered operational when some node reports
    /// " Ready " and the resource listing exposes the kubernetes service.
    fn is_ready(&self) -> Result<bool> {
        let nodes = self.get_nodes()?;
        if !nodes.contains(" Ready ") {
            return Ok(false);
        }
        let resources = self.get_all()?;
        Ok(resources.contains("service/kubernetes"))
    }
}

/// Block until the probe reports ready or the deadline passes.
///
/// A `timeout` of zero waits without a time bound. The final observed
/// readiness is returned: `Ok(true)` as soon as a probe succeeds (early
/// exit, not on the timeout boundary), `Ok(false)` once the deadline is
/// exhausted. Sleeps are clamped to the remaining budget so exhaustion is
/// observed close to the requested timeout.
pub fn wait_ready<P: ReadinessProbe>(
    probe: &P,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<bool> {
    let deadline = (!timeout.is_zero()).then(|| Instant::now() + timeout);

    loop {
        if probe.is_ready()? {
            return Ok(true);
        }

        let pause = match deadline {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    return Ok(false);
                }
                poll_interval.min(remaining)
            }
            None => poll_interval,
        };
        std::thread::sleep(pause);
    }
}
