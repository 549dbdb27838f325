//! Multi-path liquidity accumulation.
//!
//! No single query reveals how much the destination can receive, so the
//! accumulator asks the prober for one disjoint path at a time and sums what
//! it finds. Each attempt excludes the channels of every probe accepted
//! before it, which is why the loop is strictly sequential.

use lnpath_core::{ChannelId, ProbeResult, PublicKey, RouterConfig};
use serde::Serialize;

use crate::error::RoutingError;
use crate::request::RouteQuery;
use crate::traits::{MultiPathProbe, MultiPathProber, ProbeOutcome};

/// Liquidity of one accumulated path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSummary {
    pub channels: Vec<ChannelId>,
    pub public_keys: Vec<PublicKey>,
    /// Tokens this path can deliver.
    pub liquidity: u64,
}

/// What the accumulator learned about the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiPathSummary {
    /// Accepted probes, in discovery order.
    pub probes: Vec<ProbeResult>,
    /// Total probing time in milliseconds.
    pub latency_ms: u64,
    /// Combined liquidity of all accepted probes, in tokens.
    pub routes_max: u64,
    pub paths: Vec<PathSummary>,
}

/// Mutable state of one accumulation run.
#[derive(Debug, Default)]
struct ProbeAccumulator {
    probes: Vec<ProbeResult>,
    /// Reason the last attempt found nothing; ends the loop.
    exhausted: Option<String>,
    routes_max: u64,
}

impl ProbeAccumulator {
    fn should_continue(&self, max_paths: usize) -> bool {
        self.probes.len() < max_paths && self.exhausted.is_none()
    }

    fn accept(&mut self, probe: ProbeResult) {
        self.routes_max = self.routes_max.saturating_add(probe.max_tokens);
        self.probes.push(probe);
    }

    fn exhaust(&mut self, reason: String) {
        self.exhausted = Some(reason);
    }

    fn finish(self) -> Result<MultiPathSummary, RoutingError> {
        if self.probes.is_empty() {
            return Err(RoutingError::NoProbeSucceeded {
                reason: self
                    .exhausted
                    .unwrap_or_else(|| "path budget allows no probes".into()),
            });
        }

        let latency_ms = self
            .probes
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.latency_ms));
        let paths = self
            .probes
            .iter()
            .map(|p| PathSummary {
                channels: p.channels(),
                public_keys: p.public_keys(),
                liquidity: p.max_tokens,
            })
            .collect();

        Ok(MultiPathSummary {
            probes: self.probes,
            latency_ms,
            routes_max: self.routes_max,
            paths,
        })
    }
}

/// Collect disjoint probes toward the query's destination.
///
/// Stops when the path budget is reached or the prober reports that no
/// further path exists. A hard prober error is returned immediately. Fails
/// with [`RoutingError::NoProbeSucceeded`] if nothing was collected.
pub async fn accumulate(
    prober: &dyn MultiPathProber,
    query: &RouteQuery,
    config: &RouterConfig,
) -> Result<MultiPathSummary, RoutingError> {
    let max_paths = query.max_paths.unwrap_or(config.max_paths);
    let max_tokens = config.search_ceiling();
    let mut state = ProbeAccumulator::default();

    while state.should_continue(max_paths) {
        let attempt = state.probes.len() + 1;
        let outcome = prober
            .probe_next(MultiPathProbe {
                probes: &state.probes,
                destination: &query.destination,
                incoming_peer: query.incoming_peer.as_ref(),
                outgoing_channel: query.outgoing_channel.as_ref(),
                ignore: &query.ignore,
                max_tokens,
            })
            .await?;

        match outcome {
            ProbeOutcome::Found(probe) => {
                tracing::debug!(
                    attempt,
                    liquidity = probe.max_tokens,
                    hops = probe.hops.len(),
                    "multi-path probe found a path"
                );
                state.accept(probe);
            }
            ProbeOutcome::Exhausted { reason } => {
                tracing::debug!(attempt, %reason, "multi-path probing exhausted");
                state.exhaust(reason);
            }
        }
    }

    let summary = state.finish()?;
    tracing::debug!(
        paths = summary.paths.len(),
        routes_max = summary.routes_max,
        latency_ms = summary.latency_ms,
        "multi-path accumulation finished"
    );
    Ok(summary)
}
