use serde::{Deserialize, Serialize};
use tracing::{field, trace_span, Span};

use streamagg_common::hash::FastHashSet;

use crate::execution::Operator;
use crate::types::{Batch, Packet};
use crate::{RuntimeError, RuntimeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Open a trace span for every processed packet.
    pub trace_enabled: bool,
    /// Reject packets that name the same entity more than once. When disabled
    /// the last occurrence of a key wins on stash.
    pub reject_duplicate_keys: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            trace_enabled: false,
            reject_duplicate_keys: true,
        }
    }
}

/// Drives an operator tree over packets whose entity set changes from one
/// packet to the next.
///
/// For every packet: `reset_states(n)`, `restore_states(ids)`, `eval(values)`,
/// `stash_states(ids)`. Per-entity history therefore lives in the state stores
/// and survives slot reshuffling between packets.
///
/// Not reentrant; wrap it in a lock to share it between threads.
#[derive(Debug, Clone)]
pub struct StreamProcessor<O> {
    operator: O,
    config: ProcessorConfig,
    packets_processed: u64,
}

impl<O: Operator> StreamProcessor<O> {
    pub fn new(operator: O) -> Self {
        Self::with_config(operator, ProcessorConfig::default())
    }

    pub fn with_config(operator: O, config: ProcessorConfig) -> Self {
        Self {
            operator,
            config,
            packets_processed: 0,
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn operator(&self) -> &O {
        &self.operator
    }

    pub fn operator_mut(&mut self) -> &mut O {
        &mut self.operator
    }

    pub fn into_inner(self) -> O {
        self.operator
    }

    pub fn packets_processed(&self) -> u64 {
        self.packets_processed
    }

    pub fn process_packet(&mut self, packet: &Packet<O::Input>) -> RuntimeResult<Batch<O::Output>> {
        let keys = packet.keys();
        self.process(&keys, &packet.values)
    }

    /// Processes one packet. Validation happens before the tree is touched, so
    /// a rejected packet leaves both live state and stores unchanged.
    pub fn process(&mut self, ids: &[&str], values: &[O::Input]) -> RuntimeResult<Batch<O::Output>> {
        let span = if self.config.trace_enabled {
            let name = self.operator.name();
            trace_span!("process", name, slots = ids.len(), packet = field::Empty)
        } else {
            Span::none()
        }
        .entered();

        if ids.len() != values.len() {
            return Err(RuntimeError::key_count("process", values.len(), ids.len()));
        }
        if self.config.reject_duplicate_keys {
            check_unique_keys(ids)?;
        }

        self.operator.reset_states(ids.len());
        self.operator.restore_states(ids)?;
        let result = self.operator.eval(values)?;
        self.operator.stash_states(ids)?;

        self.packets_processed += 1;
        if self.config.trace_enabled {
            span.record("packet", self.packets_processed);
        }
        Ok(result)
    }
}

fn check_unique_keys(ids: &[&str]) -> RuntimeResult<()> {
    let mut seen: FastHashSet<&str> = FastHashSet::default();
    for id in ids {
        if !seen.insert(*id) {
            return Err(RuntimeError::DuplicateKey(id.to_string()));
        }
    }
    Ok(())
}
