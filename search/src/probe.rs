//! `ProbeTraceV1`: append-only audit log of the probes a search performed.
//!
//! The trace is observation only — recording it never changes which indices
//! the walk probes or what outcome it reports. Everything else (canonical
//! JSON, digest) is a derived view. Lock tests use the trace to pin the
//! comparison budget and cross-run determinism.

use sha2::{Digest, Sha256};

use crate::outcome::SearchOutcome;

/// Domain prefix for probe-trace digests (null-terminated, byte-exact).
/// Distinct domains prevent cross-artifact digest collisions.
pub const DOMAIN_PROBE_TRACE: &[u8] = b"KEYSEEK::PROBE_TRACE::V1\0";

/// How one probed element compared to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeVerdictV1 {
    /// `sequence[index] == key`; the walk terminates with `Found(index)`.
    Equal,
    /// `sequence[index] > key`; the window narrows below the probe.
    ProbedGreater,
    /// `sequence[index] < key`; the window narrows above the probe.
    ProbedLess,
}

impl ProbeVerdictV1 {
    /// Stable string tag used in the canonical JSON view.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::ProbedGreater => "probed_greater",
            Self::ProbedLess => "probed_less",
        }
    }
}

/// One probe: which index was read, what it held, how it compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeEventV1 {
    /// Probed position in the sequence.
    pub index: u64,
    /// Element value read at that position.
    pub probed: i64,
    /// Three-way comparison result against the key.
    pub verdict: ProbeVerdictV1,
}

/// Complete audit trail of one search execution.
///
/// `events` is in probe order; the final event (if any) carries verdict
/// `Equal` exactly when `outcome` is `Found`. An empty-sequence search
/// produces an empty event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTraceV1 {
    /// Length of the searched sequence.
    pub sequence_len: u64,
    /// The key that was searched for.
    pub key: i64,
    /// Probes in execution order.
    pub events: Vec<ProbeEventV1>,
    /// How the search terminated.
    pub outcome: SearchOutcome,
}

impl ProbeTraceV1 {
    /// Number of element comparisons performed.
    ///
    /// Bounded by ⌈log₂(n+1)⌉ for a sequence of length `n`.
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.events.len() as u64
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// Object keys sort lexicographically (serde_json's default map is
    /// ordered), so equal traces always produce identical bytes.
    ///
    /// # Errors
    ///
    /// Propagates the serializer error; structurally this value always
    /// serializes.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Content digest of the canonical bytes under [`DOMAIN_PROBE_TRACE`],
    /// in `"sha256:<hex>"` form.
    ///
    /// # Errors
    ///
    /// Propagates the serializer error from the canonical view.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_PROBE_TRACE);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "events": self.events.iter().map(probe_event_to_json).collect::<Vec<_>>(),
            "key": self.key,
            "outcome": outcome_to_json(self.outcome),
            "sequence_len": self.sequence_len,
        })
    }
}

fn probe_event_to_json(e: &ProbeEventV1) -> serde_json::Value {
    serde_json::json!({
        "index": e.index,
        "probed": e.probed,
        "verdict": e.verdict.tag(),
    })
}

fn outcome_to_json(outcome: SearchOutcome) -> serde_json::Value {
    match outcome {
        SearchOutcome::Found(i) => serde_json::json!({
            "index": i as u64,
            "type": "found",
        }),
        SearchOutcome::Absent => serde_json::json!({
            "type": "absent",
        }),
    }
}
