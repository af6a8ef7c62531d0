pub mod probes;
mod run_probe;

pub use probes::{
    ForwardLookupProbe, LocalHostProbe, Probe, RecordQueryProbe, ReverseLookupProbe,
};
pub use run_probe::{run_looped, RunProbeUseCase, RunSummary};
