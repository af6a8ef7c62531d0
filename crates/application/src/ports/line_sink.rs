use dns_probe_domain::DomainError;

/// Ordered destination for probe output.
///
/// `emit` must write and flush the line before returning, so a reader
/// tailing the output sees every line as soon as it is produced.
pub trait LineSink: Send {
    fn emit(&mut self, line: &str) -> Result<(), DomainError>;
}
