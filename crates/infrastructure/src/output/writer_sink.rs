use dns_probe_application::ports::LineSink;
use dns_probe_domain::DomainError;
use std::io::{self, Stdout, Write};

/// Line sink over any writer; every line is flushed as it is emitted.
pub struct WriterSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), DomainError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
