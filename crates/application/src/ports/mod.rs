mod host_resolver;
mod line_sink;
mod record_directory;

pub use host_resolver::HostResolver;
pub use line_sink::LineSink;
pub use record_directory::RecordDirectory;
