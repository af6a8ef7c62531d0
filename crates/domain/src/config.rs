pub mod directory;
pub mod errors;
pub mod logging;
pub mod probe;
pub mod root;

pub use directory::DirectoryConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use probe::ProbeDefaults;
pub use root::{CliOverrides, Config};
