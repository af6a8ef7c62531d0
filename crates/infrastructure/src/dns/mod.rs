pub mod error_map;
pub mod record_directory;
pub mod record_type_map;
pub mod resolver_factory;

pub use error_map::map_resolve_error;
pub use record_directory::HickoryRecordDirectory;
pub use record_type_map::RecordTypeMapper;
pub use resolver_factory::ResolverFactory;
