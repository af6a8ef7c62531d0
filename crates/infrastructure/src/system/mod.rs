pub mod platform_resolver;

pub use platform_resolver::PlatformHostResolver;
