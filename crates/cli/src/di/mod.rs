use dns_probe_application::ports::{HostResolver, RecordDirectory};
use dns_probe_application::use_cases::RunProbeUseCase;
use dns_probe_domain::Config;
use dns_probe_infrastructure::dns::HickoryRecordDirectory;
use dns_probe_infrastructure::system::PlatformHostResolver;
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub run_probe: Arc<RunProbeUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let host_resolver: Arc<dyn HostResolver> = Arc::new(PlatformHostResolver::new());
        let record_directory: Arc<dyn RecordDirectory> =
            Arc::new(HickoryRecordDirectory::new(config.directory.clone())?);

        debug!(
            system_servers = config.directory.uses_system_servers(),
            servers = config.directory.servers.len(),
            "Record directory ready"
        );

        Ok(Self {
            run_probe: Arc::new(RunProbeUseCase::new(host_resolver, record_directory)),
        })
    }
}
