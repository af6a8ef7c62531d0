use clap::{Parser, Subcommand};
use dns_probe_domain::config::ProbeDefaults;
use dns_probe_domain::{CliOverrides, Hostname, Ipv4Address, ProbeRequest, RecordType};
use dns_probe_infrastructure::output::WriterSink;
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser, Debug)]
#[command(name = "dns-probe")]
#[command(version)]
#[command(about = "dns-probe - repeated DNS resolution timing")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Record directory server, e.g. dns://1.1.1.1 (repeatable)
    #[arg(long = "dns-server", value_name = "URL", global = true)]
    dns_servers: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the address of the local host
    CheckLocal {
        /// Number of lookups
        #[arg(long)]
        count: Option<u32>,
    },

    /// Resolve the host name of an IPv4 address
    CheckReverse {
        /// Dotted IPv4 address
        #[arg(long)]
        address: Ipv4Address,

        #[arg(long)]
        count: Option<u32>,
    },

    /// Resolve a host name through the platform resolver
    CheckJava {
        #[arg(long)]
        hostname: Hostname,

        #[arg(long)]
        count: Option<u32>,

        /// Pause between lookups in milliseconds
        #[arg(long, value_name = "MS")]
        delay: Option<u64>,
    },

    /// Query one record type for a host name
    CheckJndi {
        #[arg(long)]
        hostname: Hostname,

        /// Record type, e.g. A, MX, TXT
        #[arg(long = "type", value_name = "TYPE")]
        record_type: RecordType,

        #[arg(long)]
        count: Option<u32>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::CheckLocal { .. } => "check-local",
            Self::CheckReverse { .. } => "check-reverse",
            Self::CheckJava { .. } => "check-java",
            Self::CheckJndi { .. } => "check-jndi",
        }
    }

    fn into_request(self, defaults: &ProbeDefaults) -> ProbeRequest {
        match self {
            Self::CheckLocal { count } => {
                ProbeRequest::local_host(count.unwrap_or(defaults.count))
            }
            Self::CheckReverse { address, count } => {
                ProbeRequest::reverse(address, count.unwrap_or(defaults.count))
            }
            Self::CheckJava {
                hostname,
                count,
                delay,
            } => ProbeRequest::forward(
                hostname,
                count.unwrap_or(defaults.count),
                delay.unwrap_or(defaults.delay_ms),
            ),
            Self::CheckJndi {
                hostname,
                record_type,
                count,
            } => ProbeRequest::records(hostname, record_type, count.unwrap_or(defaults.count)),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_servers: cli.dns_servers,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    match bootstrap::config_source(cli.config.as_deref()) {
        Some(file) => debug!(file = %file, "Configuration loaded"),
        None => debug!("Using default configuration"),
    }

    let command = cli.command.name();
    let request = cli.command.into_request(&config.probe);
    info!(
        command,
        iterations = request.iterations,
        delay_ms = ?request.delay_ms,
        "Starting probe"
    );

    let use_cases = di::UseCases::new(&config)?;
    let mut sink = WriterSink::stdout();
    let summary = use_cases.run_probe.execute(&request, &mut sink).await?;

    info!(
        command,
        iterations = summary.iterations,
        failures = summary.failures,
        "Probe complete"
    );
    Ok(())
}
