use async_trait::async_trait;
use dns_probe_application::ports::{HostResolver, LineSink, RecordDirectory};
use dns_probe_domain::{DomainError, Hostname, RecordType, ResolvedHost};
use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub struct MockHostResolver {
    local: ResolvedHost,
    forward: Arc<RwLock<HashMap<String, IpAddr>>>,
    reverse: Arc<RwLock<HashMap<IpAddr, String>>>,
    call_count: Arc<AtomicU64>,
    fail_from: Arc<RwLock<Option<u64>>>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self {
            local: ResolvedHost::new("probe-host", "192.168.1.10".parse().unwrap()),
            forward: Arc::new(RwLock::new(HashMap::new())),
            reverse: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            fail_from: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn add_forward(&self, hostname: &str, ip: &str) {
        self.forward
            .write()
            .await
            .insert(hostname.to_string(), ip.parse().unwrap());
    }

    pub async fn add_reverse(&self, ip: &str, hostname: &str) {
        self.reverse
            .write()
            .await
            .insert(ip.parse().unwrap(), hostname.to_string());
    }

    /// Calls numbered `call` (1-based) and later fail.
    pub async fn fail_from_call(&self, call: u64) {
        *self.fail_from.write().await = Some(call);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    async fn record_call(&self, target: &str) -> Result<(), DomainError> {
        let call = self.call_count.fetch_add(1, Ordering::Relaxed) + 1;
        match *self.fail_from.read().await {
            Some(from) if call >= from => Err(DomainError::resolution(target, "simulated failure")),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn local_host(&self) -> Result<ResolvedHost, DomainError> {
        self.record_call("localhost").await?;
        Ok(self.local.clone())
    }

    async fn forward(&self, hostname: &Hostname) -> Result<IpAddr, DomainError> {
        self.record_call(hostname.as_str()).await?;
        self.forward
            .read()
            .await
            .get(hostname.as_str())
            .copied()
            .ok_or_else(|| DomainError::NxDomain(hostname.to_string()))
    }

    async fn reverse(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        self.record_call(&ip.to_string()).await?;
        Ok(self.reverse.read().await.get(&ip).cloned())
    }
}

pub struct MockRecordDirectory {
    responses: Arc<Mutex<VecDeque<Result<Vec<String>, DomainError>>>>,
    queries: Arc<Mutex<Vec<(String, RecordType)>>>,
}

impl MockRecordDirectory {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn push_records(&self, records: &[&str]) {
        self.responses
            .lock()
            .await
            .push_back(Ok(records.iter().map(|r| r.to_string()).collect()));
    }

    pub async fn push_failure(&self, error: DomainError) {
        self.responses.lock().await.push_back(Err(error));
    }

    pub async fn queries(&self) -> Vec<(String, RecordType)> {
        self.queries.lock().await.clone()
    }
}

#[async_trait]
impl RecordDirectory for MockRecordDirectory {
    async fn query_records(
        &self,
        hostname: &Hostname,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        self.queries
            .lock()
            .await
            .push((hostname.to_string(), record_type));
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
    fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            fail_after: Some(lines),
        }
    }

    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.lines.iter().filter(|l| l.starts_with(prefix)).count()
    }
}

impl LineSink for RecordingSink {
    fn emit(&mut self, line: &str) -> Result<(), DomainError> {
        if self.fail_after.is_some_and(|max| self.lines.len() >= max) {
            return Err(DomainError::IoError("broken pipe".to_string()));
        }
        self.lines.push(line.to_string());
        Ok(())
    }
}
