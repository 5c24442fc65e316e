use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio::net::{lookup_host, TcpStream};
use tokio::time::{self, Instant};
use tracing::{debug, info};

use crate::hosts::HostList;
use crate::types::{PortState, ScanResult};

/// Connect timeout applied to every port probe.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Sequential TCP connect scanner.
///
/// Hosts are resolved one at a time through the system resolver and every
/// requested port is probed in order, one connection attempt at a time.
/// Only the connect is bounded by a timeout; a slow resolver stalls the scan.
///
/// Some resolvers answer lookups for nonexistent names with a synthetic
/// address instead of an error. Behind such a resolver unknown hosts are
/// reported as found and their ports as closed.
#[derive(Debug, Clone)]
pub struct Scanner {
    connect_timeout: Duration,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_timeout(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Scan every host in `hosts`, in list order, against `ports`.
    ///
    /// Resolution and connection failures never fail the run; they show up
    /// as `not_found` hosts and closed ports.
    pub async fn run(&self, hosts: &HostList, ports: &[u16]) -> Vec<ScanResult> {
        info!(hosts = hosts.len(), ports = ports.len(), "starting scan");
        let start = Instant::now();

        let mut results = Vec::with_capacity(hosts.len());
        for host in hosts {
            results.push(self.scan_host(host, ports).await);
        }

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan finished"
        );
        results
    }

    /// Resolve `host` and probe each port in the order given.
    pub async fn scan_host(&self, host: &str, ports: &[u16]) -> ScanResult {
        let Some(addrs) = resolve(host).await else {
            return ScanResult::not_found(host);
        };

        let mut port_states = Vec::with_capacity(ports.len());
        for &port in ports {
            port_states.push(self.probe_port(&addrs, port).await);
        }
        ScanResult::found(host, port_states)
    }

    /// Try each resolved address in turn under one shared deadline.
    async fn probe_port(&self, addrs: &[IpAddr], port: u16) -> PortState {
        let open = match time::timeout(self.connect_timeout, connect_any(addrs, port)).await {
            Ok(Some(stream)) => {
                drop(stream);
                true
            }
            Ok(None) => false,
            Err(_elapsed) => {
                debug!(port, "connect timed out");
                false
            }
        };
        debug!(port, open, "probed port");
        PortState { port, open }
    }
}

/// Scan with the default one second connect timeout.
pub async fn run(hosts: &HostList, ports: &[u16]) -> Vec<ScanResult> {
    Scanner::default().run(hosts, ports).await
}

/// Forward lookup through the system resolver. `None` when the name does not resolve.
async fn resolve(host: &str) -> Option<Vec<IpAddr>> {
    match lookup_host((host, 0u16)).await {
        Ok(addrs) => {
            let ips: Vec<IpAddr> = addrs.map(|a| a.ip()).collect();
            if ips.is_empty() {
                debug!(host, "lookup returned no addresses");
                None
            } else {
                debug!(host, addrs = ?ips, "resolved");
                Some(ips)
            }
        }
        Err(e) => {
            debug!(host, error = %e, "lookup failed");
            None
        }
    }
}

async fn connect_any(addrs: &[IpAddr], port: u16) -> Option<TcpStream> {
    for &ip in addrs {
        match TcpStream::connect(SocketAddr::new(ip, port)).await {
            Ok(stream) => return Some(stream),
            Err(e) => debug!(%ip, port, error = %e, "connect failed"),
        }
    }
    None
}
