use serde::{Deserialize, Serialize};
use ::time::{format_description::well_known, OffsetDateTime};

/// Outcome of one TCP connect probe.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortState {
    pub port: u16,
    pub open: bool,
}

impl PortState {
    pub fn label(&self) -> &'static str {
        if self.open {
            "open"
        } else {
            "closed"
        }
    }
}

/// Scan outcome for one host. `port_states` is empty when `not_found` is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub host: String,
    pub not_found: bool,
    pub port_states: Vec<PortState>,
}

impl ScanResult {
    pub fn not_found(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            not_found: true,
            port_states: Vec::new(),
        }
    }

    pub fn found(host: impl Into<String>, port_states: Vec<PortState>) -> Self {
        Self {
            host: host.into(),
            not_found: false,
            port_states,
        }
    }
}

/// Results of one scan run together with the requested ports, as written to JSON.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScanReport {
    pub generated_at: String,
    pub ports: Vec<u16>,
    pub results: Vec<ScanResult>,
}

impl ScanReport {
    pub fn new(ports: &[u16], results: Vec<ScanResult>) -> Self {
        Self {
            generated_at: now_rfc3339(),
            ports: ports.to_vec(),
            results,
        }
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}
