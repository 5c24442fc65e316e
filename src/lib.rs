//! Library crate for pscan-rs: a persisted host list and a sequential TCP connect scanner.
pub mod actions;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod ports;
pub mod scanner;
pub mod types;

pub use error::HostsError;
pub use hosts::HostList;
pub use scanner::Scanner;
pub use types::{PortState, ScanReport, ScanResult};
