//! Command handlers shared by the CLI: each loads the hosts file, does its
//! work and writes human-readable output to `out`.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::hosts::HostList;
use crate::scanner::Scanner;
use crate::types::{ScanReport, ScanResult};

/// Add hosts to the hosts file. Stops at the first host already present;
/// nothing is saved in that case.
pub fn add_action<W: Write>(out: &mut W, hosts_file: &Path, hosts: &[String]) -> Result<()> {
    let mut hl = HostList::from_file(hosts_file)?;
    for host in hosts {
        hl.add(host.as_str())?;
        writeln!(out, "Added host: {host}")?;
    }
    hl.save(hosts_file)?;
    Ok(())
}

/// Delete hosts from the hosts file. Stops at the first missing host;
/// nothing is saved in that case.
pub fn delete_action<W: Write>(out: &mut W, hosts_file: &Path, hosts: &[String]) -> Result<()> {
    let mut hl = HostList::from_file(hosts_file)?;
    for host in hosts {
        hl.remove(host)?;
        writeln!(out, "Deleted host: {host}")?;
    }
    hl.save(hosts_file)?;
    Ok(())
}

pub fn list_action<W: Write>(out: &mut W, hosts_file: &Path) -> Result<()> {
    let hl = HostList::from_file(hosts_file)?;
    for host in &hl {
        writeln!(out, "{host}")?;
    }
    Ok(())
}

/// Scan every host in the hosts file and print the results.
pub async fn scan_action<W: Write>(
    out: &mut W,
    hosts_file: &Path,
    ports: &[u16],
    scanner: &Scanner,
) -> Result<Vec<ScanResult>> {
    let hl = HostList::from_file(hosts_file)?;
    let results = scanner.run(&hl, ports).await;
    print_results(out, &results)?;
    Ok(results)
}

pub fn print_results<W: Write>(out: &mut W, results: &[ScanResult]) -> Result<()> {
    for r in results {
        if r.not_found {
            writeln!(out, "{}: Host not found", r.host)?;
            writeln!(out)?;
            continue;
        }
        writeln!(out, "{}:", r.host)?;
        for p in &r.port_states {
            writeln!(out, "\t{}: {}", p.port, p.label())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_report_json(path: &Path, report: &ScanReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
