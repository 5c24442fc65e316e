use std::io;
use std::path::PathBuf;
use std::time::Duration;

use pscan_rs::types::ScanReport;
use pscan_rs::{actions, logging, ports, Scanner};

use anyhow::Result;
use clap::{Parser, Subcommand};

/// pscan-rs: keep a list of hosts and check which TCP ports they accept connections on.
#[derive(Debug, Clone, Parser)]
#[command(name = "pscan-rs", version, about, long_about = None)]
struct Cli {
    /// File holding the host list, one host per line.
    #[arg(long = "hosts-file", env = "PSCAN_HOSTS_FILE", default_value = "pScan.hosts", global = true)]
    hosts_file: PathBuf,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Manage the host list.
    #[command(subcommand)]
    Hosts(HostsCommand),

    /// Run a port scan on every host in the list.
    Scan {
        /// Ports to scan, comma separated; ranges like 8000-8010 are allowed [default: 22,80,443].
        #[arg(short, long)]
        ports: Option<String>,

        /// Read the ports from a file instead (one or more per line, `#` comments).
        #[arg(long = "ports-file")]
        ports_file: Option<PathBuf>,

        /// Connect timeout per port in milliseconds.
        #[arg(long = "timeout-ms", default_value_t = 1000)]
        timeout_ms: u64,

        /// Also write the results as pretty JSON to this path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Subcommand)]
enum HostsCommand {
    /// Add host(s) to the list.
    #[command(alias = "a")]
    Add {
        #[arg(required = true)]
        hosts: Vec<String>,
    },
    /// Print the hosts in the list.
    #[command(alias = "l")]
    List,
    /// Delete host(s) from the list.
    #[command(alias = "d")]
    Delete {
        #[arg(required = true)]
        hosts: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Hosts(HostsCommand::Add { hosts }) => {
            actions::add_action(&mut out, &cli.hosts_file, &hosts)
        }
        Command::Hosts(HostsCommand::List) => actions::list_action(&mut out, &cli.hosts_file),
        Command::Hosts(HostsCommand::Delete { hosts }) => {
            actions::delete_action(&mut out, &cli.hosts_file, &hosts)
        }
        Command::Scan {
            ports: ports_arg,
            ports_file,
            timeout_ms,
            output,
        } => {
            let ports = match (ports_file, ports_arg) {
                (Some(path), _) => ports::load_ports_from_path(path)?,
                (None, Some(list)) => ports::parse_ports_str(&list)?,
                (None, None) => ports::DEFAULT_PORTS.to_vec(),
            };
            let scanner = Scanner::with_timeout(Duration::from_millis(timeout_ms));
            let results = actions::scan_action(&mut out, &cli.hosts_file, &ports, &scanner).await?;
            if let Some(path) = output.as_deref() {
                actions::write_report_json(path, &ScanReport::new(&ports, results))?;
                eprintln!("Wrote JSON results to {}", path.display());
            }
            Ok(())
        }
    }
}
