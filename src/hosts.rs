use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::error::HostsError;

/// A persisted list of host names.
///
/// Membership checks sort the list and binary-search it, so after any
/// `add`, `remove` or `search` the stored order is lexicographic. `load`
/// appends lines verbatim and does not deduplicate; duplicates read from a
/// file survive until they are removed one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostList {
    hosts: Vec<String>,
}

impl HostList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from an existing file. A missing file yields an empty list.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HostsError> {
        let mut list = Self::new();
        list.load(path)?;
        Ok(list)
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.hosts.iter()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Linear membership check that leaves the stored order untouched.
    pub fn contains(&self, host: &str) -> bool {
        self.hosts.iter().any(|h| h == host)
    }

    /// Sort the list and binary-search for `host`.
    ///
    /// Returns `Ok(index)` when found, `Err(insert_at)` otherwise.
    pub fn search(&mut self, host: &str) -> Result<usize, usize> {
        self.hosts.sort_unstable();
        self.hosts.binary_search_by(|h| h.as_str().cmp(host))
    }

    /// Add a host, failing with [`HostsError::AlreadyExists`] if present.
    pub fn add(&mut self, host: impl Into<String>) -> Result<(), HostsError> {
        let host = host.into();
        match self.search(&host) {
            Ok(_) => Err(HostsError::AlreadyExists(host)),
            Err(at) => {
                self.hosts.insert(at, host);
                Ok(())
            }
        }
    }

    /// Remove one occurrence of a host, failing with [`HostsError::NotExists`] if absent.
    pub fn remove(&mut self, host: &str) -> Result<(), HostsError> {
        match self.search(host) {
            Ok(i) => {
                self.hosts.remove(i);
                Ok(())
            }
            Err(_) => Err(HostsError::NotExists(host.to_string())),
        }
    }

    /// Write one host per line, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HostsError> {
        let path = path.as_ref();
        let mut output = String::new();
        for host in &self.hosts {
            output.push_str(host);
            output.push('\n');
        }

        let mut opts = OpenOptions::new();
        opts.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o644);
        }

        let mut file = opts.open(path).map_err(|e| HostsError::io(path, e))?;
        file.write_all(output.as_bytes())
            .map_err(|e| HostsError::io(path, e))?;
        debug!(path = %path.display(), hosts = self.hosts.len(), "saved hosts file");
        Ok(())
    }

    /// Append every line of the file to the list.
    ///
    /// A missing file is not an error. Lines are taken as-is apart from the
    /// line ending; on a read error, lines read so far stay in the list.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), HostsError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "hosts file not found, starting empty");
                return Ok(());
            }
            Err(e) => return Err(HostsError::io(path, e)),
        };

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| HostsError::io(path, e))?;
            self.hosts.push(line);
        }
        debug!(path = %path.display(), hosts = self.hosts.len(), "loaded hosts file");
        Ok(())
    }
}

impl From<Vec<String>> for HostList {
    fn from(hosts: Vec<String>) -> Self {
        Self { hosts }
    }
}

impl FromIterator<String> for HostList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            hosts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HostList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
