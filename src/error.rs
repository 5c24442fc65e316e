use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`HostList`](crate::hosts::HostList) operations.
#[derive(Error, Debug)]
pub enum HostsError {
    /// `add` was called with a host that is already in the list.
    #[error("host {0} already exists in the list")]
    AlreadyExists(String),

    /// `remove` was called with a host that is not in the list.
    #[error("host {0} is not in the list")]
    NotExists(String),

    /// Reading or writing the hosts file failed.
    #[error("hosts file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HostsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
