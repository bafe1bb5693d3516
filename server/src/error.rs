use std::{io, net::SocketAddr};

use thiserror::Error;

/// Failures that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to read leptos configuration: {0}")]
    Config(String),

    #[error("failed to bind tcp listener to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to serve app: {0}")]
    Serve(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use std::error::Error as _;

    use super::*;

    #[test]
    fn bind_error_names_the_address() {
        let addr: SocketAddr = "127.0.0.1:3007".parse().unwrap();
        let err = ServerError::Bind {
            addr,
            source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "failed to bind tcp listener to 127.0.0.1:3007: in use");
        assert_matches!(err.source(), Some(_));
    }

    #[test]
    fn config_error_keeps_message() {
        let err = ServerError::Config("missing [[workspace.metadata.leptos]]".to_owned());
        assert_matches!(&err, ServerError::Config(msg) if msg.contains("metadata"));
    }
}
