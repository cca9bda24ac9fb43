//! Error types for the SSH backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SshError {
    #[error("failed to resolve {host}: {detail}")]
    Resolve { host: String, detail: String },

    #[error("connection failed: {0}")]
    Connect(#[source] std::io::Error),

    #[error("ssh handshake failed: {0}")]
    Handshake(#[source] ssh2::Error),

    #[error("authentication failed for {user}: {detail}")]
    Auth { user: String, detail: String },

    #[error("command execution failed: {0}")]
    Exec(#[source] ssh2::Error),

    #[error("channel io error: {0}")]
    Io(#[from] std::io::Error),
}
