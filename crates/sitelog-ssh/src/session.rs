//! Backend trait seams and the credential/output types they exchange.

use std::fmt;

use serde::Serialize;

use crate::error::SshError;

/// One username/password pair, shared across every host in a run.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Captured output of one remote command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Remote exit status, when the backend reports one.
    pub exit_status: Option<i32>,
}

/// Connects to a host and yields an authenticated command session.
/// Enables mock injection for testing.
pub trait SessionConnector: Send + Sync {
    type Session: CommandSession;

    fn connect(&self, host: &str, creds: &Credentials) -> Result<Self::Session, SshError>;
}

/// One authenticated session on a single host.
pub trait CommandSession {
    /// Run `command` to completion and capture its stdout and stderr.
    ///
    /// `stdin_line`, when set, is written to the command's stdin followed
    /// by a newline before output is read. The fan-out loop uses it to
    /// feed the password to `sudo`-prefixed commands. This races against
    /// the remote prompt and is not reliable on every host configuration;
    /// it is an escape hatch, not an elevation mechanism.
    fn exec(
        &mut self,
        command: &str,
        stdin_line: Option<&str>,
    ) -> Result<CommandOutput, SshError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("admin", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("admin"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }
}
