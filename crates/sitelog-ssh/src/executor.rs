//! Real SSH backend using `ssh2` (libssh2 bindings).

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::SshError;
use crate::session::{CommandOutput, CommandSession, Credentials, SessionConnector};

const SSH_PORT: u16 = 22;

/// Connector that dials port 22 and authenticates with a password.
pub struct Ssh2Connector {
    /// TCP connect timeout; also applied to handshake and auth.
    timeout: Duration,
}

impl Ssh2Connector {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(20),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for Ssh2Connector {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConnector for Ssh2Connector {
    type Session = Ssh2Session;

    fn connect(&self, host: &str, creds: &Credentials) -> Result<Ssh2Session, SshError> {
        let addr = (host, SSH_PORT)
            .to_socket_addrs()
            .map_err(|e| SshError::Resolve {
                host: host.to_string(),
                detail: e.to_string(),
            })?
            .next()
            .ok_or_else(|| SshError::Resolve {
                host: host.to_string(),
                detail: "no addresses".to_string(),
            })?;

        let tcp = TcpStream::connect_timeout(&addr, self.timeout).map_err(SshError::Connect)?;

        let mut session = ssh2::Session::new().map_err(SshError::Handshake)?;
        session.set_timeout(self.timeout.as_millis() as u32);
        session.set_tcp_stream(tcp);
        session.handshake().map_err(SshError::Handshake)?;

        session
            .userauth_password(&creds.username, &creds.password)
            .map_err(|e| SshError::Auth {
                user: creds.username.clone(),
                detail: e.to_string(),
            })?;

        tracing::debug!("authenticated to {host} as {}", creds.username);
        Ok(Ssh2Session { session })
    }
}

/// One authenticated ssh2 session; each exec opens a fresh channel.
pub struct Ssh2Session {
    session: ssh2::Session,
}

impl CommandSession for Ssh2Session {
    fn exec(
        &mut self,
        command: &str,
        stdin_line: Option<&str>,
    ) -> Result<CommandOutput, SshError> {
        let mut channel = self.session.channel_session().map_err(SshError::Exec)?;
        channel.exec(command).map_err(SshError::Exec)?;

        if let Some(line) = stdin_line {
            channel.write_all(line.as_bytes())?;
            channel.write_all(b"\n")?;
            channel.flush()?;
        }

        let mut stdout = String::new();
        channel.read_to_string(&mut stdout)?;
        let mut stderr = String::new();
        channel.stderr().read_to_string(&mut stderr)?;

        channel.wait_close().map_err(SshError::Exec)?;
        let exit_status = channel.exit_status().ok();

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_twenty_seconds() {
        let connector = Ssh2Connector::new();
        assert_eq!(connector.timeout, Duration::from_secs(20));
    }

    #[test]
    fn with_timeout_overrides_default() {
        let connector = Ssh2Connector::new().with_timeout(Duration::from_secs(5));
        assert_eq!(connector.timeout, Duration::from_secs(5));
    }
}
