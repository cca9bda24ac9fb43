//! sitelog-ssh: sequential SSH fan-out of a command list across a host list.
//! One session per host, one exec channel per command, no overlap between
//! hosts. The network backend sits behind a trait seam so the fan-out loop
//! is testable without a server.

pub mod error;
pub mod executor;
pub mod fanout;
pub mod session;

pub use error::SshError;
pub use executor::Ssh2Connector;
pub use fanout::{FanoutError, FanoutPlan, FanoutReport, HostReport, PlanError, run_fanout};
pub use session::{CommandOutput, CommandSession, Credentials, SessionConnector};
