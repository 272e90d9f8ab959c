use std::io::{self, Write};

use thiserror::Error;
use tonic::{Code, Status};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The channel or the call itself failed at the gRPC layer.
    #[error("gRPC request failed with status {code:?}: {message}")]
    Transport { code: Code, message: String },

    /// Anything else that went wrong during the run.
    #[error("{0}")]
    Unexpected(#[from] anyhow::Error),
}

impl From<Status> for ClientError {
    fn from(status: Status) -> Self {
        ClientError::Transport {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Unexpected(err.into())
    }
}

impl ClientError {
    /// Writes the failure diagnostic in the form the user sees on stderr.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            ClientError::Transport { code, message } => {
                writeln!(out, "--- gRPC Error ---")?;
                writeln!(out, "Status Code: {code:?}")?;
                writeln!(out, "Details: {message}")?;
                if *code == Code::Unavailable {
                    writeln!(
                        out,
                        "The Whereami server might not be running or is unreachable."
                    )?;
                }
            }
            ClientError::Unexpected(err) => {
                writeln!(out, "--- An unexpected error occurred ---")?;
                writeln!(out, "Error: {err:#}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn rendered(err: &ClientError) -> String {
        let mut buf = Vec::new();
        err.report(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn unavailable_report_includes_hint() {
        let err = ClientError::from(Status::unavailable("connection refused"));
        let out = rendered(&err);
        assert!(out.contains("--- gRPC Error ---"));
        assert!(out.contains("Status Code: Unavailable"));
        assert!(out.contains("Details: connection refused"));
        assert!(out.contains("might not be running or is unreachable"));
    }

    #[test]
    fn other_status_report_has_no_hint() {
        let err = ClientError::from(Status::internal("boom"));
        let out = rendered(&err);
        assert!(out.contains("Status Code: Internal"));
        assert!(out.contains("Details: boom"));
        assert!(!out.contains("unreachable"));
    }

    #[test]
    fn unexpected_report_carries_the_message() {
        let err = ClientError::Unexpected(anyhow!("something odd"));
        let out = rendered(&err);
        assert!(out.contains("--- An unexpected error occurred ---"));
        assert!(out.contains("Error: something odd"));
    }
}
