//! JSON-lines transport: one request per input line, one response per output line.

use crate::framework::{FunctionClient, TransportError};
use crate::model::RunFunctionRequest;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Failures that stop the stream.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("cannot encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Counts of what happened while serving a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub answered: usize,
    pub skipped: usize,
}

/// Serves requests from `reader` until end of input.
///
/// Blank lines are ignored. Lines that are not a request are logged and
/// skipped; they never produce a response line.
pub async fn serve<R, W>(client: &FunctionClient, reader: R, mut writer: W) -> Result<ServeStats, ServeError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = ServeStats::default();
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let request: RunFunctionRequest = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping malformed request");
                stats.skipped += 1;
                continue;
            }
        };

        let response = client.run_function(request).await?;
        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;

        debug!(line = line_no, tag = %response.meta.tag, "Answered");
        stats.answered += 1;
    }

    Ok(stats)
}
