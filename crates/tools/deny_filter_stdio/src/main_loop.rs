use crate::request::handle_line;
use deny_filter::DenyFilter;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{error, info};

/// Answers one response line per request line until input closes
pub async fn main_loop<R, W>(filter: Arc<DenyFilter>, reader: R, mut writer: W)
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut handled: u64 = 0;

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read request: {e}");
                break;
            }
        };

        let Some(response) = handle_line(&filter, &line) else {
            continue;
        };

        let mut out = response.to_line();
        out.push('\n');
        if let Err(e) = write_line(&mut writer, out.as_bytes()).await {
            error!("Failed to write response: {e}");
            break;
        }
        handled += 1;
    }

    info!(handled, "Input closed");
}

async fn write_line<W>(writer: &mut W, line: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(line).await?;
    writer.flush().await
}
