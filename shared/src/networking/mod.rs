pub mod endpoint;
pub mod error;
pub mod result;

use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::models::jobs::job::Job;
use crate::models::jobs::tile_result::TileResult;

use self::endpoint::Endpoint;
use self::error::NetworkingError;
use self::result::NetworkingResult;

/// One parsed HTTP response: the status code and the raw body text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one job to one worker and decodes the tile it returns. The
/// calling task blocks until the worker answers or the transport fails.
pub async fn fetch_tile(endpoint: &Endpoint, job: &Job) -> NetworkingResult<TileResult> {
    let mut stream = TcpStream::connect(endpoint.to_string()).await?;
    send_job_request(&mut stream, endpoint, job).await?;

    let response = read_response(&mut stream).await?;
    if response.status != 200 {
        return Err(NetworkingError::UnexpectedStatus(response.status));
    }

    Ok(TileResult::from_json(&response.body)?)
}

pub async fn send_job_request(
    stream: &mut TcpStream,
    endpoint: &Endpoint,
    job: &Job,
) -> NetworkingResult<()> {
    let path = job.to_path();
    debug!("Sending job request {} to {}", path, endpoint);

    // Connection: close makes the response end at EOF, so no keep-alive
    // or chunked bookkeeping is needed on the read side.
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        path, endpoint
    );
    stream.write_all(request.as_bytes()).await?;
    Ok(stream.flush().await?)
}

pub async fn read_response(stream: &mut TcpStream) -> NetworkingResult<RawResponse> {
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await?;
    parse_response(&raw)
}

fn parse_response(raw: &[u8]) -> NetworkingResult<RawResponse> {
    let text = String::from_utf8_lossy(raw);
    let (head, body) = text
        .split_once("\r\n\r\n")
        .ok_or_else(|| NetworkingError::InvalidHttp("missing header terminator".to_string()))?;

    let status_line = head.lines().next().unwrap_or_default();
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .ok_or_else(|| {
            NetworkingError::InvalidHttp(format!("unparseable status line: {:?}", status_line))
        })?;

    debug!("Received response: status {}, {} body bytes", status, body.len());
    Ok(RawResponse {
        status,
        body: body.to_string(),
    })
}
