use std::fmt;

use tokio::io::AsyncRead;
use tracing::{debug, warn};

use crate::http::line_reader::LineReader;
use crate::http::request::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Request line did not split into method, target and version.
    InvalidRequestLine,
    /// Recognized header with no value token.
    MalformedHeader,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidRequestLine => write!(f, "invalid request line"),
            ParseError::MalformedHeader => write!(f, "malformed header line"),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub method: &'a str,
    pub target: &'a str,
    pub version: &'a str,
}

/// The headers the server keeps. Values are the raw second token of the line.
#[derive(Debug, PartialEq, Eq)]
pub enum Header<'a> {
    Host(&'a str),
    UserAgent(&'a str),
}

/// Splits a request line on single spaces into exactly three fields.
pub fn parse_request_line(line: &str) -> Result<RequestLine<'_>, ParseError> {
    let line = strip_terminator(line);
    let mut parts = line.split(' ');

    let method = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    if parts.next().is_some() || method.is_empty() || target.is_empty() || version.is_empty() {
        return Err(ParseError::InvalidRequestLine);
    }

    Ok(RequestLine {
        method,
        target,
        version,
    })
}

/// Classifies a header line.
///
/// Returns `Ok(None)` for headers the server does not keep. The value is the
/// second space-separated token, taken verbatim.
pub fn parse_header_line(line: &str) -> Result<Option<Header<'_>>, ParseError> {
    let is_user_agent = line.starts_with("User-Agent:");
    if !is_user_agent && !line.starts_with("Host:") {
        return Ok(None);
    }

    let value = line.split(' ').nth(1).ok_or(ParseError::MalformedHeader)?;

    if is_user_agent {
        Ok(Some(Header::UserAgent(value)))
    } else {
        Ok(Some(Header::Host(value)))
    }
}

/// Reads the request line and headers from `reader` until the blank line.
///
/// Never fails: end of stream, a read error or a malformed line just ends
/// (or skips) parsing, and whatever was collected so far is returned.
pub async fn read_request<R>(reader: &mut LineReader<R>) -> Request
where
    R: AsyncRead + Unpin,
{
    let mut request = Request::default();
    let mut first_line = true;

    loop {
        let raw = match reader.next_line().await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("End of stream before blank line");
                break;
            }
            Err(e) => {
                warn!("Error reading from connection: {}", e);
                break;
            }
        };

        let line = String::from_utf8_lossy(&raw);
        debug!("Read line: {:?}", line);

        if is_blank(&line) {
            break;
        }

        if first_line {
            first_line = false;
            match parse_request_line(&line) {
                Ok(rl) => {
                    request.method = rl.method.to_string();
                    request.target = rl.target.to_string();
                    request.version = rl.version.to_string();
                }
                Err(e) => warn!("{}: {:?}", e, line),
            }
            continue;
        }

        match parse_header_line(&line) {
            Ok(Some(Header::Host(value))) => request.host = value.to_string(),
            Ok(Some(Header::UserAgent(value))) => request.user_agent = value.to_string(),
            Ok(None) => {}
            Err(e) => warn!("Ignoring {}: {:?}", e, line),
        }
    }

    request
}

fn is_blank(line: &str) -> bool {
    line == "\r\n" || line == "\n"
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
