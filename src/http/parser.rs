use crate::http::request::{Method, Request};
use bytes::Bytes;
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The start line did not split into method, target and version.
    MalformedStartLine(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedStartLine(line) => {
                write!(f, "malformed request start line: {:?}", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one request from the bytes of a single read.
///
/// The body is everything after the first blank line and is never checked
/// against `Content-Length`; a request cut off by the read buffer keeps
/// whatever arrived.
pub fn parse_http_request(raw: Bytes) -> Result<Request, ParseError> {

    // Look for header/body separator
    let (head, body) = match find_headers_end(&raw) {
        Some(end) => (&raw[..end], raw.slice(end + 4..)),
        None => (&raw[..], Bytes::new()),
    };

    // Invalid UTF-8 in the head becomes U+FFFD, so distinct raw paths such as
    // "/\xff" and "/\xfe" resolve to the same file.
    let head = String::from_utf8_lossy(head);
    let mut lines = head.split("\r\n");

    // Request line
    let request_line = lines.next().unwrap_or_default();
    let parts: Vec<&str> = request_line.split(' ').collect();

    let [method, path, version] = parts.as_slice() else {
        return Err(ParseError::MalformedStartLine(request_line.to_string()));
    };

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(": ") {
            headers.insert(key.to_ascii_lowercase(), value.to_string());
        }
    }

    Ok(Request {
        method: Method::from_token(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
