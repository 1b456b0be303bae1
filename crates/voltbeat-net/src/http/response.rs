use heapless::Vec;

pub type StatusCode = u16;

/// Parsed HTTP response: status code plus a bounded body.
#[derive(Debug)]
pub struct HttpResponse<const BODY_SIZE: usize> {
    /// Status code from the response status line
    pub status: StatusCode,
    body: Vec<u8, BODY_SIZE>,
}

impl<const BODY_SIZE: usize> HttpResponse<BODY_SIZE> {
    pub(crate) fn new(status: StatusCode, body: Vec<u8, BODY_SIZE>) -> Self {
        Self { status, body }
    }

    /// Raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Response body as UTF-8 text, if it is valid.
    pub fn body_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parse the status line from the header string.
///
/// Returns the status code and the rest of the header string.
pub(crate) fn parse_status_line(header_str: &str) -> Option<(StatusCode, &str)> {
    let line_end = header_str.find("\r\n").unwrap_or(header_str.len());
    let first_line = &header_str[..line_end];
    let mut parts = first_line.split_whitespace();
    let version = parts.next()?;
    if !version.starts_with("HTTP/") {
        return None;
    }
    let status = parts.next()?.parse::<StatusCode>().ok()?;

    let rest_start = core::cmp::min(line_end + 2, header_str.len());
    Some((status, &header_str[rest_start..]))
}

/// Find the end of the heading (the byte after the blank line), if present.
pub(crate) fn find_heading_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|pos| pos + 4)
}

/// Find the content length in the header string.
///
/// Returns the content length if found, otherwise None.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn find_content_length(header: &str) -> Option<u32> {
    const TARGET: &str = "content-length:";
    for line in header.lines() {
        let Some(prefix) = line.get(..TARGET.len()) else {
            continue;
        };
        if prefix.eq_ignore_ascii_case(TARGET) {
            let value_str = line[TARGET.len()..].trim();
            let length = value_str.parse::<u64>().ok()?;
            if length > u64::from(u32::MAX) {
                return None;
            }
            return Some(length as u32);
        }
    }
    None
}
