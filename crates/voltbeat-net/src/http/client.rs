use heapless::Vec;

use super::request::{ContentHeaders, ContentType, Method, RequestHeaders, TargetWriter as _};
use super::response::{find_content_length, find_heading_end, parse_status_line, HttpResponse};
use super::HttpError;
use crate::transport::Transport;

const HEADER_BUFFER_SIZE: usize = 512;
const RX_CHUNK_SIZE: usize = 256;

/// Fixed destination of a reporter client.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub host: &'a str,
    pub port: u16,
    pub path: &'a str,
}

impl<'a> Endpoint<'a> {
    pub const fn new(host: &'a str, port: u16, path: &'a str) -> Self {
        Self { host, port, path }
    }
}

/// Single-shot HTTP/1.1 client over a [`Transport`].
///
/// One client performs one request: [`get`](Self::get) and
/// [`post`](Self::post) consume the client and release the transport on
/// every path.
pub struct HttpClient<'a, T: Transport, const BODY_SIZE: usize> {
    transport: T,
    endpoint: Endpoint<'a>,
}

impl<'a, T: Transport, const BODY_SIZE: usize> HttpClient<'a, T, BODY_SIZE> {
    /// Create a client for one request against `endpoint`.
    pub fn new(transport: T, endpoint: Endpoint<'a>) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Issue a GET request with an empty body.
    pub async fn get(mut self) -> Result<HttpResponse<BODY_SIZE>, HttpError<T::Error>> {
        let result = self.perform(Method::Get, None).await;
        self.transport.close().await;
        result
    }

    /// Issue a POST request carrying `body` as a JSON payload.
    pub async fn post(
        mut self,
        body: &[u8],
    ) -> Result<HttpResponse<BODY_SIZE>, HttpError<T::Error>> {
        let result = self.perform(Method::Post, Some(body)).await;
        self.transport.close().await;
        result
    }

    async fn perform(
        &mut self,
        method: Method,
        body: Option<&[u8]>,
    ) -> Result<HttpResponse<BODY_SIZE>, HttpError<T::Error>> {
        let mut content = ContentHeaders::new(ContentType::Json);
        if let Some(body) = body {
            content = content.with_length(body.len());
        }
        let headers = RequestHeaders::new(method, self.endpoint.host, self.endpoint.path)
            .with_content(content);

        let mut header_buf: Vec<u8, HEADER_BUFFER_SIZE> = Vec::new();
        headers.write_to(&mut header_buf)?;

        self.transport
            .send(&header_buf)
            .await
            .map_err(HttpError::Transport)?;
        if let Some(body) = body {
            self.transport.send(body).await.map_err(HttpError::Transport)?;
        }

        self.read_response().await
    }

    /// Read the heading and body of the response.
    #[allow(clippy::cast_possible_truncation)]
    async fn read_response(&mut self) -> Result<HttpResponse<BODY_SIZE>, HttpError<T::Error>> {
        let mut heading: Vec<u8, HEADER_BUFFER_SIZE> = Vec::new();
        let heading_end = loop {
            let mut chunk = [0u8; RX_CHUNK_SIZE];
            let n = self
                .transport
                .recv(&mut chunk)
                .await
                .map_err(HttpError::Transport)?;
            if n == 0 {
                return Err(HttpError::Closed);
            }
            heading
                .extend_from_slice(&chunk[..n])
                .map_err(|_| HttpError::Parse)?;
            if let Some(end) = find_heading_end(&heading) {
                break end;
            }
        };

        let header_str =
            core::str::from_utf8(&heading[..heading_end]).map_err(|_| HttpError::Parse)?;
        let (status, rest_headers) = parse_status_line(header_str).ok_or(HttpError::Parse)?;
        let content_length = find_content_length(rest_headers);

        // Data past the blank line already belongs to the body.
        let mut body: Vec<u8, BODY_SIZE> = Vec::new();
        body.extend_from_slice(&heading[heading_end..])
            .map_err(|_| HttpError::BodyTooLarge)?;

        loop {
            if let Some(length) = content_length {
                if body.len() as u32 >= length {
                    body.truncate(length as usize);
                    break;
                }
            }
            let mut chunk = [0u8; RX_CHUNK_SIZE];
            let n = self
                .transport
                .recv(&mut chunk)
                .await
                .map_err(HttpError::Transport)?;
            if n == 0 {
                // Without a Content-Length the peer close terminates the body.
                if let Some(length) = content_length {
                    if (body.len() as u32) < length {
                        return Err(HttpError::Closed);
                    }
                }
                break;
            }
            body.extend_from_slice(&chunk[..n])
                .map_err(|_| HttpError::BodyTooLarge)?;
        }

        Ok(HttpResponse::new(status, body))
    }
}
