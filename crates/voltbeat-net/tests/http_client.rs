//! Host-side tests for the single-shot HTTP client.

use futures::executor::block_on;
use voltbeat_net::{Endpoint, HttpClient, HttpError, Transport};

const ENDPOINT: Endpoint<'static> = Endpoint::new("device-hub.local", 3000, "/api/esp32/info");

#[derive(Debug, PartialEq, Eq)]
struct MockError;

/// Scripted transport: hands out canned receive chunks and records what the
/// client sends.
#[derive(Default)]
struct MockTransport {
    script: Vec<Vec<u8>>,
    cursor: usize,
    sent: Vec<u8>,
    fail_send: bool,
    recv_calls: usize,
    close_calls: usize,
}

impl MockTransport {
    fn scripted(script: &[&[u8]]) -> Self {
        Self {
            script: script.iter().map(|chunk| chunk.to_vec()).collect(),
            ..Self::default()
        }
    }

    fn failing_send() -> Self {
        Self {
            fail_send: true,
            ..Self::default()
        }
    }

    fn sent_str(&self) -> &str {
        std::str::from_utf8(&self.sent).unwrap()
    }
}

impl Transport for &mut MockTransport {
    type Error = MockError;

    async fn send(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        if self.fail_send {
            return Err(MockError);
        }
        self.sent.extend_from_slice(buf);
        Ok(())
    }

    async fn recv(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.recv_calls += 1;
        if self.cursor >= self.script.len() {
            return Ok(0);
        }
        let chunk = &self.script[self.cursor];
        assert!(chunk.len() <= buf.len(), "script chunk larger than read buffer");
        buf[..chunk.len()].copy_from_slice(chunk);
        self.cursor += 1;
        Ok(chunk.len())
    }

    async fn close(&mut self) {
        self.close_calls += 1;
    }
}

#[test]
fn post_returns_status_and_body() {
    let mut mock = MockTransport::scripted(&[b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nOK"]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let response = block_on(client.post(br#"{"id":"esp32_device_001","volts":24}"#)).unwrap();

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.body_str(), Some("OK"));
    assert_eq!(mock.close_calls, 1);
}

#[test]
fn post_sends_expected_request_bytes() {
    let mut mock = MockTransport::scripted(&[b"HTTP/1.1 204 No Content\r\nContent-Length: 0\r\n\r\n"]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);
    let payload = br#"{"id":"esp32_device_001","volts":27}"#;

    block_on(client.post(payload)).unwrap();

    let sent = mock.sent_str();
    assert!(sent.starts_with("POST /api/esp32/info HTTP/1.1\r\n"));
    assert!(sent.contains("Host: device-hub.local\r\n"));
    assert!(sent.contains("Connection: close\r\n"));
    assert!(sent.contains("Content-Type: application/json\r\n"));
    assert!(sent.contains(&format!("Content-Length: {}\r\n", payload.len())));
    assert!(sent.ends_with("\r\n\r\n{\"id\":\"esp32_device_001\",\"volts\":27}"));
}

#[test]
fn get_sends_no_body_and_no_content_length() {
    let mut mock = MockTransport::scripted(&[b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n"]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let response = block_on(client.get()).unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body().is_empty());
    let sent = mock.sent_str();
    assert!(sent.starts_with("GET /api/esp32/info HTTP/1.1\r\n"));
    assert!(sent.contains("Content-Type: application/json\r\n"));
    assert!(!sent.contains("Content-Length:"));
    assert!(sent.ends_with("\r\n\r\n"));
}

#[test]
fn send_failure_returns_transport_error_without_receiving() {
    let mut mock = MockTransport::failing_send();
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let result = block_on(client.post(b"{}"));

    assert!(matches!(result, Err(HttpError::Transport(MockError))));
    assert_eq!(mock.recv_calls, 0);
    assert_eq!(mock.close_calls, 1);
}

#[test]
fn body_split_across_chunks() {
    let mut mock = MockTransport::scripted(&[
        b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\n12345",
        b"67890",
    ]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let response = block_on(client.get()).unwrap();

    assert_eq!(response.body_str(), Some("1234567890"));
}

#[test]
fn body_terminated_by_peer_close() {
    let mut mock = MockTransport::scripted(&[b"HTTP/1.1 200 OK\r\n\r\nhello"]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let response = block_on(client.get()).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body_str(), Some("hello"));
}

#[test]
fn excess_bytes_beyond_content_length_are_dropped() {
    let mut mock =
        MockTransport::scripted(&[b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nOKtrailing"]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let response = block_on(client.get()).unwrap();

    assert_eq!(response.body_str(), Some("OK"));
}

#[test]
fn garbage_status_line_is_a_parse_error() {
    let mut mock = MockTransport::scripted(&[b"NOT HTTP AT ALL\r\n\r\n"]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let result = block_on(client.get());

    assert!(matches!(result, Err(HttpError::Parse)));
    assert_eq!(mock.close_calls, 1);
}

#[test]
fn close_before_heading_is_reported() {
    let mut mock = MockTransport::scripted(&[]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let result = block_on(client.get());

    assert!(matches!(result, Err(HttpError::Closed)));
    assert_eq!(mock.close_calls, 1);
}

#[test]
fn truncated_body_on_close_is_reported() {
    let mut mock = MockTransport::scripted(&[b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\nhal"]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let result = block_on(client.get());

    assert!(matches!(result, Err(HttpError::Closed)));
}

#[test]
fn status_line_without_reason_phrase_parses() {
    let mut mock = MockTransport::scripted(&[b"HTTP/1.1 500\r\n\r\n"]);
    let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);

    let response = block_on(client.get()).unwrap();

    assert_eq!(response.status, 500);
    assert!(!response.is_success());
}

#[test]
fn oversized_body_is_rejected() {
    let mut mock =
        MockTransport::scripted(&[b"HTTP/1.1 200 OK\r\nContent-Length: 8\r\n\r\ntoo long"]);
    let client: HttpClient<_, 4> = HttpClient::new(&mut mock, ENDPOINT);

    let result = block_on(client.get());

    assert!(matches!(result, Err(HttpError::BodyTooLarge)));
    assert_eq!(mock.close_calls, 1);
}

#[test]
fn three_cycles_produce_three_outcomes_and_releases() {
    let mut outcomes = Vec::new();
    for volts in [24u16, 26, 28] {
        let mut mock =
            MockTransport::scripted(&[b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nOK"]);
        let client: HttpClient<_, 512> = HttpClient::new(&mut mock, ENDPOINT);
        let payload = format!("{{\"id\":\"esp32_device_001\",\"volts\":{volts}}}");

        let response = block_on(client.post(payload.as_bytes())).unwrap();

        assert_eq!(mock.close_calls, 1);
        outcomes.push(response.status);
    }
    assert_eq!(outcomes, vec![200, 200, 200]);
}
