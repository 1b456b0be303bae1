//! # Networking for the voltbeat firmware
//!
//! `voltbeat-net` is a `no_std` networking library built on the
//! [Embassy](https://embassy.dev/) ecosystem. It provides the two network
//! concerns of the device:
//!
//! - **Reporting**: a single-shot HTTP/1.1 client for delivering JSON
//!   payloads to the collection endpoint. The client is generic over a
//!   [`Transport`] byte stream, so it runs over TCP on the device and over
//!   scripted streams in host tests.
//! - **Connectivity**: link readiness polling with a caller-supplied
//!   [`ConnectPolicy`], plus a [`NetworkLink`] view over the network stack
//!   for status queries and hostname resolution.
//!
//! ## Usage
//!
//! One client performs exactly one request. `get` and `post` consume the
//! client and release the transport on every path, success or failure.
//!
//! ```no_run
//! # use voltbeat_net::{Endpoint, HttpClient, Transport};
//! #
//! # struct MyTransport;
//! # impl Transport for MyTransport {
//! #     type Error = ();
//! #     async fn send(&mut self, _buf: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     async fn recv(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! #     async fn close(&mut self) {}
//! # }
//! #
//! # async fn run() -> Result<(), voltbeat_net::HttpError<()>> {
//! let transport = MyTransport;
//! let endpoint = Endpoint::new("192.168.1.50", 3000, "/api/esp32/info");
//! let client: HttpClient<_, 512> = HttpClient::new(transport, endpoint);
//!
//! let response = client.post(br#"{"id":"esp32_device_001","volts":24}"#).await?;
//! let _ = response.status;
//! # Ok(())
//! # }
//! ```

#![no_std]

pub mod http;
pub mod link;
pub mod transport;

// Re-export key types for easier access at the crate root.
pub use http::client::{Endpoint, HttpClient};
pub use http::response::HttpResponse;
pub use http::HttpError;
pub use link::{ConnectPolicy, ConnectTimeout, NetworkLink, ResolveError};
pub use transport::{TcpTransport, TcpTransportError, Transport};
