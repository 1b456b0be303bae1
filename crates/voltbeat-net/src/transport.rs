//! Transport seam between the HTTP client and the network stack.

use embassy_net::tcp::TcpSocket;
use embassy_time::{Duration, with_timeout};
use embedded_io_async::Write as _;

/// A reliable, ordered byte stream the HTTP client runs over.
///
/// TCP on the device; host tests provide scripted implementations.
pub trait Transport {
    type Error;

    /// Send the whole buffer.
    async fn send(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Receive up to `buf.len()` bytes. Returning 0 means the peer closed
    /// the stream.
    async fn recv(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Release the underlying channel. Called exactly once per request.
    async fn close(&mut self);
}

/// Error produced by [`TcpTransport`].
#[derive(Debug)]
pub enum TcpTransportError {
    /// Socket-level failure
    Io(embassy_net::tcp::Error),
    /// No data arrived within the read timeout
    ReadTimeout,
}

impl From<embassy_net::tcp::Error> for TcpTransportError {
    fn from(err: embassy_net::tcp::Error) -> Self {
        TcpTransportError::Io(err)
    }
}

/// [`Transport`] over an established TCP connection.
pub struct TcpTransport<'a> {
    socket: TcpSocket<'a>,
    read_timeout: Duration,
}

impl<'a> TcpTransport<'a> {
    /// Wrap an already-connected socket.
    pub fn new(socket: TcpSocket<'a>, read_timeout: Duration) -> Self {
        Self {
            socket,
            read_timeout,
        }
    }
}

impl Transport for TcpTransport<'_> {
    type Error = TcpTransportError;

    async fn send(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.socket.write_all(buf).await?;
        self.socket.flush().await?;
        Ok(())
    }

    async fn recv(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match with_timeout(self.read_timeout, self.socket.read(buf)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(TcpTransportError::ReadTimeout),
        }
    }

    async fn close(&mut self) {
        self.socket.close();
    }
}
