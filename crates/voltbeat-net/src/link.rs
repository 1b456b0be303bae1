//! Connectivity state and bounded readiness waits.

use embassy_net::dns::DnsQueryType;
use embassy_net::{IpAddress, Ipv4Address, Stack, StaticConfigV4};
use embassy_time::{Duration, Instant, Timer};

/// Polling policy for connectivity waits.
#[derive(Debug, Clone, Copy)]
pub struct ConnectPolicy {
    /// Interval between status probes
    pub poll_interval: Duration,
    /// Overall deadline; `None` waits forever
    pub timeout: Option<Duration>,
}

impl ConnectPolicy {
    /// Create a policy that polls at `poll_interval` without a deadline.
    pub const fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            timeout: None,
        }
    }

    /// Set the overall deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The policy deadline expired before connectivity was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectTimeout;

/// The hostname could not be resolved to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveError;

/// Poll `probe` at the policy interval until it yields a value or the
/// policy deadline expires.
pub async fn poll_until<T>(
    policy: ConnectPolicy,
    mut probe: impl FnMut() -> Option<T>,
) -> Result<T, ConnectTimeout> {
    let deadline = policy.timeout.map(|timeout| Instant::now() + timeout);
    loop {
        if let Some(value) = probe() {
            return Ok(value);
        }
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                return Err(ConnectTimeout);
            }
        }
        Timer::after(policy.poll_interval).await;
    }
}

/// View over the network stack owned by the orchestration loop.
#[derive(Clone, Copy)]
pub struct NetworkLink {
    stack: Stack<'static>,
}

impl NetworkLink {
    pub fn new(stack: Stack<'static>) -> Self {
        Self { stack }
    }

    /// The underlying network stack, for opening sockets.
    pub fn stack(&self) -> Stack<'static> {
        self.stack
    }

    /// Whether the link is up and an IPv4 configuration is assigned.
    pub fn is_connected(&self) -> bool {
        self.stack.is_link_up() && self.stack.config_v4().is_some()
    }

    /// The assigned IPv4 address; `None` while not connected.
    pub fn address(&self) -> Option<Ipv4Address> {
        self.stack.config_v4().map(|config| config.address.address())
    }

    /// Wait for full connectivity (link up + assigned address) under
    /// `policy`.
    pub async fn wait_until_connected(
        &self,
        policy: ConnectPolicy,
    ) -> Result<StaticConfigV4, ConnectTimeout> {
        let stack = self.stack;
        poll_until(policy, || {
            if stack.is_link_up() {
                stack.config_v4()
            } else {
                None
            }
        })
        .await
    }

    /// Resolve a hostname to an IP address.
    pub async fn resolve(&self, host: &str) -> Result<IpAddress, ResolveError> {
        if let Ok(ip) = host.parse::<Ipv4Address>() {
            return Ok(IpAddress::Ipv4(ip));
        }

        let Ok(addresses) = self.stack.dns_query(host, DnsQueryType::A).await else {
            return Err(ResolveError);
        };

        addresses.first().copied().ok_or(ResolveError)
    }
}
