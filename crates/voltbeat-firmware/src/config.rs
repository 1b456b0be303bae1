use embassy_time::Duration;
use voltbeat_net::ConnectPolicy;

pub(crate) const WIFI_SSID: &str = env!("WIFI_SSID");
pub(crate) const WIFI_PASSWORD: &str = env!("WIFI_PASSWORD");

pub(crate) const REPORT_HOST: &str = env!("REPORT_HOST");
pub(crate) const REPORT_PORT: u16 = 3000;
pub(crate) const REPORT_PATH: &str = "/api/esp32/info";

pub(crate) const DEVICE_ID: &str = "voltbeat_esp32_001";
pub(crate) const HOSTNAME: &str = "voltbeat-esp32";

/// Connectivity wait: poll every 500ms, give up after 30s.
pub(crate) const CONNECT_POLICY: ConnectPolicy =
    ConnectPolicy::new(Duration::from_millis(500)).with_timeout(Duration::from_secs(30));

/// Delay before the first request after connectivity is up.
pub(crate) const SETTLE_DELAY: Duration = Duration::from_secs(1);
/// Delay between report cycles.
pub(crate) const REPORT_INTERVAL: Duration = Duration::from_secs(3);
/// Socket and response read timeout for one request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
