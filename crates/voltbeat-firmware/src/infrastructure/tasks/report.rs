//! Report cycle task: the device's main loop.

use embassy_net::tcp::TcpSocket;
use embassy_time::Timer;
use esp_println::println;
use heapless::String;

use voltbeat_net::{Endpoint, HttpClient, HttpResponse, NetworkLink, TcpTransport};
use voltbeat_telemetry::{VoltageReport, REPORT_JSON_SIZE};

use crate::config;
use crate::domain::SimulatedVoltageSensor;

const RX_BUFFER_SIZE: usize = 1024;
const TX_BUFFER_SIZE: usize = 1024;
const RESPONSE_BODY_SIZE: usize = 512;

const ENDPOINT: Endpoint<'static> =
    Endpoint::new(config::REPORT_HOST, config::REPORT_PORT, config::REPORT_PATH);

/// Periodic report cycle.
///
/// While the link is up, sample the simulated sensor and POST one reading
/// per cycle; otherwise report the disconnect and wait for the next cycle.
#[embassy_executor::task]
pub(crate) async fn report_cycle_task(link: NetworkLink, mut sensor: SimulatedVoltageSensor) {
    println!("report: starting cycle task");
    Timer::after(config::SETTLE_DELAY).await;

    // One-shot endpoint probe before the first report.
    if link.is_connected() {
        if let Ok(response) = send_get(link).await {
            log_outcome("probe", &response);
        }
    }

    loop {
        if link.is_connected() {
            let report = VoltageReport::new(config::DEVICE_ID, sensor.sample());
            if let Ok(response) = send_report(link, &report).await {
                log_outcome("report", &response);
            }
        } else {
            println!("network: disconnected");
        }
        Timer::after(config::REPORT_INTERVAL).await;
    }
}

fn log_outcome(operation: &str, response: &HttpResponse<RESPONSE_BODY_SIZE>) {
    match response.body_str() {
        Some(body) if !body.is_empty() => {
            println!("{}: status {}: {}", operation, response.status, body);
        }
        _ => println!("{}: status {}", operation, response.status),
    }
}

async fn send_get(link: NetworkLink) -> Result<HttpResponse<RESPONSE_BODY_SIZE>, ()> {
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    let client = connect(link, &mut rx_buffer, &mut tx_buffer).await?;
    client.get().await.map_err(|e| {
        println!("report: request failed: {}", e);
    })
}

async fn send_report(
    link: NetworkLink,
    report: &VoltageReport<'_>,
) -> Result<HttpResponse<RESPONSE_BODY_SIZE>, ()> {
    let payload: String<REPORT_JSON_SIZE> = report.to_json().map_err(|_| {
        println!("report: payload did not fit");
    })?;

    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    let client = connect(link, &mut rx_buffer, &mut tx_buffer).await?;
    client.post(payload.as_bytes()).await.map_err(|e| {
        println!("report: request failed: {}", e);
    })
}

/// Open a TCP connection to the report endpoint and wrap it in a client.
async fn connect<'a>(
    link: NetworkLink,
    rx_buffer: &'a mut [u8],
    tx_buffer: &'a mut [u8],
) -> Result<HttpClient<'static, TcpTransport<'a>, RESPONSE_BODY_SIZE>, ()> {
    let addr = link.resolve(config::REPORT_HOST).await.map_err(|_| {
        println!("report: failed to resolve {}", config::REPORT_HOST);
    })?;

    let mut socket = TcpSocket::new(link.stack(), rx_buffer, tx_buffer);
    socket.set_timeout(Some(config::REQUEST_TIMEOUT));

    if let Err(e) = socket.connect((addr, config::REPORT_PORT)).await {
        socket.abort();
        println!("report: connect failed: {:?}", e);
        return Err(());
    }

    let transport = TcpTransport::new(socket, config::REQUEST_TIMEOUT);
    Ok(HttpClient::new(transport, ENDPOINT))
}
