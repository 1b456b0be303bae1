use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_println::println;
use esp_radio::wifi::{
    ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent, WifiStaState,
};

use crate::config;

/// Background task that associates with the configured access point.
///
/// Association is attempted until it first succeeds. After that a lost link
/// is only reported, never re-established; the report cycle observes the
/// link state and idles while it is down.
#[embassy_executor::task]
pub(crate) async fn wifi_connection_task(mut controller: WifiController<'static>) {
    loop {
        // Start the controller if it's not started
        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = ModeConfig::Client(
                ClientConfig::default()
                    .with_ssid(config::WIFI_SSID.into())
                    .with_password(config::WIFI_PASSWORD.into()),
            );
            controller.set_config(&client_config).unwrap();
            controller.start_async().await.unwrap();
        }

        println!("network: connecting to {}", config::WIFI_SSID);
        match controller.connect_async().await {
            Ok(()) => break,
            Err(e) => {
                println!("network: failed to connect to wifi: {e:?}");
                Timer::after(Duration::from_millis(5000)).await;
            }
        }
    }

    loop {
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            println!("network: link lost");
        } else {
            Timer::after(Duration::from_millis(2000)).await;
        }
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
pub(crate) async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
