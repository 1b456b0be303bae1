#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

mod config;
mod domain;
mod infrastructure;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_println::println;

use voltbeat_net::NetworkLink;

use crate::domain::SimulatedVoltageSensor;
use crate::infrastructure::drivers::init_network_stack;
use crate::infrastructure::tasks::{
    network_runner_task, report_cycle_task, wifi_connection_task,
};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Allocate heap memory
    esp_alloc::heap_allocator!(size: 64 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Initialize network stack and spawn network tasks
    let (stack, runner, controller) = init_network_stack(peripherals.WIFI);
    spawner.spawn(wifi_connection_task(controller)).ok();
    spawner.spawn(network_runner_task(runner)).ok();

    // Wait for connectivity before starting the report cycle. A timed-out
    // wait is reported; the cycle task re-checks the link each iteration.
    let link = NetworkLink::new(stack);
    match link.wait_until_connected(config::CONNECT_POLICY).await {
        Ok(ip_config) => println!("network: connected, address {}", ip_config.address.address()),
        Err(_) => println!("network: connect wait timed out"),
    }

    let sensor = SimulatedVoltageSensor::new();
    spawner.spawn(report_cycle_task(link, sensor)).ok();

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
