pub(crate) mod network;
pub(crate) mod report;

pub(crate) use network::{network_runner_task, wifi_connection_task};
pub(crate) use report::report_cycle_task;
