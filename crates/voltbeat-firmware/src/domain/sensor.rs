use esp_hal::rng::Rng;

use voltbeat_telemetry::volts_from_raw;

/// Simulated supply-voltage sensor backed by the hardware RNG.
pub(crate) struct SimulatedVoltageSensor {
    rng: Rng,
}

impl SimulatedVoltageSensor {
    pub(crate) fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// Produce the next simulated reading.
    pub(crate) fn sample(&mut self) -> u16 {
        volts_from_raw(self.rng.random())
    }
}
