use core::str::FromStr;

use heapless::String;
use serde::Serialize;

/// Upper bound for a serialized report: the device id plus a short reading.
pub const REPORT_JSON_SIZE: usize = 96;

/// The report did not fit the serialization buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadError;

/// One simulated supply-voltage reading, serialized as
/// `{"id":"<device>","volts":<value>}`.
#[derive(Debug, Clone, Serialize)]
pub struct VoltageReport<'a> {
    pub id: &'a str,
    pub volts: u16,
}

impl<'a> VoltageReport<'a> {
    pub const fn new(id: &'a str, volts: u16) -> Self {
        Self { id, volts }
    }

    /// Serialize the report into a JSON string.
    pub fn to_json<const N: usize>(&self) -> Result<String<N>, PayloadError> {
        let mut buf = [0u8; N];
        let len = serde_json_core::to_slice(self, &mut buf).map_err(|_| PayloadError)?;
        let json = core::str::from_utf8(&buf[..len]).map_err(|_| PayloadError)?;
        String::from_str(json).map_err(|_| PayloadError)
    }
}
