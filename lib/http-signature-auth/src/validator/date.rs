use super::Validator;
use crate::Error;
use bytes::Bytes;
use http::{header, Request};
use std::time::{Duration, SystemTime};

/// Default accepted difference between the `Date` header and server time
const DEFAULT_TIME_GAP: Duration = Duration::from_secs(30);

/// Freshness check on the `Date` header
///
/// Rejects requests whose declared date lies more than `time_gap` away from
/// server time, in either direction. This bounds replays to the skew window;
/// it is not nonce-based replay protection within it.
pub struct DateValidator {
    time_gap: Duration,
}

impl DateValidator {
    /// Construct a validator with a custom clock-skew window
    #[must_use]
    pub fn new(time_gap: Duration) -> Self {
        Self { time_gap }
    }

    /// Window check against an explicit server time, boundary inclusive
    fn check(&self, header_time: SystemTime, server_time: SystemTime) -> Result<(), Error> {
        let skew = match server_time.duration_since(header_time) {
            Ok(behind) => behind,
            Err(ahead) => ahead.duration(),
        };

        if skew > self.time_gap {
            return Err(Error::DateNotInRange);
        }

        Ok(())
    }
}

impl Default for DateValidator {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_GAP)
    }
}

impl Validator for DateValidator {
    fn validate(&self, req: &Request<Bytes>) -> Result<(), Error> {
        let date = req
            .headers()
            .get(header::DATE)
            .ok_or(Error::DateParse)?
            .to_str()?;
        let header_time = httpdate::parse_http_date(date).map_err(|_| Error::DateParse)?;

        self.check(header_time, SystemTime::now())
    }
}
