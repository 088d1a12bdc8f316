use std::thread;

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::{DigestError, DigestResult};

/// Fires once a day at a fixed wall-clock time in a timezone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySchedule {
    pub time: NaiveTime,
    pub timezone: Tz,
}

impl DailySchedule {
    pub fn new(time: NaiveTime, timezone: Tz) -> Self {
        Self { time, timezone }
    }

    /// Parse "HH:MM" and an IANA timezone name such as "Asia/Kolkata"
    pub fn parse(time: &str, timezone: &str) -> DigestResult<Self> {
        Ok(Self::new(parse_time(time)?, parse_timezone(timezone)?))
    }

    /// First trigger strictly after `now`
    pub fn next_run_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let local_today = now.with_timezone(&self.timezone).date_naive();

        let mut date = local_today;
        loop {
            let candidate = resolve_local(&self.timezone, date.and_time(self.time));
            if candidate > now {
                return candidate;
            }
            match date.succ_opt() {
                Some(next_day) => date = next_day,
                None => return candidate,
            }
        }
    }
}

impl std::fmt::Display for DailySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.time.format("%H:%M"), self.timezone)
    }
}

pub fn parse_time(raw: &str) -> DigestResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| DigestError::InvalidTime(raw.to_string()))
}

pub fn parse_timezone(raw: &str) -> DigestResult<Tz> {
    raw.trim()
        .parse::<Tz>()
        .map_err(|_| DigestError::InvalidTimezone(raw.to_string()))
}

// Ambiguous times (clocks going back) take the earlier instant; times inside
// a DST gap move forward to the first valid quarter hour.
fn resolve_local(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    let mut probe = naive;
    for _ in 0..=96 {
        match tz.from_local_datetime(&probe) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => probe += Duration::minutes(15),
        }
    }
    naive.and_utc()
}

/// Run `job` every day at the scheduled time. Runs never overlap:
/// the next trigger is computed only after the previous job returns.
pub fn run_daily<F>(schedule: DailySchedule, mut job: F) -> !
where
    F: FnMut() -> DigestResult<()>,
{
    loop {
        let now = Utc::now();
        let next = schedule.next_run_after(now);
        let wait = (next - now).to_std().unwrap_or_default();

        tracing::info!(next_run = %next, wait_secs = wait.as_secs(), "Waiting for next digest");
        thread::sleep(wait);

        match job() {
            Ok(()) => tracing::info!("Scheduled digest finished"),
            Err(e) => tracing::error!(error = %e, "Scheduled digest failed"),
        }
    }
}
