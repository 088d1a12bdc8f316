use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::domain::{NewsItem, RawEntry, Topic};

const UNTITLED: &str = "Untitled";

/// Offset-carrying formats tried after RFC 2822 and RFC 3339
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
];

/// Formats without an offset; these are read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%a, %d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
];

/// Turn a raw feed entry into a news item, stamping undated entries with the current time
pub fn normalize(entry: RawEntry, source: &str, topic: Topic) -> NewsItem {
    normalize_at(entry, source, topic, Utc::now())
}

pub fn normalize_at(entry: RawEntry, source: &str, topic: Topic, now: DateTime<Utc>) -> NewsItem {
    let title = entry
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let link = trimmed(entry.link);
    let summary = trimmed(entry.summary);

    let published = entry
        .published
        .as_deref()
        .and_then(parse_published)
        .unwrap_or_else(|| now.fixed_offset());

    NewsItem {
        title,
        link,
        summary,
        source: source.to_string(),
        published,
        topic,
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Permissive date parsing. Dates without an offset are taken as UTC.
pub fn parse_published(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
