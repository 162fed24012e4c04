//! Date extraction ladders.
//!
//! The deadline ladder trades recall for precision: a literal ISO date wins
//! outright, then a window after a deadline-signal phrase is searched so an
//! unrelated "published on" date elsewhere in the text cannot shadow the
//! real deadline, then the whole text is scanned as a last resort.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

use crate::utils::{clamp_to_char_boundary, collapse_ws};

/// Chars searched after a deadline-signal phrase.
const PHRASE_WINDOW: usize = 120;

static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})-(\d{2})-(\d{2})\b").expect("valid date pattern"));

static EN_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\d{1,2})\s+(January|February|March|April|May|June|July|August|September|October|November|December)\s+(20\d{2})\b",
    )
    .expect("valid date pattern")
});

static NUMERIC_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](20\d{2})\b").expect("valid date pattern")
});

static PAGE_SLASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2})/(\d{2})/(20\d{2})\b").expect("valid date pattern"));

static PAGE_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2})-(\d{2})-(20\d{2})\b").expect("valid date pattern"));

static DEADLINE_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(open until|applications? (are )?open until|applications? close|submission deadline|deadline is)",
    )
    .expect("valid phrase pattern")
});

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month number from a full English name or an abbreviation of at least
/// three letters ("Mar", "Sept", "February").
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.trim().to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(&lower))
        .map(|i| i as u32 + 1)
}

/// Format a date as `YYYY-MM-DD`.
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn date_from_parts(year: &str, month: u32, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First valid literal ISO date in the text.
pub fn first_iso(text: &str) -> Option<NaiveDate> {
    ISO_RE.captures_iter(text).find_map(|c| {
        let month: u32 = c[2].parse().ok()?;
        date_from_parts(&c[1], month, &c[3])
    })
}

/// All valid `D Month YYYY` dates in the text, in order of appearance.
pub fn find_dates_en(text: &str) -> Vec<NaiveDate> {
    EN_DATE_RE
        .captures_iter(text)
        .filter_map(|c| {
            let month = month_number(&c[2])?;
            date_from_parts(&c[3], month, &c[1])
        })
        .collect()
}

/// Infer an application deadline from free text.
///
/// Ladder: literal ISO date, then month-name dates within a bounded window
/// after a deadline-signal phrase (earliest date on or after `today`
/// preferred, else the last in the window), then the last month-name date
/// anywhere, then nothing.
pub fn infer_deadline(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(date) = first_iso(text) {
        return Some(date);
    }

    let flat = collapse_ws(text);
    if let Some(m) = DEADLINE_PHRASE_RE.find(&flat) {
        let end = clamp_to_char_boundary(&flat, m.end() + PHRASE_WINDOW);
        let found = find_dates_en(&flat[m.start()..end]);
        if !found.is_empty() {
            let earliest_future = found.iter().copied().filter(|d| *d >= today).min();
            return earliest_future.or_else(|| found.last().copied());
        }
    }

    find_dates_en(&flat).last().copied()
}

/// Infer an event start date from free text (RSS variant).
///
/// Tries a literal ISO date, then a day-first `DD/MM/YYYY` or `DD-MM-YYYY`
/// pattern, then a month-name date, then falls back to `fallback`
/// (the feed item's publication date).
pub fn infer_event_date(text: &str, fallback: Option<NaiveDate>) -> Option<NaiveDate> {
    if let Some(date) = first_iso(text) {
        return Some(date);
    }
    for c in NUMERIC_DATE_RE.captures_iter(text) {
        let month: u32 = match c[2].parse() {
            Ok(m) => m,
            Err(_) => continue,
        };
        if let Some(date) = date_from_parts(&c[3], month, &c[1]) {
            return Some(date);
        }
    }
    if let Some(date) = find_dates_en(text).first() {
        return Some(*date);
    }
    fallback
}

/// Every date-like pattern in a raw page body, converted to dates.
///
/// Catches `DD/MM/YYYY`, `DD-MM-YYYY`, and `D Month YYYY` forms; used by
/// the deadline enrichment worker against full detail pages.
pub fn harvest_page_dates(body: &str) -> Vec<NaiveDate> {
    let mut dates = Vec::new();

    for re in [&*PAGE_SLASH_RE, &*PAGE_DASH_RE] {
        for c in re.captures_iter(body) {
            let month: u32 = match c[2].parse() {
                Ok(m) => m,
                Err(_) => continue,
            };
            if let Some(date) = date_from_parts(&c[3], month, &c[1]) {
                dates.push(date);
            }
        }
    }

    dates.extend(find_dates_en(body));
    dates
}

/// Earliest date on or after `today`, if any.
pub fn earliest_on_or_after(dates: &[NaiveDate], today: NaiveDate) -> Option<NaiveDate> {
    dates.iter().copied().filter(|d| *d >= today).min()
}

/// Start/end dates from a homepage date block: day span ("17" or "02-06"),
/// month abbreviation, year span.
pub fn iso_from_day_block(
    day: &str,
    month_abbr: &str,
    year: &str,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    static DAY_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(\d{1,2})\s*-\s*(\d{1,2})$").expect("valid day pattern")
    });
    static DAY_SINGLE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\d{1,2}$").expect("valid day pattern"));

    let year = year.trim();
    if year.len() != 4 || year.parse::<i32>().is_err() {
        return (None, None);
    }
    let Some(month) = month_number(month_abbr) else {
        return (None, None);
    };

    let day = day.trim();
    if let Some(c) = DAY_RANGE_RE.captures(day) {
        let start = date_from_parts(year, month, &c[1]);
        let end = date_from_parts(year, month, &c[2]);
        return (start, end);
    }
    if DAY_SINGLE_RE.is_match(day) {
        return (date_from_parts(year, month, day), None);
    }
    (None, None)
}

/// Calendar date from a feed `pubDate` (RFC 2822, with RFC 3339 fallback).
pub fn parse_pub_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc2822(s)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .map(|dt| dt.date_naive())
        .ok()
}
