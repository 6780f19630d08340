//! Plain-scalar resolution.
//!
//! Both engine backends hand unquoted scalars to this module to decide
//! what native value they denote: nulls, booleans, integers, floats,
//! symbols, dates, and ISO-8601 timestamps. Quoted, literal, and folded
//! scalars are never resolved; they always stay strings.

use std::sync::OnceLock;

use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;

use crate::value::Value;

static INT_RE: OnceLock<Regex> = OnceLock::new();
static FLOAT_RE: OnceLock<Regex> = OnceLock::new();
static DATE_RE: OnceLock<Regex> = OnceLock::new();
static TIMESTAMP_RE: OnceLock<Regex> = OnceLock::new();

fn int_re() -> &'static Regex {
    INT_RE.get_or_init(|| {
        Regex::new(r"^[-+]?(0x[0-9a-fA-F_]+|0o[0-7_]+|[0-9][0-9_]*)$")
            .expect("int pattern compiles")
    })
}

fn float_re() -> &'static Regex {
    FLOAT_RE.get_or_init(|| {
        Regex::new(r"^[-+]?([0-9][0-9_]*(\.[0-9_]*)?|\.[0-9_]+)([eE][-+]?[0-9]+)?$")
            .expect("float pattern compiles")
    })
}

fn date_re() -> &'static Regex {
    DATE_RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("date pattern compiles"))
}

fn timestamp_re() -> &'static Regex {
    TIMESTAMP_RE.get_or_init(|| {
        Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[Tt]|[ \t]+)(\d{1,2}):(\d{1,2}):(\d{1,2})(?:\.(\d*))?(?:[ \t]*(Z|[-+]\d{1,2}(?::?\d{2})?))?$",
        )
        .expect("timestamp pattern compiles")
    })
}

/// Resolves an unquoted scalar into a typed value.
///
/// Anything that matches no recognized form stays a string.
pub(crate) fn resolve_plain(text: &str) -> Value {
    match text {
        "" | "~" | "null" | "Null" | "NULL" => return Value::Null,
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" => {
            return Value::Bool(true)
        }
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" => {
            return Value::Bool(false)
        }
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => {
            return Value::Float(f64::INFINITY)
        }
        "-.inf" | "-.Inf" | "-.INF" => return Value::Float(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => return Value::Float(f64::NAN),
        _ => {}
    }

    if let Some(name) = text.strip_prefix(':') {
        if !name.is_empty() {
            return Value::Symbol(name.to_string());
        }
    }

    if int_re().is_match(text) {
        if let Some(n) = parse_int(text) {
            return Value::Int(n);
        }
        return Value::String(text.to_string());
    }

    if float_re().is_match(text) {
        if let Ok(f) = text.replace('_', "").parse::<f64>() {
            return Value::Float(f);
        }
        return Value::String(text.to_string());
    }

    if let Some(caps) = date_re().captures(text) {
        if let Some(date) = parse_date(&caps) {
            return Value::Date(date);
        }
        return Value::String(text.to_string());
    }

    if let Some(caps) = timestamp_re().captures(text) {
        if let Some(ts) = parse_timestamp(&caps) {
            return Value::Timestamp(ts);
        }
        return Value::String(text.to_string());
    }

    Value::String(text.to_string())
}

fn parse_int(text: &str) -> Option<i64> {
    let cleaned = text.replace('_', "");
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    let magnitude = if let Some(hex) = body.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(oct) = body.strip_prefix("0o") {
        i64::from_str_radix(oct, 8).ok()?
    } else {
        body.parse::<i64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_date(caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let month = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let day = caps.get(3)?.as_str().parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_timestamp(caps: &regex::Captures<'_>) -> Option<chrono::DateTime<FixedOffset>> {
    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let month = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let day = caps.get(3)?.as_str().parse::<u32>().ok()?;
    let hour = caps.get(4)?.as_str().parse::<u32>().ok()?;
    let minute = caps.get(5)?.as_str().parse::<u32>().ok()?;
    let second = caps.get(6)?.as_str().parse::<u32>().ok()?;

    // Fractional seconds truncate to microsecond precision; digits past
    // the sixth are dropped, never rounded.
    let micros = match caps.get(7) {
        Some(frac) => {
            let mut digits: String = frac.as_str().chars().take(6).collect();
            while digits.len() < 6 {
                digits.push('0');
            }
            digits.parse::<u32>().ok()?
        }
        None => 0,
    };

    let offset_secs = match caps.get(8) {
        Some(tz) => parse_offset(tz.as_str())?,
        None => 0,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_micro_opt(hour, minute, second, micros)?;
    let offset = FixedOffset::east_opt(offset_secs)?;
    match offset.from_local_datetime(&NaiveDateTime::new(date, time)) {
        LocalResult::Single(ts) => Some(ts),
        _ => None,
    }
}

fn parse_offset(tz: &str) -> Option<i32> {
    if tz == "Z" {
        return Some(0);
    }
    let (sign, rest) = match tz.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, tz.strip_prefix('+')?),
    };
    let digits = rest.replace(':', "");
    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.parse::<i32>().ok()?, 0),
        3 => (
            digits[..1].parse::<i32>().ok()?,
            digits[1..].parse::<i32>().ok()?,
        ),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    Some(sign * (hours * 3600 + minutes * 60))
}
