use std::time::Duration;

use super::types::{BasicAuth, PositiveUsize};
use crate::error::{AppError, AppResult, ValidationError};

/// Splits a raw `-H` entry into name and trimmed value.
///
/// The name must be one or more of `[A-Za-z0-9_-]` and the value must not be
/// empty once surrounding whitespace is removed.
pub(crate) fn parse_header(s: &str) -> Option<(String, String)> {
    let (name, value) = s.split_once(':')?;
    let name_ok = !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    let value = value.trim();
    if !name_ok || value.is_empty() {
        return None;
    }
    Some((name.to_owned(), value.to_owned()))
}

/// Parses `user:password`; the password must start with a non-space character.
pub(crate) fn parse_basic_auth(s: &str) -> Result<BasicAuth, ValidationError> {
    let invalid = || ValidationError::InvalidAuthFormat {
        value: s.to_owned(),
    };
    let (username, password) = s.split_once(':').ok_or_else(invalid)?;
    let starts_visible = password
        .chars()
        .next()
        .is_some_and(|ch| !ch.is_whitespace());
    if username.is_empty() || !starts_visible {
        return Err(invalid());
    }
    Ok(BasicAuth {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

/// Parses `-z` values: `0`, `45` (seconds), `500ms`, `10s`, `3m`, `1h`, or
/// concatenations such as `1m30s`.
pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut total = Duration::ZERO;
    let mut rest = value;
    while !rest.is_empty() {
        let digits_len = rest.chars().take_while(char::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            });
        }
        let (num_part, tail) = rest.split_at(digits_len);
        let unit_len = tail
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .count();
        let (unit_part, next) = tail.split_at(unit_len);
        if unit_part.is_empty() && !next.is_empty() {
            return Err(ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            });
        }

        let number: u64 =
            num_part
                .parse()
                .map_err(|err| ValidationError::InvalidDurationNumber {
                    value: value.to_owned(),
                    source: err,
                })?;
        let segment = match unit_part {
            "ms" => Duration::from_millis(number),
            "" | "s" => Duration::from_secs(number),
            "m" => Duration::from_secs(
                number
                    .checked_mul(60)
                    .ok_or(ValidationError::DurationOverflow)?,
            ),
            "h" => Duration::from_secs(
                number
                    .checked_mul(3_600)
                    .ok_or(ValidationError::DurationOverflow)?,
            ),
            _ => {
                return Err(ValidationError::InvalidDurationUnit {
                    unit: unit_part.to_owned(),
                });
            }
        };
        total = total
            .checked_add(segment)
            .ok_or(ValidationError::DurationOverflow)?;
        rest = next;
    }

    Ok(total)
}
