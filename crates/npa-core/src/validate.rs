//! Stateless validation and parsing helpers.

use chrono::NaiveDate;

use crate::{
  Error, Result,
  act::{ActId, ActType, CreateActRequest},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check a creation request without building anything from it.
///
/// Checks run title, type, date; the first failure wins.
pub fn validate_create(request: &CreateActRequest) -> Result<()> {
  if request.title.trim().is_empty() {
    return Err(Error::BadTitle);
  }
  request.act_type.parse::<ActType>()?;
  parse_date(&request.date)?;
  Ok(())
}

/// Parse an exact `YYYY-MM-DD` date.
///
/// chrono alone accepts single-digit months and days, so the shape is
/// checked first.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
  let b = text.as_bytes();
  let shape_ok = b.len() == 10
    && b[4] == b'-'
    && b[7] == b'-'
    && b
      .iter()
      .enumerate()
      .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
  if !shape_ok {
    return Err(Error::BadDate);
  }
  NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| Error::BadDate)
}

/// Parse a positive identifier from text such as a URL path segment.
pub fn parse_id(text: &str) -> Result<ActId> {
  if text.trim().is_empty() {
    return Err(Error::BadId);
  }
  match text.parse::<ActId>() {
    Ok(id) if id > 0 => Ok(id),
    _ => Err(Error::BadId),
  }
}

/// Substring test ignoring letter case. An empty `needle` always matches;
/// callers decide whether an empty filter applies at all.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request(title: &str, act_type: &str, date: &str) -> CreateActRequest {
    CreateActRequest {
      title:    title.into(),
      act_type: act_type.into(),
      date:     date.into(),
    }
  }

  // ─── validate_create ───────────────────────────────────────────────────────

  #[test]
  fn valid_request_passes() {
    assert!(validate_create(&request("Budget Act", "federal_law", "2025-10-01")).is_ok());
  }

  #[test]
  fn blank_title_is_rejected() {
    for title in ["", "   ", "\t\n"] {
      assert!(matches!(
        validate_create(&request(title, "decree", "2025-10-01")),
        Err(Error::BadTitle)
      ));
    }
  }

  #[test]
  fn unknown_type_is_rejected() {
    for t in ["", "law", "DECREE", "federal-law"] {
      assert!(matches!(
        validate_create(&request("Title", t, "2025-10-01")),
        Err(Error::BadType)
      ));
    }
  }

  #[test]
  fn every_allowed_type_passes() {
    for t in ["constitution", "federal_law", "decree", "order", "other"] {
      assert!(validate_create(&request("Title", t, "2025-10-01")).is_ok(), "{t}");
    }
  }

  #[test]
  fn bad_date_is_rejected() {
    assert!(matches!(
      validate_create(&request("Title", "order", "01-10-2025")),
      Err(Error::BadDate)
    ));
  }

  #[test]
  fn title_is_checked_before_type_and_date() {
    assert!(matches!(validate_create(&request(" ", "nope", "nope")), Err(Error::BadTitle)));
    assert!(matches!(validate_create(&request("T", "nope", "nope")), Err(Error::BadType)));
  }

  // ─── parse_date ────────────────────────────────────────────────────────────

  #[test]
  fn parses_iso_date() {
    assert_eq!(
      parse_date("2025-10-01").unwrap(),
      NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    );
  }

  #[test]
  fn rejects_non_iso_dates() {
    for text in [
      "",
      "01-10-2025",
      "2025-13-01",
      "2025-02-30",
      "2025-1-05",
      "2025-10-1",
      "2025/10/01",
      " 2025-10-01",
      "2025-10-01T00:00:00",
      "+2025-10-01",
    ] {
      assert!(matches!(parse_date(text), Err(Error::BadDate)), "{text:?}");
    }
  }

  #[test]
  fn accepts_leap_day() {
    assert!(parse_date("2024-02-29").is_ok());
    assert!(parse_date("2023-02-29").is_err());
  }

  // ─── parse_id ──────────────────────────────────────────────────────────────

  #[test]
  fn parses_positive_ids() {
    assert_eq!(parse_id("1").unwrap(), 1);
    assert_eq!(parse_id("42").unwrap(), 42);
  }

  #[test]
  fn rejects_non_positive_or_garbage_ids() {
    for text in ["", "   ", "0", "-5", "abc", "1.5", " 3", "99999999999999999999"] {
      assert!(matches!(parse_id(text), Err(Error::BadId)), "{text:?}");
    }
  }

  // ─── contains_case_insensitive ─────────────────────────────────────────────

  #[test]
  fn substring_ignores_case() {
    assert!(contains_case_insensitive("Budget Act", "act"));
    assert!(contains_case_insensitive("ACTIVITY LOG", "act"));
    assert!(contains_case_insensitive("budget act", "ACT"));
    assert!(!contains_case_insensitive("Decree on taxes", "act"));
  }
}
