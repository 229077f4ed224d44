//! Act: a single legal-act record and the request/query types around it.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, validate::contains_case_insensitive};

/// Store-assigned identifier. Always positive once assigned.
pub type ActId = i64;

// ─── Type tag ────────────────────────────────────────────────────────────────

/// The closed set of legal-act categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActType {
  Constitution,
  FederalLaw,
  Decree,
  Order,
  Other,
}

impl ActType {
  pub const ALL: [ActType; 5] = [
    ActType::Constitution,
    ActType::FederalLaw,
    ActType::Decree,
    ActType::Order,
    ActType::Other,
  ];

  /// The wire tag, e.g. `"federal_law"`.
  pub fn as_str(self) -> &'static str {
    match self {
      ActType::Constitution => "constitution",
      ActType::FederalLaw => "federal_law",
      ActType::Decree => "decree",
      ActType::Order => "order",
      ActType::Other => "other",
    }
  }
}

impl FromStr for ActType {
  type Err = Error;

  /// Exact, case-sensitive match against the wire tags.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ActType::ALL
      .into_iter()
      .find(|t| t.as_str() == s)
      .ok_or(Error::BadType)
  }
}

impl fmt::Display for ActType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A stored legal act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
  pub id:       ActId,
  pub title:    String,
  #[serde(rename = "type")]
  pub act_type: ActType,
  /// Serialised as `YYYY-MM-DD`.
  pub date:     NaiveDate,
}

/// A validated candidate that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAct {
  pub title:    String,
  pub act_type: ActType,
  pub date:     NaiveDate,
}

impl NewAct {
  /// Attach a store-assigned id.
  pub fn with_id(self, id: ActId) -> Act {
    Act {
      id,
      title: self.title,
      act_type: self.act_type,
      date: self.date,
    }
  }
}

/// Raw creation input exactly as a client sent it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateActRequest {
  #[serde(default)]
  pub title:    String,
  #[serde(rename = "type", default)]
  pub act_type: String,
  #[serde(default)]
  pub date:     String,
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// Filters for listing acts. `None` means "no filter"; empty strings are
/// normalised to `None` by [`ActQuery::new`] and ignored by
/// [`ActQuery::matches`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActQuery {
  /// Exact type tag, e.g. `"decree"`. Unknown tags match nothing.
  pub act_type: Option<String>,
  /// Case-insensitive substring of the title.
  pub text:     Option<String>,
}

impl ActQuery {
  pub fn new(act_type: Option<String>, text: Option<String>) -> Self {
    Self {
      act_type: act_type.filter(|s| !s.is_empty()),
      text:     text.filter(|s| !s.is_empty()),
    }
  }

  pub fn matches(&self, act: &Act) -> bool {
    let type_ok = match self.act_type.as_deref() {
      None | Some("") => true,
      Some(t) => act.act_type.as_str() == t,
    };
    let text_ok = match self.text.as_deref() {
      None | Some("") => true,
      Some(q) => contains_case_insensitive(&act.title, q),
    };
    type_ok && text_ok
  }
}
