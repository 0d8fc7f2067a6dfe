//! Wire DTOs for the maintenance API.
//!
//! DESIGN
//! ======
//! The API is an external contract we do not own, so these types stay
//! tolerant: optional fields default to `None` and the company id accepts
//! either a JSON string or a bare number, normalized to `String` for
//! routing and display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A company as returned by `/companies/` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Server-assigned identifier, opaque to the UI.
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address, if recorded.
    #[serde(default)]
    pub address: Option<String>,
    /// Primary human contact, if recorded.
    #[serde(default)]
    pub point_of_contact: Option<String>,
    /// Server-side modification timestamp, verbatim.
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Author of the last server-side modification.
    #[serde(default)]
    pub last_updated_by: Option<String>,
}

impl Company {
    /// Last six characters of the id for compact display; the full id is
    /// still shown via tooltip.
    #[must_use]
    pub fn short_id(&self) -> &str {
        // Ids are opaque and not guaranteed ASCII.
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map_or(0, |(index, _)| index);
        &self.id[start..]
    }
}

/// Form fields for creating or editing a company (POST/PUT body).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub address: String,
    pub point_of_contact: String,
}

impl CompanyDraft {
    /// Prefill an edit form from a loaded company.
    #[must_use]
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            address: company.address.clone().unwrap_or_default(),
            point_of_contact: company.point_of_contact.clone().unwrap_or_default(),
        }
    }

    /// Whether every field is non-empty after trimming. Create/edit dialogs
    /// keep their submit button disabled until this holds.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.point_of_contact.trim().is_empty()
    }

    /// Copy with all fields trimmed, for submission.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            address: self.address.trim().to_owned(),
            point_of_contact: self.point_of_contact.trim().to_owned(),
        }
    }
}

/// Response of `GET /progress/{id}`.
///
/// Only `progress_percent` is rendered directly; the `tasks` payload shape
/// belongs to the API and is kept opaque (we surface its count at most).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProgress {
    /// Opaque task descriptors for the current maintenance cycle.
    #[serde(default)]
    pub tasks: Vec<serde_json::Value>,
    /// Aggregate completion for the current cycle, 0 to 100.
    #[serde(default)]
    pub progress_percent: f64,
}

impl CompanyProgress {
    /// Percent clamped to the 0 to 100 range and rounded for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        self.progress_percent.clamp(0.0, 100.0).round() as u8
    }
}

fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}
