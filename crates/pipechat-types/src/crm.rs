//! CRM record projections and response envelopes.
//!
//! Persons and deals are read-only views of vendor records. Fields the
//! dashboard uses are typed; everything else is kept in `extra` so the JSON
//! pass-through routes return the vendor payload intact.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Numeric CRM record identifier.
pub type PersonId = i64;

/// A phone or email entry on a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Avatar URLs keyed by size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureRef {
    #[serde(default)]
    pub pictures: Map<String, Value>,
}

impl PictureRef {
    /// The 128px avatar URL, when present.
    pub fn url_128(&self) -> Option<&str> {
        self.pictures.get("128").and_then(Value::as_str)
    }
}

/// Read-only projection of a CRM contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub primary_email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: Vec<ContactValue>,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub add_time: String,
    #[serde(default)]
    pub update_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_id: i64,
    #[serde(default)]
    pub active_flag: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_deals_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub closed_deals_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers_count: u64,
    #[serde(default)]
    pub picture_id: Option<PictureRef>,
    /// Vendor fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Person {
    /// First phone number, if any.
    pub fn primary_phone(&self) -> Option<&str> {
        self.phone.first().map(|p| p.value.as_str()).filter(|v| !v.is_empty())
    }

    /// Upper-cased first letter of the name, used as avatar fallback.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Total deals, open and closed.
    pub fn deals_count(&self) -> u64 {
        self.open_deals_count + self.closed_deals_count
    }
}

/// Read-only projection of a CRM deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub add_time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope of a CRM list call: `{ success, data, additional_data }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    pub success: bool,
    /// `null` from the vendor (empty account) deserializes to an empty list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<Value>,
}

impl<T> ListResponse<T> {
    pub fn empty() -> Self {
        Self {
            success: true,
            data: Vec::new(),
            additional_data: None,
        }
    }
}

/// Acknowledgment returned by the CRM after deleting a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<DeletedRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedRecord {
    pub id: PersonId,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
