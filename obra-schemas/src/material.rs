use crate::formats;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One line of a project's inventory ledger.
///
/// `quantity` is an opaque display string ("150 sacos", "40 m³"); no
/// arithmetic or unit normalization is applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub quantity: String,
    #[serde(with = "formats::minute_timestamp")]
    pub last_update: NaiveDateTime,
}
