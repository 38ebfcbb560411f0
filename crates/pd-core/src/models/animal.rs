//! Herd animal record.

use crate::{ImageReference, Species};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered animal.
///
/// `image_url` holds either an image-store key or an external URL; see
/// [`Animal::image_reference`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub tag_id: String,
    pub species: Species,
    pub breed: String,
    pub registration_date: NaiveDate,
    pub image_url: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Weight in kilograms
    pub weight: f64,
    pub vaccination_records: String,
}

impl Animal {
    pub fn image_reference(&self) -> ImageReference {
        ImageReference::parse(&self.image_url)
    }
}
