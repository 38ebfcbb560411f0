//! Structured breed record returned by the recognition service.

use crate::{BREED_PLACEHOLDER_SIZE, CoreError, Result as CoreErrorResult, placeholder_image_url};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedInfo {
    pub breed_name: String,
    pub description: String,
    pub origin: String,
    pub characteristics: Vec<String>,
    /// Percentage in `[0, 100]`
    pub confidence_score: f64,
    pub confidence_reasoning: String,
    #[serde(default)]
    pub image_url: String,
    pub lifespan: String,
    pub dietary_needs: String,
    pub common_diseases: Vec<String>,
    pub temperament: String,
    pub milk_yield: String,
    pub draught_capacity: String,
}

impl BreedInfo {
    /// Parses the JSON text produced by the recognition model and normalizes it.
    #[track_caller]
    pub fn from_model_json(text: &str) -> CoreErrorResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::validation("Empty response from recognition model"));
        }

        let info: Self = serde_json::from_str(text)?;
        info.normalized()
    }

    /// Clamps the confidence score and fills a missing image URL.
    #[track_caller]
    pub fn normalized(mut self) -> CoreErrorResult<Self> {
        self.breed_name = self.breed_name.trim().to_string();
        if self.breed_name.is_empty() {
            return Err(CoreError::validation("Breed name is empty"));
        }

        self.confidence_score = if self.confidence_score.is_nan() {
            0.0
        } else {
            self.confidence_score.clamp(0.0, 100.0)
        };

        if self.image_url.trim().is_empty() {
            self.image_url = placeholder_image_url(&self.breed_name, BREED_PLACEHOLDER_SIZE);
        }

        Ok(self)
    }
}
