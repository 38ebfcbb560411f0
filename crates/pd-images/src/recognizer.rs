use crate::RecognitionError;

use pd_core::BreedInfo;

use async_trait::async_trait;

/// Remote service that names the breed shown in a photo.
#[async_trait]
pub trait BreedRecognizer: Send + Sync {
    async fn identify(&self, image: &[u8], mime: &str) -> Result<BreedInfo, RecognitionError>;
}

/// Turns the JSON text a generative model returned into a breed record.
pub fn parse_model_response(text: &str) -> Result<BreedInfo, RecognitionError> {
    Ok(BreedInfo::from_model_json(text)?)
}
