//! One upload-and-identify cycle of the breed recognition screen.

use crate::{BreedRecognizer, ImageError, ImageResult, ImageStore, RecognitionError};

use pd_core::{BreedInfo, ImageKey};

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{info, warn};

/// Result of a recognition attempt whose photo was stored.
#[derive(Debug)]
pub struct RecognitionOutcome {
    pub image_key: ImageKey,
    pub breed: Result<BreedInfo, RecognitionError>,
}

/// Holds the most recently recognised photo until it is replaced or reset.
pub struct RecognitionSession {
    images: Arc<ImageStore>,
    recognizer: Arc<dyn BreedRecognizer>,
    max_upload_bytes: usize,
    held: Option<ImageKey>,
}

impl RecognitionSession {
    pub fn new(
        images: Arc<ImageStore>,
        recognizer: Arc<dyn BreedRecognizer>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            images,
            recognizer,
            max_upload_bytes,
            held: None,
        }
    }

    /// Key of the photo from the last successful upload.
    pub fn held_image(&self) -> Option<&ImageKey> {
        self.held.as_ref()
    }

    /// Validates and identifies an upload, then stores the photo.
    ///
    /// The photo is stored whatever the recognizer answers; only invalid
    /// uploads and storage failures are errors. The previously held photo is
    /// removed first.
    pub async fn recognize(&mut self, image: &[u8], mime: &str) -> ImageResult<RecognitionOutcome> {
        if !mime.starts_with("image/") {
            return Err(ImageError::unsupported_type(mime));
        }
        if image.len() > self.max_upload_bytes {
            return Err(ImageError::too_large(image.len(), self.max_upload_bytes));
        }

        self.reset();

        let breed = self
            .recognizer
            .identify(image, mime)
            .await
            .and_then(|identified| {
                identified
                    .normalized()
                    .map_err(|_| RecognitionError::no_identification())
            });

        match &breed {
            Ok(identified) => info!(
                "Identified {} ({:.0}% confidence)",
                identified.breed_name, identified.confidence_score
            ),
            Err(e) => warn!("Breed recognition failed: {e}"),
        }

        let image_key = self.images.save_image(&encode_data_url(mime, image))?;
        self.held = Some(image_key.clone());

        Ok(RecognitionOutcome { image_key, breed })
    }

    /// Forgets the current result and removes its photo.
    pub fn reset(&mut self) {
        if let Some(key) = self.held.take() {
            self.images.remove_image(key.as_str());
        }
    }
}

/// `data:` URL embedding `bytes` with the given MIME type.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
