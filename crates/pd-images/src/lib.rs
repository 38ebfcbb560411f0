//! Stored-image persistence and the breed-recognition boundary.
//!
//! Images are encoded payloads (usually `data:` URLs) kept in the shared
//! key-value store under `pashudhan_image_<millis>` keys. When the store is
//! full the oldest image is evicted to make room for the newest one.

pub mod error;
pub mod image_store;
pub mod recognition_session;
pub mod recognizer;

pub use error::{ImageError, RecognitionError, Result as ImageResult};
pub use image_store::ImageStore;
pub use recognition_session::{RecognitionOutcome, RecognitionSession, encode_data_url};
pub use recognizer::{BreedRecognizer, parse_model_response};

/// Largest accepted upload (4 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 4 * 1024 * 1024;
