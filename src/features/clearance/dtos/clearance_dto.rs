use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::constants::LETTER_DOWNLOAD_PATH;

/// Extra fields of the activation acknowledgment
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivationResponseDto {
    /// Download reference of the generated letter
    #[schema(example = "/download-surat/202401001")]
    pub surat_url: String,
}

impl ActivationResponseDto {
    pub fn for_nim(nim: &str) -> Self {
        Self {
            surat_url: format!("{}/{}", LETTER_DOWNLOAD_PATH, nim),
        }
    }
}
