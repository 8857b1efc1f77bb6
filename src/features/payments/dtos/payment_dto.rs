use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::NIM_REGEX;

/// Request body of the payment simulation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PayTuitionRequestDto {
    /// Student enrollment number (required)
    #[validate(
        required(message = "NIM wajib diisi"),
        length(min = 1, max = 32, message = "NIM must be 1-32 characters"),
        regex(
            path = *NIM_REGEX,
            message = "NIM may only contain letters, digits, '-' and '_'"
        )
    )]
    pub nim: Option<String>,

    /// Amount in rupiah; the configured default is used when omitted
    #[validate(range(min = 1, message = "Jumlah must be at least 1"))]
    #[schema(example = 2500000)]
    pub jumlah: Option<i64>,
}
