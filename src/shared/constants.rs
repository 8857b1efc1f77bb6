/// Payment amount used when `jumlah` is omitted from a simulated payment
pub const DEFAULT_SPP_AMOUNT: i64 = 2_500_000;

/// Maximum accepted NIM length
pub const MAX_NIM_LENGTH: usize = 32;

/// File name prefix of generated clearance letters
pub const LETTER_FILE_PREFIX: &str = "surat_bebas_";

/// Route prefix of the letter download endpoint
pub const LETTER_DOWNLOAD_PATH: &str = "/download-surat";
