use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::config::LetterConfig;
use crate::core::error::{AppError, Result};
use crate::features::clearance::dtos::ActivationResponseDto;
use crate::features::clearance::letter::{render_letter, ClearanceLetter};
use crate::features::students::StudentService;
use crate::modules::storage::LetterStore;

/// Service for activating students and managing their clearance letters
pub struct ClearanceService {
    student_service: Arc<StudentService>,
    letter_store: Arc<LetterStore>,
    letters: LetterConfig,
    require_payment: bool,
}

impl ClearanceService {
    pub fn new(
        student_service: Arc<StudentService>,
        letter_store: Arc<LetterStore>,
        letters: LetterConfig,
        require_payment: bool,
    ) -> Self {
        Self {
            student_service,
            letter_store,
            letters,
            require_payment,
        }
    }

    /// Activate a student and generate their clearance letter.
    ///
    /// Unknown NIMs fail with `NotFound` before anything is written. Unless
    /// `require_payment` is set, activation does not check for a `lunas`
    /// payment. Activating an already active student regenerates the letter.
    pub async fn activate(&self, nim: &str) -> Result<ActivationResponseDto> {
        if self.student_service.find_by_nim(nim).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Mahasiswa dengan NIM {} tidak ditemukan",
                nim
            )));
        }

        if self.require_payment && !self.student_service.has_paid(nim).await? {
            return Err(AppError::BadRequest(format!(
                "Mahasiswa {} belum melunasi pembayaran SPP",
                nim
            )));
        }

        self.student_service.mark_active(nim).await?;
        tracing::info!("Student activated: nim={}", nim);

        self.generate_letter(nim).await?;

        Ok(ActivationResponseDto::for_nim(nim))
    }

    /// Render the letter for a student and write it to the letter store.
    /// Returns the path written.
    pub async fn generate_letter(&self, nim: &str) -> Result<PathBuf> {
        let student = self.student_service.find_by_nim(nim).await?.ok_or_else(|| {
            AppError::NotFound(format!("Mahasiswa dengan NIM {} tidak ditemukan", nim))
        })?;

        let text = render_letter(&ClearanceLetter {
            nim: &student.nim,
            name: &student.name,
            date: Local::now().date_naive(),
            city: &self.letters.city,
            institution: &self.letters.institution,
        })?;

        self.letter_store.write(&student.nim, &text).await
    }

    /// Bytes of a previously generated letter
    pub async fn download_letter(&self, nim: &str) -> Result<Vec<u8>> {
        self.letter_store.read(nim).await?.ok_or_else(|| {
            AppError::NotFound(format!("Surat bebas SPP untuk NIM {} belum tersedia", nim))
        })
    }
}
