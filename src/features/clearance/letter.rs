//! Clearance letter rendering.
//!
//! Rendering is pure: the same inputs always give the same text. Writing the
//! result to disk is the job of [`crate::modules::storage::LetterStore`].

use chrono::NaiveDate;
use minijinja::context;

use crate::shared::templates::{indonesian_long_date, render_template, TemplateError};

const LETTER_TEMPLATE: &str = "letters/surat_bebas.txt.jinja";

/// Data printed on a clearance letter
#[derive(Debug, Clone)]
pub struct ClearanceLetter<'a> {
    pub nim: &'a str,
    pub name: &'a str,
    pub date: NaiveDate,
    pub city: &'a str,
    pub institution: &'a str,
}

/// Render the letter text
pub fn render_letter(letter: &ClearanceLetter<'_>) -> Result<String, TemplateError> {
    render_template(
        LETTER_TEMPLATE,
        context! {
            nim => letter.nim,
            nama => letter.name,
            tanggal => indonesian_long_date(letter.date),
            city => letter.city,
            institution => letter.institution,
        },
    )
}
