//! Resume text extraction from uploaded PDFs.
//!
//! Reads at most `MAX_PAGES` pages in order, joins the per-page text with single
//! spaces and trims the result. Any failure yields the one generic
//! `ExtractError::Failed`; partial text is never returned.

pub mod handlers;

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

/// Resumes longer than this are cut off.
pub const MAX_PAGES: usize = 5;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to extract text from PDF")]
    Failed,
}

/// Blocking; run it on the blocking pool from async code.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| {
        warn!("PDF load failed: {e}");
        ExtractError::Failed
    })?;

    let pages = doc.get_pages();
    debug!("PDF has {} pages; reading up to {MAX_PAGES}", pages.len());

    let mut fragments = Vec::with_capacity(pages.len().min(MAX_PAGES));
    for &page_number in pages.keys().take(MAX_PAGES) {
        let text = doc.extract_text(&[page_number]).map_err(|e| {
            warn!("PDF text extraction failed on page {page_number}: {e}");
            ExtractError::Failed
        })?;
        fragments.push(text.trim().to_string());
    }

    Ok(fragments.join(" ").trim().to_string())
}
