//! Input validation
//!
//! Checks run in a fixed order and the first failure wins: absent or blank
//! input is reported before a bad length.

use crate::config::LengthLimits;
use crate::error::{ReplaceError, Result};

/// Validate `input` against `limits`, returning the accepted text
pub fn validate<'a>(input: Option<&'a str>, limits: &LengthLimits) -> Result<&'a str> {
    let text = match input {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            log::debug!("rejecting absent or whitespace-only input");
            return Err(ReplaceError::InvalidInput);
        }
    };

    let length = text.chars().count();
    if !limits.contains(length) {
        log::debug!(
            "rejecting input of length {length} (allowed {}..={})",
            limits.min,
            limits.max
        );
        return Err(ReplaceError::InvalidLength {
            length,
            min: limits.min,
            max: limits.max,
        });
    }

    Ok(text)
}
