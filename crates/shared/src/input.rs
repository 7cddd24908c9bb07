//! Parsing of the integer text fields of the monster form.

use crate::error::ValidationError;

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Parses a creation life value: a 32-bit decimal integer greater than zero.
pub fn parse_life(text: &str) -> Result<i64, ValidationError> {
    match parse_int(text) {
        Some(life) if life > 0 => Ok(life),
        _ => Err(ValidationError::InvalidLife {
            input: text.to_string(),
        }),
    }
}

/// Parses a damage/heal amount: any 32-bit decimal integer, zero included.
pub fn parse_amount(text: &str) -> Result<i64, ValidationError> {
    parse_int(text).ok_or_else(|| ValidationError::InvalidAmount {
        input: text.to_string(),
    })
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse::<i32>().ok().map(i64::from)
}
