//! Request validation for product and customer bodies.

use crate::error::AppError;
use crate::model::{ContactInput, ProductInput};
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn product(input: &ProductInput) -> Result<(), AppError> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if !input.price.is_finite() || input.price < 0.0 {
            return Err(AppError::Validation("price must be a non-negative number".into()));
        }
        if input.stock_quantity < 0 {
            return Err(AppError::Validation("stock_quantity must be at least 0".into()));
        }
        Ok(())
    }

    pub fn contact(input: &ContactInput) -> Result<(), AppError> {
        let re = email_regex().ok_or_else(|| AppError::Validation("invalid pattern for email".into()))?;
        if !re.is_match(input.email.trim()) {
            return Err(AppError::Validation("email must be a valid email".into()));
        }
        if input.phone.trim().is_empty() {
            return Err(AppError::Validation("phone is required".into()));
        }
        if input.address.trim().is_empty() {
            return Err(AppError::Validation("address is required".into()));
        }
        Ok(())
    }

    /// Search terms must contain something other than whitespace. The term itself is returned untrimmed.
    pub fn search_term(term: Option<&str>) -> Result<&str, AppError> {
        term.filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::Validation("search term 'name' is required".into()))
    }
}
