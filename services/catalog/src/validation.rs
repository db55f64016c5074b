//! Input validation utilities
//!
//! GraphQL already rejects missing and mistyped arguments. These checks cover
//! what the type system cannot express.

/// Resolve `movies(offset, limit)` arguments into a page
///
/// Returns `None` when the whole collection is wanted: no limit, or a limit
/// of zero. A missing offset means zero.
pub fn validate_pagination(
    offset: Option<i32>,
    limit: Option<i32>,
) -> Result<Option<(usize, usize)>, String> {
    let offset = offset.unwrap_or(0);
    let limit = limit.unwrap_or(0);

    if offset < 0 {
        return Err("Offset must not be negative".to_string());
    }

    if limit < 0 {
        return Err("Limit must not be negative".to_string());
    }

    if limit == 0 {
        return Ok(None);
    }

    Ok(Some((offset as usize, limit as usize)))
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    Ok(())
}
