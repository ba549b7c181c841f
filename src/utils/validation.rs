// Small helpers shared by the page validators.

use crate::state::FieldErrors;

/// Records `message` under `field` when `value` is blank.
pub fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), message.to_string());
    }
}

/// Loose shape check; the server does the real verification.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// `None` when no field failed, so validators can end with `finish(errors)`.
pub fn finish(errors: FieldErrors) -> Option<FieldErrors> {
    (!errors.is_empty()).then_some(errors)
}
