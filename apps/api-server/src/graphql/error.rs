//! Domain error to GraphQL error shaping.
//!
//! Every error carries `extensions.code`; validation failures also carry
//! `extensions.data`, the ordered list of `{ message }` violations.

use blog_core::DomainError;
use juniper::{FieldError, Object, Value};

/// Code reported for failures without a domain code.
const INTERNAL_CODE: u16 = 500;

pub fn field_error(err: DomainError) -> FieldError {
    let code = match err.code() {
        Some(code) => {
            tracing::debug!(code, error = %err, "Resolver rejected request");
            code
        }
        None => {
            tracing::error!(error = %err, "Resolver failed");
            INTERNAL_CODE
        }
    };

    let mut extensions = Object::with_capacity(2);
    extensions.add_field("code", Value::scalar(i32::from(code)));

    if let Some(errors) = err.validation_errors() {
        let data = errors
            .iter()
            .map(|e| {
                let mut entry = Object::with_capacity(1);
                entry.add_field("message", Value::scalar(e.message.clone()));
                Value::object(entry)
            })
            .collect();
        extensions.add_field("data", Value::list(data));
    }

    let message = match &err {
        DomainError::Repository(_) | DomainError::Auth(_) | DomainError::Internal(_) => {
            "An error occurred.".to_string()
        }
        _ => err.to_string(),
    };

    FieldError::new(message, Value::object(extensions))
}
