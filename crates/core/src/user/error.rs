use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidationErrors;

/// Errors raised while turning a request payload into a user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserError {
    #[error("The given data was invalid.")]
    Validation(#[from] ValidationErrors),
}

impl UserError {
    /// Per-field messages, keyed by field name in a stable order.
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            UserError::Validation(errors) => errors
                .field_errors()
                .into_iter()
                .map(|(field, errors)| {
                    let messages = errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    (field.to_string(), messages)
                })
                .collect(),
        }
    }
}
