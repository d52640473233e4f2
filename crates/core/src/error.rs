use crate::types::DbId;

/// Classified failure returned by every repository operation.
///
/// Raw driver errors never cross the repository boundary; they are mapped
/// into one of these variants first.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Prompt",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Prompt with id 7");
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = CoreError::Validation("title must not be empty".into());
        assert_eq!(err.to_string(), "Validation failed: title must not be empty");
    }
}
