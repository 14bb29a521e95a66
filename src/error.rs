use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Not an opening tag: {0}")]
    NotAnOpenTag(String),

    #[error("Invalid element name in tag config: {0:?}")]
    InvalidElementName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TagError::NotAnOpenTag("<br>".to_string());
        assert_eq!(err.to_string(), "Not an opening tag: <br>");

        let err = TagError::InvalidElementName("a b".to_string());
        assert_eq!(err.to_string(), "Invalid element name in tag config: \"a b\"");
    }
}
