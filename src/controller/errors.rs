//! Errors reported to the caller.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Caller-visible error taxonomy.
///
/// None of the variants carries internal diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// A required field is absent from the request.
    #[error("Missing param: {0}")]
    MissingParam(&'static str),
    /// A field is present but rejected by a semantic check.
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),
    /// A collaborator failed unexpectedly.
    #[error("Internal server error")]
    Server,
}

impl HttpError {
    /// Stable error name exposed in the `error` field.
    pub fn name(&self) -> &'static str {
        match self {
            HttpError::MissingParam(_) => "MissingParamError",
            HttpError::InvalidParam(_) => "InvalidParamError",
            HttpError::Server => "ServerError",
        }
    }

    /// Offending field, if any.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            HttpError::MissingParam(param) | HttpError::InvalidParam(param) => {
                Some(*param)
            },
            HttpError::Server => None,
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let param = self.param();
        let len = if param.is_some() { 3 } else { 2 };

        let mut state = serializer.serialize_struct("HttpError", len)?;
        state.serialize_field("error", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        if let Some(param) = param {
            state.serialize_field("param", param)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages() {
        assert_eq!(
            HttpError::MissingParam("name").to_string(),
            "Missing param: name"
        );
        assert_eq!(
            HttpError::InvalidParam("email").to_string(),
            "Invalid param: email"
        );
        assert_eq!(HttpError::Server.to_string(), "Internal server error");
    }

    #[test]
    fn test_serialize_param_error() {
        let value =
            serde_json::to_value(HttpError::MissingParam("password")).unwrap();
        assert_eq!(
            value,
            json!({
                "error": "MissingParamError",
                "message": "Missing param: password",
                "param": "password",
            })
        );
    }

    #[test]
    fn test_serialize_server_error_has_no_param() {
        let value = serde_json::to_value(HttpError::Server).unwrap();
        assert_eq!(
            value,
            json!({
                "error": "ServerError",
                "message": "Internal server error",
            })
        );
    }
}
