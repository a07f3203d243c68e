//! Errors raised by capability implementations.

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors that can occur behind a port.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("{service} is unavailable")]
    Unavailable { service: &'static str },

    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApplicationError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(|e| ApplicationError::Internal(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_hides_source_message() {
        let source = "x".parse::<u8>().unwrap_err();
        let err = ApplicationError::internal(source);

        assert!(matches!(err, ApplicationError::Internal(_)));
        assert_eq!(err.to_string(), "internal server error");
    }

    #[test]
    fn test_catch_boxes_foreign_error() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk full"));
        let err = res.catch().unwrap_err();

        assert!(matches!(err, ApplicationError::Internal(_)));
        assert_eq!(err.to_string(), "internal server error");
    }

    #[test]
    fn test_catch_keeps_ok_value() {
        let res: std::result::Result<u8, std::io::Error> = Ok(7);
        assert_eq!(res.catch().unwrap(), 7);
    }

    #[test]
    fn test_unavailable_names_service() {
        let err = ApplicationError::Unavailable { service: "store" };
        assert_eq!(err.to_string(), "store is unavailable");
    }
}
