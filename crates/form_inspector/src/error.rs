use std::string::FromUtf8Error;

/// Failures that abort an inspection. A body that is not JSON is not one of
/// them; it is rendered as a fallback instead.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Response body is not valid UTF-8: {0}")]
    Decode(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<reqwest::Error> for InspectError {
    fn from(err: reqwest::Error) -> InspectError {
        InspectError::Request(err.to_string())
    }
}

impl From<FromUtf8Error> for InspectError {
    fn from(err: FromUtf8Error) -> InspectError {
        InspectError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for InspectError {
    fn from(err: std::io::Error) -> InspectError {
        InspectError::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_maps_to_decode() {
        let err: InspectError = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(matches!(err, InspectError::Decode(_)));
        assert!(err.to_string().starts_with("Response body is not valid UTF-8: "));
    }

    #[test]
    fn io_error_maps_to_output() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: InspectError = io_err.into();
        assert_eq!(err.to_string(), "Output error: pipe closed".to_string());
    }
}
