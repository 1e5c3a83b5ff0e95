use thiserror::Error;

/// Error taxonomy for upstream requests.
///
/// Collapsed to its display string at the store boundary; nothing structured
/// survives past the fetch layer, and nothing here ever escapes to a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network unreachable or non-2xx response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response arrived but its payload did not decode.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Anything the layers above could not classify.
    #[error("unknown error occurred")]
    Unknown,
}

impl ApiError {
    /// Classify a gloo-net send error, falling back to [`ApiError::Unknown`]
    /// when the underlying error carries no message.
    pub fn transport(err: gloo_net::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            ApiError::Unknown
        } else {
            ApiError::Transport(message)
        }
    }

    /// Classify a payload decode error.
    pub fn decode(err: gloo_net::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            ApiError::Unknown
        } else {
            ApiError::Decode(message)
        }
    }

    /// Non-2xx status line, kept human-readable.
    pub fn status(code: u16) -> Self {
        ApiError::Transport(format!("HTTP {}", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_non_empty() {
        assert_eq!(ApiError::status(500).to_string(), "request failed: HTTP 500");
        assert_eq!(
            ApiError::Decode("missing field `products`".to_string()).to_string(),
            "unexpected response: missing field `products`"
        );
        assert!(!ApiError::Unknown.to_string().is_empty());
    }
}
