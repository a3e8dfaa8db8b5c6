use reqwest::StatusCode;
use thiserror::Error;

/// Failures a fetch can produce.
///
/// A non-success HTTP status and a transport failure are deliberately
/// reported through the same channel: callers only ever render the
/// `Display` form, so both look like "the fetch failed, here is why".
#[derive(Debug, Error)]
pub enum FetchError {
    /// The caller submitted an empty (or whitespace-only) city name.
    /// Detected before any request is built.
    #[error("no city name given")]
    MissingCity,

    /// The request never produced an HTTP response.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status.
    #[error("{endpoint} returned status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// True when the failure happened before any network traffic.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, FetchError::MissingCity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_city_is_missing_input() {
        assert!(FetchError::MissingCity.is_missing_input());
    }

    #[test]
    fn status_and_decode_are_not_missing_input() {
        let status = FetchError::Status {
            endpoint: "weather",
            status: StatusCode::NOT_FOUND,
            body: "city not found".into(),
        };
        assert!(!status.is_missing_input());

        let decode = FetchError::Decode {
            endpoint: "geocoding",
            source: serde_json::from_str::<Vec<String>>("{").unwrap_err(),
        };
        assert!(!decode.is_missing_input());
    }

    #[test]
    fn status_error_carries_reason_in_display() {
        let err = FetchError::Status {
            endpoint: "weather",
            status: StatusCode::UNAUTHORIZED,
            body: "Invalid API key".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Invalid API key"));
    }
}
