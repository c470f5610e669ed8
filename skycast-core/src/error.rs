use thiserror::Error;

/// Failures that can reach the presentation layer.
///
/// Local persistence problems are deliberately absent: the store degrades to
/// empty defaults instead of surfacing an error.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider had no match for the location query.
    #[error("No location matched '{query}'")]
    LocationNotFound { query: String },

    /// Network failure or a server-side error from the provider.
    #[error("Weather provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },

    /// The provider answered 2xx but the payload is unusable.
    #[error("Malformed provider response: missing or invalid field '{path}'")]
    MalformedResponse { path: String },

    /// The location of the current device could not be resolved.
    #[error("Location access was denied")]
    GeolocationDenied,
}

impl WeatherError {
    pub(crate) fn malformed(path: impl Into<String>) -> Self {
        Self::MalformedResponse { path: path.into() }
    }

    /// Stable machine-readable kind for callers that branch on failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::LocationNotFound { .. } => "location_not_found",
            WeatherError::ProviderUnavailable { .. } => "provider_unavailable",
            WeatherError::MalformedResponse { .. } => "malformed_response",
            WeatherError::GeolocationDenied => "geolocation_denied",
        }
    }

    /// One user-facing message per failure class.
    ///
    /// `MalformedResponse` is a provider contract violation, not something the
    /// user can correct, so it is surfaced generically.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::LocationNotFound { query } => {
                format!("City not found: '{query}'. Check the spelling and try again.")
            }
            WeatherError::ProviderUnavailable { .. } => {
                "The weather service is currently unavailable. Please try again in a moment."
                    .to_string()
            }
            WeatherError::MalformedResponse { .. } => {
                "The weather service returned unexpected data. Please try again later.".to_string()
            }
            WeatherError::GeolocationDenied => {
                "Could not determine your location; showing the default location instead."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        let err = WeatherError::LocationNotFound { query: "Atlantis".into() };
        assert_eq!(err.kind(), "location_not_found");

        let err = WeatherError::ProviderUnavailable { reason: "HTTP 503".into() };
        assert_eq!(err.kind(), "provider_unavailable");

        let err = WeatherError::malformed("location.name");
        assert_eq!(err.kind(), "malformed_response");

        assert_eq!(WeatherError::GeolocationDenied.kind(), "geolocation_denied");
    }

    #[test]
    fn malformed_carries_field_path() {
        let err = WeatherError::malformed("current.temp_c");
        assert!(err.to_string().contains("current.temp_c"));
    }

    #[test]
    fn user_messages_are_actionable() {
        let err = WeatherError::LocationNotFound { query: "Atlantis".into() };
        assert!(err.user_message().contains("Atlantis"));

        let err = WeatherError::ProviderUnavailable { reason: "timeout".into() };
        assert!(err.user_message().contains("try again"));
        // Transport detail stays out of the user-facing string.
        assert!(!err.user_message().contains("timeout"));

        assert!(WeatherError::GeolocationDenied.user_message().contains("default location"));
    }
}
