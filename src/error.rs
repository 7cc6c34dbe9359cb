//! Crate-level error types shared by the provider contract, the OpenID adapter, and the HTTP
//! helpers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The authorization server reported an error in its response.
	#[error(transparent)]
	IdentityProvider(#[from] IdentityProviderError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Response body could not be interpreted.
	#[error(transparent)]
	Response(#[from] ResponseError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Error signaled by [`Provider::check_response`](crate::provider::Provider::check_response).
///
/// Carries the message chosen from the response body (or the HTTP reason phrase), the HTTP
/// status code, and the raw response body.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct IdentityProviderError {
	/// Human-readable message taken from the response.
	pub message: String,
	/// HTTP status code of the response.
	pub code: u16,
	/// Raw response body.
	pub body: String,
}
impl IdentityProviderError {
	/// Creates a new error from its parts.
	pub fn new(message: impl Into<String>, code: u16, body: impl Into<String>) -> Self {
		Self { message: message.into(), code, body: body.into() }
	}
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Authorization header value contains characters HTTP does not allow.
	#[error("Authorization header value is invalid.")]
	InvalidHeader(#[from] oauth2::http::header::InvalidHeaderValue),
	/// Provider endpoint is not a valid URL.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for ConfigError {
	fn from(e: reqwest::Error) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures interpreting a response body.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Response declared a JSON content type but the body is not valid JSON.
	#[error("Authorization server returned malformed JSON at `{path}`.")]
	Parse {
		/// Path to the offending value as reported by `serde_path_to_error`.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: serde_json::Error,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Resource owner details were not a JSON object.
	#[error("Invalid response received from the authorization server. Expected a JSON object.")]
	UnexpectedShape {
		/// HTTP status code of the response.
		status: u16,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a failure.
	#[error("Network error occurred while calling the authorization server.")]
	Network {
		/// Transport-specific error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identity_provider_error_converts_into_crate_error() {
		let err: Error = IdentityProviderError::new("invalid_scope", 403, "{}").into();

		assert_eq!(err.to_string(), "invalid_scope");
		assert!(matches!(err, Error::IdentityProvider(IdentityProviderError { code: 403, .. })));
	}
}
