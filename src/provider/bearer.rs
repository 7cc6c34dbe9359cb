//! Authorization header capabilities providers compose instead of inheriting.

// crates.io
use oauth2::http::{
	HeaderMap,
	header::{AUTHORIZATION, HeaderValue},
};
// self
use crate::{_prelude::*, auth::AccessToken, error::ConfigError};

/// Produces the headers that authorize a request made with an access token.
pub trait AuthorizationHeaders {
	/// Returns the headers to attach for `token`.
	fn authorization_headers(&self, token: &AccessToken) -> Result<HeaderMap>;
}

/// RFC 6750 bearer authorization: `Authorization: Bearer <token>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BearerAuthorization;
impl AuthorizationHeaders for BearerAuthorization {
	fn authorization_headers(&self, token: &AccessToken) -> Result<HeaderMap> {
		let mut value =
			HeaderValue::try_from(format!("Bearer {}", token.secret())).map_err(ConfigError::from)?;

		value.set_sensitive(true);

		let mut headers = HeaderMap::new();

		headers.insert(AUTHORIZATION, value);

		Ok(headers)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn bearer_header_is_sensitive() {
		let headers = BearerAuthorization
			.authorization_headers(&AccessToken::new("abc123"))
			.expect("Bearer header should build for a plain token.");
		let value = headers.get(AUTHORIZATION).expect("Authorization header should be present.");

		assert_eq!(value, "Bearer abc123");
		assert!(value.is_sensitive());
		assert_eq!(headers.len(), 1);
	}

	#[test]
	fn bearer_header_rejects_control_characters() {
		let err = BearerAuthorization
			.authorization_headers(&AccessToken::new("bad\ntoken"))
			.expect_err("Tokens with newlines must not become header values.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidHeader(_))));
	}
}
