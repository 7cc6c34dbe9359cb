//! Access token handed to the provider when it builds resource owner requests.

// std
use std::time::Duration as StdDuration;
// crates.io
use oauth2::TokenResponse;
// self
use crate::{_prelude::*, auth::Secret};

/// Bearer access token issued by the authorization server.
///
/// The token is owned by the embedding application; providers only read it when attaching
/// authorization headers or constructing resource owners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken {
	/// Access token secret; callers must avoid logging it.
	pub token: Secret,
	/// Refresh token secret, if the server issued one.
	pub refresh_token: Option<Secret>,
	/// Expiry instant derived from `expires_in`, when known.
	pub expires_at: Option<OffsetDateTime>,
}
impl AccessToken {
	/// Wraps a raw access token value.
	pub fn new(token: impl Into<Secret>) -> Self {
		Self { token: token.into(), refresh_token: None, expires_at: None }
	}

	/// Builds a token from an `oauth2` token endpoint response.
	///
	/// Expiry is computed relative to the current UTC instant. Lifetimes that do not fit in
	/// [`Duration`] leave the expiry unset.
	pub fn from_token_response<TR>(response: &TR) -> Self
	where
		TR: TokenResponse,
	{
		let mut token = Self::new(response.access_token().secret().as_str());

		if let Some(refresh) = response.refresh_token() {
			token = token.with_refresh_token(refresh.secret().as_str());
		}
		if let Some(expires_at) = response.expires_in().and_then(expiry_from_now) {
			token = token.with_expires_at(expires_at);
		}

		token
	}

	/// Attaches a refresh token.
	pub fn with_refresh_token(mut self, refresh_token: impl Into<Secret>) -> Self {
		self.refresh_token = Some(refresh_token.into());

		self
	}

	/// Sets the absolute expiry instant.
	pub fn with_expires_at(mut self, expires_at: OffsetDateTime) -> Self {
		self.expires_at = Some(expires_at);

		self
	}

	/// Returns the raw token value. Callers must avoid logging this string.
	pub fn secret(&self) -> &str {
		self.token.expose()
	}

	/// Returns `true` once `instant` reaches the expiry. Tokens without a known expiry never
	/// report as expired.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}
}

fn expiry_from_now(expires_in: StdDuration) -> Option<OffsetDateTime> {
	let lifetime = Duration::try_from(expires_in).ok()?;

	OffsetDateTime::now_utc().checked_add(lifetime)
}
