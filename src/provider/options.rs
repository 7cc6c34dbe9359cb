//! Client registration shared by every provider.

// self
use crate::{_prelude::*, auth::Secret};

/// Client registration details issued by the authorization server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOptions {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Client secret for confidential clients.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_secret: Option<Secret>,
	/// Redirect URI registered for the client.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub redirect_uri: Option<Url>,
}
impl ProviderOptions {
	/// Creates options for a public client.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: None, redirect_uri: None }
	}

	/// Sets or replaces the client secret.
	pub fn with_client_secret(mut self, secret: impl Into<Secret>) -> Self {
		self.client_secret = Some(secret.into());

		self
	}

	/// Sets or replaces the redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
		self.redirect_uri = Some(redirect_uri);

		self
	}
}
