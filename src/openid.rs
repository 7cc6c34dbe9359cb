//! Provider adapter for the OpenID authorization server at `openid.manuele-vaccari.ch`.
//!
//! The adapter only computes endpoint URLs, scope settings, and error/resource owner mappings;
//! every request is built and sent by the [`Provider`] helpers or the `oauth2` client.

mod resource_owner;

pub use resource_owner::*;

// crates.io
use oauth2::http::HeaderMap;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::IdentityProviderError,
	provider::{
		AuthorizationHeaders, BearerAuthorization, Provider, ProviderOptions, ProviderResponse,
	},
};

/// Key of the resource owner identifier in the resource owner details.
pub const ACCESS_TOKEN_RESOURCE_OWNER_ID: &str = "id";
/// Base URL of the production authorization server.
pub const DEFAULT_HOST: &str = "https://openid.manuele-vaccari.ch";

/// OpenID provider configuration.
///
/// Endpoint paths are appended to [`host`](Self::host) verbatim, so the host should not end
/// with a slash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenIdProvider {
	/// Client registration.
	#[serde(flatten)]
	pub options: ProviderOptions,
	#[serde(default = "default_host")]
	host: String,
}
impl OpenIdProvider {
	/// Creates a provider pointed at [`DEFAULT_HOST`].
	pub fn new(options: ProviderOptions) -> Self {
		Self { options, host: default_host() }
	}

	/// Base URL of the authorization server.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Points the provider at another deployment, e.g. a local test instance.
	///
	/// The value is not validated.
	pub fn set_host(&mut self, host: impl Into<String>) -> &mut Self {
		self.host = host.into();

		self
	}

	/// Builder-style variant of [`set_host`](Self::set_host).
	pub fn with_host(mut self, host: impl Into<String>) -> Self {
		self.set_host(host);

		self
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}{path}", self.host)
	}
}
impl Provider for OpenIdProvider {
	type ResourceOwner = OpenIdResourceOwner;

	fn options(&self) -> &ProviderOptions {
		&self.options
	}

	fn base_authorization_url(&self) -> String {
		self.endpoint("/oauth/authorize")
	}

	fn base_access_token_url(&self, _params: &BTreeMap<String, String>) -> String {
		self.endpoint("/oauth/token")
	}

	fn resource_owner_details_url(&self, _token: &AccessToken) -> String {
		self.endpoint("/oauth/resource")
	}

	fn default_scopes(&self) -> Vec<String> {
		Vec::new()
	}

	fn scope_separator(&self) -> &str {
		" "
	}

	fn check_response(
		&self,
		response: &ProviderResponse,
		data: &Value,
	) -> Result<(), IdentityProviderError> {
		let message = if response.status >= 400 {
			Some(field_text(data, "message").unwrap_or_else(|| response.reason_phrase.clone()))
		} else {
			field_text(data, "error")
		};

		match message {
			Some(message) =>
				Err(IdentityProviderError::new(message, response.status, response.body.as_str())),
			None => Ok(()),
		}
	}

	fn create_resource_owner(
		&self,
		response: Map<String, Value>,
		_token: &AccessToken,
	) -> OpenIdResourceOwner {
		OpenIdResourceOwner::new(response)
	}

	fn authorization_headers(&self, token: &AccessToken) -> Result<HeaderMap> {
		BearerAuthorization.authorization_headers(token)
	}
}

fn default_host() -> String {
	DEFAULT_HOST.to_owned()
}

// Present means present and non-null.
fn field_text(data: &Value, key: &str) -> Option<String> {
	data.as_object()?.get(key).filter(|value| !value.is_null()).map(value_text)
}

fn value_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Bool(true) => "1".to_owned(),
		Value::Bool(false) | Value::Null => String::new(),
		Value::Number(number) => number.to_string(),
		other => other.to_string(),
	}
}
