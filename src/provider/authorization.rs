//! Authorization URL assembly for the first leg of the authorization code grant.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	obs::{self, OpSpan, ProviderOp, ProviderOutcome},
	provider::Provider,
};

const STATE_LEN: usize = 32;

/// Caller overrides applied when building an authorization URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationOptions {
	/// Explicit `state`; a random value is generated when absent.
	pub state: Option<String>,
	/// Requested scopes; [`Provider::default_scopes`] applies when absent or empty.
	pub scopes: Option<Vec<String>>,
	/// Redirect URI overriding the registered one.
	pub redirect_uri: Option<Url>,
	/// Additional query parameters appended after the standard ones.
	pub extra_params: Vec<(String, String)>,
}
impl AuthorizationOptions {
	/// Uses a caller-supplied `state`.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Requests the provided scopes.
	///
	/// An empty list behaves like no list at all, so the provider's default scopes are sent.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Overrides the registered redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
		self.redirect_uri = Some(redirect_uri);

		self
	}

	/// Appends an extra query parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.extra_params.push((key.into(), value.into()));

		self
	}
}

/// Authorization URL together with the `state` it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// URL the user agent should be sent to.
	pub url: Url,
	/// Opaque `state` that must round-trip through the redirect.
	pub state: String,
}
impl AuthorizationRequest {
	/// Checks the `state` returned on the redirect against the one that was sent.
	pub fn state_matches(&self, returned_state: &str) -> bool {
		returned_state == self.state
	}
}

pub(super) fn build_authorization_request<P>(
	provider: &P,
	options: AuthorizationOptions,
) -> Result<AuthorizationRequest>
where
	P: ?Sized + Provider,
{
	let _guard = OpSpan::new(ProviderOp::AuthorizationUrl, "build").entered();

	obs::record_outcome(ProviderOp::AuthorizationUrl, ProviderOutcome::Attempt);

	let result = assemble(provider, options);

	obs::record_outcome(ProviderOp::AuthorizationUrl, ProviderOutcome::of(&result));

	result
}

fn assemble<P>(provider: &P, options: AuthorizationOptions) -> Result<AuthorizationRequest>
where
	P: ?Sized + Provider,
{
	let mut url = Url::parse(&provider.base_authorization_url())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "authorization", source })?;
	let state = options.state.unwrap_or_else(random_state);
	let scopes = options
		.scopes
		.filter(|scopes| !scopes.is_empty())
		.unwrap_or_else(|| provider.default_scopes());
	let scope = provider.scope_string(&scopes);
	let redirect_uri = options.redirect_uri.or_else(|| provider.options().redirect_uri.clone());
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair("state", &state);
	pairs.append_pair("scope", &scope);
	pairs.append_pair("response_type", "code");
	pairs.append_pair("approval_prompt", "auto");

	if let Some(redirect_uri) = redirect_uri.as_ref() {
		pairs.append_pair("redirect_uri", redirect_uri.as_str());
	}

	pairs.append_pair("client_id", &provider.options().client_id);

	for (key, value) in &options.extra_params {
		pairs.append_pair(key, value);
	}

	drop(pairs);

	Ok(AuthorizationRequest { url, state })
}

fn random_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::AccessToken,
		error::IdentityProviderError,
		provider::{ProviderOptions, ProviderResponse},
	};

	#[derive(Debug)]
	struct Owner(Map<String, Value>);
	impl crate::provider::ResourceOwner for Owner {
		fn id(&self) -> Option<&Value> {
			self.0.get("id")
		}

		fn to_map(&self) -> &Map<String, Value> {
			&self.0
		}
	}

	struct ScopedProvider(ProviderOptions);
	impl Provider for ScopedProvider {
		type ResourceOwner = Owner;

		fn options(&self) -> &ProviderOptions {
			&self.0
		}

		fn base_authorization_url(&self) -> String {
			"https://auth.example.com/authorize".into()
		}

		fn base_access_token_url(&self, _params: &BTreeMap<String, String>) -> String {
			"https://auth.example.com/token".into()
		}

		fn resource_owner_details_url(&self, _token: &AccessToken) -> String {
			"https://auth.example.com/me".into()
		}

		fn default_scopes(&self) -> Vec<String> {
			vec!["profile".into(), "email".into()]
		}

		fn check_response(
			&self,
			_response: &ProviderResponse,
			_data: &Value,
		) -> Result<(), IdentityProviderError> {
			Ok(())
		}

		fn create_resource_owner(
			&self,
			response: Map<String, Value>,
			_token: &AccessToken,
		) -> Owner {
			Owner(response)
		}
	}

	fn scope_of(request: &AuthorizationRequest) -> Option<String> {
		request
			.url
			.query_pairs()
			.find(|(key, _)| key == "scope")
			.map(|(_, value)| value.into_owned())
	}

	#[test]
	fn empty_scope_list_falls_back_to_defaults() {
		let provider = ScopedProvider(ProviderOptions::new("client"));
		let defaulted = provider
			.authorization_url(AuthorizationOptions::default().with_scopes(Vec::<String>::new()))
			.expect("Authorization URL should build.");
		let absent = provider
			.authorization_url(AuthorizationOptions::default())
			.expect("Authorization URL should build.");
		let explicit = provider
			.authorization_url(AuthorizationOptions::default().with_scopes(["admin"]))
			.expect("Authorization URL should build.");

		assert_eq!(scope_of(&defaulted).as_deref(), Some("profile,email"));
		assert_eq!(scope_of(&absent).as_deref(), Some("profile,email"));
		assert_eq!(scope_of(&explicit).as_deref(), Some("admin"));
	}

	#[test]
	fn random_state_is_alphanumeric() {
		let state = random_state();

		assert_eq!(state.len(), STATE_LEN);
		assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
		assert_ne!(state, random_state(), "Consecutive states should differ.");
	}

	#[test]
	fn state_matching_is_exact() {
		let request = AuthorizationRequest {
			url: Url::parse("https://example.com/auth?state=abc")
				.expect("Authorization URL fixture should parse successfully."),
			state: "abc".into(),
		};

		assert!(request.state_matches("abc"));
		assert!(!request.state_matches("ABC"));
		assert!(!request.state_matches(""));
	}
}
