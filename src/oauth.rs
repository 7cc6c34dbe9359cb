//! Bridge from [`Provider`] hooks to the `oauth2` crate's client, which owns the code and
//! token exchanges.

pub use oauth2;

// crates.io
use oauth2::{
	AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, RedirectUrl, TokenUrl,
	basic::BasicClient,
};
// self
use crate::{_prelude::*, error::ConfigError, provider::Provider};

/// `oauth2` client with the authorization and token endpoints configured.
pub type ConfiguredClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

pub(crate) fn build_client<P>(provider: &P) -> Result<ConfiguredClient>
where
	P: ?Sized + Provider,
{
	let options = provider.options();
	let auth_url = AuthUrl::new(provider.base_authorization_url())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "authorization", source })?;
	let token_url = TokenUrl::new(provider.base_access_token_url(&BTreeMap::new()))
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "token", source })?;
	let mut oauth_client = BasicClient::new(ClientId::new(options.client_id.clone()))
		.set_auth_uri(auth_url)
		.set_token_uri(token_url);

	if let Some(secret) = options.client_secret.as_ref() {
		oauth_client =
			oauth_client.set_client_secret(ClientSecret::new(secret.expose().to_owned()));
	}
	if let Some(redirect) = options.redirect_uri.as_ref() {
		let redirect_url = RedirectUrl::new(redirect.to_string())
			.map_err(|source| ConfigError::InvalidRedirect { source })?;

		oauth_client = oauth_client.set_redirect_uri(redirect_url);
	}

	Ok(oauth_client)
}
