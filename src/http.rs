//! Transport glue for resource owner fetches.
//!
//! [`fetch_resource_owner`] sends the request built by
//! [`Provider::resource_owner_request`] through any [`AsyncHttpClient`] (the same transport
//! abstraction the `oauth2` crate uses for token exchanges) and hands the response back to the
//! provider for error detection and resource owner construction.

// crates.io
use oauth2::AsyncHttpClient;
#[cfg(feature = "reqwest")] use reqwest::{Client as ReqwestClient, redirect::Policy};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::TransportError,
	obs::{self, OpSpan, ProviderOp, ProviderOutcome},
	provider::Provider,
};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Fetches and maps the resource owner's details for `token`.
///
/// Transport failures surface as [`Error::Transport`]; responses rejected by
/// [`Provider::check_response`] surface as [`Error::IdentityProvider`].
pub async fn fetch_resource_owner<'c, P, C>(
	provider: &P,
	http_client: &'c C,
	token: &AccessToken,
) -> Result<P::ResourceOwner>
where
	P: ?Sized + Provider,
	C: AsyncHttpClient<'c>,
	C::Error: 'static + Send + Sync,
{
	let span = OpSpan::new(ProviderOp::ResourceOwner, "fetch");

	obs::record_outcome(ProviderOp::ResourceOwner, ProviderOutcome::Attempt);

	let result = span
		.instrument(async {
			let request = provider.resource_owner_request(token)?;
			let response = http_client.call(request).await.map_err(TransportError::network)?;

			provider.resource_owner_from_response(&response, token)
		})
		.await;

	obs::record_outcome(ProviderOp::ResourceOwner, ProviderOutcome::of(&result));

	result
}

/// Builds a reqwest client suitable for provider calls.
///
/// Redirects are not followed, matching OAuth 2.0 guidance that token and resource endpoints
/// answer directly. `reqwest::Client` implements [`AsyncHttpClient`] through the `oauth2`
/// crate, so the result can be passed to [`fetch_resource_owner`] and to `oauth2` token
/// requests alike.
#[cfg(feature = "reqwest")]
pub fn reqwest_client() -> Result<ReqwestClient> {
	ReqwestClient::builder()
		.redirect(Policy::none())
		.build()
		.map_err(|e| ConfigError::from(e).into())
}
