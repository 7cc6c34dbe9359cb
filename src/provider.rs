//! Provider contract (behavior) and the data it exchanges with callers.
//!
//! [`Provider`] is the extension surface an OAuth 2.0 provider adapter implements: endpoint
//! URLs, scope defaults and delimiter, response error detection, and resource owner
//! construction. Provided methods build on those hooks to assemble authorization URLs,
//! resource owner requests, and `oauth2` clients without tying adapters to any HTTP stack.

pub mod authorization;
pub mod bearer;
pub mod options;
pub mod resource_owner;
pub mod response;

pub use authorization::*;
pub use bearer::*;
pub use options::*;
pub use resource_owner::*;
pub use response::*;

// crates.io
use oauth2::{
	HttpRequest, HttpResponse,
	http::{
		HeaderMap, Method, Request,
		header::{ACCEPT, HeaderValue},
	},
};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ConfigError, IdentityProviderError, ResponseError},
	oauth::{self, ConfiguredClient},
	obs,
};

/// Extension contract implemented by provider adapters.
///
/// Implementors supply the required hooks; every provided method is expressed purely in terms
/// of them, so adapters stay small and never perform I/O themselves.
pub trait Provider
where
	Self: Send + Sync,
{
	/// Resource owner type produced by [`create_resource_owner`](Self::create_resource_owner).
	type ResourceOwner: ResourceOwner;

	/// Client registration used when building authorization URLs and `oauth2` clients.
	fn options(&self) -> &ProviderOptions;

	/// Base URL the user agent is redirected to for authorization.
	fn base_authorization_url(&self) -> String;

	/// URL of the token endpoint.
	fn base_access_token_url(&self, params: &BTreeMap<String, String>) -> String;

	/// URL returning the resource owner's details for `token`.
	fn resource_owner_details_url(&self, token: &AccessToken) -> String;

	/// Scopes requested when the caller does not list any.
	fn default_scopes(&self) -> Vec<String>;

	/// String placed between scopes in the `scope` parameter.
	fn scope_separator(&self) -> &str {
		","
	}

	/// Inspects a response and its parsed body, failing when the server reported an error.
	fn check_response(
		&self,
		response: &ProviderResponse,
		data: &Value,
	) -> Result<(), IdentityProviderError>;

	/// Wraps the parsed resource owner details.
	fn create_resource_owner(
		&self,
		response: Map<String, Value>,
		token: &AccessToken,
	) -> Self::ResourceOwner;

	/// Headers that authorize requests made with `token`.
	///
	/// The default sends no credentials; adapters compose an [`AuthorizationHeaders`]
	/// implementation such as [`BearerAuthorization`] to override it.
	fn authorization_headers(&self, token: &AccessToken) -> Result<HeaderMap> {
		let _ = token;

		Ok(HeaderMap::new())
	}

	/// Joins `scopes` with [`scope_separator`](Self::scope_separator).
	fn scope_string<I, S>(&self, scopes: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let separator = self.scope_separator();
		let mut buf = String::new();

		for (idx, scope) in scopes.into_iter().enumerate() {
			if idx > 0 {
				buf.push_str(separator);
			}

			buf.push_str(scope.as_ref());
		}

		buf
	}

	/// Builds the authorization URL plus the `state` value the redirect must echo back.
	fn authorization_url(&self, options: AuthorizationOptions) -> Result<AuthorizationRequest> {
		authorization::build_authorization_request(self, options)
	}

	/// Builds the `GET` request for the resource owner details endpoint.
	fn resource_owner_request(&self, token: &AccessToken) -> Result<HttpRequest> {
		let mut request = Request::builder()
			.method(Method::GET)
			.uri(self.resource_owner_details_url(token))
			.header(ACCEPT, HeaderValue::from_static("application/json"))
			.body(Vec::new())
			.map_err(ConfigError::from)?;

		request.headers_mut().extend(self.authorization_headers(token)?);

		Ok(request)
	}

	/// Parses a response body and runs [`check_response`](Self::check_response) against it.
	fn parse_response(&self, response: &HttpResponse) -> Result<Value> {
		let response = ProviderResponse::from_http(response);
		let data = response.parse()?;

		if let Err(e) = self.check_response(&response, &data) {
			obs::record_rejection(&e);

			return Err(e.into());
		}

		Ok(data)
	}

	/// Turns a resource owner details response into [`Self::ResourceOwner`].
	fn resource_owner_from_response(
		&self,
		response: &HttpResponse,
		token: &AccessToken,
	) -> Result<Self::ResourceOwner> {
		match self.parse_response(response)? {
			Value::Object(details) => Ok(self.create_resource_owner(details, token)),
			_ => Err(ResponseError::UnexpectedShape { status: response.status().as_u16() }.into()),
		}
	}

	/// Builds an `oauth2` client wired to this provider's endpoints and client registration.
	fn oauth2_client(&self) -> Result<ConfiguredClient> {
		oauth::build_client(self)
	}
}
