//! Builds the authorization URL for the OpenID server, then shows how the redirect handler
//! checks `state` and hands the code to the `oauth2` client.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use oauth2_openid::{
	OpenIdProvider,
	provider::{AuthorizationOptions, Provider, ProviderOptions},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let options = ProviderOptions::new("demo-client")
		.with_client_secret("demo-secret")
		.with_redirect_uri(Url::parse("https://app.example.com/oauth/callback")?);
	let provider = OpenIdProvider::new(options);
	let request = provider
		.authorization_url(AuthorizationOptions::default().with_scopes(["user:email", "user:id"]))?;

	println!("Send your user to {}.", &request.url);

	// The redirect handler receives `state` back from the server.
	let returned_state = request.state.clone();

	if !request.state_matches(&returned_state) {
		eprintln!("State `{returned_state}` does not match.");

		return Ok(());
	}

	let client = provider.oauth2_client()?;

	println!("Exchange the returned code against {}.", client.token_uri().as_str());

	Ok(())
}
