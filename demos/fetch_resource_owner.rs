//! Fetches the resource owner for an access token, optionally against a local deployment.
//!
//! ```sh
//! OPENID_HOST=http://localhost:8000 OPENID_TOKEN=... cargo run --example fetch_resource_owner
//! ```

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use oauth2_openid::{
	OpenIdProvider,
	auth::AccessToken,
	http::{fetch_resource_owner, reqwest_client},
	provider::{ProviderOptions, ResourceOwner},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let token =
		env::var("OPENID_TOKEN").map_err(|_| eyre!("Set OPENID_TOKEN to an access token."))?;
	let mut provider = OpenIdProvider::new(ProviderOptions::new("demo-client"));

	if let Ok(host) = env::var("OPENID_HOST") {
		provider.set_host(host);
	}

	let http_client = reqwest_client()?;
	let owner = fetch_resource_owner(&provider, &http_client, &AccessToken::new(token)).await?;

	println!("Resource owner {:?} from {}.", owner.id(), provider.host());

	for (key, value) in owner.to_map() {
		println!("  {key}: {value}");
	}

	Ok(())
}
