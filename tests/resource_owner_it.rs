#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use oauth2_openid::{
	OpenIdProvider,
	auth::AccessToken,
	error::{Error, IdentityProviderError},
	http::{fetch_resource_owner, reqwest_client},
	provider::{ProviderOptions, ResourceOwner},
};

fn provider(server: &MockServer) -> OpenIdProvider {
	OpenIdProvider::new(ProviderOptions::new("client-it")).with_host(server.base_url())
}

#[tokio::test]
async fn fetch_resource_owner_returns_details() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth/resource")
				.header("authorization", "Bearer access-it")
				.header("accept", "application/json");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"42\",\"name\":\"Alice\",\"email\":\"alice@example.com\"}");
		})
		.await;
	let http_client = reqwest_client().expect("Reqwest client should build.");
	let owner =
		fetch_resource_owner(&provider(&server), &http_client, &AccessToken::new("access-it"))
			.await
			.expect("Resource owner fetch should succeed.");

	mock.assert_async().await;

	assert_eq!(owner.id().and_then(|id| id.as_str()), Some("42"));
	assert_eq!(owner.to_map().len(), 3);
}

#[tokio::test]
async fn fetch_resource_owner_surfaces_forbidden_message() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/resource");
			then.status(403)
				.header("content-type", "application/json")
				.body("{\"message\":\"invalid_scope\"}");
		})
		.await;
	let http_client = reqwest_client().expect("Reqwest client should build.");
	let err = fetch_resource_owner(&provider(&server), &http_client, &AccessToken::new("expired"))
		.await
		.expect_err("Forbidden responses must fail.");

	mock.assert_async().await;

	match err {
		Error::IdentityProvider(IdentityProviderError { message, code, .. }) => {
			assert_eq!(message, "invalid_scope");
			assert_eq!(code, 403);
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn fetch_resource_owner_surfaces_error_field_on_success() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/resource");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"error\":\"token_expired\"}");
		})
		.await;
	let http_client = reqwest_client().expect("Reqwest client should build.");
	let err = fetch_resource_owner(&provider(&server), &http_client, &AccessToken::new("stale"))
		.await
		.expect_err("Bodies with an error field must fail.");

	assert!(matches!(
		err,
		Error::IdentityProvider(IdentityProviderError { ref message, code: 200, .. })
			if message == "token_expired"
	));
}

#[tokio::test]
async fn fetch_resource_owner_reports_reason_phrase_for_empty_server_errors() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/resource");
			then.status(500);
		})
		.await;
	let http_client = reqwest_client().expect("Reqwest client should build.");
	let err = fetch_resource_owner(&provider(&server), &http_client, &AccessToken::new("any"))
		.await
		.expect_err("Server errors must fail.");

	assert!(matches!(
		err,
		Error::IdentityProvider(IdentityProviderError { ref message, code: 500, ref body })
			if message == "Internal Server Error" && body.is_empty()
	));
}
