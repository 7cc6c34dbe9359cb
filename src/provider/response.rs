//! HTTP response view handed to
//! [`Provider::check_response`](crate::provider::Provider::check_response).

// crates.io
use oauth2::{
	HttpResponse,
	http::{StatusCode, header::CONTENT_TYPE},
};
// self
use crate::{_prelude::*, error::ResponseError};

/// Status line, content type, and body of an authorization server response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderResponse {
	/// HTTP status code.
	pub status: u16,
	/// Reason phrase for the status code; empty when the code has no canonical reason.
	pub reason_phrase: String,
	/// `Content-Type` header value, if any.
	pub content_type: Option<String>,
	/// Raw body, decoded lossily as UTF-8.
	pub body: String,
}
impl ProviderResponse {
	/// Creates a response with the canonical reason phrase for `status`.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			reason_phrase: canonical_reason(status).to_owned(),
			content_type: None,
			body: body.into(),
		}
	}

	/// Sets the `Content-Type` header value.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());

		self
	}

	/// Overrides the reason phrase.
	pub fn with_reason_phrase(mut self, reason_phrase: impl Into<String>) -> Self {
		self.reason_phrase = reason_phrase.into();

		self
	}

	/// Captures an `oauth2` HTTP response.
	pub fn from_http(response: &HttpResponse) -> Self {
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(ToOwned::to_owned);

		Self {
			status: response.status().as_u16(),
			reason_phrase: response.status().canonical_reason().unwrap_or_default().to_owned(),
			content_type,
			body: String::from_utf8_lossy(response.body()).into_owned(),
		}
	}

	/// Parses the body.
	///
	/// Form-encoded bodies become an object of strings. Anything else is read as JSON; when
	/// that fails the raw body is returned as a JSON string, unless the response declared a
	/// JSON content type, in which case the parse error is surfaced.
	pub fn parse(&self) -> Result<Value, ResponseError> {
		let content_type = self.content_type.as_deref().unwrap_or_default();

		if content_type.contains("urlencoded") {
			let pairs = url::form_urlencoded::parse(self.body.as_bytes())
				.map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
				.collect::<Map<_, _>>();

			return Ok(Value::Object(pairs));
		}

		match parse_json(&self.body) {
			Ok(value) => Ok(value),
			Err((path, source)) if content_type.contains("json") =>
				Err(ResponseError::Parse { path, source, status: self.status }),
			Err(_) => Ok(Value::String(self.body.clone())),
		}
	}
}

fn canonical_reason(status: u16) -> &'static str {
	StatusCode::from_u16(status).ok().and_then(|code| code.canonical_reason()).unwrap_or_default()
}

fn parse_json(body: &str) -> Result<Value, (String, serde_json::Error)> {
	let mut de = serde_json::Deserializer::from_str(body);
	let value = serde_path_to_error::deserialize::<_, Value>(&mut de)
		.map_err(|e| (e.path().to_string(), e.into_inner()))?;

	de.end().map_err(|e| (".".to_owned(), e))?;

	Ok(value)
}
