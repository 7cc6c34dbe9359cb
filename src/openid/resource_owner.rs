// self
use crate::{_prelude::*, openid::ACCESS_TOKEN_RESOURCE_OWNER_ID, provider::ResourceOwner};

/// Resource owner details returned by the OpenID server's resource endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenIdResourceOwner {
	response: Map<String, Value>,
}
impl OpenIdResourceOwner {
	/// Wraps the parsed details.
	pub fn new(response: Map<String, Value>) -> Self {
		Self { response }
	}

	/// Returns a single detail by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.response.get(key)
	}
}
impl ResourceOwner for OpenIdResourceOwner {
	fn id(&self) -> Option<&Value> {
		self.response.get(ACCESS_TOKEN_RESOURCE_OWNER_ID)
	}

	fn to_map(&self) -> &Map<String, Value> {
		&self.response
	}
}
