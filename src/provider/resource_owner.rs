//! Resource owner contract implemented by provider adapters.

// self
use crate::_prelude::*;

/// Resource owner details returned by a provider.
pub trait ResourceOwner
where
	Self: Debug + Send + Sync,
{
	/// Identifier of the resource owner, when the server returned one.
	fn id(&self) -> Option<&Value>;

	/// All details exactly as returned by the server.
	fn to_map(&self) -> &Map<String, Value>;
}
