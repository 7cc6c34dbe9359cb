//! Optional observability helpers for provider operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `oauth2_openid.provider` with the `op` and `stage`
//!   fields, plus a `debug` event whenever a response is rejected by
//!   [`Provider::check_response`](crate::provider::Provider::check_response).
//! - Enable `metrics` to increment the `oauth2_openid_provider_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Provider operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderOp {
	/// Authorization URL assembly.
	AuthorizationUrl,
	/// Resource owner details fetch.
	ResourceOwner,
}
impl ProviderOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderOp::AuthorizationUrl => "authorization_url",
			ProviderOp::ResourceOwner => "resource_owner",
		}
	}
}
impl Display for ProviderOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl ProviderOutcome {
	/// Maps a result onto [`ProviderOutcome::Success`] or [`ProviderOutcome::Failure`].
	pub fn of<T, E>(result: &Result<T, E>) -> Self {
		if result.is_ok() { ProviderOutcome::Success } else { ProviderOutcome::Failure }
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderOutcome::Attempt => "attempt",
			ProviderOutcome::Success => "success",
			ProviderOutcome::Failure => "failure",
		}
	}
}
impl Display for ProviderOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcome_follows_result() {
		assert_eq!(ProviderOutcome::of(&Ok::<_, ()>(1)), ProviderOutcome::Success);
		assert_eq!(ProviderOutcome::of(&Err::<(), _>("boom")), ProviderOutcome::Failure);
		assert_eq!(ProviderOp::ResourceOwner.to_string(), "resource_owner");
	}
}
