// self
use crate::obs::{ProviderOp, ProviderOutcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_outcome(op: ProviderOp, outcome: ProviderOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_openid_provider_total",
			"op" => op.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (op, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_outcome_noop_without_metrics() {
		record_outcome(ProviderOp::ResourceOwner, ProviderOutcome::Failure);
	}
}
