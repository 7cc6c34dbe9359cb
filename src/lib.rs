//! OpenID provider adapter for the `oauth2` crate: endpoint wiring, scope formatting, response
//! error detection, and resource owner mapping for one OpenID-compatible authorization server.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod openid;
pub mod provider;

pub use openid::{
	ACCESS_TOKEN_RESOURCE_OWNER_ID, DEFAULT_HOST, OpenIdProvider, OpenIdResourceOwner,
};

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
	};

	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
