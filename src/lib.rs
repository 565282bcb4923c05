//! Multifactor-authentication provider resolution for SSO flow engines: pick the single provider
//! that satisfies the requested method and resolve the target service behind a fail-closed
//! access check.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

macro_rules! trace_event {
	($level:ident, $($arg:tt)+) => {
		#[cfg(feature = "tracing")]
		{
			tracing::$level!($($arg)+);
		}
	};
}

pub mod auth;
pub mod config;
pub mod error;
pub mod event;
pub mod obs;
pub mod provider;
pub mod service;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use {color_eyre as _, tokio as _};
