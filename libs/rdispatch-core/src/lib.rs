mod error;
mod params;

pub use error::*;
pub use params::*;
use std::sync::Once;
use tracing::{debug, Level};
use tracing_subscriber::filter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// The single numeric kind carried by arguments and results.
pub type Value = i32;

static START: Once = Once::new();

/// Installs the global tracing subscriber at INFO.
pub fn init() {
	init_with(Level::INFO);
}

/// Installs the global tracing subscriber, filtering every target at `level`.
///
/// Only the first call in a process does anything, later calls keep the first filter and return
/// `false`. Also returns `false` if the host program already installed its own subscriber.
pub fn init_with(level: Level) -> bool {
	let mut installed = false;
	START.call_once(|| {
		let filter = filter::Targets::new().with_default(level);
		let layered = tracing_subscriber::registry()
			.with(tracing_subscriber::fmt::layer())
			.with(filter);

		match layered.try_init() {
			Ok(()) => installed = true,
			Err(error) => debug!("Keeping the existing subscriber: {error}"),
		}
	});
	installed
}
