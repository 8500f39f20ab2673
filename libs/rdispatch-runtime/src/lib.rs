//! Named-argument dispatch over fixed-arity targets.
//!
//! A [`ParameterBinder`] turns a receiver-bound callable plus a named default for each of its
//! parameters into something callable with a sparse [`Arguments`] set. A [`Registry`] stores
//! binders under command names and dispatches to them by name.

mod args;
mod binder;
mod registry;
mod target;

pub use args::*;
pub use binder::*;
pub use registry::*;
pub use target::*;

pub use rdispatch_core::{
	ArgumentError, DispatchError, DispatchResult, LookupError, Parameters, Value,
};
