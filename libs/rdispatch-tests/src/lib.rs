use std::cell::Cell;

use rdispatch_runtime::{ParameterBinder, Registry, Value};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Receiver used across the scenario tests.
#[derive(Default)]
pub struct Subject {
	calls: Cell<usize>,
	last: Cell<Option<(Value, Value)>>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot divide {0} by zero")]
pub struct DivideByZero(pub Value);

impl Subject {
	pub fn plus(&self, arg1: Value, arg2: Value) -> Value {
		self.record(arg1, arg2);
		arg1 + arg2
	}

	pub fn mul(&self, arg1: Value, arg2: Value) -> Value {
		self.record(arg1, arg2);
		arg1 * arg2
	}

	pub fn div(&self, arg1: Value, arg2: Value) -> Result<Value, DivideByZero> {
		self.record(arg1, arg2);
		if arg2 == 0 {
			return Err(DivideByZero(arg1));
		}
		Ok(arg1 / arg2)
	}

	fn record(&self, arg1: Value, arg2: Value) {
		debug!("(arg1 = {arg1}; arg2 = {arg2})");
		self.calls.set(self.calls.get() + 1);
		self.last.set(Some((arg1, arg2)));
	}

	/// Number of times any operation ran on this receiver.
	pub fn calls(&self) -> usize {
		self.calls.get()
	}

	pub fn last(&self) -> Option<(Value, Value)> {
		self.last.get()
	}
}

pub fn launch() {
	rdispatch_core::init();
}

/// Builds a registry with `add`, `mul` and `div` bound to `subject`.
pub fn registry(subject: &Subject) -> Registry<'_> {
	launch();
	let mut registry = Registry::new();
	let commands = [
		(
			"add",
			ParameterBinder::new(subject, Subject::plus, [("arg1", 0), ("arg2", 0)]),
		),
		(
			"mul",
			ParameterBinder::new(subject, Subject::mul, [("a", 1), ("b", 1)]),
		),
		(
			"div",
			ParameterBinder::new(subject, Subject::div, [("arg1", 0), ("arg2", 1)]),
		),
	];
	for (name, binder) in commands {
		let binder = binder.expect("fixture defaults match arity");
		registry
			.register(name, binder)
			.expect("fixture names are unique");
	}
	registry
}
