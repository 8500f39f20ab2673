use std::cell::Cell;

use rdispatch_runtime::{args, ParameterBinder, Registry, Value};
use tracing::{error, info};

struct Subject {
	calls: Cell<usize>,
}

impl Subject {
	fn plus(&self, arg1: Value, arg2: Value) -> Value {
		info!("(arg1 = {arg1}; arg2 = {arg2})");
		arg1 + arg2
	}

	fn mul(&self, arg1: Value, arg2: Value) -> Value {
		self.calls.set(self.calls.get() + 1);
		info!("(arg1 = {arg1}; arg2 = {arg2}) call #{}", self.calls.get());
		arg1 * arg2
	}
}

fn main() -> eyre::Result<()> {
	rdispatch_core::init();

	let subject = Subject {
		calls: Cell::new(0),
	};

	let mut registry = Registry::new();
	registry.register(
		"add",
		ParameterBinder::new(&subject, Subject::plus, [("arg1", 0), ("arg2", 0)])?,
	)?;
	registry.register(
		"add_default",
		ParameterBinder::new(&subject, Subject::plus, [("arg1", 10), ("arg2", 20)])?,
	)?;
	registry.register(
		"mul",
		ParameterBinder::new(&subject, Subject::mul, [("a", 1), ("b", 1)])?,
	)?;
	registry.register(
		"lamf",
		ParameterBinder::new(
			&subject,
			|subject: &Subject, a: Value, b: Value| subject.plus(a, b) + 10,
			[("arg1", 0), ("arg2", 0)],
		)?,
	)?;
	registry.register(
		"noobj",
		ParameterBinder::new(
			&subject,
			|a: Value, b: Value| a + b + 1000,
			[("arg1", 0), ("arg2", 0)],
		)?,
	)?;

	let runs = [
		("add", args! { arg1: 4, arg2: 5 }, 9),
		("add", args! { arg2: 7, arg1: 3 }, 10),
		("add_default", args! { arg1: 5 }, 25),
		("mul", args! { a: 6, b: 7 }, 42),
		("lamf", args! { arg1: 2, arg2: 3 }, 15),
		("noobj", args! { arg1: 2, arg2: 3 }, 1005),
	];
	for (name, args, expected) in runs {
		let value = registry.execute(name, &args)?;
		info!("{name}{args:?} => {value} (expected {expected})");
	}

	for (name, args) in [
		("add", args! { argX: 1, arg2: 2 }),
		("does_not_exist", args! { arg1: 1, arg2: 2 }),
	] {
		match registry.execute(name, &args) {
			Ok(value) => error!("{name} unexpectedly returned {value}"),
			Err(err) => info!("{name} failed as expected: {err}"),
		}
	}

	Ok(())
}
