use std::cell::Cell;

use proptest::prelude::*;
use rdispatch_runtime::{ArgumentError, Arguments, LookupError, ParameterBinder, Value};

use crate::{registry, Subject};

const NAMES: [&str; 3] = ["a", "b", "c"];

fn weigh(a: Value, b: Value, c: Value) -> Value {
	100 * a + 10 * b + c
}

fn value() -> impl Strategy<Value = Value> {
	-1000..1000
}

fn defaults() -> impl Strategy<Value = [Value; 3]> {
	[value(), value(), value()]
}

fn named(defaults: [Value; 3]) -> Vec<(&'static str, Value)> {
	NAMES.iter().copied().zip(defaults).collect()
}

proptest! {
	#[test]
	fn wrong_default_count_is_rejected(count in (0usize..10).prop_filter("matching arity", |count| *count != 3)) {
		let subject = Subject::default();
		let defaults: Vec<(String, Value)> = (0..count).map(|i| (format!("p{i}"), 0)).collect();
		let error = ParameterBinder::new(&subject, weigh, defaults).err().unwrap();
		prop_assert_eq!(error, ArgumentError::ArityMismatch { expected: 3, found: count });
	}

	#[test]
	fn repeated_name_is_rejected(
		count in 1usize..6,
		first in any::<prop::sample::Index>(),
		copy in any::<prop::sample::Index>(),
	) {
		let subject = Subject::default();
		let mut names: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
		let repeated = names[first.index(count)].clone();
		names.insert(copy.index(count + 1), repeated.clone());

		let defaults: Vec<(String, Value)> = names.into_iter().map(|name| (name, 0)).collect();
		let error = ParameterBinder::new(
			&subject,
			|a: Value, b: Value, c: Value, d: Value, e: Value, f: Value| a + b + c + d + e + f,
			defaults,
		)
		.err()
		.unwrap();
		prop_assert_eq!(error, ArgumentError::DuplicateName(repeated));
	}

	#[test]
	fn empty_arguments_use_defaults(defaults in defaults()) {
		let subject = Subject::default();
		let binder = ParameterBinder::new(&subject, weigh, named(defaults)).unwrap();
		let [a, b, c] = defaults;
		prop_assert_eq!(binder.invoke(&Arguments::new()).unwrap(), weigh(a, b, c));
	}

	#[test]
	fn subset_overrides_only_named_positions(
		defaults in defaults(),
		overrides in [prop::option::of(value()), prop::option::of(value()), prop::option::of(value())],
	) {
		let subject = Subject::default();
		let binder = ParameterBinder::new(&subject, weigh, named(defaults)).unwrap();

		let mut expected = defaults;
		let mut args = Arguments::new();
		for (idx, value) in overrides.iter().enumerate() {
			if let Some(value) = value {
				expected[idx] = *value;
				args.push(NAMES[idx], *value);
			}
		}

		let [a, b, c] = expected;
		prop_assert_eq!(binder.invoke(&args).unwrap(), weigh(a, b, c));
	}

	#[test]
	fn argument_order_is_irrelevant(
		defaults in defaults(),
		values in defaults(),
		order in Just(vec![0usize, 1, 2]).prop_shuffle(),
	) {
		let subject = Subject::default();
		let binder = ParameterBinder::new(&subject, weigh, named(defaults)).unwrap();

		let declared: Arguments = named(values).into_iter().collect();
		let shuffled: Arguments = order.iter().map(|&idx| (NAMES[idx], values[idx])).collect();
		prop_assert_eq!(binder.invoke(&shuffled).unwrap(), binder.invoke(&declared).unwrap());
	}

	#[test]
	fn unknown_name_never_reaches_target(
		name in "[a-z]{1,8}".prop_filter("declared name", |name| !NAMES.contains(&name.as_str())),
		amount in value(),
		before in any::<bool>(),
	) {
		let subject = Subject::default();
		let calls = Cell::new(0);
		let binder = ParameterBinder::new(
			&subject,
			|a: Value, b: Value, c: Value| {
				calls.set(calls.get() + 1);
				weigh(a, b, c)
			},
			named([0, 0, 0]),
		)
		.unwrap();

		let mut args = Arguments::new();
		if before {
			args.push("a", amount);
		}
		args.push(name.clone(), amount);
		if !before {
			args.push("c", amount);
		}

		let error = binder.invoke(&args).unwrap_err();
		prop_assert_eq!(error.argument(), Some(&ArgumentError::UnknownArgument(name)));
		prop_assert_eq!(calls.get(), 0);
	}

	#[test]
	fn unregistered_command_is_a_lookup_error(
		name in "[a-z_]{1,12}".prop_filter("registered name", |name| !["add", "mul", "div"].contains(&name.as_str())),
	) {
		let subject = Subject::default();
		let registry = registry(&subject);
		let error = registry.execute(&name, &Arguments::new()).unwrap_err();
		prop_assert_eq!(error.lookup(), Some(&LookupError::UnknownCommand(name)));
		prop_assert_eq!(subject.calls(), 0);
	}
}
