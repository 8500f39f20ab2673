use crate::{Arguments, ParameterBinder};
use ahash::{HashMap, HashMapExt};
use rdispatch_core::{DispatchResult, LookupError, Value};
use std::collections::hash_map::Entry;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Anything that can be driven with a named argument set.
pub trait Invoke {
	fn invoke(&self, args: &Arguments) -> DispatchResult<Value>;
}

impl<'r, R: ?Sized> Invoke for ParameterBinder<'r, R> {
	fn invoke(&self, args: &Arguments) -> DispatchResult<Value> {
		ParameterBinder::invoke(self, args)
	}
}

impl<T: Invoke + ?Sized> Invoke for &T {
	fn invoke(&self, args: &Arguments) -> DispatchResult<Value> {
		T::invoke(self, args)
	}
}

impl<T: Invoke + ?Sized> Invoke for Box<T> {
	fn invoke(&self, args: &Arguments) -> DispatchResult<Value> {
		T::invoke(self, args)
	}
}

impl<T: Invoke + ?Sized> Invoke for Rc<T> {
	fn invoke(&self, args: &Arguments) -> DispatchResult<Value> {
		T::invoke(self, args)
	}
}

type Command<'r> = Box<dyn Fn(&Arguments) -> DispatchResult<Value> + 'r>;

/// Name-keyed table of commands.
///
/// Not synchronized. Callers sharing a registry across threads must serialize access themselves.
pub struct Registry<'r> {
	commands: HashMap<String, Command<'r>>,
}

impl<'r> Registry<'r> {
	pub fn new() -> Registry<'r> {
		Registry {
			commands: HashMap::new(),
		}
	}

	fn erase<C: Invoke + 'r>(command: C) -> Command<'r> {
		Box::new(move |args: &Arguments| command.invoke(args))
	}

	/// Registers `command` under `name`, refusing to shadow an existing entry.
	pub fn register<C: Invoke + 'r>(
		&mut self,
		name: impl Into<String>,
		command: C,
	) -> Result<(), LookupError> {
		match self.commands.entry(name.into()) {
			Entry::Occupied(entry) => Err(LookupError::AlreadyRegistered(entry.key().clone())),
			Entry::Vacant(entry) => {
				debug!(target: "dispatch", "Registered command {}", entry.key());
				entry.insert(Self::erase(command));
				Ok(())
			}
		}
	}

	/// Registers `command` under `name`, overwriting any previous entry.
	///
	/// Returns `true` if an entry was replaced.
	pub fn register_or_replace<C: Invoke + 'r>(
		&mut self,
		name: impl Into<String>,
		command: C,
	) -> bool {
		let name = name.into();
		let replaced = self
			.commands
			.insert(name.clone(), Self::erase(command))
			.is_some();
		if replaced {
			warn!(target: "dispatch", "Replaced existing command {name}");
		} else {
			debug!(target: "dispatch", "Registered command {name}");
		}
		replaced
	}

	/// Forwards `args` to the command registered as `name` and returns its result unchanged.
	pub fn execute(&self, name: &str, args: &Arguments) -> DispatchResult<Value> {
		let command = self
			.commands
			.get(name)
			.ok_or_else(|| LookupError::UnknownCommand(name.to_string()))?;
		trace!(target: "dispatch", "Executing {name} with {} arguments", args.len());
		command(args)
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

impl<'r> Default for Registry<'r> {
	fn default() -> Self {
		Registry::new()
	}
}
