use crate::{ArgumentError, Value};
use ahash::{HashMap, HashMapExt};
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Ordered parameter descriptor table.
///
/// Positions are assigned strictly in insertion order, the map is only used for lookup.
#[derive(Clone, Debug)]
pub struct Parameters {
	lookup: HashMap<String, usize>,
	defaults: Vec<Value>,
}

impl Parameters {
	/// Builds the table in one scan, rejecting the first repeated name.
	pub fn from_defaults<N, I>(defaults: I) -> Result<Parameters, ArgumentError>
	where
		N: Into<String>,
		I: IntoIterator<Item = (N, Value)>,
	{
		let defaults = defaults.into_iter();
		let (lower, _) = defaults.size_hint();
		let mut parameters = Parameters {
			lookup: HashMap::with_capacity(lower),
			defaults: Vec::with_capacity(lower),
		};
		for (name, value) in defaults {
			parameters.insert(name.into(), value)?;
		}
		Ok(parameters)
	}

	pub fn insert(&mut self, name: String, default: Value) -> Result<usize, ArgumentError> {
		let idx = self.defaults.len();
		match self.lookup.entry(name) {
			Entry::Occupied(entry) => Err(ArgumentError::DuplicateName(entry.key().clone())),
			Entry::Vacant(entry) => {
				entry.insert(idx);
				self.defaults.push(default);
				Ok(idx)
			}
		}
	}

	pub fn position<Q: ?Sized>(&self, name: &Q) -> Option<usize>
	where
		String: Borrow<Q>,
		Q: Hash + Eq,
	{
		self.lookup.get(name).copied()
	}

	pub fn defaults(&self) -> &[Value] {
		self.defaults.as_slice()
	}

	pub fn len(&self) -> usize {
		self.defaults.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defaults.is_empty()
	}
}
