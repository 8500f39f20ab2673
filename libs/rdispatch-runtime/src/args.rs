use rdispatch_core::Value;

/// A sparse set of named argument overrides.
///
/// Pairs are applied in order, so a name given twice resolves to its last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Arguments {
	values: Vec<(String, Value)>,
}

impl Arguments {
	pub fn new() -> Arguments {
		Arguments { values: vec![] }
	}

	pub fn with(mut self, name: impl Into<String>, value: Value) -> Arguments {
		self.push(name, value);
		self
	}

	pub fn push(&mut self, name: impl Into<String>, value: Value) {
		self.values.push((name.into(), value));
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
		self.values.iter().map(|(name, value)| (name.as_str(), *value))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl<N: Into<String>> FromIterator<(N, Value)> for Arguments {
	fn from_iter<T: IntoIterator<Item = (N, Value)>>(iter: T) -> Self {
		Arguments {
			values: iter
				.into_iter()
				.map(|(name, value)| (name.into(), value))
				.collect(),
		}
	}
}

impl<N: Into<String>, const L: usize> From<[(N, Value); L]> for Arguments {
	fn from(values: [(N, Value); L]) -> Self {
		values.into_iter().collect()
	}
}

impl<N: Into<String>> From<Vec<(N, Value)>> for Arguments {
	fn from(values: Vec<(N, Value)>) -> Self {
		values.into_iter().collect()
	}
}

/// Builds an [`Arguments`] set from `name: value` pairs.
///
/// ```
/// use rdispatch_runtime::args;
///
/// let args = args! { a: 4, b: 5 };
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
	() => {
		$crate::Arguments::new()
	};
	($($NAME:ident: $VALUE:expr),+ $(,)?) => {
		$crate::Arguments::new()
			$(.with(stringify!($NAME), $VALUE))+
	};
}
