use thiserror::Error;

pub type DispatchResult<V> = Result<V, DispatchError>;

/// Malformed argument names or counts, either while binding or while invoking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
	#[error("arity mismatch: target takes {expected} parameters, but {found} defaults were given")]
	ArityMismatch { expected: usize, found: usize },
	#[error("duplicate name: parameter \"{0}\" is declared more than once")]
	DuplicateName(String),
	#[error("unknown argument: \"{0}\"")]
	UnknownArgument(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
	#[error("unknown command: \"{0}\"")]
	UnknownCommand(String),
	#[error("command \"{0}\" is already registered")]
	AlreadyRegistered(String),
}

#[derive(Error, Debug)]
pub enum DispatchError {
	#[error(transparent)]
	Argument(#[from] ArgumentError),
	#[error(transparent)]
	Lookup(#[from] LookupError),
	/// A failure raised by the bound target itself, passed through untouched.
	#[error("{0}")]
	Target(eyre::Report),
}

impl DispatchError {
	pub fn argument(&self) -> Option<&ArgumentError> {
		match self {
			DispatchError::Argument(error) => Some(error),
			_ => None,
		}
	}

	pub fn lookup(&self) -> Option<&LookupError> {
		match self {
			DispatchError::Lookup(error) => Some(error),
			_ => None,
		}
	}

	pub fn target(&self) -> Option<&eyre::Report> {
		match self {
			DispatchError::Target(report) => Some(report),
			_ => None,
		}
	}
}
