use rdispatch_core::{ArgumentError, DispatchError, DispatchResult, Value};
use std::marker::PhantomData;

/// Converts what a target returns into the uniform dispatch result.
pub trait Returns {
	fn into_result(self) -> DispatchResult<Value>;
}

impl Returns for Value {
	fn into_result(self) -> DispatchResult<Value> {
		Ok(self)
	}
}

impl<E: Into<eyre::Report>> Returns for Result<Value, E> {
	fn into_result(self) -> DispatchResult<Value> {
		self.map_err(|error| DispatchError::Target(error.into()))
	}
}

/// Marker for targets called as `f(&receiver, v0, v1, ..)`.
pub struct WithReceiver<const N: usize, O>(PhantomData<fn() -> O>);

/// Marker for targets called as `f(v0, v1, ..)`, without the receiver.
pub struct Free<const N: usize, O>(PhantomData<fn() -> O>);

/// A fixed-arity callable that can be driven with a positional value vector.
///
/// `M` only keeps the receiver-taking and receiver-free impls apart, callers never name it.
pub trait Target<R: ?Sized, M> {
	const ARITY: usize;

	fn apply(&self, receiver: &R, values: Vec<Value>) -> DispatchResult<Value>;
}

fn positional<const N: usize>(values: Vec<Value>) -> Result<[Value; N], ArgumentError> {
	values
		.try_into()
		.map_err(|values: Vec<Value>| ArgumentError::ArityMismatch {
			expected: N,
			found: values.len(),
		})
}

// Lets the impl macro repeat `Value` once per parameter ident.
macro_rules! value {
	($V:ident) => {
		Value
	};
}

macro_rules! impl_target {
	($N:literal; $($V:ident),*) => {
		impl<R: ?Sized, F, O> Target<R, WithReceiver<$N, O>> for F
		where
			F: Fn(&R, $(value!($V)),*) -> O,
			O: Returns,
		{
			const ARITY: usize = $N;

			#[allow(non_snake_case)]
			fn apply(&self, receiver: &R, values: Vec<Value>) -> DispatchResult<Value> {
				let [$($V),*] = positional::<$N>(values)?;
				self(receiver, $($V),*).into_result()
			}
		}

		impl<R: ?Sized, F, O> Target<R, Free<$N, O>> for F
		where
			F: Fn($(value!($V)),*) -> O,
			O: Returns,
		{
			const ARITY: usize = $N;

			#[allow(non_snake_case)]
			fn apply(&self, _: &R, values: Vec<Value>) -> DispatchResult<Value> {
				let [$($V),*] = positional::<$N>(values)?;
				self($($V),*).into_result()
			}
		}
	};
}

impl_target!(0;);
impl_target!(1; V0);
impl_target!(2; V0, V1);
impl_target!(3; V0, V1, V2);
impl_target!(4; V0, V1, V2, V3);
impl_target!(5; V0, V1, V2, V3, V4);
impl_target!(6; V0, V1, V2, V3, V4, V5);
