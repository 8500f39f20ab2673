use crate::{Arguments, Target};
use rdispatch_core::{ArgumentError, DispatchResult, Parameters, Value};
use tracing::{debug, trace};

/// Binds a fixed-arity target to a borrowed receiver and a named default for every parameter.
///
/// The receiver is never owned. The `'r` lifetime ties every binder, and every registry entry
/// built from it, to the receiver, so the receiver must outlive both.
pub struct ParameterBinder<'r, R: ?Sized> {
	receiver: &'r R,
	target: Box<dyn Fn(&R, Vec<Value>) -> DispatchResult<Value> + 'r>,
	parameters: Parameters,
}

impl<'r, R: ?Sized> ParameterBinder<'r, R> {
	/// Creates a binder, assigning positions to `defaults` in the order given.
	///
	/// ```
	/// use rdispatch_runtime::{args, ParameterBinder};
	///
	/// struct Subject;
	///
	/// impl Subject {
	/// 	fn plus(&self, a: i32, b: i32) -> i32 {
	/// 		a + b
	/// 	}
	/// }
	///
	/// let subject = Subject;
	/// let binder = ParameterBinder::new(&subject, Subject::plus, [("a", 10), ("b", 20)]).unwrap();
	/// assert_eq!(binder.invoke(&args! { a: 5 }).unwrap(), 25);
	/// ```
	pub fn new<F, M, N, I>(
		receiver: &'r R,
		target: F,
		defaults: I,
	) -> Result<ParameterBinder<'r, R>, ArgumentError>
	where
		F: Target<R, M> + 'r,
		M: 'r,
		N: Into<String>,
		I: IntoIterator<Item = (N, Value)>,
	{
		let parameters = Parameters::from_defaults(defaults)?;
		if parameters.len() != F::ARITY {
			return Err(ArgumentError::ArityMismatch {
				expected: F::ARITY,
				found: parameters.len(),
			});
		}

		debug!(target: "bind", "Bound target with {} parameters", F::ARITY);
		Ok(ParameterBinder {
			receiver,
			target: Box::new(move |receiver: &R, values: Vec<Value>| {
				target.apply(receiver, values)
			}),
			parameters,
		})
	}

	/// Layers `args` over the defaults and calls the target.
	///
	/// Every name is resolved before the target runs, so an unknown name never reaches it.
	pub fn invoke(&self, args: &Arguments) -> DispatchResult<Value> {
		let mut values = self.parameters.defaults().to_vec();
		for (name, value) in args.iter() {
			let idx = self
				.parameters
				.position(name)
				.ok_or_else(|| ArgumentError::UnknownArgument(name.to_string()))?;
			values[idx] = value;
		}

		trace!(target: "bind", "Invoking with {values:?}");
		(self.target)(self.receiver, values)
	}

	pub fn arity(&self) -> usize {
		self.parameters.len()
	}

	pub fn defaults(&self) -> &[Value] {
		self.parameters.defaults()
	}

	pub fn receiver(&self) -> &'r R {
		self.receiver
	}
}
