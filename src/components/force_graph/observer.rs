//! Multi-subscriber callback registry.

/// Token returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// A list of handlers notified synchronously, in subscription order.
pub struct Observers<T: ?Sized> {
	next_id: u64,
	handlers: Vec<(Subscription, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Default for Observers<T> {
	fn default() -> Self {
		Self {
			next_id: 0,
			handlers: Vec::new(),
		}
	}
}

impl<T: ?Sized> Observers<T> {
	/// Register a handler.
	pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) -> Subscription {
		let token = Subscription(self.next_id);
		self.next_id += 1;
		self.handlers.push((token, Box::new(handler)));
		token
	}

	/// Remove a handler. Returns `false` if it was already gone.
	pub fn unsubscribe(&mut self, token: Subscription) -> bool {
		let before = self.handlers.len();
		self.handlers.retain(|(t, _)| *t != token);
		self.handlers.len() != before
	}

	/// Number of registered handlers.
	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	/// Whether no handler is registered.
	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}

	/// Call every handler with `value`.
	pub fn emit(&mut self, value: &T) {
		for (_, handler) in &mut self.handlers {
			handler(value);
		}
	}
}
