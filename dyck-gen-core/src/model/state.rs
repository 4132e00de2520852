use super::alphabet::BracketAlphabet;

/// Walk state of the word currently being generated.
///
/// A `GenerationState` holds the stack of opening brackets still waiting
/// for their closing counterpart and every symbol emitted so far.
/// It is created for one word and dropped once the word is complete.
///
/// ## Invariants
/// - Stack entries are valid indices into `alphabet`
/// - `symbols` is a prefix of a Dyck word; it is a full word exactly when
///   the stack is empty
#[derive(Debug)]
pub(crate) struct GenerationState<'a> {
	alphabet: &'a BracketAlphabet,
	/// Indices of the pending opening brackets, innermost last.
	stack: Vec<usize>,
	/// Emitted symbols, borrowed from the alphabet.
	symbols: Vec<&'a str>,
	/// Deepest nesting reached so far.
	max_depth: usize,
}

impl<'a> GenerationState<'a> {
	/// Starts a word with the opening bracket at `first`.
	pub fn new(alphabet: &'a BracketAlphabet, first: usize) -> Self {
		let mut state = Self {
			alphabet,
			stack: Vec::new(),
			symbols: Vec::new(),
			max_depth: 0,
		};
		state.open(first);
		state
	}

	/// Pushes the opening bracket at `index` and emits it.
	pub fn open(&mut self, index: usize) {
		self.stack.push(index);
		self.symbols.push(self.alphabet.opening(index));
		self.max_depth = self.max_depth.max(self.stack.len());
	}

	/// Pops the innermost opening bracket and emits its closing symbol.
	///
	/// Returns `false` and changes nothing if the stack is already empty.
	pub fn close(&mut self) -> bool {
		match self.stack.pop() {
			Some(index) => {
				self.symbols.push(self.alphabet.closing(index));
				true
			}
			None => false,
		}
	}

	pub fn is_complete(&self) -> bool {
		self.stack.is_empty()
	}

	/// Number of symbols emitted so far.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	/// Joins the emitted symbols with `delimiter`.
	pub fn into_word(self, delimiter: &str) -> String {
		self.symbols.join(delimiter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn closes_in_reverse_order_of_opening() {
		let alphabet = BracketAlphabet::new([("(", ")"), ("[", "]")]).unwrap();
		let mut state = GenerationState::new(&alphabet, 0);
		state.open(1);
		state.open(0);
		assert_eq!(state.max_depth(), 3);

		while !state.is_complete() {
			assert!(state.close());
		}
		assert!(!state.close());
		assert_eq!(state.len(), 6);
		assert_eq!(state.into_word(" "), "( [ ( ) ] )");
	}

	#[test]
	fn joins_with_any_delimiter() {
		let alphabet = BracketAlphabet::default();
		let mut state = GenerationState::new(&alphabet, 0);
		state.close();
		assert_eq!(state.into_word(""), "()");
	}
}
