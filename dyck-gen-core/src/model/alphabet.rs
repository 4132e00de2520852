use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DyckError, Result};

/// Ordered mapping from opening symbols to their matching closing symbols.
///
/// The order of the pairs is the order in which they were given. Uniform
/// choice of an opening symbol indexes this order, so it is part of what
/// makes a seeded run reproducible.
///
/// # Invariants
/// - At least one pair
/// - Opening symbols are pairwise distinct
/// - No opening symbol equals its own closing symbol
/// - No closing symbol is also an opening symbol
///
/// Deserializes from a list of two-element arrays, e.g.
/// `[["(", ")"], ["[", "]"]]`, and is validated again on load.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct BracketAlphabet {
	pairs: Vec<(String, String)>,
}

impl BracketAlphabet {
	/// Builds an alphabet from `(opening, closing)` pairs.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if the list is empty, if an opening
	/// symbol equals its closing symbol, if two opening symbols collide, or
	/// if a closing symbol is also used as an opening symbol.
	pub fn new<I, O, C>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (O, C)>,
		O: Into<String>,
		C: Into<String>,
	{
		let pairs: Vec<(String, String)> = pairs
			.into_iter()
			.map(|(open, close)| (open.into(), close.into()))
			.collect();

		if pairs.is_empty() {
			return Err(DyckError::invalid("bracket alphabet is empty"));
		}

		let mut seen = HashSet::with_capacity(pairs.len());
		for (open, close) in &pairs {
			if open == close {
				return Err(DyckError::invalid(format!(
					"opening symbol {open:?} equals its closing symbol"
				)));
			}
			if !seen.insert(open.as_str()) {
				return Err(DyckError::invalid(format!(
					"opening symbol {open:?} appears more than once"
				)));
			}
		}
		// Words are only readable back if no closing symbol doubles as an opening one
		if let Some((open, close)) = pairs.iter().find(|(_, close)| seen.contains(close.as_str())) {
			return Err(DyckError::invalid(format!(
				"closing symbol {close:?} of {open:?} is also an opening symbol"
			)));
		}

		Ok(Self { pairs })
	}

	/// Builds the default family of `kinds` bracket pairs.
	///
	/// - `1` gives the single pair `("(", ")")`
	/// - `n > 1` gives `("(0", "0)")`, `("(1", "1)")`, ... `("(n-1", "n-1)")`
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `kinds` is zero.
	pub fn indexed(kinds: usize) -> Result<Self> {
		match kinds {
			0 => Err(DyckError::invalid("number of bracket kinds must be at least 1")),
			1 => Self::new([("(", ")")]),
			_ => Self::new((0..kinds).map(|i| (format!("({i}"), format!("{i})")))),
		}
	}

	/// Number of bracket kinds.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Always `false`: an alphabet holds at least one pair.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Iterates over the opening symbols in order.
	pub fn openings(&self) -> impl Iterator<Item = &str> {
		self.pairs.iter().map(|(open, _)| open.as_str())
	}

	/// Iterates over `(opening, closing)` pairs in order.
	pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(open, close)| (open.as_str(), close.as_str()))
	}

	/// Returns the closing symbol matching `opening`, if it belongs to the alphabet.
	pub fn closing_for(&self, opening: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(open, _)| open == opening)
			.map(|(_, close)| close.as_str())
	}

	pub(crate) fn opening(&self, index: usize) -> &str {
		&self.pairs[index].0
	}

	pub(crate) fn closing(&self, index: usize) -> &str {
		&self.pairs[index].1
	}

	/// Recognises a sequence of symbols as an element of the Dyck language
	/// over this alphabet.
	///
	/// Every closing symbol must match the most recent unmatched opening
	/// symbol. Concatenations of balanced words are accepted, the empty
	/// sequence is not.
	pub fn recognize<I, S>(&self, symbols: I) -> bool
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		matches!(self.scan(symbols), Some(returns) if returns > 0)
	}

	/// Like `recognize`, but the nesting depth may return to zero only at the
	/// very end. Every word produced by the generator has this shape.
	pub fn recognize_irreducible<I, S>(&self, symbols: I) -> bool
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.scan(symbols) == Some(1)
	}

	/// Runs the stack discipline over `symbols`.
	///
	/// Returns how many times the stack went back to empty, or `None` on an
	/// unknown symbol, a mismatch, an underflow or a non-empty final stack.
	fn scan<I, S>(&self, symbols: I) -> Option<usize>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut stack: Vec<usize> = Vec::new();
		let mut returns = 0;

		for symbol in symbols {
			let symbol = symbol.as_ref();
			if let Some(index) = self.pairs.iter().position(|(open, _)| open == symbol) {
				stack.push(index);
				continue;
			}
			let top = stack.pop()?;
			if self.closing(top) != symbol {
				return None;
			}
			if stack.is_empty() {
				returns += 1;
			}
		}

		stack.is_empty().then_some(returns)
	}
}

impl TryFrom<Vec<(String, String)>> for BracketAlphabet {
	type Error = DyckError;

	fn try_from(pairs: Vec<(String, String)>) -> Result<Self> {
		Self::new(pairs)
	}
}

impl From<BracketAlphabet> for Vec<(String, String)> {
	fn from(alphabet: BracketAlphabet) -> Self {
		alphabet.pairs
	}
}

impl Default for BracketAlphabet {
	/// The single pair `("(", ")")`.
	fn default() -> Self {
		Self { pairs: vec![("(".to_owned(), ")".to_owned())] }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn indexed_single_kind_uses_plain_parentheses() {
		let alphabet = BracketAlphabet::indexed(1).unwrap();
		assert_eq!(alphabet.pairs().collect::<Vec<_>>(), vec![("(", ")")]);
		assert_eq!(alphabet, BracketAlphabet::default());
	}

	#[test]
	fn indexed_many_kinds_are_labelled() {
		let alphabet = BracketAlphabet::indexed(3).unwrap();
		assert_eq!(
			alphabet.pairs().collect::<Vec<_>>(),
			vec![("(0", "0)"), ("(1", "1)"), ("(2", "2)")]
		);
		assert_eq!(alphabet.closing_for("(1"), Some("1)"));
		assert_eq!(alphabet.closing_for("1)"), None);
	}

	#[test]
	fn zero_kinds_is_rejected() {
		assert!(matches!(
			BracketAlphabet::indexed(0),
			Err(DyckError::InvalidConfiguration(_))
		));
	}

	#[test]
	fn invalid_pairs_are_rejected() {
		let empty: Vec<(&str, &str)> = Vec::new();
		assert!(BracketAlphabet::new(empty).is_err());
		assert!(BracketAlphabet::new([("|", "|")]).is_err());
		assert!(BracketAlphabet::new([("(", ")"), ("(", "]")]).is_err());
		assert!(BracketAlphabet::new([("(", ")"), ("[", "]")]).is_ok());
	}

	#[test]
	fn closing_symbol_cannot_open_another_pair() {
		assert!(matches!(
			BracketAlphabet::new([("a", "b"), ("b", "a")]),
			Err(DyckError::InvalidConfiguration(_))
		));
		assert!(BracketAlphabet::new([("(", ")"), (")", "]")]).is_err());
		// Closing symbols may repeat across pairs
		assert!(BracketAlphabet::new([("(", ")"), ("[", ")")]).is_ok());
	}

	#[test]
	fn recognize_follows_stack_discipline() {
		let alphabet = BracketAlphabet::new([("(", ")"), ("[", "]")]).unwrap();

		assert!(alphabet.recognize(["(", "[", "]", ")"]));
		assert!(alphabet.recognize(["(", ")", "[", "]"]));
		assert!(!alphabet.recognize(["(", "[", ")", "]"]));
		assert!(!alphabet.recognize([")", "("]));
		assert!(!alphabet.recognize(["(", "("]));
		assert!(!alphabet.recognize(["(", "x", ")"]));
		assert!(!alphabet.recognize(Vec::<&str>::new()));
	}

	#[test]
	fn irreducible_words_close_only_at_the_end() {
		let alphabet = BracketAlphabet::default();

		assert!(alphabet.recognize_irreducible(["(", "(", ")", ")"]));
		assert!(!alphabet.recognize_irreducible(["(", ")", "(", ")"]));
	}

	#[test]
	fn deserialization_validates_pairs() {
		let alphabet: BracketAlphabet = serde_json::from_str(r#"[["<", ">"], ["{", "}"]]"#).unwrap();
		assert_eq!(alphabet.len(), 2);
		assert_eq!(alphabet.openings().collect::<Vec<_>>(), vec!["<", "{"]);

		let duplicated = serde_json::from_str::<BracketAlphabet>(r#"[["<", ">"], ["<", "}"]]"#);
		assert!(duplicated.is_err());
	}
}
