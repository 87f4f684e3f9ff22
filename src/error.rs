//! Error channel for the recoverable failures of the library.
//!
//! Fatal conditions (division by zero, scratch arena overflow, destination
//! sizing violations) do not go through this type; they panic with a
//! diagnostic.

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
	/// The input contains no digits, or a character that is not a valid digit
	/// in the requested base.
	ParseError,

	/// The requested base is outside `2..=36`.
	InvalidBase,
}

impl Error {
	pub fn new(kind: ErrorKind, message: &'static str) -> Self {
		Self { kind, message }
	}

	pub fn new_parse_error(message: &'static str) -> Self {
		Self::new(ErrorKind::ParseError, message)
	}

	pub fn new_invalid_base(message: &'static str) -> Self {
		Self::new(ErrorKind::InvalidBase, message)
	}
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for Error {}

/// Turns a failed check into an `Err` without constructing the error on the
/// success path.
#[inline]
#[must_use]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what {
		Ok(())
	} else {
		Err(err())
	}
}
