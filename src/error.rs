/*!
# Commandeer: Errors.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Parse Error.
///
/// Everything that can go wrong at definition time or during a parse. These
/// are never raised as panics; the dispatcher reports them through the
/// [`Logger`](crate::Logger) collaborator — warnings via
/// [`Logger::warn`](crate::Logger::warn), everything else via
/// [`Logger::error`](crate::Logger::error) — and skips the affected work.
pub enum ParseError {
	#[error("invalid specification: {0}")]
	/// # Malformed Definition.
	///
	/// A flag/argument specification string did not match the grammar. The
	/// definition call becomes a no-op.
	Grammar(String),

	#[error("option {0} requires a value, but none was supplied")]
	/// # Missing Value.
	///
	/// A value-requiring flag had no usable token to consume. Fatal for the
	/// current node.
	MissingValue(String),

	#[error("option {0} expects at least one value, but collected zero")]
	/// # Invalid Value.
	///
	/// A multi-value flag finished its greedy sweep empty-handed. Fatal for
	/// the current node.
	InvalidValue(String),

	#[error("unknown option: {0}")]
	/// # Unknown Flag.
	///
	/// A flag-shaped token matched no declared option. The token is dropped
	/// and parsing continues.
	UnknownFlag(String),

	#[error("unknown identifier: {0}")]
	/// # Unknown Command.
	///
	/// A bare identifier matched no sub-command. The token falls through to
	/// positional handling and parsing continues.
	UnknownCommand(String),

	#[error("argument {0} is required, but no value was supplied")]
	/// # Missing Required Argument.
	///
	/// After the token stream was exhausted, a required positional had
	/// nothing bound to it. The action is not invoked.
	MissingArgument(String),
}

impl ParseError {
	#[must_use]
	/// # Warning?
	///
	/// Unknown flags and identifiers are survivable; everything else aborts
	/// the current node's parse.
	pub const fn is_warning(&self) -> bool {
		matches!(self, Self::UnknownFlag(_) | Self::UnknownCommand(_))
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_severity() {
		assert!(ParseError::UnknownFlag("x".to_owned()).is_warning());
		assert!(ParseError::UnknownCommand("x".to_owned()).is_warning());
		assert!(! ParseError::Grammar("x".to_owned()).is_warning());
		assert!(! ParseError::MissingValue("x".to_owned()).is_warning());
		assert!(! ParseError::InvalidValue("x".to_owned()).is_warning());
		assert!(! ParseError::MissingArgument("x".to_owned()).is_warning());
	}

	#[test]
	fn t_display() {
		assert_eq!(
			ParseError::UnknownCommand("oops".to_owned()).to_string(),
			"unknown identifier: oops",
		);
		assert_eq!(
			ParseError::MissingValue("outDir".to_owned()).to_string(),
			"option outDir requires a value, but none was supplied",
		);
	}
}
