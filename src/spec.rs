/*!
# Commandeer: Option and Argument Definitions.
*/

use crate::{
	ParseError,
	Value,
};



#[derive(Debug, Clone, PartialEq)]
/// # Option Definition.
///
/// An immutable named-flag definition, compiled once — at definition time —
/// from a compact specification string so the parsing loop never has to
/// re-check grammar. See [`OptionSpec::create`] for the accepted shapes.
pub struct OptionSpec {
	/// # Canonical Long Name.
	///
	/// Used as the options-map key and in help text. For alias-only
	/// definitions this is the alias letter.
	pub(crate) name: String,

	/// # Short Alias.
	pub(crate) alias: Option<char>,

	/// # Value Label.
	///
	/// Shown in help output. `None` means the option is a pure presence
	/// flag and never carries a value.
	pub(crate) value_name: Option<String>,

	/// # Greedy Multi-Value?
	pub(crate) multi_value: bool,

	/// # Value Must Follow When Present?
	pub(crate) value_required: bool,

	/// # Description.
	pub(crate) description: String,

	/// # Default Value.
	pub(crate) default_value: Value,
}

impl OptionSpec {
	/// # Compile a Flag Specification.
	///
	/// Accepted shapes, with whitespace and/or a comma between the alias and
	/// the long form:
	///
	/// * `-d --done`
	/// * `-o --outDir [dir]` / `-o --outDir <dir>`
	/// * `--files <names...>` (long-only; `...` marks multi-value)
	/// * `-d`, `-o <dir>` (alias-only; the alias doubles as the name)
	///
	/// An alias is exactly one ASCII letter; a long name is one or more
	/// ASCII letters and dashes; a value label is one or more ASCII letters.
	/// Angle brackets make the value required; square brackets declare the
	/// label without requiring a value.
	///
	/// The description and default value start out empty; the command
	/// builder fills them in.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::Grammar`] if the string matches none of the
	/// above.
	pub fn create(flag: &str) -> Result<Self, ParseError> {
		let mut alias: Option<char> = None;
		let mut name: Option<&str> = None;
		let mut value: Option<(String, bool, bool)> = None;

		for piece in flag.split([' ', '\t', ',']).filter(|p| ! p.is_empty()) {
			if let Some(rest) = piece.strip_prefix("--") {
				if name.is_some() || value.is_some() || ! valid_long_name(rest.as_bytes()) {
					return Err(ParseError::Grammar(flag.trim().to_owned()));
				}
				name = Some(rest);
			}
			else if let Some(rest) = piece.strip_prefix('-') {
				let mut chars = rest.chars();
				match (chars.next(), chars.next()) {
					(Some(a), None) if a.is_ascii_alphabetic() && alias.is_none() && name.is_none() && value.is_none() => {
						alias = Some(a);
					},
					_ => return Err(ParseError::Grammar(flag.trim().to_owned())),
				}
			}
			else {
				if value.is_some() || (alias.is_none() && name.is_none()) {
					return Err(ParseError::Grammar(flag.trim().to_owned()));
				}
				let (label, required, multi) = placeholder(piece)
					.ok_or_else(|| ParseError::Grammar(flag.trim().to_owned()))?;
				if ! valid_label(label.as_bytes()) {
					return Err(ParseError::Grammar(flag.trim().to_owned()));
				}
				value = Some((label.to_owned(), required, multi));
			}
		}

		let name: String = match (name, alias) {
			(Some(n), _) => n.to_owned(),
			(None, Some(a)) => a.to_string(),
			(None, None) => return Err(ParseError::Grammar(flag.trim().to_owned())),
		};

		let (value_name, value_required, multi_value) = match value {
			Some((label, required, multi)) => (Some(label), required, multi),
			None => (None, false, false),
		};

		Ok(Self {
			name,
			alias,
			value_name,
			multi_value,
			value_required,
			description: String::new(),
			default_value: Value::None,
		})
	}
}

impl OptionSpec {
	#[must_use]
	/// # Canonical Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Short Alias.
	pub const fn alias(&self) -> Option<char> { self.alias }

	#[must_use]
	/// # Value Label.
	pub fn value_name(&self) -> Option<&str> { self.value_name.as_deref() }

	#[must_use]
	/// # Greedy Multi-Value?
	pub const fn multi_value(&self) -> bool { self.multi_value }

	#[must_use]
	/// # Value Required?
	pub const fn value_required(&self) -> bool { self.value_required }

	#[must_use]
	/// # Description.
	pub fn description(&self) -> &str { &self.description }

	#[must_use]
	/// # Default Value.
	pub const fn default_value(&self) -> &Value { &self.default_value }
}



#[derive(Debug, Clone, PartialEq)]
/// # Positional Argument Definition.
///
/// Positional order within a command is significant and fixed at definition
/// time; the declarations name (and require) leading positions, they do not
/// cap how many positional values a parse may collect.
pub struct ArgumentSpec {
	/// # Name.
	pub(crate) name: String,

	/// # Consumes All Trailing Tokens?
	pub(crate) multi_value: bool,

	/// # Required?
	pub(crate) required: bool,

	/// # Description.
	pub(crate) description: String,

	/// # Default Value.
	pub(crate) default_value: Value,
}

impl ArgumentSpec {
	/// # Compile an Argument Declaration.
	///
	/// Accepted shapes: `<name>`, `<name...>`, `[name]`, `[name...]` —
	/// angle brackets for required, square for optional, trailing `...` for
	/// multi-value. The name is an ASCII letter followed by one or more
	/// alphanumerics.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::Grammar`] if the string matches none of the
	/// above.
	pub fn create(decl: &str) -> Result<Self, ParseError> {
		let trimmed = decl.trim();
		let (name, required, multi_value) = placeholder(trimmed)
			.filter(|(name, _, _)| valid_name(name.as_bytes()))
			.ok_or_else(|| ParseError::Grammar(trimmed.to_owned()))?;

		Ok(Self {
			name: name.to_owned(),
			multi_value,
			required,
			description: String::new(),
			default_value: Value::None,
		})
	}
}

impl ArgumentSpec {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Consumes All Trailing Tokens?
	pub const fn multi_value(&self) -> bool { self.multi_value }

	#[must_use]
	/// # Required?
	pub const fn required(&self) -> bool { self.required }

	#[must_use]
	/// # Description.
	pub fn description(&self) -> &str { &self.description }

	#[must_use]
	/// # Default Value.
	pub const fn default_value(&self) -> &Value { &self.default_value }
}



/// # Split a `<…>`/`[…]` Placeholder.
///
/// Returns the inner label, whether angle brackets were used, and whether
/// the label ended with `...`. Charset validation is left to the caller.
fn placeholder(piece: &str) -> Option<(&str, bool, bool)> {
	let (inner, required) = piece.strip_prefix('<')
		.and_then(|p| p.strip_suffix('>'))
		.map_or_else(
			|| piece.strip_prefix('[')
				.and_then(|p| p.strip_suffix(']'))
				.map(|p| (p, false)),
			|p| Some((p, true)),
		)?;

	let (inner, multi) = inner.strip_suffix("...")
		.map_or((inner, false), |p| (p, true));

	Some((inner, required, multi))
}

/// # Valid Long Option Name?
///
/// One or more ASCII letters and dashes.
const fn valid_long_name(mut bytes: &[u8]) -> bool {
	if bytes.is_empty() { return false; }
	while let [b'a'..=b'z' | b'A'..=b'Z' | b'-', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}

/// # Valid Value Label?
///
/// One or more ASCII letters.
const fn valid_label(mut bytes: &[u8]) -> bool {
	if bytes.is_empty() { return false; }
	while let [b'a'..=b'z' | b'A'..=b'Z', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}

/// # Valid Identifier Name?
///
/// An ASCII letter followed by one or more alphanumerics. Shared by
/// argument declarations and the compact sub-command creator.
pub(crate) const fn valid_name(mut bytes: &[u8]) -> bool {
	let [b'a'..=b'z' | b'A'..=b'Z', rest @ ..] = bytes else { return false; };
	if rest.is_empty() { return false; }
	bytes = rest;
	while let [b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}
