/*!
# Commandeer: Values.
*/

use std::fmt;



#[derive(Debug, Clone, Default, PartialEq)]
/// # Parsed Value.
///
/// Every token that survives parsing ends up as one of these, either as a
/// positional argument or as an option value. Classification happens once,
/// at parse time, via [`Value::coerce`].
///
/// A multi-value flag or argument always yields [`Value::List`] (of scalars);
/// a single-value one never does. Coercion itself only ever produces scalars
/// (or [`Value::None`] for empty text).
pub enum Value {
	#[default]
	/// # Nothing.
	///
	/// Empty text, or a presence-only flag.
	None,

	/// # Integer.
	Int(i64),

	/// # Floating Point.
	Float(f64),

	/// # Boolean.
	Bool(bool),

	/// # Text.
	Str(String),

	/// # Sequence of Scalars.
	List(Vec<Value>),
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::None => Ok(()),
			Self::Int(n) => write!(f, "{n}"),
			Self::Float(n) => write!(f, "{n}"),
			Self::Bool(b) => write!(f, "{b}"),
			Self::Str(s) => f.write_str(s),
			Self::List(list) => {
				let mut iter = list.iter();
				if let Some(first) = iter.next() {
					write!(f, "{first}")?;
					for v in iter { write!(f, " {v}")?; }
				}
				Ok(())
			},
		}
	}
}

impl From<i64> for Value {
	#[inline]
	fn from(src: i64) -> Self { Self::Int(src) }
}

impl From<f64> for Value {
	#[inline]
	fn from(src: f64) -> Self { Self::Float(src) }
}

impl From<bool> for Value {
	#[inline]
	fn from(src: bool) -> Self { Self::Bool(src) }
}

impl From<&str> for Value {
	#[inline]
	fn from(src: &str) -> Self { Self::Str(src.to_owned()) }
}

impl From<String> for Value {
	#[inline]
	fn from(src: String) -> Self { Self::Str(src) }
}

impl From<Vec<Value>> for Value {
	#[inline]
	fn from(src: Vec<Self>) -> Self { Self::List(src) }
}

impl Value {
	#[must_use]
	/// # Coerce Text.
	///
	/// Classify and convert raw text into a typed value using a fixed
	/// priority: empty → [`Value::None`], `-?digits` → [`Value::Int`],
	/// `-?digits.digits` → [`Value::Float`], the exact literals
	/// `true`/`false` → [`Value::Bool`], anything else → [`Value::Str`] with
	/// the original text preserved verbatim.
	///
	/// The priority matters: `"123"` is always an integer and `"true"` is
	/// always a boolean; only text that matches none of the earlier patterns
	/// stays text.
	///
	/// ## Examples
	///
	/// ```
	/// use commandeer::Value;
	///
	/// assert_eq!(Value::coerce("123"), Value::Int(123));
	/// assert_eq!(Value::coerce("-4.5"), Value::Float(-4.5));
	/// assert_eq!(Value::coerce("true"), Value::Bool(true));
	/// assert_eq!(Value::coerce("Björk"), Value::Str("Björk".to_owned()));
	/// assert_eq!(Value::coerce(""), Value::None);
	/// ```
	pub fn coerce(raw: &str) -> Self {
		if raw.is_empty() { Self::None }
		else if int_like(raw.as_bytes()) {
			// Out-of-range "integers" keep their text instead of vanishing.
			raw.parse::<i64>().map_or_else(|_| Self::Str(raw.to_owned()), Self::Int)
		}
		else if float_like(raw.as_bytes()) {
			raw.parse::<f64>().map_or_else(|_| Self::Str(raw.to_owned()), Self::Float)
		}
		else if raw == "true" { Self::Bool(true) }
		else if raw == "false" { Self::Bool(false) }
		else { Self::Str(raw.to_owned()) }
	}
}

impl Value {
	#[must_use]
	/// # Is Nothing?
	pub const fn is_none(&self) -> bool { matches!(self, Self::None) }

	#[must_use]
	/// # As Integer.
	pub const fn as_int(&self) -> Option<i64> {
		if let Self::Int(n) = self { Some(*n) } else { None }
	}

	#[must_use]
	/// # As Float.
	pub const fn as_float(&self) -> Option<f64> {
		if let Self::Float(n) = self { Some(*n) } else { None }
	}

	#[must_use]
	/// # As Boolean.
	pub const fn as_bool(&self) -> Option<bool> {
		if let Self::Bool(b) = self { Some(*b) } else { None }
	}

	#[must_use]
	/// # As String Slice.
	pub fn as_str(&self) -> Option<&str> {
		if let Self::Str(s) = self { Some(s) } else { None }
	}

	#[must_use]
	/// # As Scalar Slice.
	pub fn as_list(&self) -> Option<&[Self]> {
		if let Self::List(list) = self { Some(list) } else { None }
	}
}



/// # Integer-Shaped?
///
/// An optional leading dash followed by one or more ASCII digits, nothing
/// else.
const fn int_like(mut bytes: &[u8]) -> bool {
	if let [b'-', rest @ ..] = bytes { bytes = rest; }
	if bytes.is_empty() { return false; }
	while let [b'0'..=b'9', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}

/// # Float-Shaped?
///
/// An optional leading dash, one or more digits, a dot, one or more digits.
const fn float_like(mut bytes: &[u8]) -> bool {
	if let [b'-', rest @ ..] = bytes { bytes = rest; }

	let mut digits: usize = 0;
	while let [b'0'..=b'9', rest @ ..] = bytes {
		bytes = rest;
		digits += 1;
	}
	if digits == 0 { return false; }

	let [b'.', rest @ ..] = bytes else { return false; };
	bytes = rest;

	digits = 0;
	while let [b'0'..=b'9', rest @ ..] = bytes {
		bytes = rest;
		digits += 1;
	}
	digits != 0 && bytes.is_empty()
}
