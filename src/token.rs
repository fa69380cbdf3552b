/*!
# Commandeer: Token Classification.
*/



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Raw Token Class.
///
/// The dispatcher runs every raw token through [`Token::classify`] and
/// routes on the result. Exactly one class is assigned per token, in this
/// priority order:
///
/// * A dash followed by nothing but ASCII letters is a [`Token::Cluster`] of short aliases (`-d`, `-dp`). A lone short flag is simply a one-letter cluster.
/// * `--name`, `--name=value`, and `-x=value` are [`Token::Flag`]s; an attached value must be non-empty, so `--name=` is *not* a flag.
/// * A bare ASCII letter followed by alphanumerics is an [`Token::Ident`], a candidate sub-command name.
/// * Everything else — empty tokens included — is a [`Token::Word`], destined to be a positional value.
///
/// Note that `-123` contains no letters after the dash, so negative numbers
/// classify as [`Token::Word`] and pass freely as values.
pub enum Token<'a> {
	/// # Combined Short Aliases.
	Cluster(&'a str),

	/// # Long or Short Flag.
	Flag {
		/// # Key, without dashes.
		key: &'a str,

		/// # Attached (`=`) value, if any.
		value: Option<&'a str>,
	},

	/// # Bare Identifier.
	Ident(&'a str),

	/// # Anything Else.
	Word,
}

impl<'a> Token<'a> {
	#[must_use]
	/// # Classify a Raw Token.
	///
	/// ## Examples
	///
	/// ```
	/// use commandeer::Token;
	///
	/// assert_eq!(Token::classify("-dp"), Token::Cluster("dp"));
	/// assert_eq!(
	///     Token::classify("--out=dir"),
	///     Token::Flag { key: "out", value: Some("dir") },
	/// );
	/// assert_eq!(Token::classify("add"), Token::Ident("add"));
	/// assert_eq!(Token::classify("-12"), Token::Word);
	/// ```
	pub fn classify(raw: &'a str) -> Self {
		match raw.as_bytes() {
			[b'-', b'-', rest @ ..] => Self::classify_long(raw, rest),
			[b'-', rest @ ..] if ! rest.is_empty() => Self::classify_short(raw, rest),
			[b'a'..=b'z' | b'A'..=b'Z', rest @ ..] if alphanumeric(rest) => Self::Ident(raw),
			_ => Self::Word,
		}
	}

	#[must_use]
	/// # Flag-Shaped?
	///
	/// `true` for clusters and flags. The dispatcher uses this to stop
	/// greedy value consumption.
	pub fn is_flag_like(raw: &str) -> bool {
		matches!(Token::classify(raw), Token::Cluster(_) | Token::Flag { .. })
	}

	/// # Classify After `--`.
	fn classify_long(raw: &'a str, rest: &[u8]) -> Self {
		if let Some(eq) = rest.iter().position(|&b| b == b'=') {
			let (name, value) = (&rest[..eq], &rest[eq + 1..]);
			if long_name(name) && ! value.is_empty() {
				return Self::Flag {
					key: &raw[2..2 + eq],
					value: Some(&raw[2 + eq + 1..]),
				};
			}
		}
		else if long_name(rest) {
			return Self::Flag { key: &raw[2..], value: None };
		}

		Self::Word
	}

	/// # Classify After a Single `-`.
	fn classify_short(raw: &'a str, rest: &[u8]) -> Self {
		if letters(rest) { return Self::Cluster(&raw[1..]); }

		if let [a, b'=', value @ ..] = rest {
			if a.is_ascii_alphabetic() && ! value.is_empty() {
				return Self::Flag {
					key: &raw[1..2],
					value: Some(&raw[3..]),
				};
			}
		}

		Self::Word
	}
}



/// # Valid Long Flag Name?
///
/// One or more ASCII letters and dashes.
const fn long_name(mut bytes: &[u8]) -> bool {
	if bytes.is_empty() { return false; }
	while let [b'a'..=b'z' | b'A'..=b'Z' | b'-', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}

/// # All ASCII Letters?
const fn letters(mut bytes: &[u8]) -> bool {
	if bytes.is_empty() { return false; }
	while let [b'a'..=b'z' | b'A'..=b'Z', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}

/// # All ASCII Alphanumeric?
///
/// Empty counts; this validates the tail of an identifier.
const fn alphanumeric(mut bytes: &[u8]) -> bool {
	while let [b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}
