/*!
# Commandeer: Logging.
*/

use std::cell::RefCell;



/// # Logging Sink.
///
/// The parser never prints diagnostics on its own; everything — debug
/// chatter, warnings, errors, and the version/help output — goes through
/// this trait. One instance is shared (unowned) across every node of a
/// command tree and must tolerate repeated calls; the parser never mutates
/// it.
///
/// Each operation returns the logger itself so calls can be chained.
/// [`Logger::print`] is the only operation that needs a visible effect:
/// version and help output arrive through it. The other three are
/// diagnostic hooks an implementation is free to discard.
pub trait Logger {
	/// # Debug.
	fn debug(&self, msg: &str) -> &dyn Logger;

	/// # Warning.
	fn warn(&self, msg: &str) -> &dyn Logger;

	/// # Error.
	fn error(&self, msg: &str) -> &dyn Logger;

	/// # Print.
	fn print(&self, msg: &str) -> &dyn Logger;
}



#[derive(Debug, Clone, Copy, Default)]
/// # Standard Logger.
///
/// The default sink: diagnostics are forwarded to the [`tracing`] macros of
/// the matching level — visible only when the host application installed a
/// subscriber — while [`Logger::print`] writes straight to stdout so
/// version/help output always shows up.
pub struct StdLogger;

impl Logger for StdLogger {
	#[inline]
	fn debug(&self, msg: &str) -> &dyn Logger {
		tracing::debug!("{msg}");
		self
	}

	#[inline]
	fn warn(&self, msg: &str) -> &dyn Logger {
		tracing::warn!("{msg}");
		self
	}

	#[inline]
	fn error(&self, msg: &str) -> &dyn Logger {
		tracing::error!("{msg}");
		self
	}

	#[inline]
	fn print(&self, msg: &str) -> &dyn Logger {
		println!("{msg}");
		self
	}
}



#[derive(Debug, Clone, Copy, Default)]
/// # Silent Logger.
///
/// Discards everything, help and version output included. For embedding the
/// parser somewhere output is unwelcome.
pub struct SilentLogger;

impl Logger for SilentLogger {
	#[inline]
	fn debug(&self, _msg: &str) -> &dyn Logger { self }

	#[inline]
	fn warn(&self, _msg: &str) -> &dyn Logger { self }

	#[inline]
	fn error(&self, _msg: &str) -> &dyn Logger { self }

	#[inline]
	fn print(&self, _msg: &str) -> &dyn Logger { self }
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Log Level.
///
/// The four [`Logger`] operations, for [`MemoryLogger`] records.
pub enum Level {
	/// # Debug.
	Debug,

	/// # Warning.
	Warn,

	/// # Error.
	Error,

	/// # Print.
	Print,
}



#[derive(Debug, Default)]
/// # Capturing Logger.
///
/// Records every call along with its level instead of emitting anything.
/// Useful for tests and for callers that want to post-process the parser's
/// output.
pub struct MemoryLogger {
	/// # Recorded Lines.
	lines: RefCell<Vec<(Level, String)>>,
}

impl Logger for MemoryLogger {
	fn debug(&self, msg: &str) -> &dyn Logger { self.push(Level::Debug, msg) }

	fn warn(&self, msg: &str) -> &dyn Logger { self.push(Level::Warn, msg) }

	fn error(&self, msg: &str) -> &dyn Logger { self.push(Level::Error, msg) }

	fn print(&self, msg: &str) -> &dyn Logger { self.push(Level::Print, msg) }
}

impl MemoryLogger {
	/// # Record One Line.
	fn push(&self, level: Level, msg: &str) -> &dyn Logger {
		self.lines.borrow_mut().push((level, msg.to_owned()));
		self
	}

	#[must_use]
	/// # All Recorded Lines.
	pub fn lines(&self) -> Vec<(Level, String)> { self.lines.borrow().clone() }

	#[must_use]
	/// # Printed Lines Only.
	pub fn printed(&self) -> Vec<String> {
		self.lines.borrow()
			.iter()
			.filter_map(|(level, msg)|
				if matches!(level, Level::Print) { Some(msg.clone()) }
				else { None }
			)
			.collect()
	}

	#[must_use]
	/// # Was This Logged?
	///
	/// `true` if any recorded line of the given level contains `needle`.
	pub fn contains(&self, level: Level, needle: &str) -> bool {
		self.lines.borrow()
			.iter()
			.any(|(l, msg)| *l == level && msg.contains(needle))
	}

	/// # Forget Everything.
	pub fn clear(&self) { self.lines.borrow_mut().clear(); }
}
