/*!
# Commandeer: Command Tree.
*/

use crate::{
	ArgumentSpec,
	help,
	Logger,
	OptionSpec,
	ParseError,
	spec,
	StdLogger,
	Token,
	Value,
};
use std::{
	collections::BTreeMap,
	fmt,
	rc::Rc,
};



/// # Action Callback.
///
/// Invoked at most once per terminal parse, with the positional values in
/// declaration order and the options map keyed by canonical option name.
pub type Action = Box<dyn Fn(Vec<Value>, BTreeMap<String, Value>)>;



/// # Command Node.
///
/// One level of a command tree: a name, typed options, positional
/// arguments, child commands, and an optional action callback. The root
/// exclusively owns its entire subtree.
///
/// Nodes are assembled up front with builder-style `with_*` methods and are
/// immutable during parsing; [`Command::parse`] can therefore be called any
/// number of times on the same tree.
///
/// ## Examples
///
/// ```
/// use commandeer::{Command, Value};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let total = Rc::new(Cell::new(0_i64));
/// let seen = Rc::clone(&total);
///
/// let cmd = Command::new("adder")
///     .with_description("Add numbers together.")
///     .with_argument("<numbers...>", "The numbers to add.")
///     .with_action(move |args, _opts| {
///         seen.set(args.iter().filter_map(Value::as_int).sum());
///     });
///
/// cmd.parse(["1", "2", "3"]);
/// assert_eq!(total.get(), 6);
/// ```
pub struct Command {
	/// # Name.
	pub(crate) name: String,

	/// # Description.
	pub(crate) description: String,

	/// # Declared Options, in Order.
	pub(crate) options: Vec<OptionSpec>,

	/// # Declared Positionals, in Order.
	pub(crate) arguments: Vec<ArgumentSpec>,

	/// # Child Commands, in Order.
	pub(crate) children: Vec<Command>,

	/// # Action Callback.
	action: Option<Action>,

	/// # Version Option, Shared Down the Tree.
	pub(crate) version_opt: Rc<OptionSpec>,

	/// # Help Option, Shared Down the Tree.
	pub(crate) help_opt: Rc<OptionSpec>,

	/// # Keep Own Version Option When Adopted?
	version_overridden: bool,

	/// # Keep Own Help Option When Adopted?
	help_overridden: bool,

	/// # Verbatim Help Text Override.
	help_override: Option<String>,

	/// # Ancestor Names, Root First.
	///
	/// The non-owning back-reference to the parent chain, refreshed on
	/// adoption and read only for usage-string prefixing.
	pub(crate) path: Vec<String>,

	/// # Shared Logging Sink.
	logger: Rc<dyn Logger>,
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Command")
			.field("name", &self.name)
			.field("options", &self.options)
			.field("arguments", &self.arguments)
			.field("children", &self.children)
			.field("action", &self.action.is_some())
			.finish_non_exhaustive()
	}
}

impl Command {
	#[must_use]
	/// # New Command.
	///
	/// Every node is born with the stock `-V --version` and `-h --help`
	/// options and the standard (tracing/stdout) logger; all of these can
	/// be swapped out afterwards, and are replaced with the parent's on
	/// [`Command::with_subcommand`] unless explicitly overridden.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_owned(),
			description: String::new(),
			options: Vec::new(),
			arguments: Vec::new(),
			children: Vec::new(),
			action: None,
			version_opt: Rc::new(OptionSpec {
				name: "version".to_owned(),
				alias: Some('V'),
				value_name: None,
				multi_value: false,
				value_required: false,
				description: "print the version number.".to_owned(),
				default_value: Value::Str("0.0.0".to_owned()),
			}),
			help_opt: Rc::new(OptionSpec {
				name: "help".to_owned(),
				alias: Some('h'),
				value_name: None,
				multi_value: false,
				value_required: false,
				description: "print this help text.".to_owned(),
				default_value: Value::None,
			}),
			version_overridden: false,
			help_overridden: false,
			help_override: None,
			path: Vec::new(),
			logger: Rc::new(StdLogger),
		}
	}

	#[must_use]
	/// # With Logger.
	///
	/// Swap the logging sink for this node and every descendant. The sink
	/// is shared, not owned; the parser only ever reads it.
	pub fn with_logger(mut self, logger: Rc<dyn Logger>) -> Self {
		self.set_logger(&logger);
		self
	}

	#[must_use]
	/// # With Description.
	pub fn with_description(mut self, description: &str) -> Self {
		self.description = description.to_owned();
		self
	}

	#[must_use]
	/// # With Version String.
	///
	/// The version string lives in the version option's default-value slot,
	/// so descendants that don't set their own inherit it along with the
	/// flag itself.
	pub fn with_version(mut self, version: &str) -> Self {
		let mut opt = (*self.version_opt).clone();
		opt.default_value = Value::Str(version.to_owned());
		self.version_opt = Rc::new(opt);
		self.version_overridden = true;
		self
	}

	#[must_use]
	/// # With Version Flag.
	///
	/// Re-specify the version flag itself (e.g. `-v --vers`). The version
	/// string already set is carried over. A malformed specification is
	/// logged and ignored.
	pub fn with_version_option(mut self, flag: &str, description: &str) -> Self {
		match OptionSpec::create(flag) {
			Ok(mut opt) => {
				opt.description = description.to_owned();
				opt.default_value = self.version_opt.default_value.clone();
				self.version_opt = Rc::new(opt);
				self.version_overridden = true;
			},
			Err(e) => { self.logger.warn(&e.to_string()); },
		}
		self
	}

	#[must_use]
	/// # With Help Flag.
	///
	/// Re-specify the help flag itself. A malformed specification is logged
	/// and ignored.
	pub fn with_help_option(mut self, flag: &str, description: &str) -> Self {
		match OptionSpec::create(flag) {
			Ok(mut opt) => {
				opt.description = description.to_owned();
				self.help_opt = Rc::new(opt);
				self.help_overridden = true;
			},
			Err(e) => { self.logger.warn(&e.to_string()); },
		}
		self
	}

	#[must_use]
	/// # With Verbatim Help Text.
	///
	/// When set, [`Command::help_text`] returns this exact text instead of
	/// the composed rendering.
	pub fn with_help_text(mut self, text: &str) -> Self {
		self.help_override = Some(text.to_owned());
		self
	}

	#[must_use]
	/// # With Option.
	pub fn with_option(self, flag: &str, description: &str) -> Self {
		self.with_option_default(flag, description, Value::None)
	}

	#[must_use]
	/// # With Option and Default.
	///
	/// Define an option from a flag specification string (see
	/// [`OptionSpec::create`]). A malformed specification is logged and the
	/// call is a no-op.
	pub fn with_option_default(mut self, flag: &str, description: &str, default: Value) -> Self {
		match OptionSpec::create(flag) {
			Ok(mut opt) => {
				opt.description = description.to_owned();
				opt.default_value = default;
				self.options.push(opt);
			},
			Err(e) => { self.logger.warn(&e.to_string()); },
		}
		self
	}

	#[must_use]
	/// # With Positional Argument.
	pub fn with_argument(self, decl: &str, description: &str) -> Self {
		self.with_argument_default(decl, description, Value::None)
	}

	#[must_use]
	/// # With Positional Argument and Default.
	///
	/// Define a positional argument from a declaration string (see
	/// [`ArgumentSpec::create`]). Order of definition is binding order. A
	/// malformed declaration is logged and the call is a no-op.
	pub fn with_argument_default(mut self, decl: &str, description: &str, default: Value) -> Self {
		match ArgumentSpec::create(decl) {
			Ok(mut arg) => {
				arg.description = description.to_owned();
				arg.default_value = default;
				self.arguments.push(arg);
			},
			Err(e) => { self.logger.warn(&e.to_string()); },
		}
		self
	}

	#[must_use]
	/// # With Sub-Command.
	///
	/// Adopt a fully-built child node. The parent's logger, ancestor path,
	/// and version/help options are pushed down through the child's whole
	/// subtree — skipping version/help for nodes that explicitly set their
	/// own. A duplicate child name is logged and ignored.
	pub fn with_subcommand(mut self, mut child: Command) -> Self {
		if self.find_command(&child.name).is_some() {
			self.logger.warn(&format!("command {} already exists", child.name));
			return self;
		}

		let mut path = self.path.clone();
		path.push(self.name.clone());
		child.adopt(&self.version_opt, &self.help_opt, &self.logger, &path);
		self.children.push(child);
		self
	}

	#[must_use]
	/// # With Sub-Command, Compactly.
	///
	/// Create and adopt a child in one go from a usage string — a command
	/// name optionally followed by a single argument declaration, e.g.
	/// `add <todo...>` — then let the closure finish it off (description,
	/// options, action, …).
	///
	/// ## Examples
	///
	/// ```
	/// use commandeer::Command;
	///
	/// let cmd = Command::new("todo")
	///     .with_command("add <todo...>", "Add a new entry.", |add| add
	///         .with_option("-u --urgent", "Put it on top.")
	///         .with_action(|_args, _opts| { /* … */ })
	///     );
	/// ```
	pub fn with_command<F>(self, usage: &str, description: &str, configure: F) -> Self
	where F: FnOnce(Command) -> Command {
		let mut pieces = usage.split_whitespace();
		let name = pieces.next().unwrap_or_default();
		let arg = pieces.next();

		if ! spec::valid_name(name.as_bytes()) || pieces.next().is_some() {
			self.logger.warn(&ParseError::Grammar(usage.trim().to_owned()).to_string());
			return self;
		}

		let arg = match arg.map(ArgumentSpec::create) {
			Some(Ok(a)) => Some(a),
			Some(Err(e)) => {
				self.logger.warn(&e.to_string());
				return self;
			},
			None => None,
		};

		let mut child = Command::new(name)
			.with_logger(Rc::clone(&self.logger))
			.with_description(description);
		if let Some(a) = arg { child.arguments.push(a); }

		self.with_subcommand(configure(child))
	}

	#[must_use]
	/// # With Action.
	///
	/// Register the callback to invoke when a parse resolves to this node.
	/// Without one, the node is a no-op (usually because its children do
	/// the work).
	pub fn with_action<F>(mut self, action: F) -> Self
	where F: Fn(Vec<Value>, BTreeMap<String, Value>) + 'static {
		self.action = Some(Box::new(action));
		self
	}

	/// # Push Shared State Down a Subtree.
	///
	/// Runs on adoption: the new parent's logger, version/help options, and
	/// ancestor path replace this node's, and its own (possibly overridden)
	/// versions cascade to its children in turn.
	fn adopt(
		&mut self,
		version: &Rc<OptionSpec>,
		help: &Rc<OptionSpec>,
		logger: &Rc<dyn Logger>,
		path: &[String],
	) {
		if ! self.version_overridden { self.version_opt = Rc::clone(version); }
		if ! self.help_overridden { self.help_opt = Rc::clone(help); }
		self.logger = Rc::clone(logger);
		self.path = path.to_vec();

		let mut child_path = path.to_vec();
		child_path.push(self.name.clone());
		for child in &mut self.children {
			child.adopt(&self.version_opt, &self.help_opt, &self.logger, &child_path);
		}
	}

	/// # Set Logger, Recursively.
	fn set_logger(&mut self, logger: &Rc<dyn Logger>) {
		self.logger = Rc::clone(logger);
		for child in &mut self.children { child.set_logger(logger); }
	}
}

impl Command {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Description.
	pub fn description(&self) -> &str { &self.description }

	#[must_use]
	/// # Version String.
	pub fn version(&self) -> String {
		self.version_opt.default_value.as_str()
			.map_or_else(|| "0.0.0".to_owned(), str::to_owned)
	}

	#[must_use]
	/// # Help Text.
	///
	/// The verbatim override when one was set, the composed rendering
	/// otherwise.
	pub fn help_text(&self) -> String {
		self.help_override.clone()
			.unwrap_or_else(|| help::compose(self))
	}
}

impl Command {
	/// # Parse Environment Arguments.
	///
	/// Parse [`std::env::args_os`], skipping the first (program path)
	/// entry. Entries with invalid UTF-8 are lossily converted rather than
	/// crashing anything.
	pub fn parse_env(&self) {
		let argv: Vec<String> = std::env::args_os()
			.skip(1)
			.map(|a| a.to_string_lossy().into_owned())
			.collect();
		self.dispatch(&argv, 0);
	}

	/// # Parse Tokens.
	///
	/// Run the given tokens — the program path already excluded — through
	/// the tree. All per-invocation state is local, so the same tree can be
	/// parsed repeatedly.
	pub fn parse<I>(&self, args: I)
	where I: IntoIterator, I::Item: Into<String> {
		let argv: Vec<String> = args.into_iter().map(Into::into).collect();
		self.dispatch(&argv, 0);
	}

	/// # Dispatch.
	///
	/// The recursive parse loop: classify the current token, route it to
	/// option, sub-command, or positional handling, and recurse into a
	/// matched child — in which case this node's own collections are
	/// discarded and the child owns the rest of the stream. Fatal faults
	/// abort the node without touching the epilogue.
	fn dispatch(&self, argv: &[String], start: usize) {
		let mut cur = start;
		let mut args: Vec<Value> = Vec::new();
		let mut opts: BTreeMap<String, Value> = BTreeMap::new();

		while cur < argv.len() {
			let raw = argv[cur].as_str();
			self.logger.debug(&format!("parse token: {raw}"));

			match Token::classify(raw) {
				Token::Ident(word) => {
					if let Some(child) = self.find_command(word) {
						self.logger.debug(&format!("enter command: {word}"));
						child.dispatch(argv, cur + 1);
						return;
					}
					// No such child; keep the token as a positional.
					self.logger.warn(&ParseError::UnknownCommand(word.to_owned()).to_string());
					args.push(Value::coerce(raw));
					cur += 1;
				},
				Token::Cluster(letters) =>
					if let Err(e) = self.take_cluster(letters, argv, &mut cur, &mut opts) {
						self.logger.error(&e.to_string());
						return;
					},
				Token::Flag { key, value } =>
					if let Err(e) = self.take_flag(key, value, argv, &mut cur, &mut opts) {
						if e.is_warning() {
							self.logger.warn(&e.to_string());
							cur += 1;
						}
						else {
							self.logger.error(&e.to_string());
							return;
						}
					},
				Token::Word => {
					args.push(Value::coerce(raw));
					cur += 1;
				},
			}
		}

		self.finish(args, opts);
	}

	/// # Apply a Combined Short-Alias Cluster.
	///
	/// Every letter but the last must be a no-value option; the last one
	/// may consume following token(s) like any other flag.
	fn take_cluster(
		&self,
		letters: &str,
		argv: &[String],
		cur: &mut usize,
		opts: &mut BTreeMap<String, Value>,
	) -> Result<(), ParseError> {
		let cluster: Vec<char> = letters.chars().collect();
		let (last, head) = cluster.split_last()
			.ok_or_else(|| ParseError::UnknownFlag(letters.to_owned()))?;

		for &alias in head {
			match self.option_by_alias(alias) {
				None => { self.logger.debug(&format!("unknown option alias: {alias}")); },
				Some(opt) if opt.value_required =>
					return Err(ParseError::MissingValue(opt.name.clone())),
				Some(opt) => { opts.insert(opt.name.clone(), Value::None); },
			}
		}

		let Some(opt) = self.option_by_alias(*last) else {
			self.logger.warn(&ParseError::UnknownFlag(last.to_string()).to_string());
			*cur += 1;
			return Ok(());
		};

		if opt.value_required {
			if opt.multi_value {
				let mut list = Vec::new();
				while *cur + 1 < argv.len() {
					let next = argv[*cur + 1].as_str();
					if Token::is_flag_like(next) { break; }
					let v = Value::coerce(next);
					if v.is_none() { return Err(ParseError::InvalidValue(opt.name.clone())); }
					*cur += 1;
					list.push(v);
				}
				if list.is_empty() { return Err(ParseError::InvalidValue(opt.name.clone())); }
				opts.insert(opt.name.clone(), Value::List(list));
			}
			else {
				*cur += 1;
				let next = argv.get(*cur).map_or("", String::as_str);
				if next.is_empty() || Token::is_flag_like(next) {
					return Err(ParseError::MissingValue(opt.name.clone()));
				}
				opts.insert(opt.name.clone(), Value::coerce(next));
			}
		}
		else { opts.insert(opt.name.clone(), Value::None); }

		*cur += 1;
		Ok(())
	}

	/// # Apply a Long or Short Flag.
	///
	/// A no-value option stores the absent marker — an attached value, if
	/// any, is deliberately never coerced. A single-value option takes the
	/// attached text or the next token; a multi-value one takes the
	/// attached text or greedily sweeps up to the next flag-shaped token.
	fn take_flag(
		&self,
		key: &str,
		attached: Option<&str>,
		argv: &[String],
		cur: &mut usize,
		opts: &mut BTreeMap<String, Value>,
	) -> Result<(), ParseError> {
		let Some(opt) = self.option_by_key(key) else {
			return Err(ParseError::UnknownFlag(key.to_owned()));
		};

		if ! opt.value_required {
			opts.insert(opt.name.clone(), Value::None);
			*cur += 1;
			return Ok(());
		}

		if opt.multi_value {
			let mut list = Vec::new();
			if let Some(v) = attached { list.push(Value::coerce(v)); }
			else {
				while *cur + 1 < argv.len() {
					let next = argv[*cur + 1].as_str();
					if Token::is_flag_like(next) { break; }
					*cur += 1;
					let v = Value::coerce(next);
					if v.is_none() { continue; } // Empty tokens add nothing.
					list.push(v);
				}
			}
			if list.is_empty() { return Err(ParseError::InvalidValue(opt.name.clone())); }
			opts.insert(opt.name.clone(), Value::List(list));
		}
		else {
			let text = match attached {
				Some(v) => v,
				None => {
					*cur += 1;
					argv.get(*cur).map_or("", String::as_str)
				},
			};
			if text.is_empty() || Token::is_flag_like(text) {
				return Err(ParseError::MissingValue(opt.name.clone()));
			}
			opts.insert(opt.name.clone(), Value::coerce(text));
		}

		*cur += 1;
		Ok(())
	}

	/// # Finish a Node's Parse.
	///
	/// Version and help short-circuit everything else; then defaults are
	/// injected, required positionals validated, and the action invoked.
	fn finish(&self, mut args: Vec<Value>, mut opts: BTreeMap<String, Value>) {
		if opts.contains_key(&self.version_opt.name) {
			self.logger.print(&self.version());
			return;
		}

		if opts.contains_key(&self.help_opt.name) {
			self.logger.print(&self.help_text());
			return;
		}

		for opt in &self.options {
			if ! opt.default_value.is_none() && ! opts.contains_key(&opt.name) {
				opts.insert(opt.name.clone(), opt.default_value.clone());
			}
		}
		for arg in self.arguments.iter().skip(args.len()) {
			// Filling past a defaultless slot would shift later defaults
			// into the wrong positions.
			if arg.default_value.is_none() { break; }
			args.push(arg.default_value.clone());
		}

		for arg in &self.arguments {
			if arg.required {
				if args.is_empty() {
					self.logger.error(&ParseError::MissingArgument(arg.name.clone()).to_string());
					return;
				}
				break;
			}
		}

		if let Some(action) = &self.action { action(args, opts); }
	}

	/// # Find a Child by Name.
	fn find_command(&self, name: &str) -> Option<&Command> {
		self.children.iter().find(|c| c.name == name)
	}

	/// # Declared Options Plus Version and Help.
	fn all_options(&self) -> impl Iterator<Item = &OptionSpec> + '_ {
		self.options.iter()
			.chain(std::iter::once(self.version_opt.as_ref()))
			.chain(std::iter::once(self.help_opt.as_ref()))
	}

	/// # Find an Option by Alias.
	fn option_by_alias(&self, alias: char) -> Option<&OptionSpec> {
		self.all_options().find(|o| o.alias == Some(alias))
	}

	/// # Find an Option by Alias or Name.
	///
	/// Single-character keys try the alias table first, mirroring runtime
	/// flag resolution; long names fall through to a name match.
	fn option_by_key(&self, key: &str) -> Option<&OptionSpec> {
		let mut chars = key.chars();
		if let (Some(a), None) = (chars.next(), chars.next()) {
			if let Some(opt) = self.option_by_alias(a) { return Some(opt); }
		}
		self.all_options().find(|o| o.name == key)
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		Level,
		MemoryLogger,
	};
	use std::cell::RefCell;

	/// # Captured Action Result.
	type Captured = Rc<RefCell<Option<(Vec<Value>, BTreeMap<String, Value>)>>>;

	/// # A Command That Records Its Action Calls.
	fn capturing(cmd: Command) -> (Command, Captured) {
		let seen: Captured = Rc::new(RefCell::new(None));
		let sink = Rc::clone(&seen);
		let cmd = cmd.with_action(move |args, opts| {
			*sink.borrow_mut() = Some((args, opts));
		});
		(cmd, seen)
	}

	#[test]
	fn t_version_short_circuit() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
				.with_version("1.2.3")
				.with_argument("<from>", ""),
		);

		// Version beats validation and the action, required argument or no.
		cmd.parse(["--version"]);
		assert_eq!(log.printed(), vec!["1.2.3".to_owned()]);
		assert!(seen.borrow().is_none());
		assert!(! log.contains(Level::Error, "required"));

		log.clear();
		cmd.parse(["-V"]);
		assert_eq!(log.printed(), vec!["1.2.3".to_owned()]);
	}

	#[test]
	fn t_help_short_circuit() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
				.with_argument("<from>", ""),
		);

		for flag in ["-h", "--help"] {
			log.clear();
			cmd.parse([flag]);
			let printed = log.printed();
			assert_eq!(printed.len(), 1, "help should print once for {flag}");
			assert!(printed[0].starts_with("Usage: test"));
			assert!(seen.borrow().is_none());
		}

		// Version outranks help when both are present.
		log.clear();
		cmd.parse(["-h", "-V"]);
		assert_eq!(log.printed(), vec!["0.0.0".to_owned()]);
	}

	#[test]
	fn t_single_value() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
				.with_option("-s --single <val>", ""),
		);

		cmd.parse(["-s", "value"]);
		let (args, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert!(args.is_empty());
		assert_eq!(opts.get("single"), Some(&Value::Str("value".to_owned())));

		// Attached forms bind the same way.
		for argv in [vec!["--single=value"], vec!["-s=value"]] {
			cmd.parse(argv);
			let (_, opts) = seen.borrow_mut().take().expect("Action should have run.");
			assert_eq!(opts.get("single"), Some(&Value::Str("value".to_owned())));
		}

		// Values coerce on the way in.
		cmd.parse(["-s", "42"]);
		let (_, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(opts.get("single"), Some(&Value::Int(42)));
	}

	#[test]
	fn t_missing_value() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
				.with_option("-s --single <val>", ""),
		);

		// Nothing after the flag.
		cmd.parse(["-s"]);
		assert!(log.contains(Level::Error, "option single requires a value"));
		assert!(seen.borrow().is_none());

		// A flag-shaped next token is no value either.
		log.clear();
		cmd.parse(["--single", "--other"]);
		assert!(log.contains(Level::Error, "option single requires a value"));
		assert!(seen.borrow().is_none());
	}

	#[test]
	fn t_multi_value_greedy() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
				.with_option("-f --files <names...>", "")
				.with_option("-o --other <x>", ""),
		);

		cmd.parse(["--files", "a", "b", "c", "--other", "x"]);
		let (_, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(
			opts.get("files"),
			Some(&Value::List(vec![
				Value::Str("a".to_owned()),
				Value::Str("b".to_owned()),
				Value::Str("c".to_owned()),
			])),
		);
		assert_eq!(opts.get("other"), Some(&Value::Str("x".to_owned())));

		// An attached value ends the collection at one.
		cmd.parse(["--files=a", "b"]);
		let (args, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(
			opts.get("files"),
			Some(&Value::List(vec![Value::Str("a".to_owned())])),
		);
		assert_eq!(args, vec![Value::Str("b".to_owned())]);

		// Zero values is a fatal fault.
		log.clear();
		cmd.parse(["--files", "--other", "x"]);
		assert!(log.contains(Level::Error, "option files expects at least one value"));
		assert!(seen.borrow().is_none());
	}

	#[test]
	fn t_cluster() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
				.with_option("-d --done", "")
				.with_option("-p --path <dir>", ""),
		);

		// The value binds to the last letter only.
		cmd.parse(["-dp", "out"]);
		let (_, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(opts.get("done"), Some(&Value::None));
		assert_eq!(opts.get("path"), Some(&Value::Str("out".to_owned())));

		// A value-requiring letter anywhere else is fatal.
		log.clear();
		cmd.parse(["-pd", "out"]);
		assert!(log.contains(Level::Error, "option path requires a value"));
		assert!(seen.borrow().is_none());
	}

	#[test]
	fn t_presence_only() {
		let (cmd, seen) = capturing(
			Command::new("test").with_option("-o --outDir [dir]", ""),
		);

		// A value-optional flag is presence-only: nothing is consumed and
		// nothing is coerced, attached values included.
		cmd.parse(["--outDir=ignored", "-o", "kept"]);
		let (args, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(opts.get("outDir"), Some(&Value::None));
		assert_eq!(args, vec![Value::Str("kept".to_owned())]);
	}

	#[test]
	fn t_unknown_flag_skipped() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
				.with_option("-d --done", ""),
		);

		cmd.parse(["--bogus", "-d"]);
		assert!(log.contains(Level::Warn, "unknown option: bogus"));

		// The unknown token was dropped, not kept as a positional.
		let (args, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert!(args.is_empty());
		assert_eq!(opts.get("done"), Some(&Value::None));
	}

	#[test]
	fn t_unknown_identifier_kept() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test").with_logger(Rc::clone(&log) as Rc<dyn Logger>),
		);

		cmd.parse(["oops", "12"]);
		assert!(log.contains(Level::Warn, "unknown identifier: oops"));

		// Unlike an unknown flag, the identifier lands as a positional.
		let (args, _) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(args, vec![Value::Str("oops".to_owned()), Value::Int(12)]);
	}

	#[test]
	fn t_positional_coercion() {
		let (cmd, seen) = capturing(Command::new("test"));

		cmd.parse(["12", "3.5", "true", "text", ""]);
		let (args, _) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(args, vec![
			Value::Int(12),
			Value::Float(3.5),
			Value::Bool(true),
			Value::Str("text".to_owned()),
			Value::None,
		]);
	}

	#[test]
	fn t_required_argument() {
		let log = Rc::new(MemoryLogger::default());
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
				.with_argument("<from>", "")
				.with_argument("[to...]", ""),
		);

		cmd.parse::<[&str; 0]>([]);
		assert!(log.contains(Level::Error, "argument from is required"));
		assert!(seen.borrow().is_none());

		log.clear();
		cmd.parse(["source", "target"]);
		assert!(! log.contains(Level::Error, "required"));
		let (args, _) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(args, vec![
			Value::Str("source".to_owned()),
			Value::Str("target".to_owned()),
		]);
	}

	#[test]
	fn t_subcommand_routing() {
		let log = Rc::new(MemoryLogger::default());
		let root_hit = Rc::new(RefCell::new(false));
		let root_sink = Rc::clone(&root_hit);

		let (add, seen) = capturing(
			Command::new("add").with_argument("<todo...>", ""),
		);
		let root = Command::new("todo")
			.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
			.with_subcommand(add)
			.with_action(move |_, _| { *root_sink.borrow_mut() = true; });

		// The child owns everything after its name; the root's action (and
		// anything the root had collected) never comes into play.
		root.parse(["-d", "add", "task1"]);
		let (args, _) = seen.borrow_mut().take().expect("Child action should have run.");
		assert_eq!(args, vec![Value::Str("task1".to_owned())]);
		assert!(! *root_hit.borrow());

		// Without the command token, the root runs as usual.
		root.parse(["whatever"]);
		assert!(*root_hit.borrow());
	}

	#[test]
	fn t_subcommand_inheritance() {
		let log = Rc::new(MemoryLogger::default());
		let root = Command::new("todo")
			.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
			.with_version("9.9.9")
			.with_subcommand(Command::new("add").with_argument("<todo...>", ""));

		// Children answer with the tree's version, through the logger the
		// tree was given.
		root.parse(["add", "--version"]);
		assert_eq!(log.printed(), vec!["9.9.9".to_owned()]);

		// And compose their help with the full ancestor path.
		log.clear();
		root.parse(["add", "-h"]);
		let printed = log.printed();
		assert_eq!(printed.len(), 1);
		assert!(printed[0].starts_with("Usage: todo add <todo...>"));
	}

	#[test]
	fn t_compact_command() {
		let log = Rc::new(MemoryLogger::default());
		let seen: Captured = Rc::new(RefCell::new(None));
		let sink = Rc::clone(&seen);

		let root = Command::new("todo")
			.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
			.with_command("add <todo...>", "Add an entry.", move |add| add
				.with_action(move |args, opts| {
					*sink.borrow_mut() = Some((args, opts));
				}),
			);

		root.parse(["add", "buy", "milk"]);
		let (args, _) = seen.borrow_mut().take().expect("Child action should have run.");
		assert_eq!(args, vec![
			Value::Str("buy".to_owned()),
			Value::Str("milk".to_owned()),
		]);

		// Bad usage strings are a logged no-op.
		let root = Command::new("todo")
			.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
			.with_command("no good", "", |c| c);
		assert!(root.children.is_empty());
		assert!(log.contains(Level::Warn, "invalid specification"));
	}

	#[test]
	fn t_duplicate_subcommand() {
		let log = Rc::new(MemoryLogger::default());
		let root = Command::new("todo")
			.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
			.with_subcommand(Command::new("add"))
			.with_subcommand(Command::new("add"));

		assert_eq!(root.children.len(), 1);
		assert!(log.contains(Level::Warn, "already exists"));
	}

	#[test]
	fn t_defaults() {
		let (cmd, seen) = capturing(
			Command::new("test")
				.with_option_default("-o --outDir <dir>", "", Value::from("/tmp"))
				.with_option("-d --done", "")
				.with_argument_default("[level]", "", Value::from(3_i64)),
		);

		// Absent option and argument pick up their defaults…
		cmd.parse::<[&str; 0]>([]);
		let (args, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(opts.get("outDir"), Some(&Value::Str("/tmp".to_owned())));
		assert_eq!(opts.get("done"), None); // No default, no entry.
		assert_eq!(args, vec![Value::Int(3)]);

		// …but supplied values win.
		cmd.parse(["-o", "/var", "7"]);
		let (args, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert_eq!(opts.get("outDir"), Some(&Value::Str("/var".to_owned())));
		assert_eq!(args, vec![Value::Int(7)]);
	}

	#[test]
	fn t_bad_definitions_are_noops() {
		let log = Rc::new(MemoryLogger::default());
		let cmd = Command::new("test")
			.with_logger(Rc::clone(&log) as Rc<dyn Logger>)
			.with_option("not a flag", "")
			.with_argument("neither", "");

		assert!(cmd.options.is_empty());
		assert!(cmd.arguments.is_empty());
		assert!(log.contains(Level::Warn, "invalid specification"));
	}

	#[test]
	fn t_reentrant() {
		let (cmd, seen) = capturing(Command::new("test").with_option("-d --done", ""));

		// Nothing carries over between invocations.
		cmd.parse(["-d"]);
		let (_, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert!(opts.contains_key("done"));

		cmd.parse(["plain"]);
		let (args, opts) = seen.borrow_mut().take().expect("Action should have run.");
		assert!(! opts.contains_key("done"));
		assert_eq!(args, vec![Value::Str("plain".to_owned())]);
	}
}
