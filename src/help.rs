/*!
# Commandeer: Help Rendering.
*/

use crate::{
	ArgumentSpec,
	Command,
	OptionSpec,
};



/// # Compose Help Text.
///
/// Build the full help screen for a node: usage line (prefixed with every
/// ancestor name), description, arguments, options (version first, help
/// last), and sub-commands. Sections with nothing to say are omitted.
pub(crate) fn compose(cmd: &Command) -> String {
	let mut out = String::with_capacity(256);

	out.push_str("Usage: ");
	for ancestor in &cmd.path {
		out.push_str(ancestor);
		out.push(' ');
	}
	out.push_str(&usage_fragment(cmd));
	out.push('\n');

	if ! cmd.description.is_empty() {
		out.push('\n');
		out.push_str(&cmd.description);
		out.push('\n');
	}

	if ! cmd.arguments.is_empty() {
		out.push_str("\nArguments:\n");
		for arg in &cmd.arguments {
			out.push_str("  ");
			out.push_str(&arg.name);
			if arg.multi_value { out.push_str("..."); }
			out.push_str("  ");
			out.push_str(&arg.description);
			out.push('\n');
		}
	}

	out.push_str("\nOptions:\n");
	option_line(&mut out, &cmd.version_opt);
	for opt in &cmd.options { option_line(&mut out, opt); }
	option_line(&mut out, &cmd.help_opt);

	if ! cmd.children.is_empty() {
		out.push_str("\nCommands:\n");
		for child in &cmd.children {
			out.push_str("  ");
			out.push_str(&usage_fragment(child));
			out.push_str("  ");
			out.push_str(&child.description);
			out.push('\n');
		}
	}

	out
}

/// # Usage Fragment.
///
/// A node's own slice of the usage line: name, an `[options]` marker when
/// it declares any options, and one placeholder per declared positional.
fn usage_fragment(cmd: &Command) -> String {
	let mut out = String::with_capacity(32);
	out.push_str(&cmd.name);

	if ! cmd.options.is_empty() { out.push_str(" [options]"); }

	for arg in &cmd.arguments {
		out.push(' ');
		out.push_str(&argument_placeholder(arg));
	}

	out
}

/// # Argument Placeholder.
///
/// `<name>` or `<name...>` for required arguments, `[name]` or `[name...]`
/// for optional ones.
fn argument_placeholder(arg: &ArgumentSpec) -> String {
	let (open, close) = if arg.required { ('<', '>') } else { ('[', ']') };
	let dots = if arg.multi_value { "..." } else { "" };
	format!("{open}{}{dots}{close}", arg.name)
}

/// # One Options Row.
///
/// Alias and long form, value placeholder when the option carries a value,
/// description, and a rendered default when one exists.
fn option_line(out: &mut String, opt: &OptionSpec) {
	out.push_str("  ");

	let mut aliased = false;
	if let Some(alias) = opt.alias {
		out.push('-');
		out.push(alias);
		aliased = true;
	}

	// Alias-only definitions use the alias letter as their name; repeating
	// it as a fake long form would only mislead.
	if ! aliased || opt.name.chars().count() > 1 {
		if aliased { out.push_str(", "); }
		out.push_str("--");
		out.push_str(&opt.name);
	}

	if let Some(value_name) = &opt.value_name {
		let (open, close) = if opt.value_required { ('<', '>') } else { ('[', ']') };
		let dots = if opt.multi_value { "..." } else { "" };
		out.push(' ');
		out.push(open);
		out.push_str(value_name);
		out.push_str(dots);
		out.push(close);
	}

	out.push_str("  ");
	out.push_str(&opt.description);

	if opt.value_name.is_some() {
		let rendered = opt.default_value.to_string();
		if ! rendered.is_empty() {
			out.push_str(" (default: ");
			out.push_str(&rendered);
			out.push(')');
		}
	}

	out.push('\n');
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Value;

	#[test]
	fn t_sections() {
		let cmd = Command::new("todo")
			.with_description("A to-do manager.")
			.with_version("1.2.3")
			.with_option("-a --all", "Show finished entries too.")
			.with_option_default("-o --outDir [dir]", "Where to write.", Value::from("/tmp"))
			.with_argument("<from>", "Source list.")
			.with_argument("[to...]", "Target lists.")
			.with_subcommand(
				Command::new("add")
					.with_description("Add a new entry.")
					.with_argument("<todo...>", "Entry text."),
			);

		let help = cmd.help_text();
		assert!(help.starts_with("Usage: todo [options] <from> [to...]\n"));
		assert!(help.contains("\nA to-do manager.\n"));
		assert!(help.contains("\nArguments:\n"));
		assert!(help.contains("  from  Source list.\n"));
		assert!(help.contains("  to...  Target lists.\n"));
		assert!(help.contains("\nOptions:\n"));
		assert!(help.contains("  -V, --version  "));
		assert!(help.contains("  -a, --all  Show finished entries too.\n"));
		assert!(help.contains("  -o, --outDir [dir]  Where to write. (default: /tmp)\n"));
		assert!(help.contains("  -h, --help  "));
		assert!(help.contains("\nCommands:\n"));
		assert!(help.contains("  add <todo...>  Add a new entry.\n"));

		// The version string lives in the version option's default slot, but
		// that option carries no value so no default should be rendered.
		assert!(! help.contains("(default: 1.2.3)"));
	}

	#[test]
	fn t_empty_sections() {
		let help = Command::new("bare").help_text();
		assert!(help.starts_with("Usage: bare\n"));
		assert!(! help.contains("Arguments:"));
		assert!(! help.contains("Commands:"));
		assert!(! help.contains("[options]"));
		assert!(help.contains("Options:")); // Version/help are always there.
	}

	#[test]
	fn t_nested_usage() {
		let root = Command::new("todo").with_subcommand(
			Command::new("list").with_subcommand(
				Command::new("overdue").with_argument("[days]", "Cut-off."),
			),
		);

		let overdue = &root.children[0].children[0];
		assert!(overdue.help_text().starts_with("Usage: todo list overdue [days]\n"));
	}

	#[test]
	fn t_override() {
		let cmd = Command::new("todo").with_help_text("all there is to know.");
		assert_eq!(cmd.help_text(), "all there is to know.");
	}
}
