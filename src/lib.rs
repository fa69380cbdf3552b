/*!
# Commandeer

This crate provides a small, declarative, tree-structured CLI command parser
called [`Command`].

A program is modelled as a tree of named commands, each owning typed flags
("options"), positional parameters ("arguments"), child commands, and an
optional action callback. [`Command::parse`] tokenizes a raw argument
vector, resolves it against the tree — combined short clusters like `-dp`,
attached values like `--out=dir`, greedy multi-value flags, sub-command
recursion — coerces the text into typed [`Value`]s, and hands the result to
the matched node's action. `--version` and `--help` short-circuit the whole
affair, with help screens composed straight from the definitions.

Definitions use a compact, human-oriented grammar — `-d --done`,
`-o --outDir [dir]`, `--files <names...>`, `<from>`, `[to...]` — compiled
once up front so the parsing loop itself never second-guesses anything.

Diagnostics never panic and never print on their own; everything flows
through a pluggable [`Logger`], which by default forwards to [`tracing`]
(and stdout for version/help output).



## Example

```
use commandeer::{Command, Value};

let cmd = Command::new("todo")
    .with_version("0.1.0")
    .with_description("A tiny to-do manager.")
    .with_option("-a --all", "Include finished entries.")
    .with_command("add <todo...>", "Add a new entry.", |add| add
        .with_action(|args, _opts| {
            for arg in &args {
                if let Some(text) = arg.as_str() { println!("added: {text}"); }
            }
        })
    )
    .with_action(|_args, opts| {
        if opts.contains_key("all") { /* list everything */ }
        else { /* list open entries */ }
    });

// Normally you'd hand over the environment with `cmd.parse_env()`.
cmd.parse(["add", "buy", "milk"]);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod command;
mod error;
mod help;
mod log;
mod spec;
mod token;
mod value;

pub use command::{
	Action,
	Command,
};
pub use error::ParseError;
pub use log::{
	Level,
	Logger,
	MemoryLogger,
	SilentLogger,
	StdLogger,
};
pub use spec::{
	ArgumentSpec,
	OptionSpec,
};
pub use token::Token;
pub use value::Value;
