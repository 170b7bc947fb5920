use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Link glossary terms across your markdown documentation.",
	long_about = "glosslink reads term definitions from your glossary file and rewrites \
	              whole-word mentions of those terms in prose into links pointing at the \
	              term's glossary anchor.\n\nCode blocks, inline code, existing links, and \
	              images are never touched, so re-running the linker is always safe.\n\nQuick \
	              start:\n  glosslink link             Add glossary links in place\n  glosslink \
	              link --dry-run   Preview without writing\n  glosslink check            Fail \
	              when links are missing (CI)"
)]
pub struct GlosslinkCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the documentation root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Add glossary links to every markdown document under the docs root.
	///
	/// Reads term definitions from the glossary (level-3 headings), scans all
	/// markdown files for unlinked whole-word mentions, and rewrites them into
	/// relative links at the term's glossary anchor. Each file's rewrite is
	/// computed fully in memory before it is written.
	Link {
		/// Preview changes without writing files. Prints which files would be
		/// modified and how many links would be added.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that every glossary term mention is already linked.
	///
	/// Runs the same pipeline as `link` without writing anything, and exits
	/// with a non-zero status code when any file would change. Ideal for CI
	/// pipelines to keep documentation cross-referenced.
	Check,
}
