use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use glosslink_cli::Commands;
use glosslink_cli::GlosslinkCli;
use glosslink_core::GlosslinkError;
use glosslink_core::LinkReport;
use glosslink_core::LinkerConfig;
use glosslink_core::LinkerContext;
use glosslink_core::RunMode;
use glosslink_core::load_linker;
use glosslink_core::run_linker;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = GlosslinkCli::parse();

	// Respect NO_COLOR env var, the --no-color flag, and the terminal's
	// capabilities.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stdout).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Link { dry_run }) => run_link(&args, dry_run),
		Some(Commands::Check) => run_check(&args),
		None => {
			eprintln!("No subcommand specified. Run `glosslink --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<GlosslinkError>() {
			Ok(link_err) => {
				let report: miette::Report = (*link_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &GlosslinkCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Load the config and build the shared linker context for this run.
fn load_context(
	args: &GlosslinkCli,
) -> Result<(PathBuf, LinkerConfig, LinkerContext), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = LinkerConfig::load(&root)?.unwrap_or_default();
	let ctx = load_linker(&root, &config)?;

	if args.verbose {
		println!(
			"Loaded {} glossary term(s) ({} matchable key(s)) from {}",
			ctx.catalog.term_count(),
			ctx.catalog.key_count(),
			make_relative(&ctx.glossary_path, &root)
		);
	}

	Ok((root, config, ctx))
}

fn print_warnings(report: &LinkReport, root: &Path) {
	for warning in &report.warnings {
		eprintln!(
			"{} could not read {}: {}",
			colored!("warning:", yellow),
			make_relative(&warning.file, root),
			warning.reason
		);
	}
}

fn run_link(args: &GlosslinkCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let (root, config, ctx) = load_context(args)?;

	let mode = if dry_run {
		RunMode::DryRun
	} else {
		RunMode::Apply
	};
	let report = run_linker(&ctx, &config, mode)?;
	print_warnings(&report, &root);

	if report.files_modified == 0 {
		println!(
			"All glossary terms are already linked ({} file(s) scanned).",
			report.files_processed
		);
		return Ok(());
	}

	if dry_run {
		println!(
			"Dry run: would add {} link(s) in {} file(s):",
			report.links_added, report.files_modified
		);
		for path in &report.modified_files {
			println!("  {}", make_relative(path, &root));
		}
	} else {
		println!(
			"Added {} link(s) in {} file(s) ({} scanned).",
			report.links_added, report.files_modified, report.files_processed
		);

		if args.verbose {
			for path in &report.modified_files {
				println!("  {}", make_relative(path, &root));
			}
		}
	}

	Ok(())
}

fn run_check(args: &GlosslinkCli) -> Result<(), Box<dyn std::error::Error>> {
	let (root, config, ctx) = load_context(args)?;

	let report = run_linker(&ctx, &config, RunMode::DryRun)?;
	print_warnings(&report, &root);

	if report.files_modified == 0 {
		println!(
			"Check passed: all glossary terms are linked ({} file(s) scanned).",
			report.files_processed
		);
		return Ok(());
	}

	eprintln!("Check failed.");
	eprintln!("Unlinked glossary terms in:");
	for path in &report.modified_files {
		eprintln!("  {}", make_relative(path, &root));
	}
	eprintln!(
		"\n{} link(s) missing in {} file(s). Run `glosslink link` to fix.",
		report.links_added, report.files_modified
	);
	process::exit(1);
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
