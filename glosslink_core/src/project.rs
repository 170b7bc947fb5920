use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use globset::GlobSet;

use crate::GlosslinkError;
use crate::GlosslinkResult;
use crate::TermCatalog;
use crate::config::LinkerConfig;
use crate::matcher::find_matches;
use crate::matcher::resolve;
use crate::rewrite::rewrite;

/// Directory names that are never scanned: tooling, generated reports, and
/// version-control metadata.
const SKIP_DIRS: &[&str] = &["scripts", "task-reports", "node_modules", "target"];

/// How a run interacts with the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
	/// Write rewritten documents back to disk.
	Apply,
	/// Compute everything but touch nothing; only report what would change.
	DryRun,
}

/// The read-once state shared by every document in a run: the term catalog
/// and the glossary's location.
#[derive(Debug)]
pub struct LinkerContext {
	pub catalog: TermCatalog,
	/// The glossary file, as `root` joined with the configured glossary path.
	pub glossary_path: PathBuf,
	pub root: PathBuf,
}

/// The rewritten content of a single document.
#[derive(Debug)]
pub struct ProcessedDocument {
	pub content: String,
	pub links_added: usize,
}

/// A per-file problem that did not stop the run.
#[derive(Debug)]
pub struct LinkWarning {
	pub file: PathBuf,
	pub reason: String,
}

/// Summary of a full run over the documentation tree.
#[derive(Debug, Default)]
pub struct LinkReport {
	/// Markdown files scanned.
	pub files_processed: usize,
	/// Files that were (or in dry-run mode, would be) modified.
	pub files_modified: usize,
	/// Links added across all modified files.
	pub links_added: usize,
	/// The modified files, in scan order.
	pub modified_files: Vec<PathBuf>,
	/// Files skipped with a warning (for example invalid UTF-8).
	pub warnings: Vec<LinkWarning>,
}

/// Read the glossary and build the run context. Fails with
/// [`GlosslinkError::GlossaryNotFound`] when the glossary file is absent.
pub fn load_linker(root: &Path, config: &LinkerConfig) -> GlosslinkResult<LinkerContext> {
	let glossary_path = root.join(&config.glossary);

	if !glossary_path.is_file() {
		return Err(GlosslinkError::GlossaryNotFound {
			path: glossary_path.display().to_string(),
		});
	}

	let glossary_text = std::fs::read_to_string(&glossary_path)?;
	let catalog = TermCatalog::build(&glossary_text, &glossary_path)?;

	Ok(LinkerContext {
		catalog,
		glossary_path,
		root: root.to_path_buf(),
	})
}

/// Run the full pipeline over one document. Returns `None` when no term
/// mention survives overlap resolution, i.e. nothing would change.
pub fn process_document(
	ctx: &LinkerContext,
	path: &Path,
	content: &str,
) -> Option<ProcessedDocument> {
	let candidates = find_matches(content, &ctx.catalog);
	let accepted = resolve(candidates);

	if accepted.is_empty() {
		return None;
	}

	let links_added = accepted.len();
	let rewritten = rewrite(content, &accepted, path, &ctx.glossary_path);

	Some(ProcessedDocument {
		content: rewritten,
		links_added,
	})
}

/// Process every markdown document under the docs root.
///
/// Each rewrite is computed fully in memory before any write, so a crash
/// never leaves a document half-rewritten on disk. Unreadable documents are
/// recorded as warnings and skipped; oversized files abort the run.
pub fn run_linker(
	ctx: &LinkerContext,
	config: &LinkerConfig,
	mode: RunMode,
) -> GlosslinkResult<LinkReport> {
	let exclude_set = config.exclude_set();
	let files = collect_markdown_files(ctx, &exclude_set)?;

	let mut report = LinkReport::default();

	for file in files {
		// A file can vanish between traversal and processing; like any other
		// unreadable document that is a warning, not a fatal error.
		let metadata = match std::fs::metadata(&file) {
			Ok(metadata) => metadata,
			Err(e) => {
				report.warnings.push(LinkWarning {
					file,
					reason: e.to_string(),
				});
				continue;
			}
		};
		if metadata.len() > config.max_file_size {
			return Err(GlosslinkError::FileTooLarge {
				path: file.display().to_string(),
				size: metadata.len(),
				limit: config.max_file_size,
			});
		}

		let content = match std::fs::read_to_string(&file) {
			Ok(content) => content,
			Err(e) => {
				report.warnings.push(LinkWarning {
					file,
					reason: e.to_string(),
				});
				continue;
			}
		};

		report.files_processed += 1;

		let Some(processed) = process_document(ctx, &file, &content) else {
			continue;
		};

		if mode == RunMode::Apply {
			std::fs::write(&file, &processed.content)?;
		}

		report.files_modified += 1;
		report.links_added += processed.links_added;
		report.modified_files.push(file);
	}

	Ok(report)
}

/// Collect all markdown files under the docs root, excluding the glossary
/// itself, hidden and tooling directories, and config-excluded paths.
fn collect_markdown_files(ctx: &LinkerContext, exclude_set: &GlobSet) -> GlosslinkResult<Vec<PathBuf>> {
	let mut files = Vec::new();
	let mut visited_dirs = HashSet::new();
	walk_dir(ctx, &ctx.root, &mut files, exclude_set, &mut visited_dirs)?;
	// Sort for deterministic ordering
	files.sort();
	Ok(files)
}

fn walk_dir(
	ctx: &LinkerContext,
	dir: &Path,
	files: &mut Vec<PathBuf>,
	exclude_set: &GlobSet,
	visited_dirs: &mut HashSet<PathBuf>,
) -> GlosslinkResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	// Detect symlink cycles by tracking canonical paths.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		return Err(GlosslinkError::SymlinkCycle {
			path: dir.display().to_string(),
		});
	}

	let entries = std::fs::read_dir(dir)?;

	for entry in entries {
		let entry = entry?;
		let path = entry.path();

		// Skip hidden directories and tooling/report directories.
		if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
			if name.starts_with('.') || SKIP_DIRS.contains(&name) {
				continue;
			}
		}

		// Check against exclude patterns using the path relative to root.
		if let Ok(rel_path) = path.strip_prefix(&ctx.root) {
			if !exclude_set.is_empty() && exclude_set.is_match(rel_path) {
				continue;
			}
		}

		if path.is_dir() {
			walk_dir(ctx, &path, files, exclude_set, visited_dirs)?;
		} else if is_markdown_file(&path) && path != ctx.glossary_path {
			files.push(path);
		}
	}

	Ok(())
}

/// Check if a file is a markdown document eligible for linking.
fn is_markdown_file(path: &Path) -> bool {
	path.extension().and_then(|e| e.to_str()) == Some("md")
}
