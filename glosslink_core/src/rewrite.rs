use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::matcher::CandidateMatch;

/// Relative glossary reference used when no relative path can be computed
/// between a document and the glossary file.
pub const FALLBACK_GLOSSARY_REFERENCE: &str = "../reference/glossary.md";

/// Splice accepted matches back into a document as glossary links.
///
/// `accepted` must be the disjoint, descending-start output of
/// [`resolve`](crate::resolve). The rewritten document is built left to
/// right with a running cursor: unmatched text is emitted verbatim, each
/// match becomes `[matched_text](relative_path#anchor)`, and the trailing
/// text follows. The caller decides whether to persist the result.
pub fn rewrite(
	document: &str,
	accepted: &[CandidateMatch],
	document_path: &Path,
	glossary_path: &Path,
) -> String {
	let reference = glossary_reference(document_path, glossary_path);

	let mut output = String::with_capacity(document.len() + accepted.len() * 32);
	let mut cursor = 0;

	for accepted_match in accepted.iter().rev() {
		output.push_str(&document[cursor..accepted_match.start]);
		output.push_str(&format!(
			"[{}]({reference}#{})",
			accepted_match.matched_text, accepted_match.anchor
		));
		cursor = accepted_match.end;
	}
	output.push_str(&document[cursor..]);

	output
}

/// The link target for a document: the relative path from the document's
/// directory to the glossary file, with forward-slash separators. Falls
/// back to [`FALLBACK_GLOSSARY_REFERENCE`] when the two paths cannot be
/// related.
pub fn glossary_reference(document_path: &Path, glossary_path: &Path) -> String {
	let document_dir = document_path.parent().unwrap_or_else(|| Path::new(""));

	match relative_path(glossary_path, document_dir) {
		Some(relative) => {
			let parts: Vec<String> = relative
				.components()
				.map(|c| c.as_os_str().to_string_lossy().into_owned())
				.collect();
			if parts.is_empty() {
				FALLBACK_GLOSSARY_REFERENCE.to_string()
			} else {
				parts.join("/")
			}
		}
		None => FALLBACK_GLOSSARY_REFERENCE.to_string(),
	}
}

/// Compute the path to `target` relative to the directory `base`. Returns
/// `None` when the paths cannot be related (one absolute, one relative, or
/// `base` contains `..` components that cannot be resolved lexically).
fn relative_path(target: &Path, base: &Path) -> Option<PathBuf> {
	if target.is_absolute() != base.is_absolute() {
		return None;
	}

	let mut target_components = target.components();
	let mut base_components = base.components();
	let mut components: Vec<Component> = Vec::new();

	loop {
		match (target_components.next(), base_components.next()) {
			(None, None) => break,
			(Some(t), None) => {
				components.push(t);
				components.extend(target_components);
				break;
			}
			(None, Some(_)) => components.push(Component::ParentDir),
			(Some(t), Some(b)) if components.is_empty() && t == b => {}
			(Some(t), Some(Component::CurDir)) => components.push(t),
			(Some(_), Some(Component::ParentDir)) => return None,
			(Some(t), Some(_)) => {
				components.push(Component::ParentDir);
				for _ in base_components.by_ref() {
					components.push(Component::ParentDir);
				}
				components.push(t);
				components.extend(target_components);
				break;
			}
		}
	}

	Some(components.iter().map(|c| c.as_os_str()).collect())
}
