use crate::TermCatalog;
use crate::segment::SpanKind;
use crate::segment::segment;

/// A located occurrence of a catalog term in prose, before overlap
/// resolution. Offsets are absolute within the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
	/// The text exactly as it appears in the document (original casing).
	pub matched_text: String,
	pub start: usize,
	pub end: usize,
	/// The glossary anchor the match links to.
	pub anchor: String,
	/// The canonical term name from the glossary heading.
	pub display_name: String,
	/// Catalog registration index of the key that produced this match.
	/// Earlier-registered keys win ties between candidates starting at the
	/// same offset.
	pub(crate) key_index: usize,
}

/// Scan a document for occurrences of catalog terms.
///
/// Only text spans are scanned — code blocks, inline code, existing links,
/// and image alt text are immune to linking. Each text span gets a single
/// overlapping pass of the catalog's automaton, and every hit is kept only
/// when word-bounded on both sides.
///
/// Different keys may produce overlapping candidates (the resolver handles
/// those), but a single key never overlaps its own earlier candidate: each
/// key behaves like one left-to-right scan, so a term such as `log log`
/// matches `log log log` once, not twice.
pub fn find_matches(document: &str, catalog: &TermCatalog) -> Vec<CandidateMatch> {
	let mut candidates = Vec::new();

	for span in segment(document) {
		if span.kind != SpanKind::Text {
			continue;
		}

		let content = span.content(document);
		// Per-key resume position; overlapping hits arrive in ascending end
		// order, which for a fixed-length key is ascending start order.
		let mut key_cursor = vec![0usize; catalog.key_count()];
		for hit in catalog.automaton().find_overlapping_iter(content) {
			let key_index = hit.pattern().as_usize();
			if hit.start() < key_cursor[key_index] {
				continue;
			}
			if !is_word_boundary(content, hit.start()) || !is_word_boundary(content, hit.end()) {
				continue;
			}

			key_cursor[key_index] = hit.end();
			let term = catalog.term_for_key(key_index);
			candidates.push(CandidateMatch {
				matched_text: content[hit.start()..hit.end()].to_string(),
				start: span.start + hit.start(),
				end: span.start + hit.end(),
				anchor: term.anchor.clone(),
				display_name: term.display_name.clone(),
				key_index,
			});
		}
	}

	candidates
}

/// Deduplicate overlapping candidates.
///
/// Candidates are ordered by start offset descending (the order rewriting
/// wants) and accepted greedily: a candidate is kept only when its
/// `[start, end)` range does not overlap any already-accepted range. Among
/// overlapping candidates this means the one appearing latest in the
/// document wins; at the exact same start offset, the earlier-registered
/// catalog key wins. The returned matches are pairwise disjoint and sorted
/// by start descending.
pub fn resolve(mut candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch> {
	candidates.sort_by(|a, b| {
		b.start
			.cmp(&a.start)
			.then_with(|| a.key_index.cmp(&b.key_index))
	});

	let mut accepted: Vec<CandidateMatch> = Vec::new();
	for candidate in candidates {
		// Starts are descending, so the last accepted match has the lowest
		// start seen so far and is the only one a new candidate can overlap.
		if let Some(last) = accepted.last() {
			if candidate.end > last.start {
				continue;
			}
		}
		accepted.push(candidate);
	}

	accepted
}

/// Word-boundary test equivalent to the regex `\b` assertion: a boundary
/// exists at `pos` when exactly one of the neighbouring characters is a
/// word character (alphanumeric or underscore).
fn is_word_boundary(text: &str, pos: usize) -> bool {
	let before = text[..pos].chars().next_back().is_some_and(is_word_char);
	let after = text[pos..].chars().next().is_some_and(is_word_char);
	before != after
}

fn is_word_char(c: char) -> bool {
	c == '_' || c.is_alphanumeric()
}
