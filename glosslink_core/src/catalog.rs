use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

use crate::GlosslinkError;
use crate::GlosslinkResult;

/// Matches a term definition heading: a level-3 heading whose remainder is
/// the term name, one per line.
static TERM_HEADING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^### (.+?)$").expect("valid regex"));

/// Characters stripped from anchors (anything not a word character,
/// whitespace, or hyphen).
static NON_ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Runs of hyphens/whitespace collapsed into a single hyphen.
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// A `(...)` suffix or infix together with its leading whitespace.
static PARENTHETICAL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\s*\([^)]+\)").expect("valid regex"));

/// A parenthesized all-uppercase run, e.g. the `(WAL)` in
/// `Write-Ahead Log (WAL)`.
static ACRONYM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([A-Z]+)\)").expect("valid regex"));

/// A single glossary entry: the term exactly as it appears in its heading,
/// and the URL fragment pointing at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryTerm {
	/// The term name as written in the glossary heading.
	pub display_name: String,
	/// The URL fragment identifying the term's heading.
	pub anchor: String,
}

/// The full set of matchable keys derived from a glossary document,
/// including generated variants (parenthetical-stripped forms, naive
/// plurals, and acronyms).
///
/// The catalog is built once per run and shared immutably across every
/// document; all of its keys are compiled into a single case-insensitive
/// Aho-Corasick automaton so each text span is scanned in one pass
/// regardless of how many terms the glossary defines.
#[derive(Debug)]
pub struct TermCatalog {
	terms: Vec<GlossaryTerm>,
	/// Matchable keys in registration order. The automaton's pattern ids
	/// index into this, and registration order doubles as the tie-break
	/// priority between candidates starting at the same offset.
	keys: Vec<String>,
	/// Term index for each key, parallel to `keys`.
	key_terms: Vec<usize>,
	by_key: HashMap<String, usize>,
	automaton: AhoCorasick,
}

impl TermCatalog {
	/// Build a catalog from the raw glossary text. `source` is only used for
	/// error reporting.
	///
	/// Fails with [`GlosslinkError::MalformedGlossary`] when the document
	/// contains no term headings at all. Keys are registered top-to-bottom in
	/// glossary order; when two terms generate the same variant key, the
	/// first registration wins and the later one is silently dropped.
	pub fn build(glossary_text: &str, source: &Path) -> GlosslinkResult<Self> {
		let mut terms = Vec::new();
		let mut keys: Vec<String> = Vec::new();
		let mut key_terms = Vec::new();
		let mut by_key: HashMap<String, usize> = HashMap::new();

		let mut register = |key: String, term_index: usize| {
			if key.is_empty() || by_key.contains_key(&key) {
				return;
			}
			by_key.insert(key.clone(), term_index);
			keys.push(key);
			key_terms.push(term_index);
		};

		for capture in TERM_HEADING.captures_iter(glossary_text) {
			let display_name = capture[1].trim().to_string();
			if display_name.is_empty() {
				continue;
			}

			let term_index = terms.len();
			let anchor = derive_anchor(&display_name);

			register(display_name.to_lowercase(), term_index);
			for variation in term_variations(&display_name) {
				register(variation.to_lowercase(), term_index);
			}

			terms.push(GlossaryTerm {
				display_name,
				anchor,
			});
		}

		if terms.is_empty() {
			return Err(GlosslinkError::MalformedGlossary {
				path: source.display().to_string(),
			});
		}

		let automaton = AhoCorasick::builder()
			.ascii_case_insensitive(true)
			.build(&keys)
			.map_err(|e| {
				GlosslinkError::TermIndex {
					reason: e.to_string(),
				}
			})?;

		Ok(Self {
			terms,
			keys,
			key_terms,
			by_key,
			automaton,
		})
	}

	/// Number of distinct terms (glossary headings) in the catalog.
	pub fn term_count(&self) -> usize {
		self.terms.len()
	}

	/// Number of matchable keys, including generated variants.
	pub fn key_count(&self) -> usize {
		self.keys.len()
	}

	/// Look up the term a matchable key maps to.
	pub fn get(&self, key: &str) -> Option<&GlossaryTerm> {
		self.by_key.get(key).map(|&index| &self.terms[index])
	}

	/// The term a given automaton pattern id resolves to.
	pub(crate) fn term_for_key(&self, key_index: usize) -> &GlossaryTerm {
		&self.terms[self.key_terms[key_index]]
	}

	pub(crate) fn automaton(&self) -> &AhoCorasick {
		&self.automaton
	}
}

/// Derive the URL anchor for a term heading: lowercase, strip everything
/// that is not a word character, whitespace, or hyphen, collapse separator
/// runs into single hyphens, and trim leading/trailing hyphens.
///
/// `Write-Ahead Log (WAL)` becomes `write-ahead-log-wal`.
pub fn derive_anchor(display_name: &str) -> String {
	let lowered = display_name.to_lowercase();
	let stripped = NON_ANCHOR.replace_all(&lowered, "");
	let collapsed = SEPARATOR_RUN.replace_all(&stripped, "-");
	collapsed.trim_matches('-').to_string()
}

/// Generate the matchable variations of a term name:
///
/// - the parenthetical-stripped form, when stripping changes the name;
/// - naive `+s` plurals of the canonical and stripped forms, when the
///   canonical name does not already end in `s`;
/// - a parenthesized all-uppercase acronym on its own, when present.
fn term_variations(display_name: &str) -> Vec<String> {
	let mut variations = Vec::new();

	let stripped = PARENTHETICAL.replace_all(display_name, "").to_string();
	if stripped != display_name {
		variations.push(stripped.clone());
	}

	if !display_name.to_lowercase().ends_with('s') {
		variations.push(format!("{display_name}s"));
		variations.push(format!("{stripped}s"));
	}

	if let Some(capture) = ACRONYM.captures(display_name) {
		variations.push(capture[1].to_string());
	}

	variations
}
