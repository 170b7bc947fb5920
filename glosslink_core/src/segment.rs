use std::sync::LazyLock;

use regex::Regex;

/// Fenced code blocks: triple-backtick delimited, non-greedy, spanning
/// newlines.
static CODE_BLOCK: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"```[\s\S]*?```").expect("valid regex"));

/// Inline code: single-backtick delimited.
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").expect("valid regex"));

/// An existing markdown link `[text](target)`.
static LINK: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\[[^\]]+\]\([^)]+\)").expect("valid regex"));

/// A markdown image `![alt](target)`.
static IMAGE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").expect("valid regex"));

/// The classification of a document span. Only [`SpanKind::Text`] spans are
/// eligible for term linking; everything else is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
	Text,
	CodeBlock,
	InlineCode,
	Link,
	Image,
}

/// A contiguous, tagged byte range of a document. The spans produced by
/// [`segment`] cover the whole document in order, with no gaps and no
/// overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSpan {
	pub kind: SpanKind,
	pub start: usize,
	pub end: usize,
}

impl DocumentSpan {
	/// The substring of `document` this span covers.
	pub fn content<'a>(&self, document: &'a str) -> &'a str {
		&document[self.start..self.end]
	}
}

/// Partition a document into ordered spans, separating linkable prose from
/// protected regions (fenced code, inline code, existing links, images).
///
/// The four pattern families are located independently across the whole
/// document and their hits sorted by start offset, tied by family priority
/// in the order code block, inline code, link, image. Gaps between special
/// spans become [`SpanKind::Text`] spans. A special hit starting inside an
/// already-emitted span is dropped, so a link written inside a fenced block
/// stays part of the code-block span.
pub fn segment(document: &str) -> Vec<DocumentSpan> {
	let families: [(&Regex, SpanKind); 4] = [
		(&CODE_BLOCK, SpanKind::CodeBlock),
		(&INLINE_CODE, SpanKind::InlineCode),
		(&LINK, SpanKind::Link),
		(&IMAGE, SpanKind::Image),
	];

	let mut special: Vec<(usize, usize, usize, SpanKind)> = Vec::new();
	for (priority, (pattern, kind)) in families.into_iter().enumerate() {
		for hit in pattern.find_iter(document) {
			special.push((hit.start(), priority, hit.end(), kind));
		}
	}
	special.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

	let mut spans = Vec::new();
	let mut cursor = 0;

	for (start, _, end, kind) in special {
		if start < cursor {
			// Nested inside a span that already won this region.
			continue;
		}
		if cursor < start {
			spans.push(DocumentSpan {
				kind: SpanKind::Text,
				start: cursor,
				end: start,
			});
		}
		spans.push(DocumentSpan { kind, start, end });
		cursor = end;
	}

	if cursor < document.len() {
		spans.push(DocumentSpan {
			kind: SpanKind::Text,
			start: cursor,
			end: document.len(),
		});
	}

	spans
}
