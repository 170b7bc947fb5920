use std::path::Path;

use crate::TermCatalog;

/// A small glossary exercising every variation rule: a parenthesized
/// acronym, a plain multi-word term, and a term already ending in `s`.
pub const SAMPLE_GLOSSARY: &str = "# Glossary

## Storage

### Write-Ahead Log (WAL)

A log that records changes before they are applied.

### Cache

A fast store in front of a slower one.

### Metrics

Numbers that describe a running system.
";

pub fn sample_catalog() -> TermCatalog {
	TermCatalog::build(SAMPLE_GLOSSARY, Path::new("glossary.md")).expect("sample glossary is valid")
}

/// Glossary where a longer term is defined before a shorter one that it
/// contains, for overlap and tie-break tests.
pub const NESTED_TERMS_GLOSSARY: &str = "### Write-Ahead Log

### Log
";

pub fn nested_terms_catalog() -> TermCatalog {
	TermCatalog::build(NESTED_TERMS_GLOSSARY, Path::new("glossary.md"))
		.expect("nested glossary is valid")
}
