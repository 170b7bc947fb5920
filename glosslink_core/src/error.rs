use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum GlosslinkError {
	#[error(transparent)]
	#[diagnostic(code(glosslink::io_error))]
	Io(#[from] std::io::Error),

	#[error("glossary not found at `{path}`")]
	#[diagnostic(
		code(glosslink::glossary_not_found),
		help(
			"create the glossary file or point at it with `glossary = \"...\"` in glosslink.toml"
		)
	)]
	GlossaryNotFound { path: String },

	#[error("no term definitions found in `{path}`")]
	#[diagnostic(
		code(glosslink::malformed_glossary),
		help("terms are defined as level-3 headings: `### Term Name`")
	)]
	MalformedGlossary { path: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(glosslink::config_parse),
		help("check that glosslink.toml is valid TOML with an optional [exclude] section")
	)]
	ConfigParse(String),

	#[error("failed to build term matcher: {reason}")]
	#[diagnostic(code(glosslink::term_index))]
	TermIndex { reason: String },

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(glosslink::symlink_cycle),
		help("remove the circular symlink or exclude this path")
	)]
	SymlinkCycle { path: String },

	#[error("file too large: `{path}` is {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(glosslink::file_too_large),
		help("increase the file size limit in glosslink.toml or exclude this file")
	)]
	FileTooLarge { path: String, size: u64, limit: u64 },
}

pub type GlosslinkResult<T> = Result<T, GlosslinkError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
