use assert_cmd::Command;
use glosslink_core::AnyEmptyResult;

const GLOSSARY: &str = "# Glossary\n\n### Cache\n\nA fast store in front of a slower \
                        one.\n\n### Write-Ahead Log (WAL)\n\nA log written before changes \
                        apply.\n";

fn write_docs(root: &std::path::Path, files: &[(&str, &str)]) -> AnyEmptyResult {
	std::fs::create_dir_all(root.join("reference"))?;
	std::fs::write(root.join("reference/glossary.md"), GLOSSARY)?;
	for (rel, content) in files {
		let path = root.join(rel);
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, content)?;
	}
	Ok(())
}

#[test]
fn link_adds_glossary_links() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_docs(tmp.path(), &[("guide.md", "Warm the cache first.\n")])?;

	let mut cmd = Command::cargo_bin("glosslink")?;
	cmd.env("NO_COLOR", "1")
		.arg("link")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Added 1 link(s) in 1 file(s)"));

	let content = std::fs::read_to_string(tmp.path().join("guide.md"))?;
	assert_eq!(
		content,
		"Warm the [cache](reference/glossary.md#cache) first.\n"
	);

	Ok(())
}

#[test]
fn link_is_idempotent() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_docs(tmp.path(), &[(
		"guide.md",
		"The WAL ensures durability.\n",
	)])?;

	let mut cmd = Command::cargo_bin("glosslink")?;
	cmd.env("NO_COLOR", "1")
		.arg("link")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let after_first = std::fs::read_to_string(tmp.path().join("guide.md"))?;
	assert!(after_first.contains("[WAL](reference/glossary.md#write-ahead-log-wal)"));

	let mut cmd = Command::cargo_bin("glosslink")?;
	cmd.env("NO_COLOR", "1")
		.arg("link")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already linked"));

	let after_second = std::fs::read_to_string(tmp.path().join("guide.md"))?;
	assert_eq!(after_first, after_second);

	Ok(())
}

#[test]
fn link_dry_run_does_not_write() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let original = "Warm the cache first.\n";
	write_docs(tmp.path(), &[("guide.md", original)])?;

	let mut cmd = Command::cargo_bin("glosslink")?;
	cmd.env("NO_COLOR", "1")
		.arg("link")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("would add 1 link(s)"))
		.stdout(predicates::str::contains("guide.md"));

	let content = std::fs::read_to_string(tmp.path().join("guide.md"))?;
	assert_eq!(content, original);

	Ok(())
}

#[test]
fn link_leaves_protected_regions_alone() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let original = "Run `cache` in code. See [cache](other.md) too.\n\n```\ncache\n```\n";
	write_docs(tmp.path(), &[("guide.md", original)])?;

	let mut cmd = Command::cargo_bin("glosslink")?;
	cmd.env("NO_COLOR", "1")
		.arg("link")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already linked"));

	let content = std::fs::read_to_string(tmp.path().join("guide.md"))?;
	assert_eq!(content, original);

	Ok(())
}

#[test]
fn link_skips_tooling_directories() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_docs(tmp.path(), &[(
		"scripts/notes.md",
		"the cache here stays\n",
	)])?;

	let mut cmd = Command::cargo_bin("glosslink")?;
	cmd.env("NO_COLOR", "1")
		.arg("link")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("scripts/notes.md"))?;
	assert_eq!(content, "the cache here stays\n");

	Ok(())
}

#[test]
fn link_fails_without_glossary() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("guide.md"), "Warm the cache first.\n")?;

	let mut cmd = Command::cargo_bin("glosslink")?;
	cmd.env("NO_COLOR", "1")
		.arg("link")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("glossary not found"));

	Ok(())
}

#[test]
fn link_verbose_reports_catalog_and_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_docs(tmp.path(), &[("guide.md", "Warm the cache first.\n")])?;

	let mut cmd = Command::cargo_bin("glosslink")?;
	cmd.env("NO_COLOR", "1")
		.arg("link")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("glossary term(s)"))
		.stdout(predicates::str::contains("guide.md"));

	Ok(())
}
