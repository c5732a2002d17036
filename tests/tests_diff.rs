//! Integration tests for the fuzzy multi SEARCH/REPLACE diff engine.

use sreplx::MultiSearchReplaceStrategy;

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

#[test]
fn test_diff_round_trip_exact() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "fn alpha() {\n    let a = 1;\n}\n";
	let diff = "<<<<<<< SEARCH\n:start_line:2\n:end_line:2\n-------\n    let a = 1;\n=======\n    let a = 2;\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert!(result.fail_parts.is_empty());
	assert_eq!(result.content.as_deref(), Some("fn alpha() {\n    let a = 2;\n}\n"));

	Ok(())
}

#[test]
fn test_diff_partial_multi_block_success() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "fn alpha() {\n    let a = 1;\n}\n\nfn beta() {\n    let b = 2;\n}\n";
	let diff = "<<<<<<< SEARCH\n:start_line:2\n:end_line:2\n-------\nlet zz = 99;\n=======\nlet zz = 100;\n>>>>>>> REPLACE\n\n<<<<<<< SEARCH\n:start_line:6\n:end_line:6\n-------\n    let b = 2;\n=======\n    let b = 42;\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check: the second block applied, the first is reported, the rest of
	// the file is byte-for-byte untouched.
	assert!(result.success);
	assert_eq!(result.fail_parts.len(), 1);
	assert_eq!(
		result.content.as_deref(),
		Some("fn alpha() {\n    let a = 1;\n}\n\nfn beta() {\n    let b = 42;\n}\n")
	);

	let failed = &result.fail_parts[0];
	assert!(!failed.success);
	let details = failed.details.as_ref().ok_or("failed part should carry details")?;
	assert!(details.similarity < 1.0);
	assert_eq!(details.threshold, 1.0);
	assert_eq!(details.search_content, "let zz = 99;");

	Ok(())
}

#[test]
fn test_diff_zero_blocks_applied_is_total_failure() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "one\ntwo\nthree";
	let diff = "<<<<<<< SEARCH\n:start_line:1\n:end_line:1\n-------\nnothing like this\n=======\nwhatever\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(!result.success);
	assert_eq!(result.error.as_deref(), Some("No diff blocks could be applied."));
	assert_eq!(result.fail_parts.len(), 1);
	assert!(result.content.is_none());

	Ok(())
}

#[test]
fn test_diff_whitespace_drift_matches_at_full_threshold() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "fn main() {\n    println!(\"hello\");\n}";
	// Search has an extra space; normalization makes it identical.
	let diff = "<<<<<<< SEARCH\n:start_line:2\n:end_line:2\n-------\n    println!(\"hello\"); \n=======\n    println!(\"world\");\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert_eq!(result.content.as_deref(), Some("fn main() {\n    println!(\"world\");\n}"));

	Ok(())
}

#[test]
fn test_diff_materially_different_fails_at_full_threshold() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "let total_count = 0;";
	let diff = "<<<<<<< SEARCH\n:start_line:1\n:end_line:1\n-------\nlet entirely_other = 9;\n=======\nlet x = 1;\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(!result.success);
	let failed = &result.fail_parts[0];
	let error = failed.error.as_deref().unwrap_or_default();
	assert!(error.contains("No sufficiently similar match found"));
	assert!(error.contains("needs 100%"));

	Ok(())
}

#[test]
fn test_diff_lowered_threshold_accepts_typo() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::new(Some(0.85), None);
	let original = "let total_count = 0;\nlet other = 1;";
	// Two transposed characters in the search text.
	let diff = "<<<<<<< SEARCH\n:start_line:1\n:end_line:1\n-------\nlet total_cuont = 0;\n=======\nlet total_count = 10;\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert_eq!(result.content.as_deref(), Some("let total_count = 10;\nlet other = 1;"));

	Ok(())
}

#[test]
fn test_diff_unescaped_marker_gets_escape_guidance() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "a\n=======\nb";
	// Balanced SEARCH/REPLACE markers, so the stray separator inside the
	// search content should read as unescaped file content.
	let diff = "<<<<<<< SEARCH\na\n=======\nb\n=======\nA\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(!result.success);
	let error = result.error.as_deref().unwrap_or_default();
	assert!(error.contains("MUST escape them"));
	assert!(!error.contains("Diff block is malformed"));

	Ok(())
}

#[test]
fn test_diff_escaped_markers_replace_conflict_block() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "keep\n<<<<<<< HEAD\nours\n=======\ntheirs\n>>>>>>> branch\nend\n";
	let diff = "<<<<<<< SEARCH\n:start_line:2\n:end_line:6\n-------\n\\<<<<<<< HEAD\nours\n\\=======\ntheirs\n\\>>>>>>> branch\n=======\nours\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert_eq!(result.content.as_deref(), Some("keep\nours\nend\n"));

	Ok(())
}

#[test]
fn test_diff_strips_display_line_numbers() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "one\ntwo\nthree";
	let diff = "<<<<<<< SEARCH\n1 | one\n2 | two\n=======\n1 | ONE\n2 | TWO\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert_eq!(result.content.as_deref(), Some("ONE\nTWO\nthree"));

	Ok(())
}

#[test]
fn test_diff_insertion_uses_preceding_indent() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "fn main() {\n    let a = 1;\n    let c = 3;\n}";
	let diff = "<<<<<<< SEARCH\n:start_line:3\n:end_line:3\n-------\n=======\nlet b = 2;\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert_eq!(
		result.content.as_deref(),
		Some("fn main() {\n    let a = 1;\n    let b = 2;\n    let c = 3;\n}")
	);

	Ok(())
}

#[test]
fn test_diff_empty_search_without_anchor_fails_per_block() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "one\ntwo";
	let diff = "<<<<<<< SEARCH\n=======\ninserted\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(!result.success);
	assert_eq!(result.fail_parts.len(), 1);
	assert_eq!(
		result.fail_parts[0].error.as_deref(),
		Some("Empty search content requires start_line to be specified")
	);

	Ok(())
}

#[test]
fn test_diff_deletion_block() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "a\nb\nc\nd";
	let diff = "<<<<<<< SEARCH\n:start_line:2\n:end_line:3\n-------\nb\nc\n=======\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert_eq!(result.content.as_deref(), Some("a\nd"));

	Ok(())
}

#[test]
fn test_diff_later_hints_survive_earlier_growth() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "a\nb\nc\nd\ne\nf";
	// Blocks are given in reverse document order; the engine applies them in
	// ascending start-line order and shifts the second hint by the growth of
	// the first edit.
	let diff = "<<<<<<< SEARCH\n:start_line:5\n:end_line:5\n-------\ne\n=======\nE\n>>>>>>> REPLACE\n\n<<<<<<< SEARCH\n:start_line:2\n:end_line:2\n-------\nb\n=======\nb1\nb2\nb3\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert!(result.fail_parts.is_empty(), "no part should fail: {:?}", result.fail_parts);
	assert_eq!(result.content.as_deref(), Some("a\nb1\nb2\nb3\nc\nd\nE\nf"));

	Ok(())
}

#[test]
fn test_diff_no_hint_scans_whole_file() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "alpha\nbeta\ngamma\ndelta";
	let diff = "<<<<<<< SEARCH\ngamma\n=======\nGAMMA\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert_eq!(result.content.as_deref(), Some("alpha\nbeta\nGAMMA\ndelta"));

	Ok(())
}

#[test]
fn test_diff_out_of_range_hint_fails_per_block() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "one\ntwo";
	let diff = "<<<<<<< SEARCH\n:start_line:10\n:end_line:11\n-------\nten\n=======\nTEN\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(!result.success);
	assert_eq!(result.fail_parts.len(), 1);
	let error = result.fail_parts[0].error.as_deref().unwrap_or_default();
	assert!(error.contains("Invalid line range"), "got: {error}");

	Ok(())
}

#[test]
fn test_diff_replacement_reindented_to_match_site() -> Result<()> {
	// -- Setup & Fixtures
	let strategy = MultiSearchReplaceStrategy::default();
	let original = "if ok {\n        do_it();\n}";
	// Replacement carries flat indentation; the engine re-indents it to the
	// first matched line.
	let diff = "<<<<<<< SEARCH\n:start_line:2\n:end_line:2\n-------\n        do_it();\n=======\ndo_it_now();\n>>>>>>> REPLACE";

	// -- Exec
	let result = strategy.apply_diff(original, diff, 0, 0);

	// -- Check
	assert!(result.success, "expected success, got: {:?}", result.error);
	assert_eq!(result.content.as_deref(), Some("if ok {\n        do_it_now();\n}"));

	Ok(())
}
