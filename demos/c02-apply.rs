use sreplx::MultiSearchReplaceStrategy;

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
	let original = "fn greet() {\n    println!(\"hello\");\n}\n\nfn main() {\n    greet();\n}\n";

	let diff = r#"<<<<<<< SEARCH
:start_line:2
:end_line:2
-------
    println!("hello");
=======
    println!("world");
>>>>>>> REPLACE

<<<<<<< SEARCH
:start_line:6
:end_line:6
-------
    greet();
=======
    greet();
    greet();
>>>>>>> REPLACE
"#;

	let strategy = MultiSearchReplaceStrategy::default();
	let result = strategy.apply_diff(original, diff, 0, 0);

	if result.success {
		println!("-- Patched content:\n{}", result.content.as_deref().unwrap_or_default());
		if !result.fail_parts.is_empty() {
			println!("-- {} block(s) could not be applied", result.fail_parts.len());
		}
	} else {
		println!("-- Diff failed:\n{}", result.error.as_deref().unwrap_or_default());
	}

	Ok(())
}
