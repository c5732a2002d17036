use sreplx::{parse_assistant_message, strip_narrative, to_markdown};

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
	let message = r#"I will update the greeting first.

<thinking>
The file is small, a single SEARCH/REPLACE block is enough.
</thinking>

<apply_diff>
<path>src/main.rs</path>
<diff>
<<<<<<< SEARCH
:start_line:2
:end_line:2
-------
    println!("hello");
=======
    println!("world");
>>>>>>> REPLACE
</diff>
</apply_diff>"#;

	let blocks = parse_assistant_message(message);
	println!("-- Parsed blocks:\n{blocks:#?}");

	let tool_only = strip_narrative(blocks.clone());
	println!("\n-- Tool uses only: {} block(s)", tool_only.len());

	println!("\n-- Markdown rendering:\n{}", to_markdown(&blocks));

	Ok(())
}
