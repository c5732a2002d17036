//! Whitespace-normalized Levenshtein similarity between two text spans.

/// Collapses runs of whitespace into a single space and trims the ends.
///
/// This normalization is load-bearing for the default 1.0 threshold: content
/// that differs only in whitespace drift must still score a perfect match.
fn normalize(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Similarity in `0..=1` between an original chunk and a search chunk.
///
/// An empty search matches anything; identical normalized text short-circuits
/// to 1.0 before the edit-distance ratio.
pub fn get_similarity(original: &str, search: &str) -> f64 {
	if search.is_empty() {
		return 1.0;
	}

	let norm_original = normalize(original);
	let norm_search = normalize(search);

	if norm_original == norm_search {
		return 1.0;
	}

	strsim::normalized_levenshtein(&norm_original, &norm_search)
}

// region:    --- Tests


// endregion: --- Tests
