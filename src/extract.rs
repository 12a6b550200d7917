use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use simple_fs::{SPath, read_to_string};
use tracing::debug;

static RE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(?:diff)?\s*(.*?)```").unwrap());

/// Extracts the unified diff patch from a raw assistant response.
///
/// Assistant CLIs often wrap the patch in triple backticks with an optional `diff`
/// language hint. This returns the trimmed body of the first such fenced block,
/// or the trimmed input itself when no fenced block is present.
pub fn extract_patch(text: &str) -> &str {
	match RE_FENCE.captures(text).and_then(|caps| caps.get(1)) {
		Some(body) => body.as_str().trim(),
		None => {
			debug!("no fenced block found, falling back to raw content");
			text.trim()
		}
	}
}

/// Reads an assistant response file and extracts the patch it carries.
///
/// Fails with `Error::FileNotFound` when `path` does not exist, and with
/// `Error::EmptyPatch` when the extraction yields an empty string.
pub fn extract_patch_from_file(path: impl Into<SPath>) -> Result<String> {
	let path = path.into();

	if !path.exists() {
		return Err(Error::FileNotFound(path.to_string()));
	}

	let content = read_to_string(&path)?;
	let patch = extract_patch(&content);

	if patch.is_empty() {
		return Err(Error::EmptyPatch);
	}

	Ok(patch.to_string())
}

// region:    --- Tests


// endregion: --- Tests
