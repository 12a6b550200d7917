//! Entry point for the `extract_patch` binary.

use clap::Parser;
use patchex::{Error, Result, extract_patch_from_file};
use std::io::Write;

#[derive(Parser)]
#[command(
	name = "extract_patch",
	version,
	about = "Extract the unified diff patch from an assistant response file"
)]
struct Args {
	/// File holding the raw assistant response.
	response_file: String,
}

fn main() {
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(err) => {
			// Usage errors exit with 1; --help and --version print to stdout and exit 0.
			let code = if err.use_stderr() { 1 } else { 0 };
			let _ = err.print();
			std::process::exit(code);
		}
	};

	if let Err(err) = run(args) {
		eprintln!("{err}");
		std::process::exit(exit_code(&err));
	}
}

fn run(args: Args) -> Result<()> {
	let patch = extract_patch_from_file(args.response_file.as_str())?;

	// The patch goes out verbatim, with no added trailing newline.
	let mut stdout = std::io::stdout();
	stdout.write_all(patch.as_bytes())?;
	stdout.flush()?;

	Ok(())
}

fn exit_code(err: &Error) -> i32 {
	match err {
		Error::EmptyPatch => 2,
		_ => 1,
	}
}
