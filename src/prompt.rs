//! Interactive log path input.

use anyhow::{Context, bail};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const PROMPT: &str = "Enter path to RLC log file: ";
const NOT_FOUND: &str = "File not found. Try again.";

/// Keep asking until the answer names an existing regular file.
///
/// `max_attempts` of `None` asks forever; end of input is always an error.
pub fn prompt_for_path<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    max_attempts: Option<usize>,
) -> anyhow::Result<PathBuf> {
    let mut attempts = 0usize;
    loop {
        if let Some(max) = max_attempts {
            if attempts >= max {
                bail!("no valid log file given after {} attempts", max);
            }
        }
        attempts += 1;

        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut answer = String::new();
        let n = input.read_line(&mut answer).context("read log file path")?;
        if n == 0 {
            bail!("input closed before a log file path was given");
        }

        let path = Path::new(answer.trim());
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        log::debug!("rejected path {:?}", path);
        writeln!(output, "{}", NOT_FOUND)?;
    }
}

/// Validate a path given on the command line (no retry).
pub fn check_path(path: &Path) -> anyhow::Result<PathBuf> {
    if !path.is_file() {
        bail!("log file not found: {}", path.display());
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn reprompts_until_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("rlc.log");
        std::fs::write(&good, "").unwrap();

        let answers = format!(
            "{}\n{}\n  {}  \n",
            dir.path().join("missing.log").display(),
            dir.path().display(),
            good.display()
        );
        let mut out = Vec::new();
        let path = prompt_for_path(Cursor::new(answers), &mut out, None).unwrap();

        assert_eq!(path, good);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert_eq!(out.matches(NOT_FOUND).count(), 2);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let answers = "/no/such/file\n/no/such/file\n/no/such/file\n";
        let err = prompt_for_path(Cursor::new(answers), Vec::new(), Some(2)).unwrap_err();
        assert!(err.to_string().contains("2 attempts"));
    }

    #[test]
    fn end_of_input_is_an_error() {
        assert!(prompt_for_path(Cursor::new(""), Vec::new(), None).is_err());
    }

    #[test]
    fn check_path_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_path(&dir.path().join("nope")).is_err());
        assert!(check_path(dir.path()).is_err());
    }
}
