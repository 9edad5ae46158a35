/// Shell glue
///
/// The snippets wrap the binary in a shell function that evaluates the one
/// line `try` prints on stdout.

use crate::shell::Shell;
use std::path::Path;

/// Snippet contents embedded at compile time
const POSIX_SNIPPET: &str = include_str!("../../hooks/try.sh");
const FISH_SNIPPET: &str = include_str!("../../hooks/try.fish");

/// Integration snippet for a shell
pub fn snippet(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash | Shell::Zsh => POSIX_SNIPPET,
        Shell::Fish => FISH_SNIPPET,
    }
}

/// The line the wrapper function evaluates
pub fn cd_directive(path: &Path) -> String {
    format!("cd {}", shell_quote(&path.to_string_lossy()))
}

/// Single-quote a word for POSIX shells and fish
///
/// Embedded single quotes become `'\''` (close, escaped quote, reopen).
pub fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}
