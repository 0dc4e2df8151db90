// Overwrite prompts and colored status lines; everything here writes to
// stderr so stdout stays free for merged text.

use anyhow::Result;
use inquire::Confirm;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Set to any value to never prompt, even on a terminal
pub const NO_PROMPT_ENV: &str = "LINEMERGE_NO_PROMPT";

/// Prompting needs a terminal on stdin and no opt-out (CI or LINEMERGE_NO_PROMPT)
pub fn can_prompt() -> bool {
    if cfg!(test) || std::env::var_os(NO_PROMPT_ENV).is_some() || std::env::var_os("CI").is_some() {
        return false;
    }

    std::io::stdin().is_terminal()
}

/// Ask before replacing an existing output file. Without a terminal the answer is no.
pub fn confirm_overwrite(path: &str) -> Result<bool> {
    if !can_prompt() {
        return Ok(false);
    }
    Ok(Confirm::new(&format!("{} exists. Overwrite it with the merged result?", path))
        .with_default(false)
        .prompt()?)
}

pub fn print_success(text: &str) {
    eprintln!("{} {}", "✓".bright_green(), text.green());
}

pub fn print_info(text: &str) {
    eprintln!("{} {}", "→".bright_blue(), text.bright_blue());
}

pub fn print_warning(text: &str) {
    eprintln!("{} {}", "▸".bright_yellow(), text.yellow());
}

/// One input document of a merge
pub fn print_source(path: &str) {
    eprintln!("   {} {}", "•".bright_black(), path.bright_white());
}

/// A line that was not present before the merge
pub fn print_added(line: &str) {
    let shown = if line.is_empty() { "(blank line)" } else { line };
    eprintln!("  {} {}", "+".green(), shown.bright_white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_prompts_under_test() {
        assert!(!can_prompt());
        assert!(!confirm_overwrite("whatever").unwrap());
    }
}
