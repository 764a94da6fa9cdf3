//! Shell completion support.
//!
//! `cardkit completions <SHELL>` prints a static script. With `COMPLETE=<shell>`
//! set, the binary answers completion requests itself and the value completers
//! below offer the known range tokens, grains, sizes and locales.

use cardkit_core::format::NumberLocale;
use cardkit_core::{CardSize, Grain, RangeToken};
use clap::Command;
use clap_complete::engine::CompletionCandidate;
use clap_complete::{Shell, generate};
use std::ffi::OsStr;

/// Write the completion script for `shell` to stdout.
pub fn print(shell: Shell, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut std::io::stdout());
}

/// Complete range picker tokens (`last7Days`, `thisYear`, ...).
pub fn complete_range_tokens(current: &OsStr) -> Vec<CompletionCandidate> {
    let current = current.to_str().unwrap_or("");
    RangeToken::ALL
        .iter()
        .map(|t| t.as_str())
        .filter(|t| t.starts_with(current))
        .map(CompletionCandidate::new)
        .collect()
}

/// Complete grain names, plus "none" for an unset grain.
pub fn complete_grains(current: &OsStr) -> Vec<CompletionCandidate> {
    let current = current.to_str().unwrap_or("");
    Grain::ALL
        .iter()
        .map(|g| g.as_str())
        .chain(std::iter::once("none"))
        .filter(|g| g.starts_with(current))
        .map(CompletionCandidate::new)
        .collect()
}

/// Complete card sizes; deprecated names are flagged in the help text.
pub fn complete_sizes(current: &OsStr) -> Vec<CompletionCandidate> {
    let current = current.to_str().unwrap_or("").to_ascii_uppercase();
    CardSize::ALL
        .iter()
        .filter(|s| s.as_str().starts_with(&current))
        .map(|s| {
            let candidate = CompletionCandidate::new(s.as_str());
            if s.is_deprecated() {
                candidate.help(Some("Deprecated".into()))
            } else {
                candidate
            }
        })
        .collect()
}

pub fn complete_locales(current: &OsStr) -> Vec<CompletionCandidate> {
    let current = current.to_str().unwrap_or("").to_ascii_lowercase();
    NumberLocale::all()
        .iter()
        .filter(|l| l.tag.starts_with(&current))
        .map(|l| CompletionCandidate::new(l.tag))
        .collect()
}
