/// Selection strategies for ambiguous queries
///
/// When more than one folder matches, the top few are offered alongside a
/// "create new" escape. Whether the user gets asked depends on the terminal:
/// `for_terminal` picks the strategy once, the launcher only sees the trait.

use crate::core::searcher::Candidate;
use crate::error::{Result, TryError};
use crate::ui::picker::{Picker, TerminalPicker};
use std::collections::HashSet;
use std::io::{IsTerminal, Write};
use tracing::debug;

/// How many ranked folders are offered before "create new"
pub const MAX_CHOICES: usize = 3;

/// What an entry in the menu stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Index into the ranked candidate list
    Folder(usize),
    CreateNew,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub choice: Choice,
}

/// The options shown for a multi-match query, best first
#[derive(Debug, Clone)]
pub struct Menu {
    pub query: String,
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    /// Top `MAX_CHOICES` candidates plus the "create new" entry
    pub fn new(query: &str, ranked: &[Candidate]) -> Self {
        let shown = &ranked[..ranked.len().min(MAX_CHOICES)];

        // Names that appear more than once among the shown entries get their path
        let mut seen = HashSet::new();
        let duplicated: HashSet<&str> = shown
            .iter()
            .map(|c| c.record.name.as_str())
            .filter(|name| !seen.insert(*name))
            .collect();

        let mut entries: Vec<MenuEntry> = shown
            .iter()
            .enumerate()
            .map(|(i, candidate)| MenuEntry {
                label: folder_label(candidate, duplicated.contains(candidate.record.name.as_str())),
                choice: Choice::Folder(i),
            })
            .collect();

        entries.push(MenuEntry {
            label: format!("Create new: {}", query),
            choice: Choice::CreateNew,
        });

        Self {
            query: query.to_string(),
            entries,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    pub fn prompt(&self) -> String {
        format!("Multiple matches found for '{}'. Select one:", self.query)
    }
}

/// `name (date, opened N times)`, with the path when the name is ambiguous
pub fn folder_label(candidate: &Candidate, with_path: bool) -> String {
    let record = &candidate.record;
    let label = format!(
        "{} ({}, opened {} times)",
        record.name, record.date, record.times_opened
    );

    if with_path {
        format!("{} [{}]", label, record.path)
    } else {
        label
    }
}

/// Turns a menu into a decision
pub trait SelectionStrategy {
    fn select(&mut self, menu: &Menu) -> Result<Choice>;
}

/// Non-interactive fallback: take the best match, show what else there was
pub struct AutoFirst<W: Write> {
    out: W,
}

impl<W: Write> AutoFirst<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SelectionStrategy for AutoFirst<W> {
    fn select(&mut self, menu: &Menu) -> Result<Choice> {
        writeln!(self.out, "Multiple matches found for '{}':", menu.query)?;
        for (i, entry) in menu.entries.iter().enumerate() {
            let marker = if i == 0 { "→" } else { " " };
            writeln!(self.out, "  {} {}", marker, entry.label)?;
        }
        writeln!(
            self.out,
            "Using first match (run directly, not via shell function, for interactive selection)"
        )?;

        // The menu always leads with a folder; "create new" only ever comes last
        let first = menu
            .entries
            .first()
            .map(|e| e.choice)
            .unwrap_or(Choice::CreateNew);
        debug!(?first, "auto-selected without prompting");

        Ok(first)
    }
}

/// Ask the user through a picker
pub struct Interactive<P: Picker> {
    picker: P,
}

impl<P: Picker> Interactive<P> {
    pub fn new(picker: P) -> Self {
        Self { picker }
    }
}

impl<P: Picker> SelectionStrategy for Interactive<P> {
    fn select(&mut self, menu: &Menu) -> Result<Choice> {
        let picked = self.picker.pick(&menu.prompt(), &menu.labels())?;

        match picked {
            None => Err(TryError::UserCancelled),
            Some(index) => menu.entries.get(index).map(|e| e.choice).ok_or_else(|| {
                TryError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("picker returned option {} of {}", index, menu.entries.len()),
                ))
            }),
        }
    }
}

/// Whether a prompt can be shown and answered
///
/// Input must come from a terminal and the menu is drawn on stderr, so both
/// need to be one.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Pick the strategy matching the current terminal
pub fn for_terminal() -> Box<dyn SelectionStrategy> {
    if is_interactive() {
        Box::new(Interactive::new(TerminalPicker::new()))
    } else {
        Box::new(AutoFirst::new(std::io::stderr()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::searcher::tests::folder;

    /// Picker that answers from a script and remembers what it was shown
    pub(crate) struct ScriptedPicker {
        pub answer: Option<usize>,
        pub shown: Vec<String>,
    }

    impl ScriptedPicker {
        pub(crate) fn answering(answer: Option<usize>) -> Self {
            Self {
                answer,
                shown: Vec::new(),
            }
        }
    }

    impl Picker for &mut ScriptedPicker {
        fn pick(&mut self, _prompt: &str, labels: &[String]) -> Result<Option<usize>> {
            self.shown = labels.to_vec();
            Ok(self.answer)
        }
    }

    fn candidates(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Candidate {
                record: folder(i as i64 + 1, name, 2, "2025-11-25T12:00:00.000000Z"),
                score: 100 - i as i64,
            })
            .collect()
    }

    #[test]
    fn test_menu_truncates_and_appends_create_new() {
        let ranked = candidates(&["alpha", "alpha-beta", "alphabet", "alpine", "alps"]);
        let menu = Menu::new("alp", &ranked);

        assert_eq!(menu.entries.len(), MAX_CHOICES + 1);
        assert_eq!(menu.entries[0].choice, Choice::Folder(0));
        assert_eq!(menu.entries[2].choice, Choice::Folder(2));
        assert_eq!(menu.entries[3].choice, Choice::CreateNew);
        assert_eq!(menu.entries[3].label, "Create new: alp");
    }

    #[test]
    fn test_menu_labels() {
        let ranked = candidates(&["alpha", "alpha-beta"]);
        let menu = Menu::new("alpha", &ranked);

        assert_eq!(
            menu.labels(),
            vec![
                "alpha (2025-11-25, opened 2 times)",
                "alpha-beta (2025-11-25, opened 2 times)",
                "Create new: alpha",
            ]
        );
    }

    #[test]
    fn test_duplicate_names_show_paths() {
        let ranked = candidates(&["demo", "demo", "demos"]);
        let menu = Menu::new("demo", &ranked);

        assert!(menu.entries[0].label.contains("[/home/me/try/2025-11-25-demo-1]"));
        assert!(menu.entries[1].label.contains("[/home/me/try/2025-11-25-demo-2]"));
        assert!(!menu.entries[2].label.contains('['));
    }

    #[test]
    fn test_auto_first_picks_top_and_reports() {
        let ranked = candidates(&["alpha", "alpha-beta"]);
        let menu = Menu::new("alpha", &ranked);
        let mut strategy = AutoFirst::new(Vec::new());

        let choice = strategy.select(&menu).unwrap();
        assert_eq!(choice, Choice::Folder(0));

        let out = String::from_utf8(strategy.into_inner()).unwrap();
        assert!(out.contains("Multiple matches found for 'alpha'"));
        assert!(out.contains("→ alpha (2025-11-25, opened 2 times)"));
        assert!(out.contains("  alpha-beta"));
        assert!(out.contains("Create new: alpha"));
    }

    #[test]
    fn test_interactive_choices() {
        let ranked = candidates(&["alpha", "alpha-beta"]);
        let menu = Menu::new("alpha", &ranked);

        let mut picker = ScriptedPicker::answering(Some(1));
        let choice = Interactive::new(&mut picker).select(&menu).unwrap();
        assert_eq!(choice, Choice::Folder(1));
        assert_eq!(picker.shown.len(), 3);

        let mut picker = ScriptedPicker::answering(Some(2));
        let choice = Interactive::new(&mut picker).select(&menu).unwrap();
        assert_eq!(choice, Choice::CreateNew);
    }

    #[test]
    fn test_interactive_cancel() {
        let ranked = candidates(&["alpha", "alpha-beta"]);
        let menu = Menu::new("alpha", &ranked);

        let mut picker = ScriptedPicker::answering(None);
        let result = Interactive::new(&mut picker).select(&menu);
        assert!(matches!(result, Err(TryError::UserCancelled)));
    }

    #[test]
    fn test_interactive_out_of_range() {
        let ranked = candidates(&["alpha", "alpha-beta"]);
        let menu = Menu::new("alpha", &ranked);

        let mut picker = ScriptedPicker::answering(Some(9));
        let result = Interactive::new(&mut picker).select(&menu);
        assert!(matches!(result, Err(TryError::Io(_))));
    }
}
