//! History statistics command

use super::CommandError;
use crate::history::HistoryStore;
use crate::output::write_summary;
use colored::Colorize;
use std::io::Write;

/// Show the game history summary, or clear the history when `reset` is set
///
/// # Errors
///
/// Returns an error if the history file cannot be read or removed, or the
/// output cannot be written.
pub fn run_stats<W: Write>(
    out: &mut W,
    store: &HistoryStore,
    reset: bool,
) -> Result<(), CommandError> {
    if reset {
        store.clear()?;
        writeln!(
            out,
            "{} cleared {}",
            "✓".green(),
            store.path().display()
        )?;
        return Ok(());
    }

    let summary = store.summarize()?;
    write_summary(out, &summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::GameRecord;

    fn temp_store(name: &str) -> HistoryStore {
        let path = std::env::temp_dir()
            .join(format!("wordle_stats_{}_{name}", std::process::id()))
            .join("history.txt");
        let store = HistoryStore::new(path);
        store.clear().unwrap();
        store
    }

    fn run(store: &HistoryStore, reset: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_stats(&mut out, store, reset).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn summary_of_recorded_games() {
        let store = temp_store("summary");
        for (word, won, guesses) in [("PILOT", true, 2), ("PLACE", false, 6)] {
            store
                .append(&GameRecord {
                    word: word.to_string(),
                    won,
                    guesses,
                })
                .unwrap();
        }

        let text = run(&store, false);
        assert!(text.contains("2 games with 50.00% win rate and 4.00 average guesses"));
        store.clear().unwrap();
    }

    #[test]
    fn reset_clears_history() {
        let store = temp_store("reset");
        store
            .append(&GameRecord {
                word: "PILOT".to_string(),
                won: true,
                guesses: 3,
            })
            .unwrap();

        run(&store, true);
        assert!(store.read().unwrap().is_empty());
        assert!(run(&store, false).contains("0 games"));
    }
}
