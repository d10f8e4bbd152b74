//! Console output for menus, listings and combat reports.

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::game::{CombatOutcome, Side, Territory};

const RULE: &str = "=================================================";

/// Print the main menu and the option prompt.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "============ WAR GAME (SIMPLIFIED) ============")?;
    writeln!(out, "0 - Exit")?;
    writeln!(out, "1 - Register a territory")?;
    writeln!(out, "2 - List territories")?;
    writeln!(out, "3 - Attack")?;
    writeln!(out, "{RULE}")?;
    prompt(out, "Choose an option: ")
}

/// Print a prompt without a newline and flush it.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

/// Print a section heading.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {title} ---")
}

/// Print a highlighted notice.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn notice<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "** {message} **")
}

/// Print a user-facing error.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn error<W: Write>(out: &mut W, message: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "** ERROR: {message} **")
}

/// Print every territory, numbered from 1.
///
/// # Errors
///
/// Returns any I/O or serialization error.
pub fn territories<W: Write>(
    out: &mut W,
    list: &[Territory],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, list)?;
            writeln!(out)
        }
        OutputFormat::Text if list.is_empty() => {
            writeln!(out, "No territories registered yet.")
        }
        OutputFormat::Text => {
            for (i, territory) in list.iter().enumerate() {
                writeln!(out, "{RULE}")?;
                writeln!(out, "Territory {}", i + 1)?;
                writeln!(out, "Name: {}", territory.name)?;
                writeln!(out, "Color: {}", territory.owner_color)?;
                writeln!(out, "Troops: {}", territory.troops)?;
            }
            writeln!(out, "{RULE}")
        }
    }
}

/// Print the result of one attack round.
///
/// # Errors
///
/// Returns any I/O or serialization error.
pub fn combat<W: Write>(
    out: &mut W,
    outcome: &CombatOutcome,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, outcome)?;
        return writeln!(out);
    }

    let attacker = &outcome.attacker;
    let defender = &outcome.defender;
    writeln!(out)?;
    writeln!(out, "--- Battle: {} attacks {} ---", attacker.name, defender.name)?;
    writeln!(
        out,
        "Attack die: {} | Defense die: {}",
        outcome.attack_roll, outcome.defense_roll
    )?;
    match outcome.winner {
        Side::Attacker => writeln!(
            out,
            "Victory! {} is now held by {} with {} troops; {} keeps {}.",
            defender.name,
            defender.owner_color,
            outcome.troops_moved,
            attacker.name,
            attacker.troops
        ),
        Side::Defender if outcome.troops_lost == 0 => writeln!(
            out,
            "The defense holds! {} keeps its last troop.",
            attacker.name
        ),
        Side::Defender => writeln!(
            out,
            "The defense holds! {} loses {} troop ({} left).",
            attacker.name, outcome.troops_lost, attacker.troops
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::apply_rolls;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_listing() {
        let text = render(|out| territories(out, &[], OutputFormat::Text));
        assert_eq!(text, "No territories registered yet.\n");
    }

    #[test]
    fn test_text_listing_is_one_based() {
        let list = [Territory::new("Brazil", "Red", 5), Territory::new("Peru", "Blue", 2)];
        let text = render(|out| territories(out, &list, OutputFormat::Text));
        assert!(text.contains("Territory 1\nName: Brazil\nColor: Red\nTroops: 5\n"));
        assert!(text.contains("Territory 2\nName: Peru"));
    }

    #[test]
    fn test_json_listing() {
        let list = [Territory::new("Brazil", "Red", 5)];
        let text = render(|out| territories(out, &list, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "Brazil");
        assert_eq!(value[0]["owner_color"], "Red");
        assert_eq!(value[0]["troops"], 5);
    }

    #[test]
    fn test_combat_report_victory() {
        let mut a = Territory::new("Brazil", "Red", 5);
        let mut d = Territory::new("Argentina", "Blue", 3);
        let outcome = apply_rolls(&mut a, &mut d, 6, 1);
        let text = render(|out| combat(out, &outcome, OutputFormat::Text));
        assert!(text.contains("Attack die: 6 | Defense die: 1"));
        assert!(text.contains("Argentina is now held by Red with 2 troops; Brazil keeps 3."));
    }

    #[test]
    fn test_combat_report_repel() {
        let mut a = Territory::new("Brazil", "Red", 5);
        let mut d = Territory::new("Argentina", "Blue", 3);
        let outcome = apply_rolls(&mut a, &mut d, 2, 2);
        let text = render(|out| combat(out, &outcome, OutputFormat::Text));
        assert!(text.contains("Brazil loses 1 troop (4 left)."));
    }

    #[test]
    fn test_menu_lists_every_option() {
        let text = render(menu);
        for option in ["0 - Exit", "1 - Register", "2 - List", "3 - Attack"] {
            assert!(text.contains(option), "missing {option}");
        }
        assert!(text.ends_with("Choose an option: "));
    }
}
