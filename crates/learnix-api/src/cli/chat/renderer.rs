//! Terminal output for the conversation: the display window, the waiting
//! spinner, and error lines.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use learnix_types::chat::{DisplayTurn, Speaker};
use learnix_types::content::WAITING_MESSAGE;

/// Start the "Thinking... please wait..." spinner.
pub fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        bar.set_style(spinner_style);
    }
    bar.set_message(WAITING_MESSAGE);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Format one turn as `Label: text` with the label styled by speaker.
pub fn format_turn(turn: &DisplayTurn) -> String {
    let label = match turn.speaker {
        Speaker::User => style(format!("{}:", turn.label)).green().bold(),
        Speaker::Bot => style(format!("{}:", turn.label)).cyan().bold(),
    };
    format!("{label} {}", turn.text)
}

/// Print the display window, oldest turn first.
pub fn print_display_window(turns: &[DisplayTurn]) {
    println!();
    for turn in turns {
        println!("  {}", format_turn(turn));
    }
    println!();
}

pub fn print_generation_error(err: &dyn std::fmt::Display) {
    eprintln!("\n  {} Could not get a reply: {err}", style("!").red().bold());
    eprintln!(
        "  {}",
        style("Your message was kept. Type another message, or /exit to quit.").dim()
    );
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_turn_contains_label_and_text() {
        console::set_colors_enabled(false);
        let turn = DisplayTurn {
            speaker: Speaker::Bot,
            label: "Learnix".to_string(),
            text: "Plan your week.".to_string(),
        };
        assert_eq!(format_turn(&turn), "Learnix: Plan your week.");
    }
}
