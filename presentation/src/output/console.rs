//! Console output formatter for consultations

use board_domain::core::string::truncate;
use board_domain::{
    ConsensusItem, ConsensusStatus, Participant, SequencerRun, Specialist, Turn, TurnKind,
};
use colored::{ColoredString, Colorize};

/// Details longer than this are cut in the compact report
const SUMMARY_DETAIL_LEN: usize = 120;

/// Formats consultations for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Opening banner printed before the first turn
    pub fn format_header(run: &SequencerRun) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Tumor Board Consultation"));
        output.push('\n');

        let case = if run.case_input.is_blank() {
            "(no case description)".dimmed().to_string()
        } else {
            run.case_input.to_string()
        };
        output.push_str(&format!("{} {}\n", "Case:".cyan().bold(), case));

        let panel = if run.has_participants() {
            run.panel_names()
        } else {
            "(none)".to_string()
        };
        output.push_str(&format!("{} {}\n", "Panel:".cyan().bold(), panel));

        output
    }

    /// One transcript line
    pub fn format_turn(turn: &Turn) -> String {
        match turn.speaker.specialist() {
            Some(specialist) => {
                let name = format!("{} {}", specialist.icon, specialist.name);
                let tag = if turn.kind == TurnKind::ConsensusPoll {
                    format!(" {}", "[poll]".magenta())
                } else {
                    String::new()
                };
                format!(
                    "{}{}: {}",
                    Self::paint(&name, specialist.color).bold(),
                    tag,
                    turn.content
                )
            }
            None => format!("{} {}", "──".dimmed(), turn.content.italic()),
        }
    }

    /// The whole script, one line per turn
    pub fn format_transcript(run: &SequencerRun) -> String {
        run.script
            .iter()
            .map(Self::format_turn)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Consensus report with complete details
    pub fn format_report(consensus: &[ConsensusItem]) -> String {
        Self::report(consensus, None)
    }

    /// Consensus report with details cut to one line
    pub fn format_summary(consensus: &[ConsensusItem]) -> String {
        Self::report(consensus, Some(SUMMARY_DETAIL_LEN))
    }

    /// Format the whole run as JSON
    pub fn format_json(run: &SequencerRun) -> String {
        serde_json::to_string_pretty(run).unwrap_or_else(|_| "{}".to_string())
    }

    /// Catalogue listing for `--list-specialists`
    pub fn format_specialists(specialists: &[Specialist]) -> String {
        let width = specialists.iter().map(|s| s.id.len()).max().unwrap_or(0);
        specialists
            .iter()
            .map(|s| {
                format!(
                    "  {} {:<width$}  {}",
                    Self::paint(s.icon, s.color),
                    s.id.bold(),
                    s.description.dimmed(),
                    width = width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Triage result for `--suggest`
    pub fn format_suggestion(specialists: &[Specialist]) -> String {
        let mut output = format!("{}\n", "Suggested panel:".cyan().bold());
        output.push_str(&Self::format_specialists(specialists));
        output.push('\n');
        output
    }

    fn report(consensus: &[ConsensusItem], max_detail: Option<usize>) -> String {
        let mut output = Self::section_header("Consensus");

        if consensus.is_empty() {
            output.push_str(&format!("{}\n", "No consensus items.".dimmed()));
            return output;
        }

        for item in consensus {
            let chips = item
                .specialists
                .iter()
                .map(Self::chip)
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&format!(
                "\n{} {} {}\n",
                Self::status_badge(item.status),
                item.topic.bold(),
                chips
            ));

            let details = match max_detail {
                Some(len) => truncate(&item.details, len),
                None => item.details.clone(),
            };
            output.push_str(&Self::indent(&details, "    "));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    fn status_badge(status: ConsensusStatus) -> ColoredString {
        let label = format!("[{}]", status.as_str().to_uppercase());
        match status {
            ConsensusStatus::Confirmed => label.green().bold(),
            ConsensusStatus::Agreed => label.green(),
            ConsensusStatus::Proposed => label.cyan(),
            ConsensusStatus::Discussed => label.yellow(),
            ConsensusStatus::Pending => label.dimmed(),
        }
    }

    fn chip(participant: &Participant) -> String {
        Self::paint(&format!("({})", participant.initial), &participant.color).to_string()
    }

    /// Color text with a `#rrggbb` registry color
    fn paint(text: &str, hex: &str) -> ColoredString {
        match hex_rgb(hex) {
            Some((r, g, b)) => text.truecolor(r, g, b),
            None => text.normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parse `#rrggbb`
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_domain::{FixedVariation, SpecialistKind};

    fn lung_mass_run() -> SequencerRun {
        SequencerRun::prepare(
            vec![
                Specialist::get(SpecialistKind::Radiologist),
                Specialist::get(SpecialistKind::Pathologist),
                Specialist::get(SpecialistKind::Oncologist),
            ],
            "55-year-old with a lung mass".into(),
            &FixedVariation(true),
        )
    }

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb("#3b82f6"), Some((0x3b, 0x82, 0xf6)));
        assert_eq!(hex_rgb("3b82f6"), None);
        assert_eq!(hex_rgb("#zzzzzz"), None);
        assert_eq!(hex_rgb("#fff"), None);
    }

    #[test]
    fn test_header_names_case_and_panel() {
        let output = ConsoleFormatter::format_header(&lung_mass_run());
        assert!(output.contains("55-year-old with a lung mass"));
        assert!(output.contains("Radiologist, Pathologist, Oncologist"));
    }

    #[test]
    fn test_transcript_has_one_line_per_turn() {
        let run = lung_mass_run();
        let transcript = ConsoleFormatter::format_transcript(&run);
        assert_eq!(transcript.lines().count(), run.turn_count());
        assert!(transcript.contains("Radiologist"));
        assert!(transcript.contains("[poll]"));
    }

    #[test]
    fn test_report_lists_every_topic() {
        let run = lung_mass_run();
        let report = ConsoleFormatter::format_report(&run.consensus);
        for item in &run.consensus {
            assert!(report.contains(&item.topic));
        }
        assert!(report.contains("CONFIRMED"));
    }

    #[test]
    fn test_summary_truncates_details() {
        let item = ConsensusItem::new(
            "Treatment Plan",
            ConsensusStatus::Agreed,
            "x".repeat(500),
            vec![],
        );
        let summary = ConsoleFormatter::format_summary(std::slice::from_ref(&item));
        let full = ConsoleFormatter::format_report(std::slice::from_ref(&item));
        assert!(summary.contains("..."));
        assert!(full.contains(&"x".repeat(500)));
    }

    #[test]
    fn test_empty_report() {
        assert!(ConsoleFormatter::format_report(&[]).contains("No consensus items."));
    }

    #[test]
    fn test_json_round_trips_through_serde_json() {
        let run = lung_mass_run();
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&run)).unwrap();
        assert_eq!(value["case_input"], "55-year-old with a lung mass");
        assert_eq!(value["script"].as_array().unwrap().len(), run.turn_count());
    }

    #[test]
    fn test_specialist_listing_covers_catalogue() {
        let listing = ConsoleFormatter::format_specialists(Specialist::all());
        assert_eq!(listing.lines().count(), 7);
        assert!(listing.contains("radiation-oncologist"));
    }
}
