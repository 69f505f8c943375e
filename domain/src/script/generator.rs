//! Script generator
//!
//! Builds the full, ordered discussion for one consultation in a single
//! pass:
//!
//! 1. Opening: the radiologist if present, else the first selected
//!    specialist, else a system notice that nobody was selected
//! 2. Contributions from [`CONTRIBUTION_RULES`], in table order
//! 3. One consensus poll (oncologist, or the first specialist when more
//!    than one is selected)
//! 4. Exactly one system summary turn
//!
//! The result only contains turns authored by the system or by a selected
//! specialist.

use super::rules::{
    CONTRIBUTION_RULES, SYSTEM_NO_SPECIALISTS, SYSTEM_SUMMARY, ScriptContext, generic_opening,
    generic_poll, oncologist_poll, radiologist_opening,
};
use super::turn::Turn;
use super::variation::Variation;
use crate::specialist::{Specialist, SpecialistKind, Speaker};

/// Deterministic script builder
pub struct ScriptGenerator;

impl ScriptGenerator {
    /// Generate the script for a panel and case description
    ///
    /// Total for every input: an empty panel yields the "no specialists"
    /// notice followed by the summary turn.
    ///
    /// ```
    /// use board_domain::script::{FixedVariation, ScriptGenerator, TurnKind};
    /// use board_domain::{Specialist, SpecialistKind, Speaker};
    ///
    /// let panel = [Specialist::get(SpecialistKind::Surgeon)];
    /// let script = ScriptGenerator::generate(&panel, "liver lesion", &FixedVariation(true));
    ///
    /// assert_eq!(script[0].speaker, Speaker::Specialist(SpecialistKind::Surgeon));
    /// assert_eq!(script.last().unwrap().kind, TurnKind::Summary);
    /// ```
    pub fn generate(
        selected: &[Specialist],
        case_text: &str,
        variation: &dyn Variation,
    ) -> Vec<Turn> {
        let panel = panel_of(selected);
        let ctx = ScriptContext::new(case_text, variation);

        let mut script = Vec::with_capacity(CONTRIBUTION_RULES.len() + 3);
        script.push(Self::opening(&panel, &ctx));

        script.extend(
            CONTRIBUTION_RULES
                .iter()
                .filter(|rule| rule.applies(&panel))
                .map(|rule| Turn::said(rule.speaker, rule.render(&ctx))),
        );

        if let Some(poll) = Self::consensus_poll(&panel, &ctx) {
            script.push(poll);
        }

        script.push(Turn::summary(SYSTEM_SUMMARY));

        script.retain(|turn| match turn.speaker {
            Speaker::System => true,
            Speaker::Specialist(kind) => panel.contains(&kind),
        });
        script
    }

    fn opening(panel: &[SpecialistKind], ctx: &ScriptContext<'_>) -> Turn {
        if panel.contains(&SpecialistKind::Radiologist) {
            Turn::said(SpecialistKind::Radiologist, radiologist_opening(ctx))
        } else if let Some(first) = panel.first() {
            Turn::said(*first, generic_opening(ctx, first.specialist().name))
        } else {
            Turn::system(SYSTEM_NO_SPECIALISTS)
        }
    }

    fn consensus_poll(panel: &[SpecialistKind], ctx: &ScriptContext<'_>) -> Option<Turn> {
        if panel.contains(&SpecialistKind::Oncologist) {
            Some(Turn::poll(SpecialistKind::Oncologist, oncologist_poll(ctx)))
        } else if panel.len() > 1 {
            Some(Turn::poll(panel[0], generic_poll(ctx)))
        } else {
            None
        }
    }
}

/// Selected kinds in selection order, without duplicates
fn panel_of(selected: &[Specialist]) -> Vec<SpecialistKind> {
    let mut panel = Vec::with_capacity(selected.len());
    for specialist in selected {
        if !panel.contains(&specialist.kind) {
            panel.push(specialist.kind);
        }
    }
    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::turn::TurnKind;
    use crate::script::variation::FixedVariation;

    fn panel(kinds: &[SpecialistKind]) -> Vec<Specialist> {
        kinds.iter().map(|k| Specialist::get(*k)).collect()
    }

    fn speakers(script: &[Turn]) -> Vec<Speaker> {
        script.iter().map(|t| t.speaker).collect()
    }

    #[test]
    fn test_empty_panel() {
        let script = ScriptGenerator::generate(&[], "anything", &FixedVariation(true));
        assert_eq!(script.len(), 2);
        assert_eq!(script[0].speaker, Speaker::System);
        assert_eq!(script[0].kind, TurnKind::Normal);
        assert_eq!(script[0].content, SYSTEM_NO_SPECIALISTS);
        assert!(script[1].is_summary());
    }

    #[test]
    fn test_radiologist_opens_even_when_listed_last() {
        let selected = panel(&[SpecialistKind::Surgeon, SpecialistKind::Radiologist]);
        let script = ScriptGenerator::generate(&selected, "", &FixedVariation(true));
        assert_eq!(
            script[0].speaker,
            Speaker::Specialist(SpecialistKind::Radiologist)
        );
    }

    #[test]
    fn test_first_selected_opens_without_radiologist() {
        let selected = panel(&[SpecialistKind::Cardiologist, SpecialistKind::Surgeon]);
        let script = ScriptGenerator::generate(&selected, "", &FixedVariation(true));
        assert_eq!(
            script[0].speaker,
            Speaker::Specialist(SpecialistKind::Cardiologist)
        );
        assert!(script[0].content.contains("Cardiologist"));
    }

    #[test]
    fn test_full_board_order() {
        let selected = panel(&[
            SpecialistKind::Radiologist,
            SpecialistKind::Pathologist,
            SpecialistKind::Oncologist,
            SpecialistKind::Surgeon,
        ]);
        let script = ScriptGenerator::generate(&selected, "lung mass", &FixedVariation(true));

        assert_eq!(
            speakers(&script),
            vec![
                Speaker::Specialist(SpecialistKind::Radiologist),
                Speaker::Specialist(SpecialistKind::Pathologist),
                Speaker::Specialist(SpecialistKind::Oncologist),
                Speaker::Specialist(SpecialistKind::Surgeon),
                Speaker::Specialist(SpecialistKind::Radiologist),
                Speaker::Specialist(SpecialistKind::Oncologist),
                Speaker::System,
            ]
        );
        assert_eq!(script[5].kind, TurnKind::ConsensusPoll);
    }

    #[test]
    fn test_oncologist_without_pathologist_requests_biopsy() {
        let selected = panel(&[SpecialistKind::Oncologist]);
        let script = ScriptGenerator::generate(&selected, "", &FixedVariation(true));
        assert!(script.iter().any(|t| t.content.contains("need a biopsy first")));
        // A lone oncologist still polls
        assert!(script.iter().any(|t| t.is_poll()));
    }

    #[test]
    fn test_generic_poll_from_first_selected() {
        let selected = panel(&[SpecialistKind::Surgeon, SpecialistKind::Cardiologist]);
        let script = ScriptGenerator::generate(&selected, "", &FixedVariation(true));
        let poll = script.iter().find(|t| t.is_poll()).unwrap();
        assert_eq!(poll.speaker, Speaker::Specialist(SpecialistKind::Surgeon));
    }

    #[test]
    fn test_single_non_oncologist_has_no_poll() {
        let selected = panel(&[SpecialistKind::Neurologist]);
        let script = ScriptGenerator::generate(&selected, "", &FixedVariation(true));
        assert!(!script.iter().any(|t| t.is_poll()));
        assert_eq!(script.len(), 3);
    }

    #[test]
    fn test_duplicates_in_selection_are_ignored() {
        let selected = panel(&[SpecialistKind::Pathologist, SpecialistKind::Pathologist]);
        let script = ScriptGenerator::generate(&selected, "", &FixedVariation(true));
        // Opening + report + summary, and no poll for a single distinct specialist
        assert_eq!(script.len(), 3);
    }

    #[test]
    fn test_case_text_is_embedded() {
        let selected = panel(&[SpecialistKind::Radiologist]);
        let script =
            ScriptGenerator::generate(&selected, "  hepatic nodule  ", &FixedVariation(false));
        assert!(script[0].content.contains("\"hepatic nodule\""));
        assert!(script[0].content.contains("potential inflammation"));
    }
}
