//! Consensus extraction
//!
//! A single ordered fold over the script: every specialist turn is matched
//! against every topic in [`TOPICS`], so one turn can feed several topics.
//! Output follows the catalogue order; fragments inside an item follow turn
//! order.

use super::item::{ConsensusItem, Participant};
use super::topic::{ConsensusStatus, ConsensusTopic, GENERAL_DISCUSSION, NEXT_STEPS, TOPICS};
use crate::core::string::contains_any;
use crate::script::Turn;
use crate::specialist::{Specialist, SpecialistKind};

/// Details used for the fallback item
pub const GENERAL_DISCUSSION_DETAILS: &str =
    "The board reviewed the case together without settling any specific topic.";

/// Per-topic accumulator
#[derive(Debug, Clone)]
struct TopicBucket {
    topic: ConsensusTopic,
    status: ConsensusStatus,
    contributors: Vec<SpecialistKind>,
    fragments: Vec<String>,
}

impl TopicBucket {
    fn new(topic: ConsensusTopic) -> Self {
        Self {
            topic,
            status: topic.baseline,
            contributors: Vec::new(),
            fragments: Vec::new(),
        }
    }

    fn absorb(&mut self, kind: SpecialistKind, turn: &Turn) {
        if !self.contributors.contains(&kind) {
            self.contributors.push(kind);
        }
        self.fragments.push(turn.content.clone());
        if turn.is_poll() {
            self.status = self.status.elevate(ConsensusStatus::Proposed);
        }
    }

    fn into_item(self) -> Option<ConsensusItem> {
        if self.contributors.is_empty() {
            return None;
        }
        let specialists = self
            .contributors
            .iter()
            .map(|kind| Participant::from(&Specialist::get(*kind)))
            .collect();
        Some(ConsensusItem::new(
            self.topic.name,
            self.status,
            self.fragments.join(" "),
            specialists,
        ))
    }
}

/// Derives the consensus summary from a generated script
pub struct ConsensusExtractor;

impl ConsensusExtractor {
    /// Extract one item per topic that collected at least one turn
    ///
    /// When nothing matches and at least one specialist was selected, a
    /// single "General Discussion" item covering the whole panel is
    /// returned instead. An empty panel with no matches yields `[]`.
    pub fn extract(script: &[Turn], selected: &[Specialist]) -> Vec<ConsensusItem> {
        let mut buckets: Vec<TopicBucket> = TOPICS.into_iter().map(TopicBucket::new).collect();

        for turn in script {
            let Some(kind) = turn.speaker.kind() else {
                continue;
            };

            let mut matched = false;
            for bucket in buckets.iter_mut() {
                if contains_any(&turn.content, bucket.topic.keywords) {
                    bucket.absorb(kind, turn);
                    matched = true;
                }
            }

            // Polls that name no topic are still a call for next steps
            if !matched
                && turn.is_poll()
                && let Some(next_steps) = buckets.iter_mut().find(|b| b.topic == NEXT_STEPS)
            {
                next_steps.absorb(kind, turn);
            }
        }

        let items: Vec<ConsensusItem> = buckets
            .into_iter()
            .filter_map(TopicBucket::into_item)
            .collect();

        if items.is_empty() && !selected.is_empty() {
            return vec![Self::general_discussion(selected)];
        }
        items
    }

    fn general_discussion(selected: &[Specialist]) -> ConsensusItem {
        ConsensusItem::new(
            GENERAL_DISCUSSION,
            ConsensusStatus::Discussed,
            GENERAL_DISCUSSION_DETAILS,
            selected.iter().map(Participant::from).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::topic::{IMAGING_FINDINGS, SURGICAL_ASSESSMENT};

    fn get(kind: SpecialistKind) -> Specialist {
        Specialist::get(kind)
    }

    #[test]
    fn test_single_topic_match() {
        let script = vec![
            Turn::said(SpecialistKind::Radiologist, "The MRI shows a small nodule."),
            Turn::summary("done"),
        ];
        let items = ConsensusExtractor::extract(&script, &[get(SpecialistKind::Radiologist)]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].topic, IMAGING_FINDINGS.name);
        assert_eq!(items[0].status, ConsensusStatus::Confirmed);
        assert_eq!(items[0].specialist_ids(), vec!["radiologist"]);
    }

    #[test]
    fn test_turn_can_feed_multiple_topics() {
        let script = vec![Turn::said(
            SpecialistKind::Surgeon,
            "The lesion looks resectable.",
        )];
        let items = ConsensusExtractor::extract(&script, &[get(SpecialistKind::Surgeon)]);

        let topics: Vec<_> = items.iter().map(|i| i.topic.as_str()).collect();
        assert_eq!(topics, vec!["Imaging Findings", "Surgical Assessment"]);
    }

    #[test]
    fn test_output_follows_catalogue_order_not_arrival() {
        let script = vec![
            Turn::said(SpecialistKind::Surgeon, "Surgery is feasible."),
            Turn::said(SpecialistKind::Radiologist, "Scan is clear elsewhere."),
        ];
        let selected = [get(SpecialistKind::Surgeon), get(SpecialistKind::Radiologist)];
        let items = ConsensusExtractor::extract(&script, &selected);

        assert_eq!(items[0].topic, "Imaging Findings");
        assert_eq!(items[1].topic, "Surgical Assessment");
    }

    #[test]
    fn test_fragments_keep_arrival_order_and_contributors_dedupe() {
        let script = vec![
            Turn::said(SpecialistKind::Radiologist, "First scan."),
            Turn::said(SpecialistKind::Neurologist, "Brain MRI needed."),
            Turn::said(SpecialistKind::Radiologist, "Second scan."),
        ];
        let selected = [
            get(SpecialistKind::Radiologist),
            get(SpecialistKind::Neurologist),
        ];
        let items = ConsensusExtractor::extract(&script, &selected);

        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].details,
            "First scan. Brain MRI needed. Second scan."
        );
        assert_eq!(items[0].specialist_ids(), vec!["radiologist", "neurologist"]);
    }

    #[test]
    fn test_matching_poll_elevates_to_proposed() {
        let script = vec![Turn::poll(
            SpecialistKind::Surgeon,
            "Shall we plan surgery?",
        )];
        let items = ConsensusExtractor::extract(&script, &[get(SpecialistKind::Surgeon)]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].topic, SURGICAL_ASSESSMENT.name);
        assert_eq!(items[0].status, ConsensusStatus::Proposed);
    }

    #[test]
    fn test_poll_does_not_lower_stronger_baseline() {
        let script = vec![Turn::poll(SpecialistKind::Pathologist, "Biopsy confirmed?")];
        let items = ConsensusExtractor::extract(&script, &[get(SpecialistKind::Pathologist)]);

        assert_eq!(items[0].topic, "Pathology Report");
        assert_eq!(items[0].status, ConsensusStatus::Confirmed);
    }

    #[test]
    fn test_unmatched_poll_goes_to_next_steps() {
        let script = vec![Turn::poll(SpecialistKind::Cardiologist, "Everyone fine with this?")];
        let items = ConsensusExtractor::extract(&script, &[get(SpecialistKind::Cardiologist)]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].topic, NEXT_STEPS.name);
        assert_eq!(items[0].status, ConsensusStatus::Proposed);
        assert_eq!(items[0].details, "Everyone fine with this?");
    }

    #[test]
    fn test_system_turns_are_ignored() {
        let script = vec![
            Turn::system("The scan is loading."),
            Turn::summary("Summary of imaging and treatment."),
        ];
        let items = ConsensusExtractor::extract(&script, &[]);
        assert!(items.is_empty());
    }

    #[test]
    fn test_fallback_general_discussion() {
        let script = vec![Turn::said(SpecialistKind::Cardiologist, "Hello everyone.")];
        let selected = [
            get(SpecialistKind::Cardiologist),
            get(SpecialistKind::Neurologist),
        ];
        let items = ConsensusExtractor::extract(&script, &selected);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].topic, GENERAL_DISCUSSION);
        assert_eq!(items[0].status, ConsensusStatus::Discussed);
        assert_eq!(items[0].specialist_ids(), vec!["cardiologist", "neurologist"]);
    }

    #[test]
    fn test_no_fallback_for_empty_panel() {
        let items = ConsensusExtractor::extract(&[Turn::summary("done")], &[]);
        assert!(items.is_empty());
    }
}
