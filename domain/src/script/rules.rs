//! Contribution rules for the script generator
//!
//! Each specialist contributes through a small table of rules instead of a
//! chain of conditionals. A rule fires when its speaker is on the panel and
//! its [`Condition`] holds; rules are evaluated in table order.

use super::variation::Variation;
use crate::specialist::SpecialistKind;

/// Read-only inputs available to every template
pub struct ScriptContext<'a> {
    pub case_text: &'a str,
    pub variation: &'a dyn Variation,
}

impl<'a> ScriptContext<'a> {
    pub fn new(case_text: &'a str, variation: &'a dyn Variation) -> Self {
        Self {
            case_text: case_text.trim(),
            variation,
        }
    }

    /// The case as it is quoted inside turn text
    pub fn case_label(&self) -> String {
        if self.case_text.is_empty() {
            "this case".to_string()
        } else {
            format!("\"{}\"", self.case_text)
        }
    }
}

/// Renders the text of one turn
pub type Template = fn(&ScriptContext<'_>) -> String;

/// Panel condition attached to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Fires only when this specialist is also on the panel
    With(SpecialistKind),
    /// Fires only when this specialist is absent
    Without(SpecialistKind),
}

impl Condition {
    pub fn holds(&self, panel: &[SpecialistKind]) -> bool {
        match self {
            Condition::Always => true,
            Condition::With(kind) => panel.contains(kind),
            Condition::Without(kind) => !panel.contains(kind),
        }
    }
}

/// One entry of the contribution table
#[derive(Clone, Copy)]
pub struct ContributionRule {
    pub speaker: SpecialistKind,
    pub condition: Condition,
    pub template: Template,
}

impl ContributionRule {
    /// Whether this rule fires for the given panel
    pub fn applies(&self, panel: &[SpecialistKind]) -> bool {
        panel.contains(&self.speaker) && self.condition.holds(panel)
    }

    pub fn render(&self, ctx: &ScriptContext<'_>) -> String {
        (self.template)(ctx)
    }
}

impl std::fmt::Debug for ContributionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContributionRule")
            .field("speaker", &self.speaker)
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

pub const SYSTEM_NO_SPECIALISTS: &str =
    "No specialists selected. Add at least one specialist to start the consultation.";

pub const SYSTEM_SUMMARY: &str =
    "Consultation complete. The consensus summary is ready for review.";

/// Opening turn when the radiologist is on the panel
pub fn radiologist_opening(ctx: &ScriptContext<'_>) -> String {
    format!(
        "I've reviewed the imaging for {}. The scan shows a {} of roughly 3.2 cm with irregular borders.",
        ctx.case_label(),
        ctx.variation
            .pick("suspicious lesion", "area of potential inflammation"),
    )
}

/// Opening turn for whichever specialist was selected first
pub fn generic_opening(ctx: &ScriptContext<'_>, name: &str) -> String {
    format!(
        "Let's begin with {}. Speaking as the {}, I'd like to walk through the key findings before we commit to a direction.",
        ctx.case_label(),
        name,
    )
}

/// Poll raised by the oncologist
pub fn oncologist_poll(_ctx: &ScriptContext<'_>) -> String {
    "Can we agree on the plan: staging PET-CT, a review of surgical options, and treatment decisions at the next board?"
        .to_string()
}

/// Poll raised by the first selected specialist when no oncologist attends
pub fn generic_poll(_ctx: &ScriptContext<'_>) -> String {
    "Before we close, does everyone agree with the points raised so far?".to_string()
}

fn pathologist_report(ctx: &ScriptContext<'_>) -> String {
    format!(
        "The biopsy confirms {}. Histology shows a moderately differentiated tumor, grade 2 of 3.",
        ctx.variation
            .pick("adenocarcinoma", "squamous cell carcinoma"),
    )
}

fn oncologist_with_pathology(_ctx: &ScriptContext<'_>) -> String {
    "Given the pathology findings, I'd start staging and consider a platinum-based chemotherapy regimen."
        .to_string()
}

fn oncologist_without_pathology(_ctx: &ScriptContext<'_>) -> String {
    "Without tissue confirmation I can't commit to systemic therapy; we need a biopsy first."
        .to_string()
}

fn surgeon_assessment(_ctx: &ScriptContext<'_>) -> String {
    "Based on its location and size, the lesion looks resectable. I'd want nodal involvement excluded before surgery."
        .to_string()
}

fn radiologist_follow_up(_ctx: &ScriptContext<'_>) -> String {
    "I see no enlarged nodes on the current scan, but a PET-CT would help rule out distant spread before surgical planning."
        .to_string()
}

fn radiation_alternative(_ctx: &ScriptContext<'_>) -> String {
    "If the patient turns out not to be a surgical candidate, stereotactic radiotherapy is a reasonable alternative treatment."
        .to_string()
}

fn cardiology_clearance(_ctx: &ScriptContext<'_>) -> String {
    "Before any treatment starts we should get an echocardiogram; some chemotherapy agents carry cardiotoxicity risk."
        .to_string()
}

fn neurology_screen(_ctx: &ScriptContext<'_>) -> String {
    "I'd recommend a brain MRI to exclude metastases; new neurological symptoms would change the plan."
        .to_string()
}

/// Contribution table, evaluated top to bottom after the opening turn
pub const CONTRIBUTION_RULES: &[ContributionRule] = &[
    ContributionRule {
        speaker: SpecialistKind::Pathologist,
        condition: Condition::Always,
        template: pathologist_report,
    },
    ContributionRule {
        speaker: SpecialistKind::Oncologist,
        condition: Condition::With(SpecialistKind::Pathologist),
        template: oncologist_with_pathology,
    },
    ContributionRule {
        speaker: SpecialistKind::Oncologist,
        condition: Condition::Without(SpecialistKind::Pathologist),
        template: oncologist_without_pathology,
    },
    ContributionRule {
        speaker: SpecialistKind::Surgeon,
        condition: Condition::Always,
        template: surgeon_assessment,
    },
    ContributionRule {
        speaker: SpecialistKind::Radiologist,
        condition: Condition::With(SpecialistKind::Surgeon),
        template: radiologist_follow_up,
    },
    ContributionRule {
        speaker: SpecialistKind::RadiationOncologist,
        condition: Condition::Always,
        template: radiation_alternative,
    },
    ContributionRule {
        speaker: SpecialistKind::Cardiologist,
        condition: Condition::Always,
        template: cardiology_clearance,
    },
    ContributionRule {
        speaker: SpecialistKind::Neurologist,
        condition: Condition::Always,
        template: neurology_screen,
    },
];
