//! Consultation Controller
//!
//! Owns the single active consultation of a session. Starting a new
//! consultation always cancels the previous playback first, so at most one
//! run ever mutates a transcript.

use crate::ports::transcript::TranscriptSink;
use crate::use_cases::playback::{PlaybackError, PlaybackHandle, PlaybackSequencer, PlaybackState};
use crate::use_cases::start_consultation::{StartConsultationInput, StartConsultationUseCase};
use board_domain::{ConsensusItem, SequencerRun};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Errors surfaced by the controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsultationError {
    #[error("No consultation is active")]
    NoActiveConsultation,

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

impl ConsultationError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ConsultationError::Playback(e) if e.is_cancelled())
    }
}

struct ActiveConsultation {
    run: Arc<SequencerRun>,
    handle: PlaybackHandle,
}

/// Session-level controller for consultations
pub struct ConsultationController {
    start: StartConsultationUseCase,
    sequencer: PlaybackSequencer,
    active: Option<ActiveConsultation>,
}

impl ConsultationController {
    pub fn new(start: StartConsultationUseCase, sequencer: PlaybackSequencer) -> Self {
        Self {
            start,
            sequencer,
            active: None,
        }
    }

    /// Start a new consultation, cancelling any playback still running
    pub fn begin(
        &mut self,
        input: StartConsultationInput,
        sink: Arc<dyn TranscriptSink>,
    ) -> Arc<SequencerRun> {
        self.end();

        let run = Arc::new(self.start.execute(input));
        let handle = self.sequencer.spawn(Arc::clone(&run), sink);
        self.active = Some(ActiveConsultation {
            run: Arc::clone(&run),
            handle,
        });
        run
    }

    /// Cancel and forget the active consultation, if any
    pub fn end(&mut self) {
        if let Some(active) = self.active.take() {
            if !active.handle.state().is_terminal() {
                info!("Ending consultation {} before completion", active.run.id);
            }
            active.handle.cancel();
        }
    }

    /// Wait for the active playback to finish
    pub async fn wait(&mut self) -> Result<Vec<ConsensusItem>, ConsultationError> {
        let active = self
            .active
            .as_mut()
            .ok_or(ConsultationError::NoActiveConsultation)?;
        Ok(active.handle.wait().await?)
    }

    /// The run currently owned by the controller
    pub fn current_run(&self) -> Option<&Arc<SequencerRun>> {
        self.active.as_ref().map(|a| &a.run)
    }

    pub fn state(&self) -> PlaybackState {
        self.active
            .as_ref()
            .map_or(PlaybackState::Idle, |a| a.handle.state())
    }

    /// Token that cancels the active playback, for signal handlers
    pub fn cancellation_token(&self) -> Option<CancellationToken> {
        self.active.as_ref().map(|a| a.handle.cancellation_token())
    }
}

impl Drop for ConsultationController {
    fn drop(&mut self) {
        self.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::pacing::FixedPacing;
    use crate::ports::transcript::recording::RecordingTranscript;
    use board_domain::{FixedVariation, SpecialistKind};
    use std::time::Duration;

    fn controller() -> ConsultationController {
        ConsultationController::new(
            StartConsultationUseCase::new(Arc::new(FixedVariation(true))),
            PlaybackSequencer::new(Arc::new(FixedPacing::new(
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(500),
            ))),
        )
    }

    fn lung_mass() -> StartConsultationInput {
        StartConsultationInput::new(
            "55-year-old with a lung mass",
            vec![
                SpecialistKind::Radiologist,
                SpecialistKind::Pathologist,
                SpecialistKind::Oncologist,
            ],
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_begin_and_wait_returns_consensus() {
        let mut controller = controller();
        let sink = Arc::new(RecordingTranscript::default());

        let run = controller.begin(lung_mass(), sink.clone());
        let consensus = controller.wait().await.unwrap();

        assert_eq!(consensus, run.consensus);
        assert_eq!(sink.revealed().len(), run.turn_count());
        assert_eq!(controller.state(), PlaybackState::Complete);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_consultation_cancels_previous() {
        let mut controller = controller();
        let first = Arc::new(RecordingTranscript::default());
        let second = Arc::new(RecordingTranscript::default());

        controller.begin(lung_mass(), first.clone());
        tokio::time::sleep(Duration::from_millis(650)).await;
        assert_eq!(first.revealed(), vec![0]);

        let run = controller.begin(lung_mass(), second.clone());
        controller.wait().await.unwrap();

        assert_eq!(first.revealed(), vec![0]);
        assert_eq!(second.revealed().len(), run.turn_count());
    }

    #[tokio::test(start_paused = true)]
    async fn test_token_cancellation_surfaces_as_cancelled() {
        let mut controller = controller();
        controller.begin(lung_mass(), Arc::new(RecordingTranscript::default()));

        controller.cancellation_token().unwrap().cancel();
        let err = controller.wait().await.unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(controller.state(), PlaybackState::Cancelled);
    }

    #[tokio::test]
    async fn test_wait_without_consultation() {
        let mut controller = controller();
        assert_eq!(
            controller.wait().await,
            Err(ConsultationError::NoActiveConsultation)
        );
        assert!(controller.current_run().is_none());
        assert_eq!(controller.state(), PlaybackState::Idle);
    }
}
