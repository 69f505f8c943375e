//! Playback sequencer
//!
//! Reveals a precomputed [`SequencerRun`] turn by turn:
//!
//! ```text
//! Idle ──► Running { cursor, phase } ──► Complete
//!               │
//!               └──(cancel / handle dropped)──► Cancelled
//!
//! per turn:  Waiting ──lead-in──► TypingIndicatorShown ──typing delay──► Revealed
//! ```
//!
//! Only one timer is pending at a time, and every wait races the run's
//! [`CancellationToken`]. After cancellation the sink is never called again.

use crate::ports::pacing::Pacing;
use crate::ports::transcript::TranscriptSink;
use board_domain::{ConsensusItem, SequencerRun};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Sub-state of the turn under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Waiting,
    TypingIndicatorShown,
    Revealed,
}

/// Observable state of a playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running {
        cursor: usize,
        phase: TurnPhase,
    },
    Complete,
    Cancelled,
}

impl PlaybackState {
    pub fn is_running(&self) -> bool {
        matches!(self, PlaybackState::Running { .. })
    }

    /// Complete or cancelled
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlaybackState::Complete | PlaybackState::Cancelled)
    }
}

/// Errors that can end a playback early
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Playback cancelled")]
    Cancelled,

    #[error("Playback was already awaited")]
    AlreadyAwaited,

    #[error("Playback task failed: {0}")]
    TaskFailed(String),
}

impl PlaybackError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PlaybackError::Cancelled)
    }
}

/// Drives transcript reveal for prepared runs
#[derive(Clone)]
pub struct PlaybackSequencer {
    pacing: Arc<dyn Pacing>,
}

impl PlaybackSequencer {
    pub fn new(pacing: Arc<dyn Pacing>) -> Self {
        Self { pacing }
    }

    /// Play a run on the current task until it completes or `token` fires
    pub async fn play(
        &self,
        run: &SequencerRun,
        sink: &dyn TranscriptSink,
        token: &CancellationToken,
    ) -> Result<Vec<ConsensusItem>, PlaybackError> {
        let (state, _) = watch::channel(PlaybackState::Idle);
        let reveal = Reveal {
            run,
            sink,
            pacing: self.pacing.as_ref(),
            token,
            state: &state,
        };
        reveal.drive().await
    }

    /// Play a run on a background task
    ///
    /// The returned handle owns the task: cancelling it, or simply dropping
    /// it, stops the playback before its next transcript mutation.
    pub fn spawn(&self, run: Arc<SequencerRun>, sink: Arc<dyn TranscriptSink>) -> PlaybackHandle {
        let token = CancellationToken::new();
        let (state_tx, state_rx) = watch::channel(PlaybackState::Idle);
        let pacing = Arc::clone(&self.pacing);
        let task_token = token.clone();

        let task = tokio::spawn(async move {
            let reveal = Reveal {
                run: &run,
                sink: sink.as_ref(),
                pacing: pacing.as_ref(),
                token: &task_token,
                state: &state_tx,
            };
            reveal.drive().await
        });

        PlaybackHandle {
            token,
            state: state_rx,
            task: Some(task),
        }
    }
}

/// Borrowed context of one playback
struct Reveal<'a> {
    run: &'a SequencerRun,
    sink: &'a dyn TranscriptSink,
    pacing: &'a dyn Pacing,
    token: &'a CancellationToken,
    state: &'a watch::Sender<PlaybackState>,
}

impl Reveal<'_> {
    async fn drive(&self) -> Result<Vec<ConsensusItem>, PlaybackError> {
        let result = self.reveal_all().await;
        if let Err(PlaybackError::Cancelled) = result {
            self.state.send_replace(PlaybackState::Cancelled);
            info!("Playback of run {} cancelled", self.run.id);
        }
        result
    }

    async fn reveal_all(&self) -> Result<Vec<ConsensusItem>, PlaybackError> {
        self.ensure_live()?;
        info!(
            "Starting playback of run {} ({} turns)",
            self.run.id,
            self.run.turn_count()
        );
        self.set(0, TurnPhase::Waiting);
        self.sink.on_playback_start(self.run);

        for (cursor, turn) in self.run.script.iter().enumerate() {
            self.set(cursor, TurnPhase::Waiting);
            self.pause(self.pacing.lead_in()).await?;

            // System turns reveal without a typing indicator
            let specialist = turn.speaker.specialist();
            if let Some(specialist) = &specialist {
                self.ensure_live()?;
                self.sink.on_typing(Some(specialist));
                self.set(cursor, TurnPhase::TypingIndicatorShown);
            }

            self.pause(self.pacing.typing_delay(&turn.speaker)).await?;

            self.ensure_live()?;
            self.sink.on_turn_revealed(cursor, turn);
            if specialist.is_some() {
                self.sink.on_typing(None);
            }
            self.set(cursor, TurnPhase::Revealed);
            debug!("Revealed turn {} from {}", cursor, turn.speaker);
        }

        self.ensure_live()?;
        self.sink.on_typing(None);
        self.state.send_replace(PlaybackState::Complete);
        self.sink.on_complete(&self.run.consensus);
        info!("Playback of run {} complete", self.run.id);

        Ok(self.run.consensus.clone())
    }

    /// Wait for `delay`, unless the run is cancelled first
    async fn pause(&self, delay: Duration) -> Result<(), PlaybackError> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(PlaybackError::Cancelled),
            _ = tokio::time::sleep(delay) => self.ensure_live(),
        }
    }

    fn ensure_live(&self) -> Result<(), PlaybackError> {
        if self.token.is_cancelled() {
            Err(PlaybackError::Cancelled)
        } else {
            Ok(())
        }
    }

    fn set(&self, cursor: usize, phase: TurnPhase) {
        self.state
            .send_replace(PlaybackState::Running { cursor, phase });
    }
}

/// Owner of a spawned playback
///
/// Dropping the handle cancels the playback and aborts its task.
pub struct PlaybackHandle {
    token: CancellationToken,
    state: watch::Receiver<PlaybackState>,
    task: Option<JoinHandle<Result<Vec<ConsensusItem>, PlaybackError>>>,
}

impl PlaybackHandle {
    /// Request cancellation; the task stops before its next mutation
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Token that cancels this playback when fired
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        *self.state.borrow()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.state.clone()
    }

    /// Whether the background task has exited
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }

    /// Wait for the playback to finish and return its consensus
    pub async fn wait(&mut self) -> Result<Vec<ConsensusItem>, PlaybackError> {
        let Some(task) = self.task.as_mut() else {
            return Err(PlaybackError::AlreadyAwaited);
        };
        let joined = task.await;
        self.task = None;

        match joined {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(PlaybackError::Cancelled),
            Err(e) => Err(PlaybackError::TaskFailed(e.to_string())),
        }
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::pacing::FixedPacing;
    use crate::ports::transcript::recording::{Event, RecordingTranscript};
    use board_domain::{FixedVariation, Specialist, SpecialistKind, Speaker};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn run_with(kinds: &[SpecialistKind]) -> SequencerRun {
        let selected = kinds.iter().map(|k| Specialist::get(*k)).collect();
        SequencerRun::prepare(selected, "lung mass".into(), &FixedVariation(true))
    }

    /// radiologist, pathologist, oncologist, cardiologist, poll, summary
    fn six_turn_run() -> SequencerRun {
        run_with(&[
            SpecialistKind::Radiologist,
            SpecialistKind::Pathologist,
            SpecialistKind::Oncologist,
            SpecialistKind::Cardiologist,
        ])
    }

    fn sequencer() -> PlaybackSequencer {
        // Specialist turns take 600ms, system turns 300ms
        PlaybackSequencer::new(Arc::new(FixedPacing::new(ms(100), ms(200), ms(500))))
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_playback_reveals_in_order() {
        let run = Arc::new(six_turn_run());
        assert_eq!(run.turn_count(), 6);
        let sink = Arc::new(RecordingTranscript::default());

        let mut handle = sequencer().spawn(Arc::clone(&run), sink.clone());
        let consensus = handle.wait().await.unwrap();

        assert_eq!(consensus, run.consensus);
        assert_eq!(sink.revealed(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(handle.state(), PlaybackState::Complete);
        assert!(handle.is_finished());

        let events = sink.events();
        assert_eq!(events.first(), Some(&Event::Start));
        assert_eq!(events.last(), Some(&Event::Complete(run.consensus.len())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_system_turns_skip_typing_indicator() {
        let run = Arc::new(run_with(&[]));
        let sink = Arc::new(RecordingTranscript::default());

        let mut handle = sequencer().spawn(run, sink.clone());
        handle.wait().await.unwrap();

        assert_eq!(
            sink.events(),
            vec![
                Event::Start,
                Event::Revealed(0, Speaker::System),
                Event::Revealed(1, Speaker::System),
                Event::Typing(None),
                Event::Complete(0),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_indicator_precedes_each_specialist_turn() {
        let run = Arc::new(run_with(&[SpecialistKind::Neurologist]));
        let sink = Arc::new(RecordingTranscript::default());

        let mut handle = sequencer().spawn(Arc::clone(&run), sink.clone());
        handle.wait().await.unwrap();

        let neuro = Speaker::Specialist(SpecialistKind::Neurologist);
        assert_eq!(
            sink.events(),
            vec![
                Event::Start,
                Event::Typing(Some(SpecialistKind::Neurologist)),
                Event::Revealed(0, neuro),
                Event::Typing(None),
                Event::Typing(Some(SpecialistKind::Neurologist)),
                Event::Revealed(1, neuro),
                Event::Typing(None),
                Event::Revealed(2, Speaker::System),
                Event::Typing(None),
                Event::Complete(run.consensus.len()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_second_turn_stops_all_mutations() {
        let run = Arc::new(six_turn_run());
        let sink = Arc::new(RecordingTranscript::default());
        let mut handle = sequencer().spawn(Arc::clone(&run), sink.clone());

        // Turn 1 is revealed at 1200ms; turn 2 is still in its lead-in
        tokio::time::sleep(ms(1250)).await;
        assert_eq!(sink.revealed(), vec![0, 1]);
        assert_eq!(
            handle.state(),
            PlaybackState::Running {
                cursor: 2,
                phase: TurnPhase::Waiting
            }
        );

        handle.cancel();
        let result = handle.wait().await;
        assert_eq!(result, Err(PlaybackError::Cancelled));
        assert!(handle.is_finished());

        let frozen = sink.events();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(sink.events(), frozen);
        assert_eq!(handle.state(), PlaybackState::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels_playback() {
        let run = Arc::new(six_turn_run());
        let sink = Arc::new(RecordingTranscript::default());
        let handle = sequencer().spawn(run, sink.clone());
        let mut state = handle.subscribe();

        tokio::time::sleep(ms(650)).await;
        assert_eq!(sink.revealed(), vec![0]);

        drop(handle);
        tokio::time::sleep(Duration::from_secs(60)).await;

        assert_eq!(sink.revealed(), vec![0]);
        assert!(!matches!(
            *state.borrow_and_update(),
            PlaybackState::Complete
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_twice_reports_already_awaited() {
        let run = Arc::new(run_with(&[]));
        let mut handle = sequencer().spawn(run, Arc::new(RecordingTranscript::default()));

        assert!(handle.wait().await.is_ok());
        assert_eq!(handle.wait().await, Err(PlaybackError::AlreadyAwaited));
    }

    #[tokio::test(start_paused = true)]
    async fn test_inline_play_with_pre_cancelled_token_touches_nothing() {
        let run = six_turn_run();
        let sink = RecordingTranscript::default();
        let token = CancellationToken::new();
        token.cancel();

        let result = sequencer().play(&run, &sink, &token).await;

        assert_eq!(result, Err(PlaybackError::Cancelled));
        assert!(sink.events().is_empty());
    }

    #[tokio::test]
    async fn test_instant_pacing_completes() {
        let run = six_turn_run();
        let sink = RecordingTranscript::default();
        let sequencer = PlaybackSequencer::new(Arc::new(FixedPacing::instant()));

        let consensus = sequencer
            .play(&run, &sink, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(consensus, run.consensus);
        assert_eq!(sink.revealed().len(), 6);
    }

    #[test]
    fn test_state_helpers() {
        assert!(PlaybackState::Complete.is_terminal());
        assert!(PlaybackState::Cancelled.is_terminal());
        assert!(!PlaybackState::Idle.is_terminal());
        assert!(
            PlaybackState::Running {
                cursor: 0,
                phase: TurnPhase::Waiting
            }
            .is_running()
        );
    }
}
