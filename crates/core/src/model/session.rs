use chrono::{DateTime, Duration, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question bank is empty")]
    EmptyBank,

    #[error("not allowed while in phase {phase:?}")]
    WrongPhase { phase: Phase },

    #[error("option {option} is out of range for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
}

/// One discrete state of the quiz lifecycle.
///
/// Transitions only move forward along the lifecycle graph; `Locked` and
/// `Finished` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Auth,
    Locked,
    Quiz,
    Submitting,
    Finished,
}

/// Who is taking the quiz. Collected once on the entry form, immutable after
/// the session leaves `Auth`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// The fixed timing constants of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizLimits {
    /// Seconds allowed per question before the session auto-advances.
    pub question_secs: u32,
    /// Seconds allowed for the whole session before a forced submission.
    pub total_secs: u32,
    /// Minutes an identifier is denied a retake after a submission.
    pub lockout_mins: u32,
}

impl Default for QuizLimits {
    fn default() -> Self {
        Self {
            question_secs: 30,
            total_secs: 15 * 60,
            lockout_mins: 30,
        }
    }
}

impl QuizLimits {
    #[must_use]
    pub fn lockout_window(&self) -> Duration {
        Duration::minutes(i64::from(self.lockout_mins))
    }
}

/// Result of one one-second timer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not in `Quiz`; nothing moved.
    Idle,
    /// Both timers decremented, nothing expired.
    Continue,
    /// The question timer expired with questions remaining; the pointer moved.
    Advanced,
    /// A timer expired in a way that requires submission.
    SubmitDue { forced: bool },
}

/// Result of an explicit `Next` action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Not in `Quiz`; the action was inert.
    Ignored,
    /// Moved to the next question.
    Moved,
    /// Already at the last question; submission is due instead.
    SubmitDue,
}

/// The quiz lifecycle state machine.
///
/// Owns the question pointer, the per-question answer record, and both
/// countdown timers. All operations are synchronous; the UI layer drives
/// `tick` from its one-second loop and funnels every `SubmitDue` through
/// `begin_submission`, whose phase check is the re-entrancy guard that keeps
/// submissions single-shot even when two triggers fire in the same tick.
pub struct QuizSession {
    bank: Vec<Question>,
    limits: QuizLimits,
    phase: Phase,
    current: usize,
    answers: Vec<Option<usize>>,
    identity: Identity,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    score: Option<u32>,
    question_seconds_left: u32,
    global_seconds_left: u32,
}

impl QuizSession {
    /// Create a fresh session in `Auth` over the given bank.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` when the bank has no questions.
    pub fn new(bank: Vec<Question>, limits: QuizLimits) -> Result<Self, SessionError> {
        if bank.is_empty() {
            return Err(SessionError::EmptyBank);
        }
        let answers = vec![None; bank.len()];

        Ok(Self {
            bank,
            limits,
            phase: Phase::Auth,
            current: 0,
            answers,
            identity: Identity::default(),
            started_at: None,
            finished_at: None,
            score: None,
            question_seconds_left: limits.question_secs,
            global_seconds_left: limits.total_secs,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn limits(&self) -> QuizLimits {
        self.limits
    }

    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.bank
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.bank[self.current]
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// The recorded selection for the current question, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.answers[self.current]
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    #[must_use]
    pub fn question_seconds_left(&self) -> u32 {
        self.question_seconds_left
    }

    #[must_use]
    pub fn global_seconds_left(&self) -> u32 {
        self.global_seconds_left
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.bank.len()
    }

    /// Deny entry: `Auth → Locked`. Inert in any other phase, so a late gate
    /// result cannot knock over a session that already started.
    pub fn lock(&mut self) {
        if self.phase == Phase::Auth {
            self.phase = Phase::Locked;
        }
    }

    /// Admit the candidate: `Auth → Quiz`. Records the identity, stamps
    /// `started_at`, and arms both timers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPhase` outside `Auth`.
    pub fn start(&mut self, identity: Identity, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.phase != Phase::Auth {
            return Err(SessionError::WrongPhase { phase: self.phase });
        }

        self.identity = identity;
        self.started_at = Some(now);
        self.question_seconds_left = self.limits.question_secs;
        self.global_seconds_left = self.limits.total_secs;
        self.phase = Phase::Quiz;
        Ok(())
    }

    /// Record (or overwrite) the selection for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPhase` outside `Quiz` and
    /// `SessionError::OptionOutOfRange` for an invalid option index.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        if self.phase != Phase::Quiz {
            return Err(SessionError::WrongPhase { phase: self.phase });
        }
        if !self.current_question().accepts_option(option) {
            return Err(SessionError::OptionOutOfRange {
                question: self.current,
                option,
            });
        }

        self.answers[self.current] = Some(option);
        Ok(())
    }

    /// Explicit `Next`/`Finish` action. At the last question this reports
    /// `SubmitDue` instead of moving the pointer.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.phase != Phase::Quiz {
            return AdvanceOutcome::Ignored;
        }
        if self.is_last_question() {
            return AdvanceOutcome::SubmitDue;
        }

        self.move_to_next();
        AdvanceOutcome::Moved
    }

    /// One one-second step of both countdown timers.
    ///
    /// Inert outside `Quiz` (leaving the phase cancels the timers without any
    /// bookkeeping at the call site). The global timer is evaluated first, so
    /// when both expire on the same tick the forced global submission wins.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Quiz {
            return TickOutcome::Idle;
        }

        self.global_seconds_left = self.global_seconds_left.saturating_sub(1);
        if self.global_seconds_left == 0 {
            return TickOutcome::SubmitDue { forced: true };
        }

        self.question_seconds_left = self.question_seconds_left.saturating_sub(1);
        if self.question_seconds_left == 0 {
            if self.is_last_question() {
                return TickOutcome::SubmitDue { forced: false };
            }
            self.move_to_next();
            return TickOutcome::Advanced;
        }

        TickOutcome::Continue
    }

    /// Claim the single submission slot: `Quiz → Submitting`, returning
    /// whether this caller won it. Every other phase returns `false`, which
    /// makes double triggers (same-tick timer expiry plus anti-cheat, a
    /// second `Next` after the first) no-ops.
    pub fn begin_submission(&mut self) -> bool {
        if self.phase != Phase::Quiz {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Land the session: `Submitting → Finished` with the score computed from
    /// the answers at submission time. Inert in any other phase, so the score
    /// is written exactly once.
    pub fn finish(&mut self, score: u32, now: DateTime<Utc>) {
        if self.phase != Phase::Submitting {
            return;
        }
        self.score = Some(score);
        self.finished_at = Some(now);
        self.phase = Phase::Finished;
    }

    fn move_to_next(&mut self) {
        debug_assert!(self.current + 1 < self.bank.len());
        self.current += 1;
        self.question_seconds_left = self.limits.question_secs;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("bank_len", &self.bank.len())
            .field("question_seconds_left", &self.question_seconds_left)
            .field("global_seconds_left", &self.global_seconds_left)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn question(correct: usize) -> Question {
        Question::new(
            "prompt",
            vec!["a".into(), "b".into(), "c".into()],
            correct,
        )
        .unwrap()
    }

    fn limits(question_secs: u32, total_secs: u32) -> QuizLimits {
        QuizLimits {
            question_secs,
            total_secs,
            lockout_mins: 30,
        }
    }

    fn started(bank: Vec<Question>, limits: QuizLimits) -> QuizSession {
        let mut session = QuizSession::new(bank, limits).unwrap();
        session
            .start(
                Identity {
                    name: "Ada".into(),
                    email: "ada@example.com".into(),
                },
                fixed_now(),
            )
            .unwrap();
        session
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuizSession::new(Vec::new(), QuizLimits::default()).unwrap_err();
        assert!(matches!(err, SessionError::EmptyBank));
    }

    #[test]
    fn lock_only_applies_in_auth() {
        let mut session = QuizSession::new(vec![question(0)], QuizLimits::default()).unwrap();
        session.lock();
        assert_eq!(session.phase(), Phase::Locked);

        // A late lock against a running session must not terminate it.
        let mut session = started(vec![question(0)], QuizLimits::default());
        session.lock();
        assert_eq!(session.phase(), Phase::Quiz);
    }

    #[test]
    fn start_is_rejected_when_locked() {
        let mut session = QuizSession::new(vec![question(0)], QuizLimits::default()).unwrap();
        session.lock();
        let err = session.start(Identity::default(), fixed_now()).unwrap_err();
        assert!(matches!(err, SessionError::WrongPhase { phase: Phase::Locked }));
    }

    #[test]
    fn selection_overwrites_only_the_current_slot() {
        let mut session = started(vec![question(0), question(1)], QuizLimits::default());

        session.select_answer(2).unwrap();
        session.select_answer(1).unwrap();
        assert_eq!(session.answers(), &[Some(1), None]);

        assert_eq!(session.advance(), AdvanceOutcome::Moved);
        session.select_answer(0).unwrap();
        assert_eq!(session.answers(), &[Some(1), Some(0)]);
    }

    #[test]
    fn selection_rejects_out_of_range_option() {
        let mut session = started(vec![question(0)], QuizLimits::default());
        let err = session.select_answer(3).unwrap_err();
        assert!(matches!(
            err,
            SessionError::OptionOutOfRange { question: 0, option: 3 }
        ));
        assert_eq!(session.selected_option(), None);
    }

    #[test]
    fn advance_at_last_question_reports_submit_due() {
        let mut session = started(vec![question(0), question(1)], QuizLimits::default());
        assert_eq!(session.advance(), AdvanceOutcome::Moved);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.advance(), AdvanceOutcome::SubmitDue);
        // The pointer never moves past the last question.
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn advance_resets_question_timer() {
        let mut session = started(vec![question(0), question(1)], limits(10, 900));
        assert_eq!(session.tick(), TickOutcome::Continue);
        assert_eq!(session.question_seconds_left(), 9);

        session.advance();
        assert_eq!(session.question_seconds_left(), 10);
    }

    #[test]
    fn question_timer_expiry_advances_mid_quiz() {
        let mut session = started(vec![question(0), question(1)], limits(2, 900));
        assert_eq!(session.tick(), TickOutcome::Continue);
        assert_eq!(session.tick(), TickOutcome::Advanced);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.question_seconds_left(), 2);
    }

    #[test]
    fn question_timer_expiry_on_last_question_requests_submission() {
        let mut session = started(vec![question(0)], limits(2, 900));
        assert_eq!(session.tick(), TickOutcome::Continue);
        assert_eq!(
            session.tick(),
            TickOutcome::SubmitDue { forced: false }
        );
        // Still in Quiz until the dispatcher claims the submission slot.
        assert_eq!(session.phase(), Phase::Quiz);
    }

    #[test]
    fn global_timer_expiry_forces_submission_at_any_index() {
        let mut session = started(vec![question(0), question(1), question(2)], limits(30, 2));
        assert_eq!(session.tick(), TickOutcome::Continue);
        assert_eq!(session.tick(), TickOutcome::SubmitDue { forced: true });
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn global_expiry_wins_when_both_timers_expire_on_the_same_tick() {
        let mut session = started(vec![question(0)], limits(1, 1));
        assert_eq!(session.tick(), TickOutcome::SubmitDue { forced: true });
    }

    #[test]
    fn ticks_are_inert_outside_quiz() {
        let mut session = QuizSession::new(vec![question(0)], limits(5, 100)).unwrap();
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.global_seconds_left(), 100);

        let mut session = started(vec![question(0)], limits(5, 100));
        assert!(session.begin_submission());
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.global_seconds_left(), 100);
    }

    #[test]
    fn submission_slot_is_claimed_exactly_once() {
        let mut session = started(vec![question(0)], QuizLimits::default());
        assert!(session.begin_submission());
        // A second trigger in the same tick loses the race and becomes a no-op.
        assert!(!session.begin_submission());
        assert_eq!(session.phase(), Phase::Submitting);
    }

    #[test]
    fn finish_sets_score_once_and_later_input_is_inert() {
        let mut session = started(vec![question(2), question(1)], QuizLimits::default());
        session.select_answer(2).unwrap();
        session.advance();
        assert!(session.begin_submission());

        session.finish(1, fixed_now());
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.score(), Some(1));
        assert_eq!(session.finished_at(), Some(fixed_now()));

        // Terminal: selection, advancing, ticking, and a second finish all
        // leave the session untouched.
        assert!(session.select_answer(0).is_err());
        assert_eq!(session.advance(), AdvanceOutcome::Ignored);
        assert_eq!(session.tick(), TickOutcome::Idle);
        session.finish(0, fixed_now());
        assert_eq!(session.score(), Some(1));
    }

    #[test]
    fn finish_outside_submitting_is_a_no_op() {
        let mut session = started(vec![question(0)], QuizLimits::default());
        session.finish(1, fixed_now());
        assert_eq!(session.phase(), Phase::Quiz);
        assert_eq!(session.score(), None);
    }
}
