use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::model::{
    AdvanceOutcome, Identity, Phase, Question, QuizLimits, QuizSession, SessionError, TickOutcome,
};

use super::time_fmt::format_mmss;

/// View-model over the core session machine.
///
/// Lives in a single `Signal` owned by the root component; the timer loop,
/// the integrity monitor, and every input handler all write through that one
/// handle, so there is exactly one copy of the session state.
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` when the bank has no questions.
    pub fn new(bank: &Arc<Vec<Question>>, limits: QuizLimits) -> Result<Self, SessionError> {
        Ok(Self {
            session: QuizSession::new(bank.as_ref().clone(), limits)?,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn identity(&self) -> &Identity {
        self.session.identity()
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        self.session.answers()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }

    #[must_use]
    pub fn current_prompt(&self) -> &str {
        self.session.current_question().prompt()
    }

    #[must_use]
    pub fn current_options(&self) -> &[String] {
        self.session.current_question().options()
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.session.selected_option()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.session.is_last_question()
    }

    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.session.score()
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.session.finished_at()
    }

    #[must_use]
    pub fn question_timer_label(&self) -> String {
        format_mmss(self.session.question_seconds_left())
    }

    #[must_use]
    pub fn global_timer_label(&self) -> String {
        format_mmss(self.session.global_seconds_left())
    }

    /// True while the question timer is in its final stretch.
    #[must_use]
    pub fn question_timer_urgent(&self) -> bool {
        self.session.question_seconds_left() < 10
    }

    /// True while the global timer is in its final minute.
    #[must_use]
    pub fn global_timer_urgent(&self) -> bool {
        self.session.global_seconds_left() < 60
    }

    /// Progress through the bank as a whole-number percent, counting the
    /// question currently on screen.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        (((self.current_index() + 1) * 100) / self.total_questions()) as u32
    }

    pub fn lock(&mut self) {
        self.session.lock();
    }

    /// # Errors
    ///
    /// Propagates `SessionError::WrongPhase` from the machine.
    pub fn start(&mut self, identity: Identity, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.session.start(identity, now)
    }

    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        self.session.select_answer(option)
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        self.session.advance()
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.session.tick()
    }

    pub fn begin_submission(&mut self) -> bool {
        self.session.begin_submission()
    }

    pub fn finish(&mut self, score: u32, now: DateTime<Utc>) {
        self.session.finish(score, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    fn vm(questions: usize) -> QuizVm {
        let bank = Arc::new(
            (0..questions)
                .map(|_| Question::new("prompt", vec!["a".into(), "b".into()], 0).unwrap())
                .collect::<Vec<_>>(),
        );
        QuizVm::new(&bank, QuizLimits::default()).unwrap()
    }

    #[test]
    fn progress_counts_the_question_on_screen() {
        let mut vm = vm(4);
        vm.start(Identity::default(), fixed_now()).unwrap();
        assert_eq!(vm.progress_percent(), 25);
        vm.advance();
        assert_eq!(vm.progress_percent(), 50);
    }

    #[test]
    fn timer_labels_render_mmss() {
        let vm = vm(2);
        assert_eq!(vm.question_timer_label(), "0:30");
        assert_eq!(vm.global_timer_label(), "15:00");
    }
}
