use thiserror::Error;
use tokio::time::Instant;
use uuid::Uuid;

use crate::models::{AnswerSheet, Question, QuizResult, OPTION_COUNT};

use super::countdown::{Countdown, Tick};
use super::scoring::evaluate;

/// Precondition violations. The session is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is no longer active")]
    NotActive,
    #[error("option {index} is out of range")]
    OptionOutOfRange { index: usize },
    #[error("question {index} is out of range (expected 0..{total})")]
    QuestionOutOfRange { index: usize, total: usize },
}

/// Lifecycle of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Active,
    Completed(QuizResult),
}

/// What a delivered timer tick did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTick {
    Running(u32),
    Expired(QuizResult),
}

/// One attempt at the question bank.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    questions: &'static [Question],
    phase: Phase,
    current_index: usize,
    answers: AnswerSheet,
    countdown: Countdown,
    started_at: Instant,
}

impl QuizSession {
    /// Start a session on the first question with every answer blank.
    ///
    /// Panics if `questions` is empty.
    pub fn start(questions: &'static [Question], time_limit_secs: u32) -> Self {
        assert!(!questions.is_empty(), "a quiz needs at least one question");

        let session = Self {
            id: Uuid::new_v4(),
            questions,
            phase: Phase::Active,
            current_index: 0,
            answers: AnswerSheet::new(questions.len()),
            countdown: Countdown::new(time_limit_secs),
            started_at: Instant::now(),
        };
        tracing::info!(session = %session.id, time_limit_secs, "quiz session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active)
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.phase {
            Phase::Completed(result) => Some(result),
            Phase::Active => None,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.current_index]
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current_index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn formatted_remaining(&self) -> String {
        self.countdown.formatted()
    }

    /// Position through the bank as a percentage, counting the current question.
    pub fn progress_percent(&self) -> u16 {
        ((self.current_index + 1) * 100 / self.questions.len()) as u16
    }

    /// Choose `option` for the current question without moving on.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        self.ensure_active()?;
        if option >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange { index: option });
        }

        self.answers.set(self.current_index, option);
        Ok(())
    }

    /// Jump to any question, answered or not.
    pub fn go_to(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_active()?;
        if index >= self.questions.len() {
            return Err(SessionError::QuestionOutOfRange {
                index,
                total: self.questions.len(),
            });
        }

        self.current_index = index;
        Ok(())
    }

    /// Move forward one question; stays put on the last one.
    pub fn next(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        if self.is_last() {
            return Ok(());
        }
        self.go_to(self.current_index + 1)
    }

    /// Move back one question; stays put on the first one.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        if self.is_first() {
            return Ok(());
        }
        self.go_to(self.current_index - 1)
    }

    /// Score the sheet as it stands and complete the session.
    ///
    /// Time taken is measured from the wall clock, not from the countdown.
    pub fn submit(&mut self) -> Result<QuizResult, SessionError> {
        self.ensure_active()?;

        let time_taken_secs = self.started_at.elapsed().as_secs();
        let result = evaluate(&self.answers, self.questions, time_taken_secs);
        self.countdown.stop();
        self.phase = Phase::Completed(result.clone());

        tracing::info!(
            session = %self.id,
            correct = result.correct_answers,
            total = result.total_questions,
            score = result.score,
            time_taken_secs,
            countdown_elapsed = self.countdown.elapsed(),
            "quiz session completed"
        );
        Ok(result)
    }

    /// Forced submission once the countdown reaches zero.
    pub fn on_timer_expire(&mut self) -> Result<QuizResult, SessionError> {
        tracing::info!(session = %self.id, "time limit reached, submitting");
        self.submit()
    }

    /// Deliver one timer tick.
    pub fn tick(&mut self) -> Result<SessionTick, SessionError> {
        self.ensure_active()?;

        match self.countdown.tick() {
            Tick::Running(remaining) => Ok(SessionTick::Running(remaining)),
            Tick::Expired => self.on_timer_expire().map(SessionTick::Expired),
            Tick::Stopped => Err(SessionError::NotActive),
        }
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Active => Ok(()),
            Phase::Completed(_) => Err(SessionError::NotActive),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::data::questions;
    use crate::session::DEFAULT_TIME_LIMIT_SECS;

    fn new_session() -> QuizSession {
        QuizSession::start(questions(), DEFAULT_TIME_LIMIT_SECS)
    }

    #[test]
    fn test_initial_state() {
        let session = new_session();
        assert!(session.is_active());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answers().len(), session.total_questions());
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.remaining_seconds(), 900);
        assert_eq!(session.formatted_remaining(), "15:00");
        assert_eq!(session.progress_percent(), 10);
    }

    #[test]
    fn test_select_answer_is_idempotent_and_does_not_advance() {
        let mut session = new_session();
        session.select_answer(2).unwrap();
        session.select_answer(2).unwrap();
        assert_eq!(session.current_answer(), Some(2));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 1);

        session.select_answer(3).unwrap();
        assert_eq!(session.current_answer(), Some(3));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_invalid_option_leaves_sheet_untouched() {
        let mut session = new_session();
        assert_eq!(
            session.select_answer(4),
            Err(SessionError::OptionOutOfRange { index: 4 })
        );
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_navigation_is_unrestricted() {
        let mut session = new_session();
        for index in (0..session.total_questions()).rev() {
            session.go_to(index).unwrap();
            assert_eq!(session.current_index(), index);
        }

        session.go_to(7).unwrap();
        session.select_answer(1).unwrap();
        session.go_to(2).unwrap();
        assert_eq!(session.current_answer(), None);
        assert!(session.answers().is_answered(7));

        assert_eq!(
            session.go_to(10),
            Err(SessionError::QuestionOutOfRange { index: 10, total: 10 })
        );
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn test_next_and_previous_stop_at_the_ends() {
        let mut session = new_session();
        session.previous().unwrap();
        assert_eq!(session.current_index(), 0);

        for _ in 0..15 {
            session.next().unwrap();
            assert!(session.current_index() < session.total_questions());
        }
        assert_eq!(session.current_index(), 9);
        assert!(session.is_last());

        session.previous().unwrap();
        assert_eq!(session.current_index(), 8);
    }

    #[test]
    fn test_submit_completes_exactly_once() {
        let mut session = new_session();
        session.select_answer(questions()[0].correct_option).unwrap();

        let result = session.submit().unwrap();
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.score, 10);
        assert_eq!(session.result(), Some(&result));

        assert_eq!(session.submit(), Err(SessionError::NotActive));
        assert_eq!(session.select_answer(0), Err(SessionError::NotActive));
        assert_eq!(session.go_to(3), Err(SessionError::NotActive));
        assert_eq!(session.next(), Err(SessionError::NotActive));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_ticks_after_manual_submit_are_rejected() {
        let mut session = new_session();
        session.tick().unwrap();
        session.submit().unwrap();

        assert_eq!(session.tick(), Err(SessionError::NotActive));
        assert_eq!(session.remaining_seconds(), 899);
    }

    #[test]
    fn test_expiry_after_full_time_limit() {
        let mut session = new_session();
        let mut expirations = 0;

        for _ in 0..899 {
            assert!(matches!(session.tick(), Ok(SessionTick::Running(_))));
        }
        if let Ok(SessionTick::Expired(result)) = session.tick() {
            expirations += 1;
            assert_eq!(result.total_questions, 10);
            assert_eq!(result.correct_answers, 0);
        }
        for _ in 0..5 {
            assert_eq!(session.tick(), Err(SessionError::NotActive));
        }

        assert_eq!(expirations, 1);
        assert_eq!(session.remaining_seconds(), 0);
        assert!(!session.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_correct_in_two_minutes() {
        let mut session = new_session();
        for (index, question) in questions().iter().enumerate() {
            session.go_to(index).unwrap();
            session.select_answer(question.correct_option).unwrap();
        }

        for _ in 0..120 {
            tokio::time::advance(Duration::from_secs(1)).await;
            session.tick().unwrap();
        }

        let result = session.submit().unwrap();
        assert_eq!(
            result,
            QuizResult {
                total_questions: 10,
                correct_answers: 10,
                score: 100,
                time_taken_secs: 120,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_time_taken_follows_wall_clock_when_ticks_are_missed() {
        let mut session = new_session();
        for _ in 0..5 {
            session.tick().unwrap();
        }
        tokio::time::advance(Duration::from_secs(120)).await;

        let result = session.submit().unwrap();
        assert_eq!(session.remaining_seconds(), 895);
        assert_eq!(result.time_taken_secs, 120);
    }
}
