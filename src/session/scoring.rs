use crate::models::{AnswerSheet, Question, QuizResult};

/// Integer percentage of `correct` out of `total`, rounded half up.
///
/// Returns 0 for an empty total.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct * 200 + total) / (total * 2)) as u32
}

/// Score a full answer sheet. Unanswered slots never match, so they count
/// as incorrect.
pub fn evaluate(answers: &AnswerSheet, questions: &[Question], time_taken_secs: u64) -> QuizResult {
    debug_assert_eq!(answers.len(), questions.len());

    let correct_answers = answers
        .iter()
        .zip(questions.iter())
        .filter(|(answer, question)| answer.is_some_and(|option| question.is_correct(option)))
        .count();

    QuizResult {
        total_questions: questions.len(),
        correct_answers,
        score: percentage(correct_answers, questions.len()),
        time_taken_secs,
    }
}
