use serde::Serialize;

/// Summary of one completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Rounded percentage, 0 to 100.
    pub score: u32,
    #[serde(rename = "timeTaken")]
    pub time_taken_secs: u64,
}

impl QuizResult {
    /// Letter grade shown on the results screen.
    pub fn grade(&self) -> char {
        match self.score {
            80.. => 'A',
            60..=79 => 'B',
            _ => 'C',
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self.score {
            90.. => "Outstanding!",
            80..=89 => "Excellent work!",
            70..=79 => "Great job!",
            60..=69 => "Good effort!",
            _ => "Keep practicing!",
        }
    }

    pub fn encouragement(&self) -> &'static str {
        match self.score {
            80.. => "Fantastic work! You're mastering this topic. Keep up the excellent progress!",
            60..=79 => "You're doing well! A bit more practice and you'll be acing these quizzes!",
            _ => "Every attempt is a step forward. Review the topics and try again - you've got this!",
        }
    }

    /// Seconds spent per question, rounded half up.
    pub fn average_seconds_per_question(&self) -> u64 {
        let total = self.total_questions as u64;
        if total == 0 {
            return 0;
        }
        (self.time_taken_secs * 2 + total) / (total * 2)
    }

    /// Time taken as `"{m}m {s}s"`.
    pub fn formatted_time_taken(&self) -> String {
        format!("{}m {}s", self.time_taken_secs / 60, self.time_taken_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u32, time_taken_secs: u64) -> QuizResult {
        QuizResult {
            total_questions: 10,
            correct_answers: (score / 10) as usize,
            score,
            time_taken_secs,
        }
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(result(100, 0).grade(), 'A');
        assert_eq!(result(80, 0).grade(), 'A');
        assert_eq!(result(79, 0).grade(), 'B');
        assert_eq!(result(60, 0).grade(), 'B');
        assert_eq!(result(59, 0).grade(), 'C');
    }

    #[test]
    fn test_verdict_bands() {
        assert_eq!(result(90, 0).verdict(), "Outstanding!");
        assert_eq!(result(85, 0).verdict(), "Excellent work!");
        assert_eq!(result(70, 0).verdict(), "Great job!");
        assert_eq!(result(60, 0).verdict(), "Good effort!");
        assert_eq!(result(10, 0).verdict(), "Keep practicing!");
    }

    #[test]
    fn test_time_formatting() {
        let r = result(70, 125);
        assert_eq!(r.formatted_time_taken(), "2m 5s");
        // 12.5 rounds up
        assert_eq!(r.average_seconds_per_question(), 13);
        assert_eq!(result(70, 124).average_seconds_per_question(), 12);
    }

    #[test]
    fn test_serializes_with_original_field_names() {
        let json = serde_json::to_string(&result(70, 42)).unwrap();
        assert!(json.contains("\"totalQuestions\":10"));
        assert!(json.contains("\"correctAnswers\":7"));
        assert!(json.contains("\"score\":70"));
        assert!(json.contains("\"timeTaken\":42"));
    }
}
