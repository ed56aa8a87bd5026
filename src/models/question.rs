use serde::Serialize;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

/// A fixed multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    pub correct_option: usize,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_option == option
    }
}
