mod answer_sheet;
mod question;
mod result;
mod user;

pub use answer_sheet::AnswerSheet;
pub use question::{Question, OPTION_COUNT};
pub use result::QuizResult;
pub use user::User;
