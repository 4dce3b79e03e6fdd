mod category;
mod db;
mod question;
mod quiz;

pub use category::CategoryCommands;
pub use db::DbCommands;
pub use question::QuestionCommands;
pub use quiz::QuizCommands;
