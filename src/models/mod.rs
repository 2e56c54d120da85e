mod prompt;
mod question;
mod section;

pub use prompt::{ListeningExercise, WordRange, WritingPrompt};
pub use question::MultipleChoiceQuestion;
pub use section::{Section, HOME_TIP};
