mod collaboration;
mod comment;
mod idea;
mod student;

pub use collaboration::{CollabStatus, Collaboration};
pub use comment::Comment;
pub use idea::{Idea, IdeaPatch, IdeaSort, NewIdea};
pub use student::Student;
