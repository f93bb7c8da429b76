mod collaborations;
mod comments;
mod ideas;
pub(crate) mod scoring;
mod students;
