pub mod feedback;
pub mod prompts;
