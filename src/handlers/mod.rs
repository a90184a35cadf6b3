pub mod quiz_handler;
pub mod session_handler;

pub use quiz_handler::{generate_quiz, select_answer, set_credential, start_quiz, submit_quiz};
pub use session_handler::{create_session, get_session, health_check};
