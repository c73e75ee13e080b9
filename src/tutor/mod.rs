//! The question pipeline: resolve defaults, validate, compose the prompt,
//! call the model and shape its answer.

mod prompt;
mod response;
mod service;
mod types;
mod validator;

pub use prompt::compose;
pub use response::shape;
pub use service::TutorService;
pub use types::{AskRequest, TutorRequest, TutorResponse};
pub use validator::validate;
