pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod syllabus;
pub mod tutor;

pub use error::{Error, Result};
