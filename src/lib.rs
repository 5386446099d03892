pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod matcher;
pub mod parser;

pub use config::Config;
pub use error::FinderError;
pub use finder::{find_matches, ClassFinder};
pub use matcher::{matches, Matcher};
pub use parser::ClassName;
