use crate::models::search_query::SearchQuery;

pub mod parser;

const FIND_KEYWORD: &str = "find:";

/// What a message asks for once the command prefix has been stripped.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Find(String),
    Search(SearchQuery),
}

impl Command {
    /// Expects lower-cased text with the command prefix already removed.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text == "help" {
            return Command::Help;
        }

        match text.strip_prefix(FIND_KEYWORD) {
            Some(name) if name.trim().is_empty() => Command::Help,
            Some(name) => Command::Find(name.trim().to_string()),
            None => Command::Search(parser::parse(text)),
        }
    }
}
