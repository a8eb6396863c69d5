pub mod business;
pub mod restaurant;
pub mod search_query;
