pub mod formatter;
pub mod handler_404;
pub mod help_doc;
