/// Formatter adapters for rendering reports
mod plain_text_formatter;
mod table_layout;

pub use plain_text_formatter::PlainTextFormatter;
