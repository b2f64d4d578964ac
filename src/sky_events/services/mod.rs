mod message_assembler;
mod table_extractor;

pub use message_assembler::{FormattedReport, MessageAssembler};
pub use table_extractor::{strip_degree_sign, TableExtractor, CLICKABLE_ROW_MARKER};
