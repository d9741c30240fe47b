pub mod record;
pub mod span;
pub mod token;

pub use record::{CorpusDataset, DocumentRecords, LabeledRecord, OUTSIDE_LABEL};
pub use span::SpanRef;
pub use token::{EntityMention, Token};
