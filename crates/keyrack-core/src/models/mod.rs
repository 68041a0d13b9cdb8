mod entry;

pub use entry::{Entry, EntryRevision};
