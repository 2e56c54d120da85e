mod builtin;
mod loader;
mod store;

pub use builtin::builtin;
pub use loader::{load_content_from_json, LoadError};
pub use store::{next_index, wrap_index, ContentError, ContentStore};
