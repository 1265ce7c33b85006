pub mod file_writer;
pub mod session_file_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use session_file_store::FileSessionStore;
