//! CLI command implementations.

pub mod init;
pub mod list;
pub mod render;
pub mod serve;

pub use init::init_project;
pub use list::list_documents;
pub use render::render_document;
pub use serve::serve;
