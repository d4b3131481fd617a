//! CLI command implementations

pub mod export;
pub mod issues;
pub mod labels;
mod render;
pub mod sync;

pub use export::ExportArgs;
pub use issues::IssuesArgs;
pub use labels::LabelsArgs;
pub use sync::SyncArgs;
