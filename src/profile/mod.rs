pub mod types;
pub mod paths;
pub mod reader;
pub mod writer;

pub use types::FilamentProfile;
pub use paths::LibraryPaths;
