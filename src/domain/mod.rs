//! Domain logic - pure rules independent of files, terminals and clipboards

pub mod package;
pub mod version;

pub use package::PackageRecord;
pub use version::{NextVersion, VersionBump};
