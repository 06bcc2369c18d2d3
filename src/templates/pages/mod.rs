pub mod directory;

pub use directory::{directory_page, directory_region, DirectoryVm};
