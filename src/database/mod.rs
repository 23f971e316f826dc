pub mod directory;
pub mod seed;

pub use directory::Directory;
