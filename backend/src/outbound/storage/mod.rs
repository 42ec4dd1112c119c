//! Storage adapters: the in-memory wish store and the filesystem photo
//! store.

mod memory;
mod photos;

pub use memory::InMemoryWishRepository;
pub use photos::FsPhotoStore;
