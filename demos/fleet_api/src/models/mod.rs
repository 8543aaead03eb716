pub mod ship;

pub use ship::Ship;
