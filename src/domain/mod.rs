//! Domain records shared by the repository and the presentation layer.

mod movie;

pub use movie::Movie;
