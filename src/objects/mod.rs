pub mod body;

pub use body::Body;
