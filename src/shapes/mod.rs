pub mod builders;
pub mod polygon;

pub use polygon::{edge_normals, polygon_area, polygon_centroid, Polygon};
