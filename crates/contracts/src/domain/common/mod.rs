pub mod geo_point;

pub use geo_point::GeoPoint;
