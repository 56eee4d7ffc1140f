mod axis;
pub use axis::{Axis, PointId};

mod geo_point;
pub use geo_point::GeoPoint;

mod map_bounds;
pub use map_bounds::BoundingBox;
