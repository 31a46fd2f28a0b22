//! Contains types like coordinates, bounding boxes, format types, and more.

mod geo_bbox;
pub use geo_bbox::*;

mod geo_center;
pub use geo_center::*;

mod tile;
pub use tile::*;

mod tile_coord;
pub use tile_coord::*;

mod tile_format;
pub use tile_format::*;
