//! A read-only accessor for MBTiles map tile containers.
//!
//! An MBTiles file is a single SQLite database holding map tiles (raster
//! images or vector protocol buffers) addressed by zoom level and tile
//! column/row, plus a `metadata` table describing the tileset. This crate
//! opens such a container, parses its metadata into typed geospatial fields,
//! sniffs the tile encoding when it is not reliably declared, and resolves
//! (x, y, zoom) coordinates to stored blobs, handling the row-numbering
//! inversion between the container's TMS convention and the XYZ convention
//! used by callers.
//!
//! The main components of this crate are:
//! - [`MBTilesReader`]: opens a container and resolves tiles.
//! - [`Metadata`]: the typed view of the `metadata` table.
//! - [`types`]: small value types like [`GeoBBox`], [`GeoCenter`],
//!   [`TileCoord`], [`TileFormat`] and [`Tile`].
//! - [`ContainerError`]: the error taxonomy; tile absence is `Ok(None)`, not
//!   an error.

mod error;
mod metadata;
mod reader;
pub mod types;

pub use error::{ContainerError, Result};
pub use metadata::Metadata;
pub use reader::MBTilesReader;
pub use types::*;
