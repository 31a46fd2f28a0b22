//! Tile coordinates in a Web Mercator tile pyramid.
//!
//! [`TileCoord`] addresses a single tile by zoom level and x/y indices in XYZ
//! ("slippy map") convention, where y grows downward from the top of the map.
//! MBTiles containers store rows in the inverted TMS convention; [`TileCoord::flip_y`]
//! converts between the two.
//!
//! # Examples
//!
//! ```
//! use mbtiles_store::TileCoord;
//!
//! let mut coord = TileCoord::new(5, 6, 7).unwrap();
//! coord.flip_y();
//! assert_eq!(coord.y, 24); // 2^5 - 1 - 7
//! ```

use std::fmt::Debug;

/// A tile coordinate with zoom level, x, and y indices.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile.
	pub x: u32,
	/// The y index of the tile.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// Returns `None` if `level` > 31 or either index is out of bounds for the
	/// level. A coordinate that cannot exist in the pyramid addresses no tile,
	/// so the absence signal belongs to the caller, not an error.
	pub fn new(level: u8, x: u32, y: u32) -> Option<TileCoord> {
		if level > 31 {
			return None;
		}
		let max = Self::max_index(level);
		if x > max || y > max {
			return None;
		}
		Some(TileCoord { level, x, y })
	}

	/// The largest valid x/y index at `level`, i.e. `2^level - 1`.
	pub fn max_index(level: u8) -> u32 {
		2u32.pow(u32::from(level)) - 1
	}

	/// Flip the y index between XYZ and TMS row numbering (`y' = 2^level - 1 - y`).
	///
	/// The flip is involutive: applying it twice restores the original index.
	pub fn flip_y(&mut self) {
		self.y = Self::max_index(self.level) - self.y;
	}

	/// Non-mutating version of [`flip_y`](Self::flip_y).
	pub fn flipped_y(mut self) -> TileCoord {
		self.flip_y();
		self
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TileCoord({}, {}, {})", self.level, self.x, self.y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn creation() {
		let coord = TileCoord::new(5, 6, 7).unwrap();
		assert_eq!(coord.level, 5);
		assert_eq!(coord.x, 6);
		assert_eq!(coord.y, 7);
	}

	#[rstest]
	#[case(32, 0, 0)]
	#[case(5, 32, 0)]
	#[case(5, 0, 32)]
	#[case(0, 0, 1)]
	fn out_of_bounds(#[case] level: u8, #[case] x: u32, #[case] y: u32) {
		assert!(TileCoord::new(level, x, y).is_none());
	}

	#[test]
	fn bounds_edges() {
		assert!(TileCoord::new(0, 0, 0).is_some());
		assert!(TileCoord::new(5, 31, 31).is_some());
		assert!(TileCoord::new(31, u32::MAX / 2, u32::MAX / 2).is_some());
	}

	#[rstest]
	#[case(0, 0)]
	#[case(1, 0)]
	#[case(1, 1)]
	#[case(5, 7)]
	#[case(14, 5376)]
	#[case(31, 123_456_789)]
	fn flip_is_involutive(#[case] level: u8, #[case] y: u32) {
		let coord = TileCoord::new(level, 0, y).unwrap();
		let flipped = coord.flipped_y();
		assert!(flipped.y <= TileCoord::max_index(level));
		assert_eq!(flipped.flipped_y(), coord);
	}

	#[test]
	fn flip_values() {
		let mut coord = TileCoord::new(14, 8803, 5376).unwrap();
		coord.flip_y();
		assert_eq!(coord.y, 16383 - 5376);
	}

	#[test]
	fn debug_format() {
		let coord = TileCoord::new(5, 6, 7).unwrap();
		assert_eq!(format!("{coord:?}"), "TileCoord(5, 6, 7)");
	}
}
