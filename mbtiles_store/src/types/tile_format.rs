//! Tile payload formats stored in an MBTiles container.
//!
//! [`TileFormat`] covers the formats the MBTiles 1.3 spec allows in its
//! `format` metadata key, plus `Unknown` for containers that declare nothing
//! usable. When the declaration is missing, [`TileFormat::from_blob`] can
//! classify a sampled tile blob by its binary prefix.
//!
//! # Examples
//!
//! ```
//! use mbtiles_store::TileFormat;
//!
//! assert_eq!(TileFormat::from_metadata("JPEG"), TileFormat::JPG);
//! assert_eq!(TileFormat::from_metadata("tiff"), TileFormat::Unknown);
//! assert_eq!(TileFormat::PNG.as_mime_str(), "image/png");
//! ```

use std::fmt::{Display, Formatter};

/// The 8-byte PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// The 2-byte JPEG SOI marker.
const JPG_SIGNATURE: [u8; 2] = [0xFF, 0xD8];

/// Enum representing supported tile payload formats.
///
/// # Variants
/// - `PNG` - PNG image format
/// - `JPG` - JPEG image format (including the `jpeg` spelling)
/// - `MVT` - Mapbox Vector Tile in Protocol Buffer format (`pbf`)
/// - `Unknown` - format not declared or not recognized
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TileFormat {
	PNG,
	JPG,
	MVT,
	#[default]
	Unknown,
}

impl TileFormat {
	/// Parses the `format` value of an MBTiles metadata table, case-insensitively.
	///
	/// Accepts `png`, `jpg`, `jpeg` and `pbf` (plus the `mvt` alias); anything
	/// else yields [`TileFormat::Unknown`] rather than an error, so that one
	/// unrecognized key never invalidates the whole metadata record.
	pub fn from_metadata(value: &str) -> TileFormat {
		match value.to_lowercase().trim() {
			"png" => TileFormat::PNG,
			"jpg" | "jpeg" => TileFormat::JPG,
			"pbf" | "mvt" => TileFormat::MVT,
			_ => TileFormat::Unknown,
		}
	}

	/// Classifies a tile blob by its binary prefix.
	///
	/// PNG and JPEG carry fixed signatures; vector tiles do not, so "neither
	/// raster signature matched" defaults to [`TileFormat::MVT`] per common
	/// MBTiles usage. This is a heuristic, not a guarantee: a truncated or
	/// corrupt raster blob classifies as MVT too. An empty blob is treated as
	/// inconclusive and yields [`TileFormat::Unknown`].
	pub fn from_blob(data: &[u8]) -> TileFormat {
		if data.is_empty() {
			TileFormat::Unknown
		} else if data.starts_with(&PNG_SIGNATURE) {
			TileFormat::PNG
		} else if data.starts_with(&JPG_SIGNATURE) {
			TileFormat::JPG
		} else {
			TileFormat::MVT
		}
	}

	/// Returns a lowercase string identifier for this tile format.
	pub fn as_str(&self) -> &str {
		match self {
			TileFormat::PNG => "png",
			TileFormat::JPG => "jpg",
			TileFormat::MVT => "mvt",
			TileFormat::Unknown => "unknown",
		}
	}

	/// Returns a MIME type string typically associated with this tile format.
	pub fn as_mime_str(&self) -> &str {
		match self {
			TileFormat::PNG => "image/png",
			TileFormat::JPG => "image/jpeg",
			TileFormat::MVT => "vnd.mapbox-vector-tile",
			TileFormat::Unknown => "application/octet-stream",
		}
	}
}

impl Display for TileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("png", TileFormat::PNG)]
	#[case("PNG", TileFormat::PNG)]
	#[case("jpg", TileFormat::JPG)]
	#[case("jpeg", TileFormat::JPG)]
	#[case("JPEG", TileFormat::JPG)]
	#[case("pbf", TileFormat::MVT)]
	#[case("mvt", TileFormat::MVT)]
	#[case(" pbf ", TileFormat::MVT)]
	#[case("webp", TileFormat::Unknown)]
	#[case("", TileFormat::Unknown)]
	fn from_metadata_values(#[case] input: &str, #[case] expected: TileFormat) {
		assert_eq!(TileFormat::from_metadata(input), expected);
	}

	#[test]
	fn from_blob_signatures() {
		let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
		assert_eq!(TileFormat::from_blob(&png), TileFormat::PNG);

		let jpg = [0xFF, 0xD8, 0xFF, 0xE0];
		assert_eq!(TileFormat::from_blob(&jpg), TileFormat::JPG);

		// gzipped protobuf, as commonly stored
		let pbf = [0x1F, 0x8B, 0x08, 0x00];
		assert_eq!(TileFormat::from_blob(&pbf), TileFormat::MVT);

		assert_eq!(TileFormat::from_blob(&[]), TileFormat::Unknown);
	}

	#[test]
	fn from_blob_truncated_signature() {
		// too short for the PNG signature, falls through to the vector default
		assert_eq!(TileFormat::from_blob(&[0x89, 0x50]), TileFormat::MVT);
	}

	#[test]
	fn string_representations() {
		assert_eq!(TileFormat::PNG.as_str(), "png");
		assert_eq!(TileFormat::JPG.as_mime_str(), "image/jpeg");
		assert_eq!(TileFormat::MVT.to_string(), "mvt");
		assert_eq!(TileFormat::Unknown.as_mime_str(), "application/octet-stream");
	}
}
