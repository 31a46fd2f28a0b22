//! Typed view of the MBTiles `metadata` table.
//!
//! The `metadata` table is a flat key/value store. [`Metadata::from_entries`]
//! projects it into a strongly-typed record. Parsing is deliberately lenient:
//! a malformed value makes that one field absent and never invalidates the
//! rest of the record, and unknown keys are ignored for forward compatibility.

use crate::types::{GeoBBox, GeoCenter, TileFormat};

/// Immutable metadata record describing a tileset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
	/// Display name of the tileset.
	pub name: Option<String>,
	/// Revision of the tileset's data, not of the container schema.
	pub version: Option<String>,
	/// Declared tile payload format; `Unknown` when missing or unrecognized.
	pub format: TileFormat,
	/// Geographic envelope the tileset covers. Unset when the `bounds` key is
	/// missing or malformed, never defaulted to a guessed extent.
	pub bounds: Option<GeoBBox>,
	/// Suggested initial viewing location. Derived as the midpoint of `bounds`
	/// when the `center` key is absent.
	pub center: Option<GeoCenter>,
	/// Lowest zoom level the tileset declares.
	pub min_zoom: Option<u8>,
	/// Highest zoom level the tileset declares.
	pub max_zoom: Option<u8>,
}

impl Metadata {
	/// Builds a `Metadata` record from raw `(name, value)` rows of the
	/// `metadata` table.
	///
	/// Recognized keys: `name`, `version`, `format`, `bounds`, `center`,
	/// `minzoom`, `maxzoom`. Everything else (`description`, `type`,
	/// `attribution`, future keys) is ignored.
	pub fn from_entries<I, K, V>(entries: I) -> Metadata
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut metadata = Metadata::default();
		let mut center_declared = None;

		for (key, value) in entries {
			let value = value.as_ref();
			// https://github.com/mapbox/mbtiles-spec/blob/master/1.3/spec.md#content
			match key.as_ref() {
				"name" => metadata.name = Some(value.to_string()),
				"version" => metadata.version = Some(value.to_string()),
				"format" => metadata.format = TileFormat::from_metadata(value),
				"bounds" => metadata.bounds = GeoBBox::from_list(value),
				"center" => center_declared = GeoCenter::from_list(value),
				"minzoom" => metadata.min_zoom = value.trim().parse::<u8>().ok(),
				"maxzoom" => metadata.max_zoom = value.trim().parse::<u8>().ok(),
				_ => {}
			}
		}

		// A declared zoom range with min > max is meaningless; drop both.
		if let (Some(min), Some(max)) = (metadata.min_zoom, metadata.max_zoom) {
			if min > max {
				metadata.min_zoom = None;
				metadata.max_zoom = None;
			}
		}

		metadata.center = center_declared.or_else(|| {
			metadata.bounds.map(|bounds| {
				let (lon, lat) = bounds.midpoint();
				GeoCenter(lon, lat, None)
			})
		});

		metadata
	}
}
