use std::fmt::Debug;

/// A center point in geographic space, the initially suggested viewing location
/// of a tileset:
/// - `f64` longitude (range: [-180, 180])
/// - `f64` latitude (range: [-90, 90])
/// - optional `u8` initial zoom level (range: 0 to 30)
#[derive(Clone, Copy, PartialEq)]
pub struct GeoCenter(pub f64, pub f64, pub Option<u8>);

impl GeoCenter {
	/// Parses a comma-separated list `longitude,latitude[,zoom]` as written in
	/// the `center` key of an MBTiles metadata table.
	///
	/// Returns `None` for a malformed list, out-of-range coordinates, or a
	/// non-numeric zoom. Malformed content degrades to absence, never an error.
	///
	/// # Examples
	/// ```
	/// use mbtiles_store::GeoCenter;
	///
	/// assert_eq!(GeoCenter::from_list("13.4,52.5"), Some(GeoCenter(13.4, 52.5, None)));
	/// assert_eq!(GeoCenter::from_list("13.4,52.5,10"), Some(GeoCenter(13.4, 52.5, Some(10))));
	/// assert_eq!(GeoCenter::from_list("13.4"), None);
	/// ```
	pub fn from_list(input: &str) -> Option<GeoCenter> {
		let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
		if parts.len() != 2 && parts.len() != 3 {
			return None;
		}
		let lon = parts[0].parse::<f64>().ok()?;
		let lat = parts[1].parse::<f64>().ok()?;
		let zoom = match parts.get(2) {
			Some(part) => Some(part.parse::<u8>().ok()?),
			None => None,
		};
		GeoCenter(lon, lat, zoom).checked()
	}

	/// Returns the longitude in degrees.
	pub fn longitude(&self) -> f64 {
		self.0
	}

	/// Returns the latitude in degrees.
	pub fn latitude(&self) -> f64 {
		self.1
	}

	/// Returns the suggested initial zoom level, if one was declared.
	pub fn zoom(&self) -> Option<u8> {
		self.2
	}

	fn checked(self) -> Option<Self> {
		if self.0 < -180.0 || self.0 > 180.0 {
			return None;
		}
		if self.1 < -90.0 || self.1 > 90.0 {
			return None;
		}
		if let Some(zoom) = self.2 {
			if zoom > 30 {
				return None;
			}
		}
		Some(self)
	}
}

impl Debug for GeoCenter {
	/// Formats the `GeoCenter` as `"longitude, latitude (zoom)"`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.2 {
			Some(zoom) => write!(f, "{}, {} ({})", self.0, self.1, zoom),
			None => write!(f, "{}, {}", self.0, self.1),
		}
	}
}
