use std::fmt::Debug;

/// A geographical bounding box representing the rectangular area a tileset covers,
/// defined by its south-west and north-east corners in degrees:
/// - `x_min` (west): Minimum longitude.
/// - `y_min` (south): Minimum latitude.
/// - `x_max` (east): Maximum longitude.
/// - `y_max` (north): Maximum latitude.
///
/// # Examples
///
/// ```
/// use mbtiles_store::GeoBBox;
///
/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));
/// assert_eq!(bbox.midpoint(), (0.0, 0.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from four `f64` values: `west, south, east, north`.
	///
	/// Returns `None` if any coordinate is outside the valid longitude/latitude
	/// range or if a minimum exceeds its maximum. Malformed geometry degrades to
	/// absence instead of raising, matching the lenient metadata contract.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Option<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
		.checked()
	}

	/// Parses a comma-separated list `west,south,east,north` as written in the
	/// `bounds` key of an MBTiles metadata table.
	///
	/// Returns `None` if the list does not have exactly four numeric fields or
	/// the resulting box is invalid.
	///
	/// # Examples
	/// ```
	/// use mbtiles_store::GeoBBox;
	///
	/// let bbox = GeoBBox::from_list("-10,-5,10,5").unwrap();
	/// assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
	/// assert!(GeoBBox::from_list("-10,-5,10").is_none());
	/// assert!(GeoBBox::from_list("a,b,c,d").is_none());
	/// ```
	pub fn from_list(input: &str) -> Option<GeoBBox> {
		let values = input
			.split(',')
			.map(|s| s.trim().parse::<f64>())
			.collect::<Result<Vec<f64>, _>>()
			.ok()?;
		if values.len() != 4 {
			return None;
		}
		GeoBBox::new(values[0], values[1], values[2], values[3])
	}

	/// Returns the arithmetic midpoint as `(longitude, latitude)`.
	pub fn midpoint(&self) -> (f64, f64) {
		((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
	}

	/// Returns the bounding box as a fixed-size array `[west, south, east, north]`.
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Returns the bounding box as a tuple `(x_min, y_min, x_max, y_max)`.
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	/// Returns the bounding box as a string in the form `x_min,y_min,x_max,y_max`.
	pub fn as_string_list(&self) -> String {
		format!("{},{},{},{}", self.x_min, self.y_min, self.x_max, self.y_max)
	}

	fn checked(self) -> Option<Self> {
		if self.x_min < -180.0 || self.x_max > 180.0 || self.y_min < -90.0 || self.y_max > 90.0 {
			return None;
		}
		if self.x_min > self.x_max || self.y_min > self.y_max {
			return None;
		}
		Some(self)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn creation() {
		let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
		assert_eq!(bbox.x_min, -10.0);
		assert_eq!(bbox.y_min, -5.0);
		assert_eq!(bbox.x_max, 10.0);
		assert_eq!(bbox.y_max, 5.0);
	}

	#[rstest]
	#[case(-190.0, -5.0, 10.0, 5.0)] // west < -180
	#[case(-10.0, -5.0, 190.0, 5.0)] // east > 180
	#[case(-10.0, -95.0, 10.0, 5.0)] // south < -90
	#[case(-10.0, -5.0, 10.0, 95.0)] // north > 90
	#[case(10.0, -5.0, -10.0, 5.0)] // west > east
	#[case(-10.0, 6.0, 10.0, 5.0)] // south > north
	fn invalid_ranges(#[case] w: f64, #[case] s: f64, #[case] e: f64, #[case] n: f64) {
		assert!(GeoBBox::new(w, s, e, n).is_none());
	}

	#[test]
	fn from_list_valid() {
		let bbox = GeoBBox::from_list("-10,-5,10,5").unwrap();
		assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));

		let bbox = GeoBBox::from_list(" 13.08283, 52.33446, 13.762245, 52.6783 ").unwrap();
		assert_eq!(bbox.as_array(), [13.08283, 52.33446, 13.762245, 52.6783]);
	}

	#[rstest]
	#[case("")]
	#[case("-10,-5,10")]
	#[case("-10,-5,10,5,0")]
	#[case("-10,abc,10,5")]
	#[case("-200,-5,10,5")]
	fn from_list_invalid(#[case] input: &str) {
		assert!(GeoBBox::from_list(input).is_none());
	}

	#[test]
	fn midpoint() {
		let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
		assert_eq!(bbox.midpoint(), (0.0, 0.0));

		let bbox = GeoBBox::new(0.0, 0.0, 10.0, 4.0).unwrap();
		assert_eq!(bbox.midpoint(), (5.0, 2.0));
	}

	#[test]
	fn as_string_list_roundtrip() {
		let bbox = GeoBBox::new(-180.0, -90.0, 180.0, 90.0).unwrap();
		assert_eq!(bbox.as_string_list(), "-180,-90,180,90");
		assert_eq!(GeoBBox::from_list(&bbox.as_string_list()).unwrap(), bbox);
	}

	#[test]
	fn debug_format() {
		let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
		assert_eq!(format!("{bbox:?}"), "GeoBBox(-10, -5, 10, 5)");
	}
}
