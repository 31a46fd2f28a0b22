use crate::types::TileFormat;

/// A resolved tile: the raw stored blob plus its implied format.
///
/// The format is inherited from the container metadata (or from one-shot blob
/// detection when the metadata declares nothing), not re-detected per tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
	/// The raw tile payload exactly as stored in the container.
	pub data: Vec<u8>,
	/// The payload format of the tileset this tile came from.
	pub format: TileFormat,
}

impl Tile {
	/// Creates a new `Tile` from a blob and its format.
	pub fn new(data: Vec<u8>, format: TileFormat) -> Tile {
		Tile { data, format }
	}

	/// Returns the length of the stored blob in bytes.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` if the stored blob is empty.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Consumes the tile and returns the raw blob.
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}
}
