//! Read tiles and metadata from an MBTiles (SQLite) container.
//!
//! The [`MBTilesReader`] opens the container file, projects the `metadata`
//! table into a typed [`Metadata`] record and fetches tile blobs from the
//! `tiles` table. Callers address tiles in XYZ ("slippy map") convention; the
//! container stores rows in TMS convention, so the reader computes the stored
//! row as `2^zoom - 1 - y` before querying.
//!
//! Everything is strictly read-only: the connection is opened with
//! `SQLITE_OPEN_READ_ONLY` and no write is ever issued.
//!
//! ## Usage
//! ```rust,no_run
//! use mbtiles_store::{MBTilesReader, Result};
//!
//! fn main() -> Result<()> {
//!     let mut reader = MBTilesReader::new("/path/to/berlin.mbtiles");
//!     reader.open()?;
//!
//!     // Inspect metadata
//!     let metadata = reader.metadata()?;
//!     println!("{:?} covers {:?}", metadata.name, metadata.bounds);
//!
//!     // Fetch a single tile (x/y/z)
//!     if let Some(tile) = reader.tile(8803, 5376, 14)? {
//!         println!("{} bytes of {}", tile.len(), tile.format);
//!     }
//!
//!     reader.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//! - `open` fails with `NotFound`, `Corrupt` or `AlreadyOpen`.
//! - Every accessor on a closed instance fails with `NotOpen`.
//! - Engine-level read failures surface as `QueryFailed`; a missing tile is
//!   the routine `Ok(None)`, never an error.

use crate::{
	error::{ContainerError, Result},
	metadata::Metadata,
	types::{GeoBBox, GeoCenter, Tile, TileCoord, TileFormat},
};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::{
	SqliteConnectionManager,
	rusqlite::{Error as SqliteError, OpenFlags},
};
use std::path::{Path, PathBuf};

/// Reader for MBTiles (SQLite) containers.
///
/// Holds at most one open connection. An instance is intended for one logical
/// caller at a time; for concurrent use, either wrap it in a lock or open one
/// reader per thread.
pub struct MBTilesReader {
	path: PathBuf,
	pool: Option<Pool<SqliteConnectionManager>>,
	metadata: Option<Metadata>,
	detected: Option<TileFormat>,
}

impl MBTilesReader {
	/// Creates a reader for the container at `path` without opening it.
	pub fn new(path: impl Into<PathBuf>) -> MBTilesReader {
		MBTilesReader {
			path: path.into(),
			pool: None,
			metadata: None,
			detected: None,
		}
	}

	/// Opens the container file as a read-only SQLite database and validates
	/// that the `metadata` and `tiles` relations exist.
	///
	/// # Errors
	/// - `AlreadyOpen` if this instance is already open; the existing
	///   connection stays intact.
	/// - `NotFound` if no file exists at the path.
	/// - `Corrupt` if SQLite rejects the file or a required relation is
	///   missing. A zero-byte file is a valid empty database and therefore
	///   fails the relation check with `Corrupt`, not `NotFound`.
	pub fn open(&mut self) -> Result<()> {
		log::debug!("open {:?}", self.path);

		if self.pool.is_some() {
			return Err(ContainerError::AlreadyOpen);
		}
		if !self.path.exists() {
			return Err(ContainerError::NotFound(self.path.clone()));
		}

		let manager = SqliteConnectionManager::file(&self.path).with_flags(OpenFlags::SQLITE_OPEN_READ_ONLY);
		let pool = Pool::builder()
			.max_size(1)
			.build(manager)
			.map_err(|e| self.corrupt(e.to_string()))?;

		let conn = pool.get().map_err(|e| self.corrupt(e.to_string()))?;
		for required in ["metadata", "tiles"] {
			let count: i64 = conn
				.query_row(
					"SELECT COUNT(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1",
					[required],
					|row| row.get(0),
				)
				.map_err(|e| self.corrupt(e.to_string()))?;
			if count == 0 {
				return Err(self.corrupt(format!("missing required table or view '{required}'")));
			}
		}
		drop(conn);

		self.pool = Some(pool);
		Ok(())
	}

	/// Releases the connection and drops all cached data derived from it.
	///
	/// Idempotent: closing a closed or never-opened instance is a no-op. After
	/// close, every other operation fails with `NotOpen`.
	pub fn close(&mut self) {
		log::debug!("close {:?}", self.path);

		self.pool = None;
		self.metadata = None;
		self.detected = None;
	}

	/// Returns `true` while the container is open.
	pub fn is_open(&self) -> bool {
		self.pool.is_some()
	}

	/// Returns the path this reader was created for.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns the typed metadata record of the container.
	///
	/// The first call scans the `metadata` table and projects it leniently
	/// (malformed individual fields degrade to absent, unknown keys are
	/// ignored). The result is cached for the lifetime of the open connection.
	///
	/// # Errors
	/// Returns `NotOpen` on a closed instance, `QueryFailed` if the scan fails.
	pub fn metadata(&mut self) -> Result<&Metadata> {
		if self.metadata.is_none() {
			self.metadata = Some(self.load_metadata()?);
		}
		self.metadata.as_ref().ok_or(ContainerError::NotOpen)
	}

	fn load_metadata(&self) -> Result<Metadata> {
		log::debug!("load metadata from {:?}", self.path);

		let conn = self.conn()?;
		let mut stmt = conn.prepare("SELECT name, value FROM metadata")?;
		let entries = stmt
			.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
			.collect::<std::result::Result<Vec<(String, String)>, SqliteError>>()?;

		Ok(Metadata::from_entries(entries))
	}

	/// Classifies the tile payload format by sampling one stored blob.
	///
	/// Intended for containers whose metadata does not reliably declare a
	/// format. Samples at most one row from the `tiles` table (any row) and
	/// sniffs its binary prefix; an empty table yields
	/// [`TileFormat::Unknown`]. The result is cached per open connection and
	/// never written back into the metadata record, so callers can always tell
	/// an authoritative declaration from this best-effort guess.
	///
	/// # Errors
	/// Returns `NotOpen` on a closed instance, `QueryFailed` if the sampling
	/// query fails.
	pub fn detected_format(&mut self) -> Result<TileFormat> {
		if let Some(format) = self.detected {
			return Ok(format);
		}

		let conn = self.conn()?;
		let format = match conn.query_row("SELECT tile_data FROM tiles LIMIT 1", [], |row| {
			row.get::<_, Vec<u8>>(0)
		}) {
			Ok(blob) => TileFormat::from_blob(&blob),
			Err(SqliteError::QueryReturnedNoRows) => TileFormat::Unknown,
			Err(e) => return Err(ContainerError::QueryFailed(e.to_string())),
		};

		log::debug!("detected tile format {format} in {:?}", self.path);

		self.detected = Some(format);
		Ok(format)
	}

	/// Fetches a single tile by XYZ coordinate.
	///
	/// The row is converted to TMS indexing internally (`y' = 2^zoom - 1 - y`)
	/// before the point lookup. Returns `Ok(None)` when no matching row exists
	/// or when the coordinate cannot exist at `zoom` at all; tile pyramids are
	/// sparse and absence is an expected outcome. No range check against the
	/// declared zoom bounds or bounding box is performed.
	///
	/// The tile's format is inherited from the metadata record; when the
	/// metadata declares nothing usable, [`detected_format`](Self::detected_format)
	/// is consulted once as a fallback.
	///
	/// # Errors
	/// Returns `NotOpen` on a closed instance, `QueryFailed` if the engine
	/// reports an I/O or corruption error during the read.
	pub fn tile(&mut self, x: u32, y: u32, zoom: u8) -> Result<Option<Tile>> {
		log::trace!("read tile {x}/{y} at zoom {zoom}");

		let declared = self.metadata()?.format;
		let format = if declared == TileFormat::Unknown {
			self.detected_format()?
		} else {
			declared
		};

		let Some(coord) = TileCoord::new(zoom, x, y) else {
			return Ok(None);
		};
		let stored = coord.flipped_y();

		let conn = self.conn()?;
		let mut stmt =
			conn.prepare("SELECT tile_data FROM tiles WHERE zoom_level = ?1 AND tile_column = ?2 AND tile_row = ?3")?;

		match stmt.query_row([u32::from(stored.level), stored.x, stored.y], |row| {
			row.get::<_, Vec<u8>>(0)
		}) {
			Ok(data) => Ok(Some(Tile::new(data, format))),
			Err(SqliteError::QueryReturnedNoRows) => Ok(None),
			Err(e) => Err(ContainerError::QueryFailed(e.to_string())),
		}
	}

	/// Display name of the tileset, from metadata.
	pub fn name(&mut self) -> Result<Option<String>> {
		Ok(self.metadata()?.name.clone())
	}

	/// Data revision of the tileset, from metadata.
	pub fn version(&mut self) -> Result<Option<String>> {
		Ok(self.metadata()?.version.clone())
	}

	/// Declared tile payload format, from metadata.
	pub fn format(&mut self) -> Result<TileFormat> {
		Ok(self.metadata()?.format)
	}

	/// Geographic envelope the tileset covers, from metadata.
	pub fn bounds(&mut self) -> Result<Option<GeoBBox>> {
		Ok(self.metadata()?.bounds)
	}

	/// Suggested initial viewing location, from metadata.
	pub fn center(&mut self) -> Result<Option<GeoCenter>> {
		Ok(self.metadata()?.center)
	}

	/// Lowest declared zoom level, from metadata.
	pub fn min_zoom(&mut self) -> Result<Option<u8>> {
		Ok(self.metadata()?.min_zoom)
	}

	/// Highest declared zoom level, from metadata.
	pub fn max_zoom(&mut self) -> Result<Option<u8>> {
		Ok(self.metadata()?.max_zoom)
	}

	fn conn(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
		let pool = self.pool.as_ref().ok_or(ContainerError::NotOpen)?;
		Ok(pool.get()?)
	}

	fn corrupt(&self, reason: String) -> ContainerError {
		ContainerError::Corrupt {
			path: self.path.clone(),
			reason,
		}
	}
}

impl std::fmt::Debug for MBTilesReader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MBTilesReader")
			.field("path", &self.path)
			.field("open", &self.is_open())
			.field("metadata", &self.metadata)
			.finish()
	}
}
