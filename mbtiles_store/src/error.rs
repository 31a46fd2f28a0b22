//! Error taxonomy for MBTiles container access.
//!
//! All failures are reported to the caller; nothing is retried internally,
//! since they stem from static file state rather than transient conditions.
//! Absence of a specific tile is a normal result (`Ok(None)`) and never
//! surfaces here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the container reader.
#[derive(Debug, Error)]
pub enum ContainerError {
	/// No file exists at the given path.
	#[error("no such file: '{0}'")]
	NotFound(PathBuf),

	/// The file exists but fails structural validation: SQLite rejects it, or
	/// the required `metadata`/`tiles` relations are missing.
	#[error("'{path}' is not a valid MBTiles container: {reason}")]
	Corrupt { path: PathBuf, reason: String },

	/// An operation was attempted on a closed or never-opened instance.
	#[error("container is not open")]
	NotOpen,

	/// `open` was called on an already-open instance. The existing connection
	/// stays intact.
	#[error("container is already open")]
	AlreadyOpen,

	/// The engine reported an I/O or corruption error during a read. A clean
	/// zero-row result is not a failure.
	#[error("query failed: {0}")]
	QueryFailed(String),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, ContainerError>;

impl From<r2d2_sqlite::rusqlite::Error> for ContainerError {
	fn from(err: r2d2_sqlite::rusqlite::Error) -> Self {
		ContainerError::QueryFailed(err.to_string())
	}
}

impl From<r2d2::Error> for ContainerError {
	fn from(err: r2d2::Error) -> Self {
		ContainerError::QueryFailed(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages() {
		let err = ContainerError::NotFound(PathBuf::from("/tmp/missing.mbtiles"));
		assert_eq!(err.to_string(), "no such file: '/tmp/missing.mbtiles'");

		let err = ContainerError::Corrupt {
			path: PathBuf::from("/tmp/bad.mbtiles"),
			reason: "missing table 'tiles'".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"'/tmp/bad.mbtiles' is not a valid MBTiles container: missing table 'tiles'"
		);

		assert_eq!(ContainerError::NotOpen.to_string(), "container is not open");
		assert_eq!(ContainerError::AlreadyOpen.to_string(), "container is already open");
		assert_eq!(
			ContainerError::QueryFailed("disk I/O error".to_string()).to_string(),
			"query failed: disk I/O error"
		);
	}

	#[test]
	fn from_sqlite_error() {
		let err: ContainerError = r2d2_sqlite::rusqlite::Error::QueryReturnedNoRows.into();
		assert!(matches!(err, ContainerError::QueryFailed(_)));
	}
}
