use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text file into a `String`.
///
/// Returns `Ok(None)` when the file does not exist, so callers can fall
/// back to defaults without treating a fresh install as an error.
pub(crate) fn read_file_if_exists<P: AsRef<Path>>(filename: P) -> io::Result<Option<String>> {
	let mut file = match File::open(filename) {
		Ok(file) => file,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(e),
	};
	let mut contents = String::new();
	file.read_to_string(&mut contents)?;
	Ok(Some(contents))
}

/// Writes `contents` to `filename`, creating missing parent directories.
pub(crate) fn write_file<P: AsRef<Path>>(filename: P, contents: &str) -> io::Result<()> {
	let path = filename.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}
	fs::write(path, contents)
}
