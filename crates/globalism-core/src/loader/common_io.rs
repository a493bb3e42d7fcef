// crates/globalism-core/src/loader/common_io.rs
use crate::error::{GlobalismError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// `true` for `*.gz` paths.
pub fn is_compressed(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a dataset file, buffers it and, for `.gz` paths, wraps it in a
/// gzip decoder. Callers only ever see plain JSON bytes.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GlobalismError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_compressed(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GlobalismError::InvalidData(format!(
            "{} is gzip-compressed; enable the `compact` feature to read it",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_gzip_by_extension() {
        assert!(is_compressed(Path::new("data/globalism.json.gz")));
        assert!(is_compressed(Path::new("DATA.JSON.GZ")));
        assert!(!is_compressed(Path::new("data/globalism.json")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json")).err();
        assert!(matches!(err, Some(GlobalismError::NotFound(_))));
    }
}
