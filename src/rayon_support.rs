//! Rayon integration for hashing independent inputs in parallel.
//!
//! A single digest cannot be parallelized (block k needs block k-1's chaining
//! state), but separate inputs share only the immutable round constants, so
//! they can be hashed on as many threads as rayon provides.

use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;

use crate::{digest, Digest};

/// Extension trait for computing MD5 digests from a parallel iterator.
///
/// # Example
///
/// ```
/// use rayon::prelude::*;
/// use md5_core::ParallelMd5;
///
/// let data: Vec<Vec<u8>> = vec![
///     b"hello".to_vec(),
///     b"world".to_vec(),
///     b"test".to_vec(),
/// ];
///
/// let digests = data.par_iter().md5_digest();
/// assert_eq!(digests.len(), 3);
/// ```
pub trait ParallelMd5<T> {
    /// Computes MD5 digests in parallel, preserving iteration order.
    fn md5_digest(self) -> Vec<Digest>;
}

impl<I, T> ParallelMd5<T> for I
where
    I: ParallelIterator<Item = T>,
    T: AsRef<[u8]> + Send,
{
    fn md5_digest(self) -> Vec<Digest> {
        self.map(|item| digest(item.as_ref())).collect()
    }
}

/// Computes MD5 digests for multiple files in parallel.
///
/// Reads each file and hashes its contents on rayon's thread pool. Results
/// keep the order of `paths`; a failure to read one file does not affect the
/// others.
///
/// # Example
///
/// ```no_run
/// use md5_core::digest_files;
///
/// let paths = ["file1.txt", "file2.txt", "file3.txt"];
/// for (path, result) in paths.iter().zip(digest_files(&paths)) {
///     match result {
///         Ok(digest) => println!("{path}: {digest:02x?}"),
///         Err(error) => println!("{path}: error - {error}"),
///     }
/// }
/// ```
pub fn digest_files<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<io::Result<Digest>> {
    paths
        .par_iter()
        .map(|path| {
            let data = fs::read(path.as_ref())?;
            Ok(digest(&data))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn parallel_md5_matches_sequential() {
        let data: Vec<Vec<u8>> = (0..32)
            .map(|i| format!("parallel input {i}").into_bytes())
            .collect();

        let parallel: Vec<Digest> = data.par_iter().md5_digest();
        let sequential: Vec<Digest> = data.iter().map(|item| digest(item)).collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn digest_files_hashes_file_contents() {
        let dir = tempdir().expect("temp dir should be creatable");

        let mut paths = Vec::new();
        let mut contents = Vec::new();
        for i in 0..4 {
            let path = dir.path().join(format!("file{i}.txt"));
            let mut file = std::fs::File::create(&path).expect("temp file should be creatable");
            write!(file, "content of file {i}").expect("temp file should be writable");
            paths.push(path);
            contents.push(format!("content of file {i}").into_bytes());
        }

        let results = digest_files(&paths);
        for (result, content) in results.iter().zip(&contents) {
            assert_eq!(
                result.as_ref().expect("file read should succeed"),
                &digest(content)
            );
        }
    }

    #[test]
    fn digest_files_reports_missing_files() {
        let results = digest_files(&["nonexistent_file_12345.txt"]);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
