use embedded_io::SeekFrom;

use crate::stream::{self, Mode, Stream};

/// Whether `path` can be opened for reading by a fresh `S`.
///
/// The probe stream is dropped before returning, on every path.
pub fn file_exists<S: Stream + Default>(path: &str) -> bool {
    let mut probe = S::default();
    if stream::open(&mut probe, path, Mode::Read).is_err() {
        return false;
    }
    let _ = stream::close(&mut probe);
    true
}

/// Size of the file at `path` as seen by a fresh `S`, 0 when it can't be
/// opened or measured.
pub fn file_size<S: Stream + Default>(path: &str) -> u64 {
    let mut probe = S::default();
    if stream::open(&mut probe, path, Mode::Read).is_err() {
        return 0;
    }
    let size = stream::seek(&mut probe, SeekFrom::End(0))
        .and_then(|_| stream::tell(&mut probe))
        .unwrap_or(0);
    let _ = stream::close(&mut probe);
    size
}
