use embedded_io::SeekFrom;
use embedded_stream::{codec, stream};

use super::*;

fn path_in(dir: &tempfile::TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_owned()
}

#[test]
fn test_file_stream_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "header.bin");

    let mut file = StdFileStream::new();
    assert!(!file.is_open());
    file.open(&path, Mode::Write).unwrap();
    codec::write_u32(&mut file, 0x04034b50).unwrap();
    codec::write_u16(&mut file, 20).unwrap();
    codec::write_value(&mut file, 5 << 32, codec::Width::U32).unwrap();
    assert_eq!(stream::tell(&mut file), Ok(10));
    file.close().unwrap();
    assert!(!file.is_open());

    file.open(&path, Mode::Read).unwrap();
    assert_eq!(codec::read_u32(&mut file), Ok(0x04034b50));
    assert_eq!(codec::read_u16(&mut file), Ok(20));
    assert_eq!(codec::read_u32(&mut file), Ok(u32::MAX));
    assert_eq!(stream::seek(&mut file, SeekFrom::Start(4)), Ok(4));
    assert_eq!(codec::read_u8(&mut file), Ok(20));
    assert_eq!(file.error(), None);
    file.close().unwrap();

    assert_eq!(std::fs::read(&path).unwrap().len(), 10);
}

#[test]
fn test_file_stream_append() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "log");
    std::fs::write(&path, b"abc").unwrap();

    let mut file = StdFileStream::new();
    file.open(&path, Mode::Append).unwrap();
    assert_eq!(stream::write(&mut file, b"def"), Ok(3));
    file.close().unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"abcdef");
}

#[test]
fn test_file_stream_open_missing() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = StdFileStream::new();
    assert_eq!(
        file.open(&path_in(&dir, "missing"), Mode::Read),
        Err(StreamError::IoError(embedded_io::ErrorKind::NotFound))
    );
    assert!(!file.is_open());
    assert_eq!(
        file.error(),
        Some(StreamError::IoError(embedded_io::ErrorKind::NotFound))
    );
    let mut buf = [0u8; 4];
    assert_eq!(stream::read(&mut file, &mut buf), Err(StreamError::NotOpen));
    assert_eq!(file.close(), Ok(()));
}

#[test]
fn test_file_queries() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "book.epub");
    std::fs::write(&path, vec![7u8; 4321]).unwrap();

    assert!(file_exists::<StdFileStream>(&path));
    assert_eq!(file_size::<StdFileStream>(&path), 4321);

    let missing = path_in(&dir, "missing.epub");
    assert!(!file_exists::<StdFileStream>(&missing));
    assert_eq!(file_size::<StdFileStream>(&missing), 0);
}

#[test]
fn test_copy_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = path_in(&dir, "source");
    let target = path_in(&dir, "target");
    let data: Vec<u8> = (0..150_000).map(|i| (i % 253) as u8).collect();
    std::fs::write(&source, &data).unwrap();

    assert_eq!(copy_file(&source, &target, None), Ok((150_000, 150_000)));
    assert_eq!(std::fs::read(&target).unwrap(), data);

    assert_eq!(copy_file(&source, &target, Some(100)), Ok((100, 100)));
    assert_eq!(std::fs::read(&target).unwrap(), &data[..100]);

    assert_eq!(
        copy_file(&source, &target, Some(150_001)),
        Err(StreamError::UnexpectedEof)
    );
    assert!(copy_file(&path_in(&dir, "missing"), &target, Some(1)).is_err());
}

#[test]
fn test_close_both_closes_second_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "source");
    std::fs::write(&path, b"data").unwrap();

    let mut unbound = Passthru::new();
    let mut source = StdFileStream::new();
    source.open(&path, Mode::Read).unwrap();
    assert_eq!(
        close_both(&mut unbound, &mut source),
        Err(StreamError::NoBase)
    );
    assert!(!source.is_open());

    source.open(&path, Mode::Read).unwrap();
    assert_eq!(
        close_both(&mut source, &mut unbound),
        Err(StreamError::NoBase)
    );
    assert!(!source.is_open());

    let mut other = Passthru::new();
    assert_eq!(
        close_both(&mut unbound, &mut other),
        Err(StreamError::NoBase)
    );
}

#[test]
fn test_parse_hex() {
    assert_eq!(parse_hex("0x3a6f73ca"), Ok(0x3a6f73ca));
    assert_eq!(parse_hex("3A6F73CA"), Ok(0x3a6f73ca));
    assert!(parse_hex("0x1_0000_0000").is_err());
    assert!(parse_hex("zz").is_err());
}

#[test]
fn test_format_calendar() {
    let tm = dos_date::decode(0x3a6f73ca).unwrap();
    assert_eq!(format_calendar(&tm), "2009-03-15 14:30:20");
}
