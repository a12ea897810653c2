use super::*;
use crate::testing::{symlink_bytes, symlink_bytes_with_trailer, FakeFs};

#[test]
fn test_parse_cygdrive_target() {
    let bytes = symlink_bytes("/cygdrive/c/Users/x");
    assert_eq!(parse(&bytes), Some(RawTarget::new("/cygdrive/c/Users/x")));
}

#[test]
fn test_parse_drops_last_unit_whatever_its_value() {
    for trailer in [0x0000, 0x0041, 0xffff] {
        let bytes = symlink_bytes_with_trailer("../lib/libfoo.so", trailer);
        assert_eq!(parse(&bytes), Some(RawTarget::new("../lib/libfoo.so")));
    }
}

#[test]
fn test_parse_non_ascii_target() {
    let bytes = symlink_bytes("/home/太郎/メモ.txt");
    assert_eq!(parse(&bytes).unwrap().as_str(), "/home/太郎/メモ.txt");
}

#[test]
fn test_parse_skips_leading_byte_order_mark() {
    let mut bytes = vec![0xff, 0xfe];
    bytes.extend(symlink_bytes("bin"));
    assert_eq!(parse(&bytes), Some(RawTarget::new("bin")));
}

#[test]
fn test_parse_rejects_utf8_marker_without_bom() {
    let mut bytes = b"!<symlink>".to_vec();
    bytes.extend(b"/usr/bin\0");
    assert_eq!(parse(&bytes), None);
}

#[test]
fn test_parse_rejects_short_and_foreign_content() {
    assert_eq!(parse(b""), None);
    assert_eq!(parse(b"!<sym"), None);
    assert_eq!(parse(b"IntxLNK\x01"), None);
}

#[test]
fn test_parse_marker_only_gives_empty_target() {
    let bytes = symlink_bytes_with_trailer("", 0);
    assert_eq!(parse(&bytes), Some(RawTarget::new("")));
}

#[test]
fn test_decode_requires_system_attribute() {
    let fs = FakeFs::default()
        .with_file(r"C:\plain", symlink_bytes("/etc"))
        .with_system_file(r"C:\link", symlink_bytes("/etc"));
    assert_eq!(decode(&fs, Path::new(r"C:\plain")), None);
    assert_eq!(decode(&fs, Path::new(r"C:\link")), Some(RawTarget::new("/etc")));
}

#[test]
fn test_decode_system_file_without_marker() {
    let fs = FakeFs::default().with_system_file(r"C:\pagefile.sys", b"\x00\x01\x02\x03".to_vec());
    assert_eq!(decode(&fs, Path::new(r"C:\pagefile.sys")), None);
}

#[test]
fn test_decode_missing_or_folder_is_not_a_link() {
    let fs = FakeFs::default().with_dir(r"C:\Windows");
    assert_eq!(decode(&fs, Path::new(r"C:\nope")), None);
    assert_eq!(decode(&fs, Path::new(r"C:\Windows")), None);
}

#[test]
fn test_decode_unreadable_file_is_not_a_link() {
    let fs = FakeFs::default().with_unreadable_system_file(r"C:\locked");
    assert_eq!(decode(&fs, Path::new(r"C:\locked")), None);
}
