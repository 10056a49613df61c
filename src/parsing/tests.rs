//! Report parsing integration tests.
//!
//! Tests full parses of captured archiver output from __fixtures__/.

use crate::{
    extract_error, parse, parse_create, parse_listing, parse_listing_with, parse_update,
    resolve_nested, Archive, ArchiveKind, ArchiveStats, ContainerKind, Operation, ParseError,
    ParseOptions, Report,
};

const UPDATE_TAR: &str = include_str!("../../__fixtures__/update_tar.txt");
const UPDATE_KEEP: &str = include_str!("../../__fixtures__/update_keep.txt");
const DELETE_TAR: &str = include_str!("../../__fixtures__/delete_tar.txt");
const CREATE_7Z: &str = include_str!("../../__fixtures__/create_7z.txt");
const LIST_7Z_WRAPPED_TAR: &str = include_str!("../../__fixtures__/list_7z_wrapped_tar.txt");
const LIST_TAR: &str = include_str!("../../__fixtures__/list_tar.txt");
const LIST_TAR_GZ: &str = include_str!("../../__fixtures__/list_tar_gz.txt");
const LIST_ZIP: &str = include_str!("../../__fixtures__/list_zip.txt");
const ERROR_COMMAND_LINE: &str = include_str!("../../__fixtures__/error_command_line.txt");
const ERROR_WARNINGS: &str = include_str!("../../__fixtures__/error_warnings.txt");

const ALL: [&str; 10] = [
    UPDATE_TAR,
    UPDATE_KEEP,
    DELETE_TAR,
    CREATE_7Z,
    LIST_7Z_WRAPPED_TAR,
    LIST_TAR,
    LIST_TAR_GZ,
    LIST_ZIP,
    ERROR_COMMAND_LINE,
    ERROR_WARNINGS,
];

#[test]
fn test_update_adds_to_tar() {
    let result = parse_update(UPDATE_TAR).unwrap();
    assert_eq!(result.path, "source.tar");
    assert_eq!(result.size, 13312);
    assert_eq!(result.archive_type, "tar");
    assert_eq!(result.physical_size, 13312);
    assert_eq!(result.headers_size, Some(5632));
    assert_eq!(result.code_page.as_deref(), Some("UTF-8"));
    assert_eq!(result.characteristics.as_deref(), Some("GNU ASCII"));
    assert_eq!(result.added, ArchiveStats::new(3, 6, 6865));
    assert_eq!(result.previous, None);
    assert_eq!(result.deleted, None);
    assert_eq!(result.files_read, Some(6));
}

#[test]
fn test_update_keeps_old_data() {
    let result = parse_update(UPDATE_KEEP).unwrap();
    assert_eq!(result.previous, Some(ArchiveStats::new(3, 8, 12585)));
    assert_eq!(result.added, ArchiveStats::new(2, 7, 2_837_970));
    assert_eq!(result.deleted, None);
    assert_eq!(result.size, 2_867_200);
}

#[test]
fn test_delete_from_tar() {
    let result = parse_update(DELETE_TAR).unwrap();
    assert_eq!(result.deleted, Some(ArchiveStats::new(0, 1, 74192)));
    assert_eq!(result.previous, Some(ArchiveStats::new(5, 14, 2_776_363)));
    assert_eq!(result.added, ArchiveStats::new(0, 0, 0));
    assert_eq!(result.files_read, None);
    assert_eq!(result.size, 2_791_424);
}

#[test]
fn test_update_adding_a_single_byte() {
    let text = UPDATE_KEEP
        .replace(
            "Add new data to archive: 2 folders, 7 files, 2837970 bytes (2772 KiB)",
            "Add new data to archive: 1 file, 1 byte",
        )
        .replace(
            "Keep old data in archive: 3 folders, 8 files, 12585 bytes (13 KiB)",
            "Keep old data in archive: 1 file, 1 byte",
        );
    let result = parse_update(&text).unwrap();
    assert_eq!(result.added, ArchiveStats::new(0, 1, 1));
    assert_eq!(result.previous, Some(ArchiveStats::new(0, 1, 1)));
}

#[test]
fn test_create_7z() {
    let result = parse_create(CREATE_7Z).unwrap();
    assert_eq!(result.path, "source.7z");
    assert_eq!(result.size, 2311);
    assert_eq!(result.added, ArchiveStats::new(3, 6, 6865));
}

#[test]
fn test_list_7z_wrapping_encrypted_tar() {
    let archive = parse_listing(LIST_7Z_WRAPPED_TAR).unwrap();
    let Archive::SevenZip(sevenzip) = &archive else {
        panic!("expected a 7z archive, got {}", archive.kind());
    };
    assert_eq!(sevenzip.info.path, "secure.tar.7z");
    assert_eq!(sevenzip.info.physical_size, 3246);
    assert_eq!(sevenzip.info.headers_size, Some(214));
    assert_eq!(sevenzip.method, ["LZMA2:24", "7zAES"]);
    assert!(!sevenzip.solid);
    assert_eq!(sevenzip.blocks, Some(1));
    assert_eq!(sevenzip.entries.len(), 1);

    let entry = &sevenzip.entries[0];
    assert_eq!(entry.path, "secure.tar");
    assert!(entry.encrypted);
    assert_eq!(entry.method, ["LZMA2:24", "7zAES:19"]);
    assert_eq!(entry.block, Some(0));
    assert_eq!(entry.crc, Some(0x7B2E_4C1A));

    let nested = resolve_nested(&archive).unwrap();
    assert_eq!(nested.inner_kind, ArchiveKind::Tar);
    assert_eq!(nested.inner.size(), 13312);
    assert!(nested.is_encrypted());
}

#[test]
fn test_list_tar() {
    let archive = parse_listing(LIST_TAR).unwrap();
    let Archive::Tar(tar) = &archive else {
        panic!("expected a tar archive, got {}", archive.kind());
    };
    assert_eq!(tar.code_page.as_deref(), Some("UTF-8"));
    assert_eq!(tar.characteristics.as_deref(), Some("GNU ASCII"));
    assert_eq!(tar.info.container, None);

    let paths: Vec<_> = tar.entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["src", "src/main.rs", "src/bin", "src/bin/cli.rs", "latest"]);

    // The last three entries carry no Folder marker.
    for entry in &tar.entries[2..] {
        let mode_says_folder = entry.mode.as_deref().is_some_and(|m| m.starts_with('d'));
        assert_eq!(entry.folder, mode_says_folder, "{}", entry.path);
    }
    assert!(tar.entries[0].folder);
    assert!(!tar.entries[1].folder);
    assert!(tar.entries[2].folder);
    assert_eq!(tar.entries[2].user, None);
    assert_eq!(tar.entries[2].user_id, 0);
    assert_eq!(tar.entries[3].user_id, 1000);
    assert_eq!(tar.entries[3].group.as_deref(), Some("staff"));
    assert_eq!(tar.entries[4].symbolic_link.as_deref(), Some("src/main.rs"));
    assert!(!tar.entries[4].folder);
    assert!(tar.entries[4].is_link());
}

#[test]
fn test_list_zip() {
    let archive = parse_listing(LIST_ZIP).unwrap();
    assert_eq!(archive.kind(), ArchiveKind::Zip);
    assert_eq!(archive.info().headers_size, None);
    let Archive::Zip(zip) = &archive else {
        unreachable!();
    };
    assert!(zip.entries[0].folder);
    assert_eq!(zip.entries[0].crc, None);
    assert_eq!(zip.entries[0].method, ["Store"]);
    assert!(zip.entries[1].encrypted);
    assert_eq!(zip.entries[1].offset, Some(64));
    assert_eq!(resolve_nested(&archive), None);
}

#[test]
fn test_list_7z_folders_with_extra_attributes() {
    let text = "\
Listing archive: attrs.7z

--
Path = attrs.7z
Type = 7z
Physical Size = 400
Headers Size = 200
Solid = -
Blocks = 0

----------
Path = ro_dir
Size = 0
Attributes = RD

Path = hidden_dir
Size = 0
Attributes = HD_ drwxr-xr-x

Path = notes.txt
Size = 12
Attributes = A_ -rw-r--r--
";
    let archive = parse_listing(text).unwrap();
    let folders: Vec<_> = archive.entries().map(|e| (e.path(), e.is_folder())).collect();
    assert_eq!(
        folders,
        [("ro_dir", true), ("hidden_dir", true), ("notes.txt", false)]
    );
}

#[test]
fn test_list_tar_inside_gzip() {
    let archive = parse_listing(LIST_TAR_GZ).unwrap();
    assert_eq!(archive.kind(), ArchiveKind::Tar);
    assert_eq!(archive.path(), "logs.tar");
    let container = archive.info().container.as_ref().unwrap();
    assert_eq!(container.kind, ContainerKind::Gzip);
    assert_eq!(container.path, "logs.tar.gz");
    assert_eq!(archive.len(), 1);
    assert_eq!(archive.entry(0).unwrap().path(), "app.log");
}

#[test]
fn test_listing_with_options() {
    let opts = ParseOptions {
        filter: Some(Box::new(|path: &str, _: usize| path.ends_with(".rs"))),
        max_entries: Some(1),
    };
    let archive = parse_listing_with(LIST_TAR, &opts).unwrap();
    assert_eq!(archive.len(), 1);
    assert_eq!(archive.entry(0).unwrap().path(), "src/main.rs");
}

#[test]
fn test_parse_dispatches_on_banner() {
    assert_eq!(parse(LIST_TAR).unwrap().operation(), Operation::List);
    assert_eq!(parse(CREATE_7Z).unwrap().operation(), Operation::Create);
    assert_eq!(parse(UPDATE_KEEP).unwrap().operation(), Operation::Update);
    assert!(matches!(parse(UPDATE_TAR), Ok(Report::Update(r)) if r.path == "source.tar"));
    assert!(matches!(
        parse(ERROR_COMMAND_LINE),
        Err(ParseError::UnrecognizedHeader(_))
    ));
}

#[test]
fn test_wrong_parser_for_report() {
    assert!(matches!(
        parse_listing(CREATE_7Z),
        Err(ParseError::UnrecognizedHeader(_))
    ));
    assert!(matches!(
        parse_create(UPDATE_TAR),
        Err(ParseError::UnrecognizedHeader(_))
    ));
    assert!(matches!(
        parse_update(LIST_TAR),
        Err(ParseError::UnrecognizedHeader(_))
    ));
}

#[test]
fn test_create_without_add_line() {
    assert!(matches!(
        parse_create(ERROR_WARNINGS),
        Err(ParseError::MissingField { field: "Add new data to archive", .. })
    ));
}

#[test]
fn test_error_command_line_returned_whole() {
    assert_eq!(
        extract_error(ERROR_COMMAND_LINE).as_deref(),
        Some("Command Line Error:\nIncorrect wildcard type marker\nsrc/*.*")
    );
}

#[test]
fn test_error_first_warning_only() {
    assert_eq!(
        extract_error(ERROR_WARNINGS).as_deref(),
        Some("WARNING: No more files\nmissing/a.txt")
    );
}

#[test]
fn test_no_error_in_clean_report() {
    assert_eq!(extract_error(UPDATE_KEEP), None);
}

#[test]
fn test_missing_entry_size_is_reported_with_segment() {
    let text = LIST_TAR.replace("Size = 1432\n", "");
    match parse_listing(&text) {
        Err(ParseError::MissingField { field, segment }) => {
            assert_eq!(field, "Size");
            assert!(segment.starts_with("Path = src/main.rs"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_parsing_is_idempotent() {
    for text in ALL {
        assert_eq!(parse(text), parse(text));
        assert_eq!(extract_error(text), extract_error(text));
    }
}

#[test]
fn test_concurrent_parses_agree() {
    let expected: Vec<_> = ALL.iter().map(|text| parse(text)).collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| ALL.iter().map(|text| parse(text)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let report = parse(LIST_7Z_WRAPPED_TAR).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"type\":\"7z\""));
    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
