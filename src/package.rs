//! OOXML package part carry-over.
//!
//! The document writer only emits the parts it parses, so binaries and parts
//! it does not model (media, header/footer parts, themes, fonts) would be
//! dropped from the rewritten archive. This module copies those parts over
//! from the source package at the ZIP level.

use crate::error::Result;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;
use zip::{ZipArchive, ZipWriter};

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Rewrites `target`, appending every part present in `source` but missing
/// from the generated archive.
///
/// `[Content_Types].xml` is taken from `source`: its declarations cover the
/// carried parts, while the generated parts are a subset of the source's.
pub fn carry_missing_parts(source: &Path, target: &Path) -> Result<()> {
    let mut source_zip = ZipArchive::new(File::open(source)?)?;
    let generated = fs::read(target)?;
    let mut generated_zip = ZipArchive::new(Cursor::new(generated))?;

    let generated_names: HashSet<String> =
        generated_zip.file_names().map(str::to_string).collect();

    let mut writer = ZipWriter::new(File::create(target)?);
    for index in 0..generated_zip.len() {
        let entry = generated_zip.by_index(index)?;
        if entry.name() == CONTENT_TYPES_PART {
            continue;
        }
        writer.raw_copy_file(entry)?;
    }

    let mut carried = 0usize;
    for index in 0..source_zip.len() {
        let entry = source_zip.by_index(index)?;
        if entry.name() == CONTENT_TYPES_PART || !generated_names.contains(entry.name()) {
            writer.raw_copy_file(entry)?;
            carried += 1;
        }
    }

    writer.finish()?;
    debug!(carried, "package parts carried over from the source archive");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut writer = ZipWriter::new(File::create(path).expect("create zip"));
        for (name, body) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .expect("start entry");
            writer.write_all(body.as_bytes()).expect("write entry");
        }
        writer.finish().expect("finish zip");
    }

    fn read_entry(path: &Path, name: &str) -> Option<String> {
        let mut archive = ZipArchive::new(File::open(path).expect("open zip")).expect("archive");
        let mut entry = archive.by_name(name).ok()?;
        let mut out = String::new();
        std::io::Read::read_to_string(&mut entry, &mut out).expect("read entry");
        Some(out)
    }

    #[test]
    fn test_source_only_parts_are_carried_over() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("source.docx");
        let target = dir.path().join("target.docx");

        write_zip(
            &source,
            &[
                (CONTENT_TYPES_PART, "<Types with-media/>"),
                ("word/document.xml", "<old/>"),
                ("word/media/image1.png", "PNGDATA"),
                ("word/header1.xml", "<hdr/>"),
            ],
        );
        write_zip(
            &target,
            &[
                (CONTENT_TYPES_PART, "<Types minimal/>"),
                ("word/document.xml", "<new/>"),
            ],
        );

        carry_missing_parts(&source, &target).expect("carry failed");

        assert_eq!(
            read_entry(&target, "word/document.xml").as_deref(),
            Some("<new/>")
        );
        assert_eq!(
            read_entry(&target, "word/media/image1.png").as_deref(),
            Some("PNGDATA")
        );
        assert_eq!(
            read_entry(&target, "word/header1.xml").as_deref(),
            Some("<hdr/>")
        );
        assert_eq!(
            read_entry(&target, CONTENT_TYPES_PART).as_deref(),
            Some("<Types with-media/>")
        );
    }
}
