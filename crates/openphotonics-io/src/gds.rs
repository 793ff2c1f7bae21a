//! GDS-II binary stream writer (minimal subset).
//!
//! GDS-II is the industry-standard binary layout interchange format. This
//! writer emits the record subset needed for a skeleton library:
//! HEADER → BGNLIB/LIBNAME/UNITS → (BGNSTR … ENDSTR)* → ENDLIB, with
//! BOUNDARY elements inside structures.
//!
//! ## Record structure
//! Each record: [2-byte length][1-byte record kind][1-byte data kind][payload]
//!
//! The writer appends records strictly sequentially and performs no grammar
//! validation: balancing `begin_structure`/`end_structure` is the caller's
//! responsibility.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Datelike, Local, Timelike};
use thiserror::Error;

use openphotonics_core::geometry::Point;

// ── GDS-II Record Types ──────────────────────────────────────────────

mod record_type {
    pub const HEADER: u16 = 0x0002;
    pub const BGNLIB: u16 = 0x0102;
    pub const LIBNAME: u16 = 0x0206;
    pub const UNITS: u16 = 0x0305;
    pub const ENDLIB: u16 = 0x0400;
    pub const BGNSTR: u16 = 0x0502;
    pub const STRNAME: u16 = 0x0606;
    pub const ENDSTR: u16 = 0x0700;
    pub const BOUNDARY: u16 = 0x0800;
    pub const LAYER: u16 = 0x0D02;
    pub const DATATYPE: u16 = 0x0E02;
    pub const XY: u16 = 0x1003;
    pub const ENDEL: u16 = 0x1100;
}

/// GDS-II stream format version emitted in the HEADER record.
const GDS_VERSION: i16 = 600;

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum GdsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// ── GDS-II Writer ─────────────────────────────────────────────────────

/// Sequential GDS-II record writer over any byte sink.
///
/// Database unit (meters per integer coordinate step) and precision are
/// fixed at construction; physical coordinates are divided by the unit and
/// truncated toward zero when emitted.
pub struct GdsWriter<W: Write> {
    writer: W,
    unit: f64,
    precision: f64,
}

impl GdsWriter<BufWriter<File>> {
    /// Create (or truncate) `path` and take exclusive ownership of the
    /// handle for the writer's lifetime.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, GdsError> {
        let file = File::create(path.as_ref())?;
        log::info!("writing GDS-II stream to {}", path.as_ref().display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> GdsWriter<W> {
    /// Wrap an arbitrary sink with the default 1 µm unit / 1 nm precision.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            unit: 1e-6,
            precision: 1e-9,
        }
    }

    pub fn unit(&self) -> f64 {
        self.unit
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    fn write_record(&mut self, record_type: u16, data: &[u8]) -> Result<(), GdsError> {
        let total_len = (data.len() + 4) as u16;
        self.writer.write_all(&total_len.to_be_bytes())?;
        self.writer.write_all(&record_type.to_be_bytes())?;
        if !data.is_empty() {
            self.writer.write_all(data)?;
        }
        Ok(())
    }

    fn write_i16_record(&mut self, record_type: u16, values: &[i16]) -> Result<(), GdsError> {
        let data: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
        self.write_record(record_type, &data)
    }

    fn write_i32_record(&mut self, record_type: u16, values: &[i32]) -> Result<(), GdsError> {
        let data: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
        self.write_record(record_type, &data)
    }

    fn write_f64_record(&mut self, record_type: u16, values: &[f64]) -> Result<(), GdsError> {
        let data: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
        self.write_record(record_type, &data)
    }

    /// NUL-terminated ASCII payload.
    fn write_cstr_record(&mut self, record_type: u16, s: &str) -> Result<(), GdsError> {
        let mut data: Vec<u8> = s.bytes().collect();
        data.push(0);
        self.write_record(record_type, &data)
    }

    /// Creation + modification timestamp: the wall clock twice, 12 i16s.
    fn write_timestamp_record(&mut self, record_type: u16) -> Result<(), GdsError> {
        let now = Local::now();
        let stamp = [
            now.year() as i16,
            now.month() as i16,
            now.day() as i16,
            now.hour() as i16,
            now.minute() as i16,
            now.second() as i16,
        ];
        let mut data = [0i16; 12];
        data[..6].copy_from_slice(&stamp);
        data[6..].copy_from_slice(&stamp);
        self.write_i16_record(record_type, &data)
    }

    /// Library preamble: HEADER, BGNLIB, LIBNAME, UNITS, in that order.
    ///
    /// UNITS carries precision then unit as two big-endian IEEE doubles.
    pub fn write_header(&mut self, library_name: &str) -> Result<(), GdsError> {
        self.write_i16_record(record_type::HEADER, &[GDS_VERSION])?;
        self.write_timestamp_record(record_type::BGNLIB)?;
        self.write_cstr_record(record_type::LIBNAME, library_name)?;
        self.write_f64_record(record_type::UNITS, &[self.precision, self.unit])?;
        Ok(())
    }

    /// Open a named structure block. Must be balanced with
    /// [`end_structure`](Self::end_structure) before closing the stream.
    pub fn begin_structure(&mut self, name: &str) -> Result<(), GdsError> {
        self.write_timestamp_record(record_type::BGNSTR)?;
        self.write_cstr_record(record_type::STRNAME, name)
    }

    pub fn end_structure(&mut self) -> Result<(), GdsError> {
        self.write_record(record_type::ENDSTR, &[])
    }

    /// Emit a filled polygon element: BOUNDARY, LAYER, DATATYPE, the scaled
    /// coordinate block, ENDEL. The caller supplies the closed vertex loop.
    pub fn write_boundary(
        &mut self,
        layer: i16,
        datatype: i16,
        points: &[Point],
    ) -> Result<(), GdsError> {
        self.write_record(record_type::BOUNDARY, &[])?;
        self.write_i16_record(record_type::LAYER, &[layer])?;
        self.write_i16_record(record_type::DATATYPE, &[datatype])?;

        let coords: Vec<i32> = points
            .iter()
            .flat_map(|p| [(p.x / self.unit) as i32, (p.y / self.unit) as i32])
            .collect();
        self.write_i32_record(record_type::XY, &coords)?;
        self.write_record(record_type::ENDEL, &[])
    }

    /// Append the ENDLIB terminator, flush, and release the sink.
    ///
    /// Consuming `self` makes a double close unrepresentable.
    pub fn close(mut self) -> Result<(), GdsError> {
        self.write_record(record_type::ENDLIB, &[])?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split a raw stream into (record_type, payload) pairs.
    fn parse_records(mut bytes: &[u8]) -> Vec<(u16, Vec<u8>)> {
        let mut records = Vec::new();
        while !bytes.is_empty() {
            let len = u16::from_be_bytes([bytes[0], bytes[1]]) as usize;
            assert!(len >= 4, "record length {len} too small");
            let record_type = u16::from_be_bytes([bytes[2], bytes[3]]);
            records.push((record_type, bytes[4..len].to_vec()));
            bytes = &bytes[len..];
        }
        records
    }

    #[test]
    fn test_header_record_order() {
        let mut buffer: Vec<u8> = Vec::new();
        let mut writer = GdsWriter::new(&mut buffer);
        writer.write_header("RPC_INTERFACE").unwrap();
        writer.close().unwrap();

        let records = parse_records(&buffer);
        let types: Vec<u16> = records.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            types,
            vec![
                record_type::HEADER,
                record_type::BGNLIB,
                record_type::LIBNAME,
                record_type::UNITS,
                record_type::ENDLIB,
            ]
        );

        // HEADER carries the stream version.
        assert_eq!(records[0].1, 600i16.to_be_bytes().to_vec());
        // BGNLIB carries 12 i16 timestamp values.
        assert_eq!(records[1].1.len(), 24);
        // LIBNAME is NUL-terminated ASCII.
        assert_eq!(records[2].1, b"RPC_INTERFACE\0".to_vec());
        // UNITS carries precision then unit as big-endian IEEE doubles.
        let units = &records[3].1;
        assert_eq!(units.len(), 16);
        let precision = f64::from_be_bytes(units[..8].try_into().unwrap());
        let unit = f64::from_be_bytes(units[8..].try_into().unwrap());
        assert_eq!(precision, 1e-9);
        assert_eq!(unit, 1e-6);
    }

    #[test]
    fn test_structure_bracketing() {
        let mut buffer: Vec<u8> = Vec::new();
        let mut writer = GdsWriter::new(&mut buffer);
        writer.begin_structure("TOP").unwrap();
        writer.end_structure().unwrap();
        writer.close().unwrap();

        let records = parse_records(&buffer);
        assert_eq!(records[0].0, record_type::BGNSTR);
        assert_eq!(records[1].0, record_type::STRNAME);
        assert_eq!(records[1].1, b"TOP\0".to_vec());
        assert_eq!(records[2].0, record_type::ENDSTR);
        assert!(records[2].1.is_empty());
        assert_eq!(records[3].0, record_type::ENDLIB);
    }

    #[test]
    fn test_boundary_coordinate_scaling() {
        let mut buffer: Vec<u8> = Vec::new();
        let mut writer = GdsWriter::new(&mut buffer);
        writer
            .write_boundary(4, 0, &[Point::new(1.0, 2.0), Point::new(-0.5, 0.0)])
            .unwrap();
        writer.close().unwrap();

        let records = parse_records(&buffer);
        assert_eq!(records[0].0, record_type::BOUNDARY);
        assert_eq!(records[1].0, record_type::LAYER);
        assert_eq!(records[1].1, 4i16.to_be_bytes().to_vec());
        assert_eq!(records[2].0, record_type::DATATYPE);

        let xy = &records[3].1;
        assert_eq!(records[3].0, record_type::XY);
        let coords: Vec<i32> = xy
            .chunks_exact(4)
            .map(|c| i32::from_be_bytes(c.try_into().unwrap()))
            .collect();
        // 1 µm unit: 1.0 → 1_000_000 database units; truncation toward zero.
        assert_eq!(coords, vec![1_000_000, 2_000_000, -500_000, 0]);
        assert_eq!(records[4].0, record_type::ENDEL);
    }

    #[test]
    fn test_record_framing_lengths() {
        let mut buffer: Vec<u8> = Vec::new();
        let mut writer = GdsWriter::new(&mut buffer);
        writer.write_header("LIB").unwrap();
        writer.close().unwrap();

        // Every record's declared length matches its framing; the stream
        // parses with no leftover bytes (parse_records panics otherwise).
        let records = parse_records(&buffer);
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn test_create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skeleton.gds");

        let mut writer = GdsWriter::create(&path).unwrap();
        writer.write_header("RPC_INTERFACE").unwrap();
        writer.begin_structure("TOP").unwrap();
        writer
            .write_boundary(
                1,
                0,
                &[
                    Point::new(0.0, 0.0),
                    Point::new(1.0, 0.0),
                    Point::new(1.0, 1.0),
                    Point::new(0.0, 0.0),
                ],
            )
            .unwrap();
        writer.end_structure().unwrap();
        writer.close().unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let records = parse_records(&bytes);
        assert_eq!(records.first().unwrap().0, record_type::HEADER);
        assert_eq!(records.last().unwrap().0, record_type::ENDLIB);
    }

    #[test]
    fn test_create_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.gds");
        assert!(matches!(GdsWriter::create(&path), Err(GdsError::Io(_))));
    }
}
