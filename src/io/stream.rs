use std::io::{self, Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::models::{PointSet, Vec3};
use crate::utils::NBodyError;

/// Size of one point record on the wire: three little-endian `f32` values.
const RECORD_SIZE: usize = 12;

/// Reads point records from `reader` until the stream ends.
///
/// Records are 12 bytes each (x, y, z as little-endian `f32`). A trailing
/// partial record is discarded.
///
/// # Returns
/// The parsed points, `NBodyError::EmptyInput` if no complete record was
/// found, or the underlying I/O error.
pub fn read_points<R: Read>(mut reader: R) -> Result<PointSet, NBodyError> {
    let mut positions = Vec::new();
    let mut record = [0u8; RECORD_SIZE];
    while fill_record(&mut reader, &mut record)? {
        let mut cursor = Cursor::new(&record[..]);
        let x = cursor.read_f32::<LittleEndian>()?;
        let y = cursor.read_f32::<LittleEndian>()?;
        let z = cursor.read_f32::<LittleEndian>()?;
        positions.push(Vec3::new(x, y, z));
    }
    if positions.is_empty() {
        return Err(NBodyError::EmptyInput);
    }
    Ok(PointSet::new(positions))
}

/// Fills `record` from the reader. Returns false on end of stream, dropping
/// any partial record on the floor.
fn fill_record<R: Read>(reader: &mut R, record: &mut [u8; RECORD_SIZE]) -> Result<bool, NBodyError> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match reader.read(&mut record[filled..]) {
            Ok(0) => return Ok(false),
            Ok(count) => filled += count,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(true)
}

/// Writes one 12-byte record per force, in particle order, using the same
/// layout as the point input.
pub fn write_forces<W: Write>(writer: &mut W, forces: &[Vec3]) -> Result<(), NBodyError> {
    for force in forces {
        writer.write_f32::<LittleEndian>(force.x)?;
        writer.write_f32::<LittleEndian>(force.y)?;
        writer.write_f32::<LittleEndian>(force.z)?;
    }
    Ok(())
}
