use super::{
    EXIF_IDENTIFIER_LEN, ExifBlob, IFD_ENTRY_LEN, TAG_ORIENTATION, TIFF_HEADER_LEN, TYPE_SHORT,
};
use crate::error::{CoreError, Result};

const LSB_MAGIC: &[u8; 10] = b"Exif\x00\x00II\x2a\x00";
const MSB_MAGIC: &[u8; 10] = b"Exif\x00\x00MM\x00\x2a";

/// Byte order declared by a TIFF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// `II`, Intel.
    LittleEndian,
    /// `MM`, Motorola.
    BigEndian,
}

impl ByteOrder {
    #[inline]
    pub fn read_u16(self, raw: &[u8]) -> Option<u16> {
        let bytes = raw.get(..2)?.try_into().ok()?;
        Some(match self {
            Self::LittleEndian => u16::from_le_bytes(bytes),
            Self::BigEndian => u16::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn read_u32(self, raw: &[u8]) -> Option<u32> {
        let bytes = raw.get(..4)?.try_into().ok()?;
        Some(match self {
            Self::LittleEndian => u32::from_le_bytes(bytes),
            Self::BigEndian => u32::from_be_bytes(bytes),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    pub byte_order: ByteOrder,
    /// Offset of IFD0, relative to the start of the TIFF header.
    pub ifd0_offset: u32,
}

impl TiffHeader {
    /// Parses the identifier and TIFF header at the start of an APP1 payload.
    pub fn parse(blob: &[u8]) -> Result<Self> {
        if blob.len() < EXIF_IDENTIFIER_LEN + TIFF_HEADER_LEN {
            return Err(CoreError::ExifTooShort { len: blob.len() });
        }

        let byte_order = match &blob[..LSB_MAGIC.len()] {
            m if m == LSB_MAGIC => ByteOrder::LittleEndian,
            m if m == MSB_MAGIC => ByteOrder::BigEndian,
            _ => return Err(CoreError::BadTiffMagic),
        };

        let ifd0_offset = byte_order
            .read_u32(&blob[LSB_MAGIC.len()..])
            .ok_or(CoreError::ExifTooShort { len: blob.len() })?;

        if (ifd0_offset as usize) < TIFF_HEADER_LEN {
            return Err(CoreError::BackwardsIfdOffset {
                offset: ifd0_offset,
            });
        }

        Ok(Self {
            byte_order,
            ifd0_offset,
        })
    }

    /// Position of IFD0 within the APP1 payload.
    #[inline]
    pub fn ifd0_position(&self) -> usize {
        EXIF_IDENTIFIER_LEN.saturating_add(self.ifd0_offset as usize)
    }
}

/// One 12-byte IFD record. `value` is kept raw and never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    pub value: [u8; 4],
}

impl IfdEntry {
    pub fn parse(order: ByteOrder, raw: &[u8]) -> Option<Self> {
        let raw = raw.get(..IFD_ENTRY_LEN)?;
        Some(Self {
            tag: order.read_u16(raw)?,
            field_type: order.read_u16(&raw[2..])?,
            count: order.read_u32(&raw[4..])?,
            value: raw[8..12].try_into().ok()?,
        })
    }

    #[inline]
    pub fn is_orientation(&self) -> bool {
        self.tag == TAG_ORIENTATION && self.field_type == TYPE_SHORT && self.count == 1
    }

    /// The inline SHORT stored in the first two value bytes.
    #[inline]
    pub fn inline_short(&self, order: ByteOrder) -> u16 {
        match order {
            ByteOrder::LittleEndian => u16::from_le_bytes([self.value[0], self.value[1]]),
            ByteOrder::BigEndian => u16::from_be_bytes([self.value[0], self.value[1]]),
        }
    }
}

/// Returns the raw Orientation value stored in IFD0 of an EXIF payload.
///
/// Only IFD0 is examined. An entry with the orientation tag but a type
/// other than SHORT or a count other than 1 is skipped like any other tag.
pub fn read_orientation_tag(blob: &ExifBlob) -> Result<u16> {
    let data = blob.as_bytes();
    let header = TiffHeader::parse(data)?;
    let order = header.byte_order;

    let position = header.ifd0_position();
    let truncated = |entries: u16| CoreError::TruncatedDirectory {
        position,
        entries,
        len: data.len(),
    };

    let entries = data
        .get(position..)
        .and_then(|rest| order.read_u16(rest))
        .ok_or_else(|| truncated(0))?;

    let dir_start = position + 2;
    let dir_end = dir_start
        .checked_add(IFD_ENTRY_LEN * entries as usize)
        .filter(|&end| end <= data.len())
        .ok_or_else(|| truncated(entries))?;

    for raw in data[dir_start..dir_end].chunks_exact(IFD_ENTRY_LEN) {
        let Some(entry) = IfdEntry::parse(order, raw) else {
            break;
        };
        tracing::trace!(
            tag = entry.tag,
            field_type = entry.field_type,
            count = entry.count,
            "ifd0 entry"
        );
        if entry.is_orientation() {
            return Ok(entry.inline_short(order));
        }
    }

    Err(CoreError::OrientationMissing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_blob(entries: &[(u16, u16, u32, u16)]) -> Vec<u8> {
        let mut blob = LSB_MAGIC.to_vec();
        blob.extend_from_slice(&8u32.to_le_bytes());
        blob.extend_from_slice(&(entries.len() as u16).to_le_bytes());
        for &(tag, ty, count, value) in entries {
            blob.extend_from_slice(&tag.to_le_bytes());
            blob.extend_from_slice(&ty.to_le_bytes());
            blob.extend_from_slice(&count.to_le_bytes());
            blob.extend_from_slice(&value.to_le_bytes());
            blob.extend_from_slice(&[0, 0]);
        }
        blob.extend_from_slice(&0u32.to_le_bytes());
        blob
    }

    fn be_blob(entries: &[(u16, u16, u32, u16)]) -> Vec<u8> {
        let mut blob = MSB_MAGIC.to_vec();
        blob.extend_from_slice(&8u32.to_be_bytes());
        blob.extend_from_slice(&(entries.len() as u16).to_be_bytes());
        for &(tag, ty, count, value) in entries {
            blob.extend_from_slice(&tag.to_be_bytes());
            blob.extend_from_slice(&ty.to_be_bytes());
            blob.extend_from_slice(&count.to_be_bytes());
            blob.extend_from_slice(&value.to_be_bytes());
            blob.extend_from_slice(&[0, 0]);
        }
        blob.extend_from_slice(&0u32.to_be_bytes());
        blob
    }

    fn read(data: Vec<u8>) -> Result<u16> {
        read_orientation_tag(&ExifBlob::new(data))
    }

    #[test]
    fn test_little_endian_orientation() {
        let blob = le_blob(&[(0x010F, 2, 6, 0x1234), (TAG_ORIENTATION, TYPE_SHORT, 1, 6)]);
        assert_eq!(read(blob).unwrap(), 6);
    }

    #[test]
    fn test_big_endian_orientation() {
        let blob = be_blob(&[(0x010F, 2, 6, 0x1234), (TAG_ORIENTATION, TYPE_SHORT, 1, 6)]);
        assert_eq!(read(blob).unwrap(), 6);
    }

    #[test]
    fn test_header_parse() {
        let header = TiffHeader::parse(&be_blob(&[])).unwrap();
        assert_eq!(header.byte_order, ByteOrder::BigEndian);
        assert_eq!(header.ifd0_offset, 8);
        assert_eq!(header.ifd0_position(), 14);
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            read(LSB_MAGIC.to_vec()),
            Err(CoreError::ExifTooShort { len: 10 })
        ));
    }

    #[test]
    fn test_bad_magic() {
        let mut blob = le_blob(&[(TAG_ORIENTATION, TYPE_SHORT, 1, 3)]);
        blob[6] = b'X';
        assert!(matches!(read(blob), Err(CoreError::BadTiffMagic)));

        let mut blob = le_blob(&[(TAG_ORIENTATION, TYPE_SHORT, 1, 3)]);
        blob[0] = b'e';
        assert!(matches!(read(blob), Err(CoreError::BadTiffMagic)));
    }

    #[test]
    fn test_mixed_magic_rejected() {
        let mut blob = le_blob(&[(TAG_ORIENTATION, TYPE_SHORT, 1, 3)]);
        blob[6] = b'M';
        blob[7] = b'M';
        assert!(matches!(read(blob), Err(CoreError::BadTiffMagic)));
    }

    #[test]
    fn test_backwards_offset() {
        let mut blob = le_blob(&[(TAG_ORIENTATION, TYPE_SHORT, 1, 3)]);
        blob[10..14].copy_from_slice(&7u32.to_le_bytes());
        assert!(matches!(
            read(blob),
            Err(CoreError::BackwardsIfdOffset { offset: 7 })
        ));
    }

    #[test]
    fn test_offset_past_end() {
        let mut blob = le_blob(&[(TAG_ORIENTATION, TYPE_SHORT, 1, 3)]);
        blob[10..14].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            read(blob),
            Err(CoreError::TruncatedDirectory { .. })
        ));
    }

    #[test]
    fn test_gap_before_ifd0() {
        let mut blob = LSB_MAGIC.to_vec();
        blob.extend_from_slice(&12u32.to_le_bytes());
        blob.extend_from_slice(&[0xEE; 4]);
        blob.extend_from_slice(&1u16.to_le_bytes());
        blob.extend_from_slice(&TAG_ORIENTATION.to_le_bytes());
        blob.extend_from_slice(&TYPE_SHORT.to_le_bytes());
        blob.extend_from_slice(&1u32.to_le_bytes());
        blob.extend_from_slice(&[8, 0, 0, 0]);
        assert_eq!(read(blob).unwrap(), 8);
    }

    #[test]
    fn test_directory_larger_than_payload() {
        let mut blob = le_blob(&[(TAG_ORIENTATION, TYPE_SHORT, 1, 3)]);
        blob[14..16].copy_from_slice(&2u16.to_le_bytes());
        blob.truncate(14 + 2 + 12 + 4);
        assert!(matches!(
            read(blob),
            Err(CoreError::TruncatedDirectory { entries: 2, .. })
        ));
    }

    #[test]
    fn test_wrong_type_or_count_is_skipped() {
        let blob = le_blob(&[(TAG_ORIENTATION, 4, 1, 6), (TAG_ORIENTATION, TYPE_SHORT, 2, 6)]);
        assert!(matches!(read(blob), Err(CoreError::OrientationMissing)));

        let blob = le_blob(&[(TAG_ORIENTATION, 4, 1, 6), (TAG_ORIENTATION, TYPE_SHORT, 1, 5)]);
        assert_eq!(read(blob).unwrap(), 5);
    }

    #[test]
    fn test_empty_directory() {
        assert!(matches!(
            read(le_blob(&[])),
            Err(CoreError::OrientationMissing)
        ));
    }

    #[test]
    fn test_out_of_range_value_is_returned_raw() {
        assert_eq!(read(le_blob(&[(TAG_ORIENTATION, TYPE_SHORT, 1, 9)])).unwrap(), 9);
        assert_eq!(read(be_blob(&[(TAG_ORIENTATION, TYPE_SHORT, 1, 0)])).unwrap(), 0);
    }

    #[test]
    fn test_entry_parse() {
        let raw = [0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00];
        let entry = IfdEntry::parse(ByteOrder::LittleEndian, &raw).unwrap();
        assert!(entry.is_orientation());
        assert_eq!(entry.inline_short(ByteOrder::LittleEndian), 6);
        assert!(IfdEntry::parse(ByteOrder::LittleEndian, &raw[..11]).is_none());
    }
}
