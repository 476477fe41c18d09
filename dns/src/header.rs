use crate::error::DecodeError;
use crate::remaining;
use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use std::io::Cursor;

pub const HEADER_LEN: usize = 12;

// flags 的第 8 位，查询时并不设置
pub const RECURSION_DESIRED: u16 = 1 << 8;

// 12 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    id: u16, // 随机数字
    flags: u16,
    qdcount: u16, // question 数量，一般为 1
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl Header {
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: 0,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> std::io::Result<()> {
        bytes.write_u16::<BE>(self.id)?;
        bytes.write_u16::<BE>(self.flags)?;
        bytes.write_u16::<BE>(self.qdcount)?;
        bytes.write_u16::<BE>(self.ancount)?;
        bytes.write_u16::<BE>(self.nscount)?;
        bytes.write_u16::<BE>(self.arcount)?;

        Ok(())
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self, DecodeError> {
        if remaining(rdr) < HEADER_LEN {
            return Err(DecodeError::TruncatedMessage("header"));
        }

        let truncated = |_| DecodeError::TruncatedMessage("header");
        let h = Self {
            id: rdr.read_u16::<BE>().map_err(truncated)?,
            flags: rdr.read_u16::<BE>().map_err(truncated)?,
            qdcount: rdr.read_u16::<BE>().map_err(truncated)?,
            ancount: rdr.read_u16::<BE>().map_err(truncated)?,
            nscount: rdr.read_u16::<BE>().map_err(truncated)?,
            arcount: rdr.read_u16::<BE>().map_err(truncated)?,
        };

        Ok(h)
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & RECURSION_DESIRED != 0
    }

    pub fn qd_count(&self) -> u16 {
        self.qdcount
    }

    pub fn answer_count(&self) -> u16 {
        self.ancount
    }

    pub fn authority_count(&self) -> u16 {
        self.nscount
    }

    pub fn additional_count(&self) -> u16 {
        self.arcount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let header = Header {
            id: 0x1234,
            flags: 0x5678,
            qdcount: 0x9abc,
            ancount: 1,
            nscount: 2,
            arcount: 3,
        };

        let mut bytes = vec![];
        header.to_bytes(&mut bytes).unwrap();
        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(&bytes[0..6], &[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc]);

        let mut rdr = Cursor::new(bytes.as_slice());
        let parsed = Header::parse_from_reader(&mut rdr).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.id(), 0x1234);
        assert_eq!(parsed.flags(), 0x5678);
        assert_eq!(parsed.qd_count(), 0x9abc);
        assert_eq!(parsed.authority_count(), 2);
        assert_eq!(parsed.additional_count(), 3);
    }

    #[test]
    fn query_header_has_no_flags() {
        let header = Header::query(7);
        assert_eq!(header.flags(), 0);
        assert!(!header.recursion_desired());
        assert_eq!(header.qd_count(), 1);
        assert_eq!(header.answer_count(), 0);
    }

    #[test]
    fn short_header() {
        let bytes = [0u8; 11];
        let mut rdr = Cursor::new(&bytes[..]);
        assert_eq!(
            Header::parse_from_reader(&mut rdr),
            Err(DecodeError::TruncatedMessage("header"))
        );
    }
}
