use crate::error::DecodeError;
use crate::name::read_name;
use crate::remaining;
use byteorder::{ReadBytesExt, BE};
use domain_name_query_types::QType;
use std::fmt;
use std::io::{Cursor, Read};
use std::net::Ipv4Addr;

// type + class + ttl + rdlength
const FIXED_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Ns(String),
    Other(Vec<u8>),
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Ns(name) => write!(f, "{}", name),
            RecordData::Other(bytes) => {
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    domain: String,
    rtype: QType,
    rclass: u16,
    ttl: u32,
    rdlength: u16,
    rdata: RecordData,
}

impl ResourceRecord {
    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self, DecodeError> {
        let domain = read_name(rdr).map_err(|e| e.or_truncated(DecodeError::TruncatedRecord))?;

        if remaining(rdr) < FIXED_LEN {
            return Err(DecodeError::TruncatedRecord);
        }
        let truncated = |_| DecodeError::TruncatedRecord;
        let rtype = QType::from(rdr.read_u16::<BE>().map_err(truncated)?);
        let rclass = rdr.read_u16::<BE>().map_err(truncated)?;
        let ttl = rdr.read_u32::<BE>().map_err(truncated)?;
        let rdlength = rdr.read_u16::<BE>().map_err(truncated)?;

        let rdata = match rtype {
            // NS 的数据本身是一个（可能被压缩的）域名，按名字语法读取
            QType::Ns => {
                let available = remaining(rdr);
                let name = read_name(rdr).map_err(|e| {
                    e.or_truncated(DecodeError::TruncatedRecordData {
                        expected: rdlength as usize,
                        available,
                    })
                })?;
                RecordData::Ns(name)
            }
            QType::A => {
                let bytes = read_rdata(rdr, rdlength)?;
                let octets: [u8; 4] = bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| DecodeError::BadAddressLength(rdlength))?;
                RecordData::A(Ipv4Addr::from(octets))
            }
            QType::Other(_) => RecordData::Other(read_rdata(rdr, rdlength)?),
        };

        let record = Self {
            domain,
            rtype,
            rclass,
            ttl,
            rdlength,
            rdata,
        };

        Ok(record)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn rtype(&self) -> QType {
        self.rtype
    }

    pub fn rclass(&self) -> u16 {
        self.rclass
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn rdlength(&self) -> u16 {
        self.rdlength
    }

    pub fn rdata(&self) -> &RecordData {
        &self.rdata
    }
}

fn read_rdata(rdr: &mut Cursor<&[u8]>, rdlength: u16) -> Result<Vec<u8>, DecodeError> {
    let expected = rdlength as usize;
    let available = remaining(rdr);
    if available < expected {
        return Err(DecodeError::TruncatedRecordData { expected, available });
    }

    let mut rdata = vec![0u8; expected];
    rdr.read_exact(&mut rdata)
        .map_err(|_| DecodeError::TruncatedRecordData { expected, available })?;

    Ok(rdata)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(bytes: &[u8]) -> Result<ResourceRecord, DecodeError> {
        let mut rdr = Cursor::new(bytes);
        ResourceRecord::parse_from_reader(&mut rdr)
    }

    #[test]
    fn a_record() {
        let bytes = [
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, // name
            0, 1, 0, 1, // type A, class IN
            0, 0, 0x0e, 0x10, // ttl 3600
            0, 4, // rdlength
            93, 184, 216, 34,
        ];
        let record = parse(&bytes).unwrap();

        assert_eq!(record.domain(), "example.com");
        assert_eq!(record.rtype(), QType::A);
        assert_eq!(record.ttl(), 3600);
        assert_eq!(record.rdlength(), 4);
        assert_eq!(record.rdata().to_string(), "93.184.216.34");
    }

    #[test]
    fn ns_record_with_pointer_in_data() {
        // 0: "com", 5: record "example" -> com, NS ns1 -> example.com
        let mut bytes = b"\x03com\x00".to_vec();
        let record_start = bytes.len() as u64;
        bytes.extend_from_slice(b"\x07example\xc0\x00");
        bytes.extend_from_slice(&[0, 2, 0, 1, 0, 0, 0, 60, 0, 6]);
        bytes.extend_from_slice(b"\x03ns1\xc0\x05");
        bytes.push(0xee);

        let mut rdr = Cursor::new(bytes.as_slice());
        rdr.set_position(record_start);
        let record = ResourceRecord::parse_from_reader(&mut rdr).unwrap();

        assert_eq!(record.domain(), "example.com");
        assert_eq!(record.rtype(), QType::Ns);
        assert_eq!(record.rdata(), &RecordData::Ns("ns1.example.com".to_string()));
        assert_eq!(rdr.position() as usize, bytes.len() - 1);
    }

    #[test]
    fn other_record_is_opaque() {
        let bytes = [0, 0, 16, 0, 1, 0, 0, 0, 0, 0, 3, 2, b'h', b'i'];
        let record = parse(&bytes).unwrap();

        assert_eq!(record.domain(), "");
        assert_eq!(record.rtype(), QType::Other(16));
        assert_eq!(record.rdata(), &RecordData::Other(vec![2, b'h', b'i']));
        assert_eq!(record.rdata().to_string(), "026869");
    }

    #[test]
    fn short_fixed_part() {
        let bytes = [0, 0, 1, 0, 1, 0, 0, 0];
        assert_eq!(parse(&bytes), Err(DecodeError::TruncatedRecord));
        assert_eq!(parse(&[]), Err(DecodeError::TruncatedRecord));
    }

    #[test]
    fn short_data() {
        let bytes = [0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 4, 1, 2];
        assert_eq!(
            parse(&bytes),
            Err(DecodeError::TruncatedRecordData {
                expected: 4,
                available: 2
            })
        );

        let ns = [0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 5, 3, b'n', b's'];
        assert!(matches!(
            parse(&ns),
            Err(DecodeError::TruncatedRecordData { .. })
        ));
    }

    #[test]
    fn a_record_with_wrong_length() {
        let bytes = [0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 6, 1, 2, 3, 4, 5, 6];
        assert_eq!(parse(&bytes), Err(DecodeError::BadAddressLength(6)));
    }
}
