use crate::error::{DecodeError, EncodeError};
use crate::name::{encode_name, read_name};
use crate::remaining;
use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use domain_name_query_types::{QType, CLASS_IN};
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    domain: String,
    qtype: QType,
    qclass: u16,
}

impl Question {
    pub fn new(domain: &str, qtype: QType) -> Self {
        Self {
            domain: domain.to_string(),
            qtype,
            qclass: CLASS_IN,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<(), EncodeError> {
        let qname = encode_name(&self.domain)?;
        bytes.extend_from_slice(&qname);

        bytes.write_u16::<BE>(self.qtype.code())?;
        bytes.write_u16::<BE>(self.qclass)?;

        Ok(())
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self, DecodeError> {
        let domain = read_name(rdr)
            .map_err(|e| e.or_truncated(DecodeError::TruncatedMessage("question name")))?;

        // type + class
        if remaining(rdr) < 4 {
            return Err(DecodeError::TruncatedMessage("question"));
        }
        let truncated = |_| DecodeError::TruncatedMessage("question");
        let qtype = rdr.read_u16::<BE>().map_err(truncated)?;
        let qclass = rdr.read_u16::<BE>().map_err(truncated)?;

        let q = Self {
            domain,
            qtype: QType::from(qtype),
            qclass,
        };

        Ok(q)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn qtype(&self) -> QType {
        self.qtype
    }

    pub fn qclass(&self) -> u16 {
        self.qclass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_test() {
        let mut bytes = vec![];
        Question::new("google.com", QType::A)
            .to_bytes(&mut bytes)
            .unwrap();

        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[12..], &[0, 1, 0, 1]);
    }

    #[test]
    fn parse_ns_question() {
        let bytes = b"\x07example\x03com\x00\x00\x02\x00\x01";
        let mut rdr = Cursor::new(&bytes[..]);
        let q = Question::parse_from_reader(&mut rdr).unwrap();

        assert_eq!(q.domain(), "example.com");
        assert_eq!(q.qtype(), QType::Ns);
        assert_eq!(q.qclass(), CLASS_IN);
    }

    #[test]
    fn short_type_and_class() {
        let bytes = b"\x03com\x00\x00\x01\x00";
        let mut rdr = Cursor::new(&bytes[..]);
        assert_eq!(
            Question::parse_from_reader(&mut rdr),
            Err(DecodeError::TruncatedMessage("question"))
        );
    }

    #[test]
    fn short_name() {
        let bytes = b"\x07exam";
        let mut rdr = Cursor::new(&bytes[..]);
        assert_eq!(
            Question::parse_from_reader(&mut rdr),
            Err(DecodeError::TruncatedMessage("question name"))
        );
    }
}
