// https://datatracker.ietf.org/doc/html/rfc1035#section-4
//
// Wire codec: queries are encoded without compression, responses are
// decoded with compression pointer support.

mod error;
mod header;
mod name;
mod question;
mod request_message;
mod resource_record;
mod response_message;

use std::io::Cursor;

pub use domain_name_query_types::{QType, CLASS_IN, TYPE_A, TYPE_NS};
pub use error::{DecodeError, EncodeError};
pub use header::{Header, HEADER_LEN, RECURSION_DESIRED};
pub use name::{encode_name, MAX_LABEL_LEN};
pub use question::Question;
pub use request_message::{QueryBuilder, RequestMessage};
pub use resource_record::{RecordData, ResourceRecord};
pub use response_message::ResponseMessage;

pub fn encode_request(domain: &str, qtype: QType, id: u16) -> Result<Vec<u8>, EncodeError> {
    let request_msg = RequestMessage::new(domain, qtype, id);
    let mut request_bytes: Vec<u8> = vec![];
    request_msg.to_bytes(&mut request_bytes)?;

    Ok(request_bytes)
}

pub fn decode_response(response_bytes: &[u8]) -> Result<ResponseMessage, DecodeError> {
    ResponseMessage::parse_response(response_bytes)
}

pub(crate) fn remaining(rdr: &Cursor<&[u8]>) -> usize {
    let len = rdr.get_ref().len() as u64;
    len.saturating_sub(rdr.position()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_own_query() {
        let bytes = encode_request("example.com", QType::A, 0xbeef).unwrap();
        let msg = decode_response(&bytes).unwrap();

        assert_eq!(msg.header().id(), 0xbeef);
        assert_eq!(msg.question().domain(), "example.com");
        assert_eq!(msg.question().qtype(), QType::A);
        assert!(msg.answers().is_empty());
    }
}
