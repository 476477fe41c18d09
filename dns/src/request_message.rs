use crate::error::EncodeError;
use crate::header::Header;
use crate::question::Question;
use domain_name_query_types::QType;

pub struct RequestMessage {
    header: Header,
    question: Question,
}

impl RequestMessage {
    pub fn new(domain: &str, qtype: QType, id: u16) -> Self {
        let header = Header::query(id);
        let question = Question::new(domain, qtype);

        Self { header, question }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<(), EncodeError> {
        self.header.to_bytes(bytes)?;
        self.question.to_bytes(bytes)?;

        Ok(())
    }
}

/// Builds query messages, drawing transaction IDs from its own random
/// source.
pub struct QueryBuilder {
    rng: fastrand::Rng,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn build(&mut self, domain: &str, qtype: QType) -> Result<Vec<u8>, EncodeError> {
        let id = self.rng.u16(..);
        crate::encode_request(domain, qtype, id)
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
