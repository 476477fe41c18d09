use crate::error::DecodeError;
use crate::header::Header;
use crate::question::Question;
use crate::remaining;
use crate::resource_record::ResourceRecord;
use domain_name_query_types::QType;
use std::io::Cursor;

// root name + type + class + ttl + rdlength
const MIN_RECORD_LEN: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    header: Header,
    question: Question,
    answer_records: Vec<ResourceRecord>,
    authority_records: Vec<ResourceRecord>,
    additional_records: Vec<ResourceRecord>,
}

impl ResponseMessage {
    // 解析 DNS 的响应，任何一段读不全都直接报错，不返回部分结果
    pub fn parse_response(response: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Cursor::new(response);

        let header = Header::parse_from_reader(&mut reader)?;
        let question = Question::parse_from_reader(&mut reader)?;

        let answer_records = parse_records(&mut reader, header.answer_count())?;
        let authority_records = parse_records(&mut reader, header.authority_count())?;
        let additional_records = parse_records(&mut reader, header.additional_count())?;

        let msg = Self {
            header,
            question,
            answer_records,
            authority_records,
            additional_records,
        };

        Ok(msg)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answer_records
    }

    pub fn authority(&self) -> &[ResourceRecord] {
        &self.authority_records
    }

    pub fn additional(&self) -> &[ResourceRecord] {
        &self.additional_records
    }

    pub fn first_answer(&self, qtype: QType) -> Option<&ResourceRecord> {
        first_of_type(&self.answer_records, qtype)
    }

    pub fn first_authority(&self, qtype: QType) -> Option<&ResourceRecord> {
        first_of_type(&self.authority_records, qtype)
    }

    pub fn first_additional(&self, qtype: QType) -> Option<&ResourceRecord> {
        first_of_type(&self.additional_records, qtype)
    }
}

fn parse_records(rdr: &mut Cursor<&[u8]>, count: u16) -> Result<Vec<ResourceRecord>, DecodeError> {
    // 计数来自报文本身，按剩余字节数（每条至少 11 字节）限制预分配
    let capacity = (count as usize).min(remaining(rdr) / MIN_RECORD_LEN);
    let mut records: Vec<ResourceRecord> = Vec::with_capacity(capacity);
    for _ in 0..count {
        let record = ResourceRecord::parse_from_reader(rdr)?;
        records.push(record);
    }

    Ok(records)
}

fn first_of_type(records: &[ResourceRecord], qtype: QType) -> Option<&ResourceRecord> {
    records.iter().find(|r| r.rtype() == qtype)
}
