use crate::error::{EncodeError, NameError};
use byteorder::ReadBytesExt;
use std::io::{Cursor, Read};

pub const MAX_LABEL_LEN: usize = 63;

// 长度字节高两位为 11 表示压缩指针
const POINTER_TAG: u8 = 0b1100_0000;

// 单个名字允许跟随的指针次数，超过则视为指针环
const MAX_POINTER_JUMPS: usize = 64;

/// Encodes a dotted domain name as a length-prefixed label sequence
/// terminated by a zero byte. Never emits compression pointers.
///
/// A single trailing dot is accepted, and `""` or `"."` encode to the root
/// name.
pub fn encode_name(domain: &str) -> Result<Vec<u8>, EncodeError> {
    let mut qname: Vec<u8> = Vec::with_capacity(domain.len() + 2);

    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(EncodeError::EmptyLabel(domain.to_string()));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(EncodeError::LabelTooLong(label.to_string()));
            }

            qname.push(label.len() as u8);
            qname.extend_from_slice(label.as_bytes());
        }
    }

    qname.push(0);

    Ok(qname)
}

/// Reads a possibly compressed name starting at the cursor position and
/// leaves the cursor right after the name as it appears in the stream
/// (after the terminating zero or after the first pointer).
pub(crate) fn read_name(rdr: &mut Cursor<&[u8]>) -> Result<String, NameError> {
    let mut labels: Vec<String> = Vec::new();
    read_labels(rdr, &mut labels, 0)?;

    Ok(labels.join("."))
}

fn read_labels(
    rdr: &mut Cursor<&[u8]>,
    labels: &mut Vec<String>,
    jumps: usize,
) -> Result<(), NameError> {
    loop {
        let len = rdr.read_u8().map_err(|_| NameError::Truncated)?;

        if len == 0 {
            return Ok(());
        }

        match len & POINTER_TAG {
            POINTER_TAG => {
                let low = rdr.read_u8().map_err(|_| NameError::Truncated)?;
                let offset = (u16::from(len & !POINTER_TAG) << 8) | u16::from(low);

                if jumps >= MAX_POINTER_JUMPS {
                    return Err(NameError::PointerLoop(offset));
                }

                // 指针总是名字的结尾：跳过去读完再回到指针之后
                let resume = rdr.position();
                rdr.set_position(u64::from(offset));
                let result = read_labels(rdr, labels, jumps + 1);
                rdr.set_position(resume);

                return result;
            }
            0 => {
                let mut label = vec![0u8; len as usize];
                rdr.read_exact(&mut label)
                    .map_err(|_| NameError::Truncated)?;
                labels.push(String::from_utf8_lossy(&label).into_owned());
            }
            _ => return Err(NameError::BadLabelType(len)),
        }
    }
}
