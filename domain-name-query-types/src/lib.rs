use std::fmt;
use std::str::FromStr;

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const CLASS_IN: u16 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QType {
    A,
    Ns,
    // 其他类型按原始数值保留
    Other(u16),
}

impl QType {
    pub fn code(&self) -> u16 {
        match self {
            QType::A => TYPE_A,
            QType::Ns => TYPE_NS,
            QType::Other(code) => *code,
        }
    }
}

impl From<u16> for QType {
    fn from(code: u16) -> Self {
        match code {
            TYPE_A => QType::A,
            TYPE_NS => QType::Ns,
            other => QType::Other(other),
        }
    }
}

impl fmt::Display for QType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QType::A => write!(f, "A"),
            QType::Ns => write!(f, "NS"),
            QType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

impl FromStr for QType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "A" => Ok(QType::A),
            "NS" => Ok(QType::Ns),
            _ => match upper.strip_prefix("TYPE").map(str::parse::<u16>) {
                Some(Ok(code)) => Ok(QType::from(code)),
                _ => Err(format!("unsupported query type: {}", s)),
            },
        }
    }
}

pub type Name = String;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NameQuery {
    pub name: Name,
    pub q_type: QType,
}

impl NameQuery {
    pub fn new(name_str: &str, q_type: QType) -> Self {
        Self {
            name: Name::from(name_str),
            q_type,
        }
    }

    pub fn a_record(name_str: &str) -> Self {
        Self::new(name_str, QType::A)
    }
}

impl fmt::Display for NameQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.q_type)
    }
}
