use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::util::types::{Key, Value};

///A single line of a fixture script, in the command language the
/// database server reads: adds carry a payload, deletes end with a
/// trailing space, queries are bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Add { key: Key, value: Value },
    Delete { key: Key },
    Query { key: Key },
}

impl Record {
    pub fn key(&self) -> Key {
        match *self {
            Record::Add { key, .. } | Record::Delete { key } | Record::Query { key } => key,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Record::Add { key, value } => write!(f, "a {key} {value}"),
            //the trailing space is part of the format, preserve it literally
            Record::Delete { key } => write!(f, "d {key} "),
            Record::Query { key } => write!(f, "q {key}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized record line {0:?}")]
pub struct ParseRecordError(pub String);

impl FromStr for Record {
    type Err = ParseRecordError;

    ///Strict inverse of Display: accepts exactly the three line shapes
    /// and nothing else
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseRecordError(String::from(line));
        let mut tokens = line.split(' ');
        let op = tokens.next().ok_or_else(malformed)?;
        let key: Key = tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(malformed)?;
        let record = match op {
            "a" => {
                let value: Value = tokens
                    .next()
                    .and_then(|token| token.parse().ok())
                    .ok_or_else(malformed)?;
                Record::Add { key, value }
            }
            //a delete line's trailing space splits off one empty token
            "d" if tokens.next() == Some("") => Record::Delete { key },
            "q" => Record::Query { key },
            _ => return Err(malformed()),
        };
        if tokens.next().is_some() {
            return Err(malformed());
        }
        Ok(record)
    }
}
