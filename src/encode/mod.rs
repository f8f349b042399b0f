mod float;
mod int;

use std::io;
use std::io::{Read, Write};

#[derive(Debug)]
pub enum EncodableError {
    IOError(io::Error),
    FormatError(&'static str),
}

impl From<io::Error> for EncodableError {
    fn from(err: io::Error) -> EncodableError {
        EncodableError::IOError(err)
    }
}

pub trait Encodable<W>
where
    W: Write,
{
    fn encode(&self, writer: &mut W) -> Result<(), EncodableError>;
}

pub trait Decodable<T, R>
where
    R: Read,
{
    fn decode(reader: &mut R) -> Result<T, EncodableError>;
}
