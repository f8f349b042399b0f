use encode::{Decodable, Encodable, EncodableError};
use std::io::{Read, Write};

impl<W> Encodable<W> for f64
where
    W: Write,
{
    fn encode(&self, writer: &mut W) -> Result<(), EncodableError> {
        self.to_bits().encode(writer)
    }
}

impl<R> Decodable<f64, R> for f64
where
    R: Read,
{
    fn decode(reader: &mut R) -> Result<f64, EncodableError> {
        let bits = u64::decode(reader)?;
        Ok(f64::from_bits(bits))
    }
}
