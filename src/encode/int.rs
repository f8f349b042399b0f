use encode::{Decodable, Encodable, EncodableError};
use std::io::{Read, Write};

impl<W> Encodable<W> for u64
where
    W: Write,
{
    fn encode(&self, writer: &mut W) -> Result<(), EncodableError> {
        writer.write_all(&self.to_le_bytes()).map_err(From::from)
    }
}

impl<R> Decodable<u64, R> for u64
where
    R: Read,
{
    fn decode(reader: &mut R) -> Result<u64, EncodableError> {
        let mut buf = [0u8; 8];
        reader.read_exact(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}
