use encode::{Decodable, Encodable, EncodableError};
use std::io::{Read, Write};

// Mean followed by weight, both 8 bytes little-endian
pub const STORED_BYTES: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Centroid {
    pub mean: f64,
    pub weight: u64,
}

impl Centroid {
    pub fn new(mean: f64, weight: u64) -> Centroid {
        Centroid { mean, weight }
    }

    // A weight of zero marks a dead slot in the stored representation
    pub fn dead() -> Centroid {
        Centroid {
            mean: 0.0,
            weight: 0,
        }
    }

    pub fn is_live(&self) -> bool {
        self.weight > 0
    }

    pub fn weighted_mean(&self) -> f64 {
        self.mean * self.weight as f64
    }

    // Absorb `other` into this centroid, replacing the mean with the
    // weight-weighted average of the two means
    pub fn merge(&mut self, other: &Centroid) {
        let weight = self.weight + other.weight;
        debug_assert!(weight > 0);
        self.mean = (self.weighted_mean() + other.weighted_mean()) / weight as f64;
        self.weight = weight;
    }
}

impl<W> Encodable<W> for Centroid
where
    W: Write,
{
    fn encode(&self, writer: &mut W) -> Result<(), EncodableError> {
        self.mean.encode(writer)?;
        self.weight.encode(writer)?;
        Ok(())
    }
}

impl<R> Decodable<Centroid, R> for Centroid
where
    R: Read,
{
    fn decode(reader: &mut R) -> Result<Centroid, EncodableError> {
        let mean = f64::decode(reader)?;
        let weight = u64::decode(reader)?;
        Ok(Centroid { mean, weight })
    }
}
