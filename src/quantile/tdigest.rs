use encode::{Decodable, Encodable, EncodableError};
use quantile::centroid::{self, Centroid};
use quantile::query;
use std::io::{Read, Write};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Compression {
    None,
    Standard,
    Aggressive,
}

// Fixed-capacity t-digest. Live centroids are kept sorted ascending by mean;
// when the sketch is full, adjacent centroids are merged to make room.
#[derive(Clone)]
pub struct TDigest {
    capacity: usize,
    delta: f64,
    total_weight: u64,
    centroids: Vec<Centroid>,
}

impl TDigest {
    pub fn new(capacity: usize, delta: f64) -> TDigest {
        assert!(capacity >= 2, "Capacity must be at least two");
        assert!(
            delta.is_finite() && delta >= 0.0,
            "Delta must be finite and non-negative"
        );
        TDigest {
            capacity,
            delta,
            total_weight: 0,
            centroids: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, value: f64) {
        self.add(value, 1, Compression::Aggressive);
    }

    pub fn add(&mut self, value: f64, weight: u64, mode: Compression) {
        assert!(weight > 0, "Weight must be positive");

        if self.centroids.len() < self.capacity {
            self.insert_sorted(Centroid::new(value, weight));
            return;
        }

        match mode {
            Compression::None => return, // dropped
            Compression::Standard => self.compress(),
            Compression::Aggressive => self.compress_aggressive(),
        }

        // Retry exactly once; a standard pass may not have freed a slot,
        // in which case the value is dropped
        if self.centroids.len() < self.capacity {
            self.insert_sorted(Centroid::new(value, weight));
        }
    }

    pub fn compress(&mut self) {
        if self.centroids.len() < 2 {
            return;
        }
        self.merge_adjacent(self.delta, true);
    }

    pub fn percentile(&self, p: f64) -> f64 {
        query::percentile(&self.centroids, self.total_weight, p)
    }

    pub fn percentile_set(&self, ps: &[f64]) -> Vec<f64> {
        ps.iter()
            .map(|&p| query::percentile(&self.centroids, self.total_weight, p))
            .collect()
    }

    pub fn median(&self) -> f64 {
        self.percentile(0.50)
    }

    pub fn percentile_95(&self) -> f64 {
        self.percentile(0.95)
    }

    pub fn clear(&mut self) {
        self.centroids.clear();
        self.total_weight = 0;
    }

    pub fn count(&self) -> usize {
        self.centroids.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.centroids.len() == self.capacity
    }

    // Size of the stored representation (see `Encodable` impl and `load`)
    pub fn stored_bytes(&self) -> usize {
        self.capacity * centroid::STORED_BYTES
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    // Replace the sketch contents from the stored representation, keeping
    // the configured capacity and delta. Reads exactly `capacity` records;
    // the first dead record terminates the live prefix.
    pub fn load<R>(&mut self, reader: &mut R) -> Result<(), EncodableError>
    where
        R: Read,
    {
        let mut centroids: Vec<Centroid> = Vec::with_capacity(self.capacity);
        let mut total_weight = 0u64;
        let mut live = true;
        for _ in 0..self.capacity {
            let c = Centroid::decode(reader)?;
            if !c.is_live() {
                live = false;
                continue;
            }
            if !live {
                return Err(EncodableError::FormatError("Live centroid after dead slot"));
            }
            if let Some(last) = centroids.last() {
                if c.mean < last.mean {
                    return Err(EncodableError::FormatError("Centroids not sorted by mean"));
                }
            }
            total_weight += c.weight;
            centroids.push(c);
        }
        self.centroids = centroids;
        self.total_weight = total_weight;
        Ok(())
    }

    fn insert_sorted(&mut self, c: Centroid) {
        debug_assert!(self.centroids.len() < self.capacity);
        let idx = match self
            .centroids
            .binary_search_by(|probe| probe.mean.total_cmp(&c.mean))
        {
            Ok(idx) | Err(idx) => idx,
        };
        self.centroids.insert(idx, c);
        self.total_weight += c.weight;
    }

    fn compress_aggressive(&mut self) {
        if self.centroids.len() < 2 {
            return;
        }
        let distance = find_min_distance(&self.centroids);
        if distance > self.delta {
            // Distance-only merging with the minimum adjacent distance as
            // the threshold guarantees the closest pair merges, so at least
            // one slot is freed
            self.merge_adjacent(distance, false);
        } else {
            self.merge_adjacent(self.delta, true);
        }
    }

    // Single left-to-right pass over the sorted centroids, merging into an
    // accumulator while the merge rule holds. Must stay left-to-right: the
    // weighted mean update is order-sensitive.
    fn merge_adjacent(&mut self, threshold: f64, use_weight: bool) {
        debug_assert!(self.centroids.len() > 1);

        let mut merged = 0;
        let mut current = self.centroids[0];
        for i in 1..self.centroids.len() {
            let c = self.centroids[i];
            let distance = (c.mean - current.mean).abs();
            let factor = if use_weight {
                (current.weight + c.weight) as f64
            } else {
                1.0
            };
            if factor * distance <= threshold {
                current.merge(&c);
            } else {
                self.centroids[merged] = current;
                merged += 1;
                current = c;
            }
        }
        self.centroids[merged] = current;
        self.centroids.truncate(merged + 1);

        debug_assert_eq!(
            self.centroids.iter().map(|c| c.weight).sum::<u64>(),
            self.total_weight
        );
    }
}

fn find_min_distance(centroids: &[Centroid]) -> f64 {
    debug_assert!(centroids.len() > 1);
    let mut min_distance = f64::MAX;
    for pair in centroids.windows(2) {
        let distance = (pair[1].mean - pair[0].mean).abs();
        if distance < min_distance {
            min_distance = distance;
        }
    }
    min_distance
}

impl<W> Encodable<W> for TDigest
where
    W: Write,
{
    fn encode(&self, writer: &mut W) -> Result<(), EncodableError> {
        for c in self.centroids.iter() {
            c.encode(writer)?;
        }
        let dead = Centroid::dead();
        for _ in self.centroids.len()..self.capacity {
            dead.encode(writer)?;
        }
        Ok(())
    }
}
