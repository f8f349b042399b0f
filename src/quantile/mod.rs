pub mod centroid;
pub mod query;
pub mod tdigest;

pub use quantile::centroid::Centroid;
pub use quantile::tdigest::{Compression, TDigest};
