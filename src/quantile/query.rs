use quantile::centroid::Centroid;

// Rank walk over the live centroids. The boundary comparison is `>=`, so at
// an exact cluster boundary the left centroid wins. An empty sketch answers
// with the 0.0 sentinel; callers that need to distinguish empty check the
// count separately.
pub fn percentile(centroids: &[Centroid], total_weight: u64, p: f64) -> f64 {
    assert!(p >= 0.0 && p <= 1.0, "Rank must be between zero and one");

    let size = centroids.len();
    if size == 0 {
        return 0.0;
    }

    let target_rank = p * total_weight as f64;
    let mut cumulative_weight = 0.0;

    for c in centroids[..size - 1].iter() {
        cumulative_weight += c.weight as f64;
        if cumulative_weight >= target_rank {
            return c.mean;
        }
    }

    centroids[size - 1].mean
}
