use crc32fast::Hasher;

/// Generate a page seed from its id using CRC32
pub fn get_page_seed(page_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(page_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for the sections of one page
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Page seed (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(page_id: &str) -> Self {
        Self {
            seed: get_page_seed(page_id),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Generate the next id that `is_taken` does not claim.
    ///
    /// Restored pages carry ids minted by an earlier generator with the same
    /// seed, so candidates are checked before they are handed out.
    pub fn next_unused(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = self.new_id();
            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }

    /// Get page seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_seed_generation() {
        let seed1 = get_page_seed("landing");
        let seed2 = get_page_seed("landing");

        // Same page always generates same seed
        assert_eq!(seed1, seed2);

        // Different pages generate different seeds
        assert_ne!(seed1, get_page_seed("pricing"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("landing");

        let id1 = gen.new_id();
        let id2 = gen.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id1.starts_with(gen.seed()));
    }

    #[test]
    fn test_next_unused_skips_taken_ids() {
        let mut gen = IdGenerator::from_seed("abc".to_string());
        let taken = ["abc-1".to_string(), "abc-2".to_string()];

        let id = gen.next_unused(|candidate| taken.iter().any(|t| t == candidate));
        assert_eq!(id, "abc-3");
    }
}
