//src/entities/src/rng.rs
use rand::{
    distr::uniform,
    {Rng, SeedableRng},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Single deterministic source for every random draw in a run.
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: Pcg32,
    seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `0..=100`.
    pub fn roll_percent(&mut self) -> u32 {
        self.rng.random_range(0..=100)
    }

    /// Uniform step in `{-1, 0, 1}`.
    pub fn step(&mut self) -> i32 {
        self.rng.random_range(-1..=1)
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

// Serialised as its seed only.
impl Serialize for SimRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.seed)
    }
}

impl<'de> Deserialize<'de> for SimRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(Self::new(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_rng() {
        let mut rng1 = SimRng::new(123);
        let mut rng2 = SimRng::new(123);

        let a: Vec<u32> = (0..32).map(|_| rng1.roll_percent()).collect();
        let b: Vec<u32> = (0..32).map(|_| rng2.roll_percent()).collect();
        assert_eq!(a, b);
        assert_eq!(rng1.seed(), 123);

        let mut other = SimRng::new(456);
        let c: Vec<u32> = (0..32).map(|_| other.roll_percent()).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_draw_ranges() {
        let mut rng = SimRng::new(789);
        for _ in 0..1000 {
            assert!(rng.roll_percent() <= 100);
            assert!((-1..=1).contains(&rng.step()));
        }
    }

    #[test]
    fn test_serializes_as_seed() {
        let rng = SimRng::new(42);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "42");
        let back: SimRng = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed(), 42);
    }
}
