//! Edge case tests for Snowflake ID generation

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::assert_ids_monotonic;
    use crate::*;
    use rand::Rng;
    use std::collections::HashSet;

    /// Verify ID bit structure: timestamp | datacenter | worker | sequence
    #[test]
    fn test_id_bit_structure() {
        let g = SnowflakeGenerator::new(0b10101, 0b01010).unwrap();
        let id = g.generate().unwrap();

        assert_eq!(id >> 63, 0, "Sign bit must be clear");
        assert_eq!((id >> 17) & 0x1F, 0b10101);
        assert_eq!((id >> 12) & 0x1F, 0b01010);
        assert_eq!(id & 0xFFF, g.extract.sequence(id) as u64);
        assert_eq!(id >> 22, g.extract.timestamp(id));
    }

    /// Test that IDs from different namespaces never collide
    #[test]
    fn test_cross_node_uniqueness() {
        let mut all_ids = HashSet::new();
        let clock = ManualClock::new(DEFAULT_EPOCH + 42);

        // Same frozen millisecond for every generator: only the node bits differ
        for datacenter in 0..4 {
            for worker in 0..4 {
                let cfg = SnowflakeConfig::builder()
                    .datacenter_id(datacenter)
                    .unwrap()
                    .worker_id(worker)
                    .unwrap()
                    .build();
                let g = SnowflakeGenerator::with_clock(cfg, clock.clone());
                for _ in 0..100 {
                    let id = g.generate().unwrap();
                    assert!(all_ids.insert(id), "Collision from {datacenter}/{worker}");
                }
            }
        }
        assert_eq!(all_ids.len(), 1600);
    }

    /// Test IDs are numerically sorted in generation order
    #[test]
    fn test_numeric_sorting() {
        let g = SnowflakeGenerator::default();
        let ids: Vec<u64> = (0..2000).map(|_| g.generate().unwrap()).collect();
        assert_ids_monotonic(&ids);
    }

    /// Test ID decomposition round-trip
    #[test]
    fn test_decomposition_roundtrip() {
        let g = SnowflakeGenerator::new(13, 29).unwrap();

        for _ in 0..100 {
            let id = g.generate().unwrap();
            let (ts, dc, worker, seq) = g.extract.decompose(id);
            assert_eq!((dc, worker), (13, 29));

            let reconstructed = (ts << 22) | ((dc as u64) << 17) | ((worker as u64) << 12) | seq as u64;
            assert_eq!(id, reconstructed, "ID should round-trip through decomposition");
        }
    }

    /// Random components survive packing and parsing
    #[test]
    fn test_random_components_parse() {
        let mut rng = rand::rng();
        let clock = ManualClock::new(DEFAULT_EPOCH);

        for _ in 0..200 {
            let datacenter = rng.random_range(0..=31i64);
            let worker = rng.random_range(0..=31i64);
            let offset = rng.random_range(0..=MAX_TIMESTAMP);
            clock.set(DEFAULT_EPOCH + offset);

            let cfg = SnowflakeConfig::builder()
                .datacenter_id(datacenter)
                .unwrap()
                .worker_id(worker)
                .unwrap()
                .build();
            let g = SnowflakeGenerator::with_clock(cfg, &clock);
            let parts = g.parse(g.generate().unwrap());

            assert_eq!(parts.timestamp_ms, DEFAULT_EPOCH + offset);
            assert_eq!(parts.datacenter_id as i64, datacenter);
            assert_eq!(parts.worker_id as i64, worker);
            assert_eq!(parts.sequence, 0);
        }
    }

    /// Parsing with a mismatched epoch shifts the timestamp by the epoch difference
    #[test]
    fn test_epoch_must_match_for_parsing() {
        let epoch = 1_704_067_200_000u64;
        let cfg = SnowflakeConfig::builder().epoch(epoch as i64).unwrap().build();
        let g = SnowflakeGenerator::with_clock(cfg, ManualClock::new(epoch + 77));
        let id = g.generate().unwrap();

        assert_eq!(g.parse(id).timestamp_ms, epoch + 77);
        assert_eq!(
            SnowflakeExtractor::default().parse(id).timestamp_ms,
            DEFAULT_EPOCH + 77,
            "default-epoch parsing is relative to 2023-01-01"
        );
    }

    #[test]
    fn test_string_ids_are_decimal() {
        let g = SnowflakeGenerator::default();
        let s = g.generate_as_string().unwrap();
        assert!(s.chars().all(|c| c.is_ascii_digit()));
        let parsed: u64 = s.parse().unwrap();
        assert_eq!(g.parse(parsed).worker_id, 1);
    }
}
