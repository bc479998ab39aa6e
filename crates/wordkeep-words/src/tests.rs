#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::bag::{compose_bag, LengthBucket, WordBag, WordMix, WordMixError};
    use crate::bank::{normalize_words, parse_bulk, WordBank, WordGroups};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn small_bank() -> WordBank {
        WordBank::new(
            "test",
            "Test bank",
            WordGroups {
                easy: vec!["ox".into(), "it".into(), "up".into()],
                medium: vec!["arrow".into(), "guard".into(), "storm".into()],
                hard: vec!["stronghold".into(), "barricade".into(), "sentinel".into()],
            },
        )
    }

    // ---- Normalization ----

    #[test]
    fn test_normalize_lowercases_and_filters() {
        let words = normalize_words(
            ["Fire", "  storm ", "", "né", "x1", "fire", "WALL"].into_iter(),
        );
        assert_eq!(words, vec!["fire", "storm", "wall"]);
    }

    #[test]
    fn test_parse_bulk_splits_on_non_letters() {
        let words = parse_bulk("fire, storm;wall\nfire 42 keep");
        assert_eq!(words, vec!["fire", "storm", "wall", "keep"]);
    }

    #[test]
    fn test_flat_list_split_is_sorted_thirds() {
        let list: Vec<String> = ["a", "bb", "ccc", "dddd", "eeeee", "ffffff"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let groups = WordGroups::from_flat_list(&list);
        assert_eq!(groups.easy, vec!["a", "bb"]);
        assert_eq!(groups.medium, vec!["ccc", "dddd"]);
        assert_eq!(groups.hard, vec!["eeeee", "ffffff"]);
    }

    #[test]
    fn test_default_bank_non_empty() {
        let bank = WordBank::default_bank();
        assert!(!bank.groups.is_empty());
        assert_eq!(bank.groups.easy.len(), 26);
    }

    // ---- Mix ----

    #[test]
    fn test_mix_validation() {
        assert!(WordMix::new(0.6, 0.3, 0.1).validate().is_ok());
        assert_eq!(
            WordMix::new(-0.1, 0.6, 0.5).validate(),
            Err(WordMixError::NegativeProportion)
        );
        assert!(matches!(
            WordMix::new(0.5, 0.3, 0.1).validate(),
            Err(WordMixError::DoesNotSumToOne { .. })
        ));
    }

    #[test]
    fn test_mix_counts_exact_total() {
        // Rounding never loses or gains words, for any total.
        let mixes = [
            WordMix::new(0.6, 0.3, 0.1),
            WordMix::new(0.3, 0.4, 0.3),
            WordMix::new(0.1, 0.3, 0.6),
            WordMix::new(1.0, 0.0, 0.0),
            WordMix::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0),
        ];
        for mix in mixes {
            for total in [1u32, 5, 16, 17, 22, 26, 100] {
                let counts = mix.counts(total);
                assert_eq!(
                    counts.iter().sum::<u32>(),
                    total,
                    "mix {mix:?} total {total}"
                );
            }
        }
    }

    #[test]
    fn test_mix_remainder_goes_to_heaviest() {
        // 0.5/0.5/0.0 over 5: rounds to 3+3, overshoot trimmed from a
        // largest group, never given to the zero-weight group.
        let counts = WordMix::new(0.5, 0.5, 0.0).counts(5);
        assert_eq!(counts.iter().sum::<u32>(), 5);
        assert_eq!(counts[2], 0);
    }

    // ---- Bag composition ----

    #[test]
    fn test_compose_bag_exact_total() {
        let bank = small_bank();
        let mix = WordMix::new(0.3, 0.4, 0.3);
        for total in [1u32, 3, 9, 20] {
            let bag = compose_bag(total, &mix, &bank, &mut rng());
            assert_eq!(bag.len(), total as usize);
        }
    }

    #[test]
    fn test_compose_bag_repeats_only_when_needed() {
        let bank = small_bank();
        // 3 words requested from a 3-word group: no repetition needed.
        let mix = WordMix::new(1.0, 0.0, 0.0);
        let mut bag = compose_bag(3, &mix, &bank, &mut rng());
        bag.sort();
        bag.dedup();
        assert_eq!(bag.len(), 3);
    }

    #[test]
    fn test_compose_bag_empty_bank_falls_back() {
        let empty = WordBank::new("empty", "Empty", WordGroups::default());
        let bag = compose_bag(10, &WordMix::new(0.6, 0.3, 0.1), &empty, &mut rng());
        assert_eq!(bag.len(), 10);
        assert!(bag.iter().all(|w| !w.is_empty()));
    }

    // ---- Runtime bag ----

    #[test]
    fn test_word_bag_draw_cycles_through_base() {
        let mut bag = WordBag::new(vec!["fire".into(), "storm".into()]);
        let mut rng = rng();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(bag.draw(&mut rng));
        }
        // Two passes over a 2-word base: each word appears exactly twice.
        seen.sort();
        assert_eq!(seen, vec!["fire", "fire", "storm", "storm"]);
    }

    #[test]
    fn test_bucket_draw_respects_bucket() {
        let mut bag = WordBag::new(vec![
            "ox".into(),
            "arrow".into(),
            "archway".into(),
            "stronghold".into(),
        ]);
        let mut rng = rng();
        for _ in 0..10 {
            let word = bag.draw_bucket(LengthBucket::Long, &mut rng);
            assert!(word.len() >= 9, "long bucket drew {word}");
        }
        for _ in 0..10 {
            let word = bag.draw_bucket(LengthBucket::Short, &mut rng);
            assert!(word.len() <= 6, "short bucket drew {word}");
        }
    }

    #[test]
    fn test_bucket_draw_falls_back_when_bucket_empty() {
        let mut bag = WordBag::new(vec!["ox".into(), "it".into()]);
        let mut rng = rng();
        // No long words exist anywhere: fall back to the full pool.
        let word = bag.draw_bucket(LengthBucket::Long, &mut rng);
        assert!(word == "ox" || word == "it");
    }

    #[test]
    fn test_bank_serde_round_trip() {
        let bank = small_bank();
        let json = serde_json::to_string(&bank).unwrap();
        let back: WordBank = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bank);
    }
}
