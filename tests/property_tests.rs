//! Property-based tests using proptest

use proptest::prelude::*;
use quizrank::nlp::normalizer::normalize;
use quizrank::phrase::miner::{phrase_weight, MAX_PHRASE_WEIGHT};
use quizrank::question::dedup::normalize_whitespace;
use quizrank::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Text that looks like extracted notes: words, numbers, punctuation,
/// bullets and line breaks
fn notes_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[A-Z][a-z]{2,9}",
            "[a-z]{1,10}",
            "[0-9]{1,4}",
            "[A-Z]{2,5}",
            Just(".".to_string()),
            Just(",".to_string()),
            Just(";".to_string()),
            Just("\n".to_string()),
            Just("•".to_string()),
            Just("Page".to_string()),
        ],
        0..120,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_output_length_in_bounds(text in notes_text(), seed in 0u64..1000) {
        let out = generate_with(&text, QuizConfig::default().with_seed(seed), NoopCorrector);
        prop_assert!(!out.is_empty());
        prop_assert!(out.len() <= 10, "got {} questions", out.len());
    }

    #[test]
    fn test_arbitrary_unicode_never_panics(text in "\\PC{0,400}") {
        let out = generate(&text);
        prop_assert!(!out.is_empty() && out.len() <= 10);
    }

    #[test]
    fn test_normalizer_idempotent(text in "\\PC{0,300}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalizer_idempotent_on_notes(text in notes_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains('•'));
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn test_topic_count_bounds(text in notes_text()) {
        let pipeline = QuestionPipeline::new(QuizConfig::default().with_seed(1));
        if let Ok(prepared) = pipeline.prepare(&text) {
            prop_assert!(!prepared.topics.is_empty());
            prop_assert!(prepared.topics.len() <= 12);
        }
    }

    #[test]
    fn test_ranked_candidates_unique(text in notes_text()) {
        let pipeline = QuestionPipeline::new(QuizConfig::default().with_seed(2));
        if let Ok(prepared) = pipeline.prepare(&text) {
            let mut keys: Vec<String> = prepared
                .ranked
                .iter()
                .map(|q| normalize_whitespace(&q.text))
                .collect();
            let before = keys.len();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), before);
            prop_assert!(prepared.ranked.iter().all(|q| q.text.chars().count() > 10));
        }
    }

    #[test]
    fn test_dedup_output_unique(items in prop::collection::vec("[a-c ]{0,16}", 0..40)) {
        let out = Deduplicator::default().dedup(&items);
        let mut sorted = out.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), out.len());
    }

    #[test]
    fn test_phrase_weight_bounded(words in prop::collection::vec("[a-z]{1,8}", 1..12)) {
        let phrase = words.join(" ");
        let weight = phrase_weight(&phrase);
        prop_assert!(weight >= 1 && weight <= MAX_PHRASE_WEIGHT);
        prop_assert_eq!(weight as usize, words.len().min(5));
    }

    #[test]
    fn test_mcq_answer_is_an_option(
        topics in prop::collection::vec("[A-Z][a-z]{2,8}( [A-Z][a-z]{2,8}){0,2}", 1..12),
        pick in any::<prop::sample::Index>(),
        seed in any::<u64>()
    ) {
        let target = pick.get(&topics).clone();
        let mut builder = MultipleChoiceBuilder::new(StdRng::seed_from_u64(seed));
        let mcq = builder.build(&target, &topics);

        prop_assert_eq!(&mcq.answer, &target);
        prop_assert_eq!(mcq.options.iter().filter(|o| **o == target).count(), 1);
        let rendered = mcq.to_string();
        prop_assert_eq!(rendered.lines().count(), 3);
        let expected_tail = format!("\nAnswer: {target}");
        prop_assert!(rendered.ends_with(&expected_tail));
    }

    #[test]
    fn test_batch_correction_keeps_order(items in prop::collection::vec("[a-z ]{0,20}", 0..30)) {
        let out: Vec<String> = correct_batch(&NoopCorrector, &items, 3)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        prop_assert_eq!(out, items);
    }
}
