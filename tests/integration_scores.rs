use readability_scores::{
    Document, Metric, ReadabilityEngine, ReadabilityResult, Segmenter, Sentence, UnicodeSegmenter,
};

fn engine() -> ReadabilityEngine {
    ReadabilityEngine::with_defaults().expect("bundled word list loads")
}

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-2 * expected.abs(),
        "expected {expected} (±1%), got {actual}"
    );
}

#[test]
fn empty_and_symbol_inputs_score_zero() {
    let engine = engine();
    for text in ["", "#"] {
        let result = engine.score_text(text, &UnicodeSegmenter);
        assert_eq!(result, ReadabilityResult::ZERO, "{text:?}");
        for metric in Metric::ALL {
            assert_eq!(result.get(metric), 0.0);
        }
    }
}

#[test]
fn four_words_five_syllables() {
    let engine = engine();
    let doc = UnicodeSegmenter.segment("I contain four words.");

    let counts = engine.counts(&doc);
    assert_eq!(counts.num_words, 4);

    let syllables: usize = doc.tokens().map(|t| t.syllables).sum();
    assert_eq!(syllables, 5);
}

#[test]
fn two_sentences() {
    let doc = UnicodeSegmenter.segment("I am 2 sentences. I am the best panda?");
    assert_eq!(engine().counts(&doc).num_sentences, 2);
}

#[test]
fn short_plain_text() {
    let result = engine().score_text(
        "The cat sat on the mat. It was a sunny afternoon.",
        &UnicodeSegmenter,
    );

    assert_approx(result.flesch_kincaid_grade_level, 1.5732);
    assert_approx(result.flesch_kincaid_reading_ease, 93.5798);
    assert_approx(result.coleman_liau_index, -1.4036);
    assert_approx(result.automated_readability_index, -2.8373);
    assert_approx(result.dale_chall, 0.2728);
    assert_approx(result.forcast, 7.7273);
    // "afternoon" is the only complex word
    assert_approx(result.smog, 7.1686);
}

#[test]
fn smog_scores_short_samples() {
    let text = "The extraordinary elephant walked home. ".repeat(29);
    let result = engine().score_text(&text, &UnicodeSegmenter);
    assert_approx(result.smog, 11.2081);

    let simple = engine().score_text("The cat sat on the mat.", &UnicodeSegmenter);
    assert_eq!(simple.smog, 0.0);
}

#[test]
fn thirty_sentence_sample() {
    let text = "The extraordinary elephant walked home. ".repeat(30);
    let result = engine().score_text(&text, &UnicodeSegmenter);

    assert_approx(result.flesch_kincaid_grade_level, 14.68);
    assert_approx(result.coleman_liau_index, 18.264);
    assert_approx(result.automated_readability_index, 13.098);
    assert_approx(result.smog, 11.2081);
    assert_approx(result.dale_chall, 10.2005);
    assert_approx(result.forcast, 14.0);
    assert!(result.flesch_kincaid_reading_ease < 0.0);
}

#[test]
fn all_scores_finite_for_non_empty_text() {
    let engine = engine();
    let texts = [
        "Hi.",
        "a",
        "Go! Run! Jump!",
        "Incomprehensibilities notwithstanding, antidisestablishmentarianism persists",
        "one,two;three:four",
    ];

    for text in texts {
        let result = engine.score_text(text, &UnicodeSegmenter);
        assert!(!result.is_zero(), "{text:?}");
        for (metric, value) in result.iter() {
            assert!(value.is_finite(), "{metric} for {text:?} was {value}");
        }
    }
}

#[test]
fn longer_words_do_not_lower_grade_level() {
    let engine = engine();
    let base = ["we", "can", "see", "the", "big", "red", "dog", "run"];
    let long = ["unbelievable", "extraordinary", "communication", "responsibility"];

    let mut previous = f64::MIN;
    for replaced in 0..=long.len() {
        let words: Vec<&str> = long[..replaced]
            .iter()
            .chain(base[replaced..].iter())
            .copied()
            .collect();
        let doc = Document::new(vec![Sentence::new(words)]);

        let grade = engine.score(&doc).flesch_kincaid_grade_level;
        assert!(grade >= previous, "grade dropped to {grade} from {previous}");
        previous = grade;
    }
}

#[test]
fn scoring_twice_is_bit_identical() {
    let engine = engine();
    let doc = UnicodeSegmenter.segment(
        "It was the best of times, it was the worst of times, it was the age of wisdom.",
    );

    let first = engine.score(&doc);
    let second = engine.score(&doc);
    for metric in Metric::ALL {
        assert_eq!(first.get(metric).to_bits(), second.get(metric).to_bits());
    }
}

#[test]
fn empty_sentences_are_tolerated() {
    let engine = engine();
    let doc = Document::new(vec![
        Sentence::default(),
        Sentence::new(["The", "cat", "sat", "."]),
        Sentence::default(),
    ]);
    let plain = Document::new(vec![Sentence::new(["The", "cat", "sat", "."])]);

    assert_eq!(engine.score(&doc), engine.score(&plain));
}

#[test]
fn custom_segmenter_is_pluggable() {
    let engine = engine();
    let by_lines = |text: &str| {
        Document::new(
            text.lines()
                .map(|line| Sentence::new(line.split_whitespace()))
                .collect(),
        )
    };

    let doc = by_lines.segment("the cat sat\nthe dog ran");
    assert_eq!(engine.counts(&doc).num_sentences, 2);
    assert_eq!(
        engine.score_text("the cat sat\nthe dog ran", &by_lines),
        engine.score(&doc)
    );
}

#[test]
fn results_retrievable_by_name() {
    let result = engine().score_text("The cat sat on the mat.", &UnicodeSegmenter);

    assert_eq!(
        result.get_by_name("flesch_kincaid_grade_level"),
        Some(result.flesch_kincaid_grade_level)
    );
    assert_eq!(result.get_by_name("forcast"), Some(result.forcast));
    assert_eq!(result.get_by_name("lix"), None);
}
