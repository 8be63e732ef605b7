//! End-to-end extraction and replacement behaviour

use flashkey_core::{BoundarySet, KeywordEntry, KeywordMatch, KeywordProcessor};

fn processor_with(keywords: &[&str]) -> KeywordProcessor {
    let mut processor = KeywordProcessor::new();
    for keyword in keywords {
        processor.add_keyword(keyword).unwrap();
    }
    processor
}

fn span_text(text: &str, found: &KeywordMatch) -> String {
    text.chars()
        .skip(found.start)
        .take(found.end - found.start)
        .collect()
}

#[test]
fn test_basic_extraction_and_replacement() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_value("Big Apple", "New York").unwrap();
    processor.add_keyword("Bay Area").unwrap();

    assert_eq!(
        processor.extract_keywords("I love Big Apple and Bay Area."),
        vec!["New York", "Bay Area"]
    );
    assert_eq!(
        processor.replace_keywords("I love Big Apple and Bay Area."),
        "I love New York and Bay Area."
    );
}

#[test]
fn test_longest_match_wins() {
    let processor = processor_with(&["New", "New York", "New York City"]);
    assert_eq!(
        processor.extract_keywords("I live in New York City now"),
        vec!["New York City"]
    );
    assert_eq!(
        processor.extract_keywords("New York or New Delhi"),
        vec!["New York", "New"]
    );
}

#[test]
fn test_partial_words_are_ignored() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_value("python prog", "Python").unwrap();
    assert!(processor
        .extract_keywords("i like python programming")
        .is_empty());
    assert_eq!(
        processor.extract_keywords("i like python prog"),
        vec!["Python"]
    );
}

#[test]
fn test_cjk_adjacent_keywords() {
    let processor = processor_with(&["雅詩蘭黛", "小棕瓶"]);
    assert_eq!(
        processor.extract_keywords("推薦雅詩蘭黛小棕瓶超好用"),
        vec!["雅詩蘭黛", "小棕瓶"]
    );

    let processor = processor_with(&["台北", "台中", "台南"]);
    assert_eq!(
        processor.extract_keywords("台北台中台南都是好城市"),
        vec!["台北", "台中", "台南"]
    );

    let processor = processor_with(&["東京", "大阪"]);
    assert_eq!(
        processor.extract_keywords("東京大阪間の新幹線"),
        vec!["東京", "大阪"]
    );

    let processor = processor_with(&["서울", "부산"]);
    assert_eq!(processor.extract_keywords("서울부산 기차"), vec!["서울", "부산"]);
}

#[test]
fn test_cjk_adjacent_spans_touch() {
    let processor = processor_with(&["蘋果", "香蕉"]);
    let found = processor.extract_keywords_with_spans("我喜歡蘋果香蕉");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].value, "蘋果");
    assert_eq!(found[1].value, "香蕉");
    assert_eq!(found[0].end, found[1].start);
}

#[test]
fn test_mixed_cjk_and_latin() {
    let processor = processor_with(&["Python", "機器學習", "深度學習"]);
    assert_eq!(
        processor.extract_keywords("I use Python做機器學習深度學習"),
        vec!["Python", "機器學習", "深度學習"]
    );

    let processor = processor_with(&["咖啡", "茶"]);
    assert_eq!(
        processor.extract_keywords("我喜歡喝咖啡，也喜歡喝茶"),
        vec!["咖啡", "茶"]
    );
}

#[test]
fn test_cjk_followed_by_digits_or_letters() {
    let processor = processor_with(&["地中海贫血"]);
    for text in [
        "地中海贫血",
        "地中海贫血2",
        "地中海贫血123",
        "地中海贫血abc",
        "地中海贫血ABC",
        "我有地中海贫血2型",
    ] {
        assert_eq!(processor.extract_keywords(text), vec!["地中海贫血"], "{text}");
    }

    let found = processor.extract_keywords_with_spans("地中海贫血2");
    assert_eq!(
        found,
        vec![KeywordMatch {
            value: "地中海贫血".into(),
            start: 0,
            end: 5,
        }]
    );
}

#[test]
fn test_cjk_replace() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_value("雅詩蘭黛", "Estee Lauder").unwrap();
    processor.add_keyword_with_value("小棕瓶", "ANR").unwrap();
    assert_eq!(
        processor.replace_keywords("推薦雅詩蘭黛小棕瓶超好用"),
        "推薦Estee LauderANR超好用"
    );
}

#[test]
fn test_spans_are_character_offsets() {
    let processor = processor_with(&["Bay Area"]);
    let text = "İ I love big Apple and Bay Area.";
    let found = processor.extract_keywords_with_spans(text);
    assert_eq!(found.len(), 1);
    assert_eq!(span_text(text, &found[0]), "Bay Area");

    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_value("straße", "street").unwrap();
    let text = "Die Straße ist lang";
    let found = processor.extract_keywords_with_spans(text);
    assert_eq!(found.len(), 1);
    assert_eq!(span_text(text, &found[0]), "Straße");
    assert_eq!(found[0].value, "street");

    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_value("Big Apple", "New York").unwrap();
    processor.add_keyword("Bay Area").unwrap();
    let text = "İ love Big Apple and Bay Area!";
    let found = processor.extract_keywords_with_spans(text);
    assert_eq!(found.len(), 2);
    assert_eq!(span_text(text, &found[0]), "Big Apple");
    assert_eq!(found[0].value, "New York");
    assert_eq!(span_text(text, &found[1]), "Bay Area");
}

#[test]
fn test_uppercase_keyword_matches_lowercase_text() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_value("PYTHON", "Python").unwrap();
    let text = "I love python programming";
    let found = processor.extract_keywords_with_spans(text);
    assert_eq!(found.len(), 1);
    assert_eq!(span_text(text, &found[0]), "python");
    assert_eq!(found[0].value, "Python");
}

#[test]
fn test_international_letters_are_word_parts() {
    let mut processor = processor_with(&["caf"]);
    assert!(processor.extract_keywords("café").is_empty());
    processor.add_keyword("café").unwrap();
    assert_eq!(
        processor.extract_keywords("I went to a café yesterday"),
        vec!["café"]
    );
}

#[test]
fn test_removed_word_char_becomes_boundary() {
    let mut processor = processor_with(&["caf"]);
    assert!(processor.extract_keywords("café").is_empty());
    processor.word_chars_mut().remove('é').unwrap();
    assert_eq!(processor.extract_keywords("café"), vec!["caf"]);

    let mut processor = processor_with(&["appl"]);
    assert!(processor.word_chars().contains('e'));
    processor.word_chars_mut().remove('e').unwrap();
    assert!(!processor.word_chars().contains('e'));
    assert_eq!(processor.extract_keywords("apple"), vec!["appl"]);
    processor.word_chars_mut().add('e');
    assert!(processor.extract_keywords("apple").is_empty());
}

#[test]
fn test_added_word_char_joins_words() {
    let mut processor = processor_with(&["Hello"]);
    assert_eq!(processor.extract_keywords("Hello!"), vec!["Hello"]);
    processor.word_chars_mut().add('!');
    assert!(processor.extract_keywords("Hello!").is_empty());
    processor.add_keyword("Hello!").unwrap();
    assert_eq!(processor.extract_keywords("Hello!"), vec!["Hello!"]);
}

#[test]
fn test_single_cjk_keyword_inside_longer_word() {
    let mut processor = processor_with(&["中"]);
    assert_eq!(processor.extract_keywords("中国"), vec!["中"]);
    processor.add_keyword("中国").unwrap();
    assert_eq!(processor.extract_keywords("中国"), vec!["中国"]);
}

#[test]
fn test_word_char_snapshot_is_independent() {
    let processor = KeywordProcessor::new();
    let mut copy = processor.word_chars().clone();
    assert!(copy.contains('a'));
    assert!(copy.contains('é'));
    copy.remove('a').unwrap();
    assert!(!copy.contains('a'));
    assert!(processor.word_chars().contains('a'));
}

#[test]
fn test_removed_underscore_is_matchable() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_value("_", "UNDERSCORE").unwrap();
    assert!(processor.extract_keywords("hello_world").is_empty());
    processor.word_chars_mut().discard('_');
    assert_eq!(processor.extract_keywords("hello_world"), vec!["UNDERSCORE"]);

    let mut processor = KeywordProcessor::new();
    processor.word_chars_mut().discard('_');
    processor.add_keyword_with_value("_", " ").unwrap();
    assert_eq!(processor.replace_keywords("hello_world"), "hello world");
    assert_eq!(
        processor.replace_keywords("the_quick_brown_fox"),
        "the quick brown fox"
    );

    let mut processor = KeywordProcessor::new();
    processor.word_chars_mut().discard('_');
    processor.add_keyword_with_value("_", "X").unwrap();
    assert_eq!(
        processor.extract_keywords_with_spans("a_b"),
        vec![KeywordMatch {
            value: "X".into(),
            start: 1,
            end: 2,
        }]
    );

    let mut processor = KeywordProcessor::new();
    processor.word_chars_mut().discard('x');
    processor.add_keyword_with_value("x", "FOUND").unwrap();
    assert_eq!(processor.extract_keywords("axb"), vec!["FOUND"]);
}

#[test]
fn test_empty_word_chars() {
    let mut processor = KeywordProcessor::with_case_sensitivity(true);
    processor.add_keyword_with_value("aa", "b").unwrap();
    processor.add_keyword_with_value("cc", "d").unwrap();
    processor.set_word_chars(BoundarySet::empty());
    assert_eq!(processor.replace_keywords("aacc"), "bd");
}

#[test]
fn test_mixed_case_entries() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword("banana").unwrap();
    processor
        .add_keyword_entry(&KeywordEntry::new("Apple").case_sensitive(true))
        .unwrap();

    assert_eq!(
        processor.extract_keywords("Apple, apple, BANANA"),
        vec!["Apple", "banana"]
    );
}

#[test]
fn test_get_all_keywords() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_value("j2ee", "Java").unwrap();
    processor.add_keyword_with_value("colour", "color").unwrap();

    let all = processor.get_all_keywords();
    assert_eq!(all.len(), 2);
    assert_eq!(all["j2ee"], "Java");
    assert_eq!(all["colour"], "color");
}

#[test]
fn test_adding_between_calls() {
    let mut processor = processor_with(&["rust"]);
    assert_eq!(processor.extract_keywords("rust and go"), vec!["rust"]);
    processor.add_keyword("go").unwrap();
    assert_eq!(processor.extract_keywords("rust and go"), vec!["rust", "go"]);
}

#[test]
fn test_empty_text_and_empty_dictionary() {
    let processor = KeywordProcessor::new();
    assert!(processor.extract_keywords("anything at all").is_empty());
    assert_eq!(processor.replace_keywords("unchanged"), "unchanged");

    let processor = processor_with(&["rust"]);
    assert!(processor.extract_keywords("").is_empty());
    assert_eq!(processor.replace_keywords(""), "");
}
