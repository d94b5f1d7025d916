use mtd_core::markdown::front_matter::{decode, encode};
use mtd_core::{FrontMatterError, TaskFrontMatter};

fn header(title: &str, is_done: bool) -> TaskFrontMatter {
    TaskFrontMatter {
        title: title.to_string(),
        is_done,
    }
}

#[test]
fn encode_emits_double_quoted_strings_and_separator_line() {
    let text = encode(&header("Buy milk", false), "2%").unwrap();
    assert_eq!(text, "---\ntitle: \"Buy milk\"\nis_done: false\n---\n\n2%\n");
}

#[test]
fn encode_keeps_booleans_unquoted() {
    let text = encode(&header("Done thing", true), "").unwrap();
    assert!(text.contains("is_done: true"));
    assert!(!text.contains("is_done: \"true\""));
}

#[test]
fn encode_quotes_strings_that_need_escaping() {
    let text = encode(&header("Say \"hi\"", false), "body").unwrap();
    assert!(text.contains("title: \"Say \\\"hi\\\"\""));

    let decoded = decode::<TaskFrontMatter>(&text).unwrap();
    assert_eq!(decoded.front_matter.title, "Say \"hi\"");
}

#[test]
fn decode_round_trips_the_encoded_document() {
    let original = header("Weekly review", true);
    let body = "first line\n\nsecond paragraph";
    let text = encode(&original, body).unwrap();

    let decoded = decode::<TaskFrontMatter>(&text).unwrap();
    assert_eq!(decoded.front_matter, original);
    assert_eq!(decoded.body, format!("{body}\n"));
}

#[test]
fn decode_strips_only_the_inserted_blank_line() {
    let text = "---\ntitle: \"x\"\nis_done: false\n---\n\n\nbody after extra blank\n";
    let decoded = decode::<TaskFrontMatter>(text).unwrap();
    assert_eq!(decoded.body, "\nbody after extra blank\n");
}

#[test]
fn decode_accepts_a_header_without_body() {
    let text = "---\ntitle: \"only header\"\nis_done: false\n---\n";
    let decoded = decode::<TaskFrontMatter>(text).unwrap();
    assert_eq!(decoded.front_matter.title, "only header");
    assert_eq!(decoded.body, "");
}

#[test]
fn decode_rejects_text_without_opening_delimiter() {
    let err = decode::<TaskFrontMatter>("title: \"x\"\nis_done: false\n").unwrap_err();
    assert!(matches!(err, FrontMatterError::MissingDelimiters));
}

#[test]
fn decode_rejects_an_unclosed_header() {
    let err = decode::<TaskFrontMatter>("---\ntitle: \"x\"\nis_done: false\n").unwrap_err();
    assert!(matches!(err, FrontMatterError::MissingDelimiters));
}

#[test]
fn decode_rejects_a_header_that_is_not_the_expected_record() {
    let err = decode::<TaskFrontMatter>("---\njust some prose\n---\n\nbody\n").unwrap_err();
    assert!(matches!(err, FrontMatterError::InvalidHeader(_)));
}

#[test]
fn decode_rejects_a_header_missing_required_fields() {
    let err = decode::<TaskFrontMatter>("---\ntitle: \"x\"\n---\n\nbody\n").unwrap_err();
    assert!(matches!(err, FrontMatterError::InvalidHeader(_)));
}

#[test]
fn decode_tolerates_unquoted_and_single_quoted_foreign_headers() {
    let text = "---\ntitle: plain scalar\nis_done: false\n---\n\nbody\n";
    let decoded = decode::<TaskFrontMatter>(text).unwrap();
    assert_eq!(decoded.front_matter.title, "plain scalar");

    let text = "---\ntitle: 'single quoted'\nis_done: true\n---\n\nbody\n";
    let decoded = decode::<TaskFrontMatter>(text).unwrap();
    assert_eq!(decoded.front_matter.title, "single quoted");
}
