#![expect(missing_docs)]

use charscan::{
    CharScanner, CharSpan, Charset, ScanOptions, SpanStatus, TruncationPolicy, UnmappedLeadPolicy,
};

#[test]
fn spans_serialize_with_status() {
    let text = b"a\x82";
    let spans: Vec<CharSpan> = CharScanner::new(&Charset::ShiftJis, text)
        .with_options(ScanOptions::lenient())
        .map(Result::unwrap)
        .collect();
    let json = serde_json::to_string(&spans).unwrap();
    assert_eq!(
        json,
        r#"[{"first":0,"last":1,"status":"well_formed"},{"first":1,"last":2,"status":"truncated"}]"#
    );
    let back: Vec<CharSpan> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spans);
    assert_eq!(back[1].status, SpanStatus::Truncated);
}

#[test]
fn charset_and_options_deserialize() {
    let charset: Charset = serde_json::from_str(r#""shift-jis""#).unwrap();
    assert_eq!(charset, Charset::ShiftJis);

    let options: ScanOptions =
        serde_json::from_str(r#"{"truncation":"truncate","unmapped_lead":"error"}"#).unwrap();
    assert_eq!(options.truncation, TruncationPolicy::Truncate);
    assert_eq!(options.unmapped_lead, UnmappedLeadPolicy::Error);
}

#[test]
fn policies_serialize_in_snake_case() {
    let json = serde_json::to_string(&ScanOptions::default()).unwrap();
    assert_eq!(json, r#"{"truncation":"error","unmapped_lead":"single"}"#);
    let json = serde_json::to_string(&ScanOptions::lenient()).unwrap();
    assert_eq!(json, r#"{"truncation":"truncate","unmapped_lead":"single"}"#);
}
