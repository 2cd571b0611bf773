use crate::search::{MAX_HITS, VariantHit, format_price, parse_hits};

#[test]
fn test_parse_hits_decodes_tuple_rows() {
    let body = r#"[["1","Red Shoe","img1.png",100000]]"#;
    let hits = parse_hits(body).unwrap();
    assert_eq!(
        hits,
        vec![VariantHit {
            id: "1".to_string(),
            name: "Red Shoe".to_string(),
            image_url: "img1.png".to_string(),
            price: 100000.0,
        }]
    );
}

#[test]
fn test_parse_hits_caps_at_five_in_server_order() {
    let rows: Vec<String> = (1..=7)
        .map(|n| format!(r#"["{n}","Item {n}","img{n}.png",{}]"#, n * 1000))
        .collect();
    let body = format!("[{}]", rows.join(","));

    let hits = parse_hits(&body).unwrap();
    assert_eq!(hits.len(), MAX_HITS);
    let ids: Vec<&str> = hits.iter().map(|hit| hit.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_parse_hits_empty_array() {
    let hits = parse_hits("[]").unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_parse_hits_rejects_non_array_body() {
    assert!(parse_hits(r#"{"error":"nope"}"#).is_err());
    assert!(parse_hits("not json at all").is_err());
}

#[test]
fn test_parse_hits_rejects_wrong_arity_rows() {
    // Three fields instead of four.
    assert!(parse_hits(r#"[["1","Red Shoe","img1.png"]]"#).is_err());
    // A trailing fifth field.
    assert!(parse_hits(r#"[["1","Red Shoe","img1.png",100000,"extra"]]"#).is_err());
}

#[test]
fn test_parse_hits_rejects_wrong_field_types() {
    // Numeric id where a string is expected.
    assert!(parse_hits(r#"[[1,"Red Shoe","img1.png",100000]]"#).is_err());
    // String price.
    assert!(parse_hits(r#"[["1","Red Shoe","img1.png","100000"]]"#).is_err());
}

#[test]
fn test_format_price_groups_thousands() {
    assert_eq!(format_price(100000.0), "100.000 VND");
    assert_eq!(format_price(1234567.0), "1.234.567 VND");
}

#[test]
fn test_format_price_small_values_ungrouped() {
    assert_eq!(format_price(0.0), "0 VND");
    assert_eq!(format_price(999.0), "999 VND");
}

#[test]
fn test_format_price_rounds_fractions() {
    assert_eq!(format_price(1999.6), "2.000 VND");
}
