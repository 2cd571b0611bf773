use crate::search::Keyword;

#[test]
fn test_parse_trims_surrounding_whitespace() {
    let keyword = Keyword::parse("  shoe  ").unwrap();
    assert_eq!(keyword.as_str(), "shoe");
}

#[test]
fn test_parse_preserves_interior_whitespace() {
    let keyword = Keyword::parse(" red shoe ").unwrap();
    assert_eq!(keyword.as_str(), "red shoe");
}

#[test]
fn test_parse_empty_is_none() {
    assert_eq!(Keyword::parse(""), None);
}

#[test]
fn test_parse_whitespace_only_is_none() {
    assert_eq!(Keyword::parse("   "), None);
    assert_eq!(Keyword::parse("\t\n "), None);
}

#[test]
fn test_encoded_plain_ascii_unchanged() {
    let keyword = Keyword::parse("shoe").unwrap();
    assert_eq!(keyword.encoded(), "shoe");
}

#[test]
fn test_encoded_escapes_spaces_and_separators() {
    let keyword = Keyword::parse("red shoe").unwrap();
    assert_eq!(keyword.encoded(), "red%20shoe");

    let keyword = Keyword::parse("a&b=c").unwrap();
    assert_eq!(keyword.encoded(), "a%26b%3Dc");
}

#[test]
fn test_encoded_escapes_non_ascii() {
    let keyword = Keyword::parse("giày").unwrap();
    assert_eq!(keyword.encoded(), "gi%C3%A0y");
}

#[test]
fn test_display_shows_trimmed_keyword() {
    let keyword = Keyword::parse("  sandal  ").unwrap();
    assert_eq!(keyword.to_string(), "sandal");
}
