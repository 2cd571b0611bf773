use crate::search::{Keyword, search_url};

#[test]
fn test_search_url_for_plain_keyword() {
    let keyword = Keyword::parse("shoe").unwrap();
    assert_eq!(
        search_url("http://localhost:8080", &keyword),
        "http://localhost:8080/user/api/variants/search?keyword=shoe"
    );
}

#[test]
fn test_search_url_encodes_keyword() {
    let keyword = Keyword::parse("red shoe").unwrap();
    assert_eq!(
        search_url("http://localhost:8080", &keyword),
        "http://localhost:8080/user/api/variants/search?keyword=red%20shoe"
    );
}

#[test]
fn test_search_url_normalizes_trailing_slash_base() {
    let keyword = Keyword::parse("shoe").unwrap();
    assert_eq!(
        search_url("http://localhost:8080/", &keyword),
        "http://localhost:8080/user/api/variants/search?keyword=shoe"
    );
}
