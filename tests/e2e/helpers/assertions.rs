use serde_json::Value;

const SENTIMENTS: [&str; 3] = ["positive", "negative", "neutral"];

/// Assert the shape of an article as returned by search (no `saved_at`)
pub fn assert_search_article(article: &Value, expected_keyword: &str) {
    let id = article["id"].as_str().expect("Missing id field");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "id should be a UUID: {id}");

    for field in ["title", "link", "published", "summary", "source"] {
        assert!(article[field].is_string(), "Missing {field} field");
    }

    let sentiment = article["sentiment"].as_str().expect("Missing sentiment");
    assert!(SENTIMENTS.contains(&sentiment), "Unexpected sentiment {sentiment}");

    assert_eq!(article["keyword"].as_str(), Some(expected_keyword));
    assert!(
        article.get("saved_at").is_none(),
        "Search results must not carry saved_at"
    );
}

/// Assert the shape of a stored watchlist article
pub fn assert_saved_article(article: &Value) {
    let id = article["id"].as_str().expect("Missing id field");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "id should be a UUID: {id}");

    let sentiment = article["sentiment"].as_str().expect("Missing sentiment");
    assert!(SENTIMENTS.contains(&sentiment), "Unexpected sentiment {sentiment}");

    let saved_at = article["saved_at"].as_str().expect("Missing saved_at");
    assert!(
        chrono::DateTime::parse_from_rfc3339(saved_at).is_ok(),
        "saved_at should be RFC 3339: {saved_at}"
    );
}
