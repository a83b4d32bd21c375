mod common;

use mockito::Matcher;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn search_by_name_returns_full_sequence_untruncated() {
    common::init_test_logging();
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "chicken".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::meal_envelope(25))
        .create_async()
        .await;

    let client = common::client_for(&server);
    let meals = client.find_by_name("chicken").await.expect("search should succeed");

    assert_eq!(meals.len(), 25, "name search is never truncated");
    assert_eq!(meals[0].id, "1");
    assert_eq!(meals[24].id, "25");
}

#[tokio::test]
async fn search_with_empty_string_issues_empty_parameter() {
    common::init_test_logging();
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::meal_envelope(3))
        .create_async()
        .await;

    let client = common::client_for(&server);
    let meals = client.find_by_name("").await.expect("empty query is allowed");

    assert_eq!(meals.len(), 3);
}

#[tokio::test]
async fn search_query_values_are_percent_encoded() {
    common::init_test_logging();
    let mut server = mockito::Server::new_async().await;

    // UrlEncoded matches the decoded value, so this only passes when the
    // client encoded the space and ampersand on the wire.
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "fish & chips".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::meal_envelope(1))
        .create_async()
        .await;

    let client = common::client_for(&server);
    let meals = client
        .find_by_name("fish & chips")
        .await
        .expect("search should succeed");

    assert_eq!(meals.len(), 1);
}

#[tokio::test]
async fn search_by_first_letter() {
    common::init_test_logging();
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("f".into(), "b".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::meal_envelope(4))
        .create_async()
        .await;

    let client = common::client_for(&server);
    let meals = client
        .find_by_first_letter("b")
        .await
        .expect("search should succeed");

    assert_eq!(meals.len(), 4, "first-letter search is never truncated");
}

#[tokio::test]
async fn search_with_no_matches_yields_empty_sequence() {
    common::init_test_logging();
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "zzzzz".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::null_envelope("meals"))
        .create_async()
        .await;

    let client = common::client_for(&server);
    let meals = client.find_by_name("zzzzz").await.expect("should succeed");

    assert!(meals.is_empty(), "null envelope normalizes to empty, not null");
}

#[tokio::test]
async fn repeated_query_yields_structurally_equal_results() {
    common::init_test_logging();
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "pasta".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::meal_envelope(5))
        .expect(2)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let first = client.find_by_name("pasta").await.expect("first call");
    let second = client.find_by_name("pasta").await.expect("second call");

    assert_eq!(first, second, "no hidden state between calls");
}
