use aggregates_client::{
    models::{request::AggregatesRequest, timespan::Timespan},
    sources::{AggregatesSource, SourceError, rest::RestSource},
};
use chrono::NaiveDate;
use secrecy::SecretString;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

const FIRST_PAGE: &str = r#"{"ticker":"AAPL","status":"OK","results":[
    {"o":1.0,"c":2.0,"h":2.5,"l":0.5,"v":100.0,"t":1704153600000},
    {"o":2.0,"c":1.5,"h":2.2,"l":1.4,"v":200.0,"t":1704240000000}
],"next_url":"NEXT"}"#;

const SECOND_PAGE: &str = r#"{"ticker":"AAPL","status":"OK","results":[
    {"o":1.5,"c":1.6,"h":1.7,"l":1.3,"v":300.0,"t":1704326400000}
]}"#;

/// Serves canned responses, one connection per request. `respond` gets the
/// request line and returns `(status line, body)`.
async fn serve(respond: fn(&str, &str) -> (&'static str, String)) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let base_for_task = base.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut buf = vec![0u8; 8192];
            let n = stream.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let (status, body) = respond(&request_line, &base_for_task);
            let reply = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    base
}

fn request() -> AggregatesRequest {
    AggregatesRequest::new(
        "aapl",
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        Timespan::Day,
    )
}

fn key() -> SecretString {
    SecretString::new("test-key".into())
}

fn local(base: impl Into<String>) -> RestSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    RestSource::new(base, key()).unwrap().with_client(client)
}

#[tokio::test]
async fn follows_pagination() {
    let base = serve(|line, base| {
        assert!(line.contains("apiKey=test-key"), "api key missing: {line}");
        if line.contains("/page2") {
            ("200 OK", SECOND_PAGE.to_string())
        } else {
            assert!(line.contains("/v2/aggs/ticker/AAPL/range/1/day/2024-01-02/2024-01-04"));
            assert!(line.contains("sort=asc"));
            ("200 OK", FIRST_PAGE.replace("NEXT", &format!("{base}/page2?cursor=abc")))
        }
    })
    .await;

    let source = local(base);
    let bars = source.fetch_aggregates(&request()).await.unwrap();

    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].volume, 100);
    assert_eq!(bars[2].timestamp, 1_704_326_400_000);
}

#[tokio::test]
async fn http_error_becomes_api_error() {
    let base = serve(|_, _| ("401 Unauthorized", r#"{"status":"ERROR"}"#.to_string())).await;

    let source = local(base);
    let err = source.fetch_aggregates(&request()).await.unwrap_err();
    match err {
        SourceError::Api(message) => assert!(message.starts_with("401"), "{message}"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_payload_becomes_api_error() {
    let base = serve(|_, _| {
        (
            "200 OK",
            r#"{"status":"ERROR","error":"Unknown API Key"}"#.to_string(),
        )
    })
    .await;

    let source = local(base);
    let err = source.fetch_aggregates(&request()).await.unwrap_err();
    assert_eq!(err.to_string(), "API error: Unknown API Key");
}

#[tokio::test]
async fn invalid_request_never_hits_the_network() {
    // nothing listens on this port
    let source = local("http://127.0.0.1:9");
    let mut req = request();
    req.ticker.clear();
    let err = source.fetch_aggregates(&req).await.unwrap_err();
    assert!(matches!(err, SourceError::Validation(_)));
}

#[tokio::test]
#[ignore]
async fn live_polygon_fetch() {
    // Requires POLYGON_API_KEY in the environment.
    let Ok(source) = RestSource::from_env(
        aggregates_client::sources::rest::DEFAULT_BASE_URL,
        aggregates_client::sources::rest::DEFAULT_API_KEY_ENV,
    ) else {
        println!("Skipping live_polygon_fetch: POLYGON_API_KEY not set.");
        return;
    };
    let bars = source.fetch_aggregates(&request()).await.expect("fetch");
    assert!(bars.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}
