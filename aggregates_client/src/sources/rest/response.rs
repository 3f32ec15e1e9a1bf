use serde::Deserialize;

use crate::models::bar::Bar;

#[derive(Deserialize, Debug)]
pub struct RestBar {
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "v")]
    pub volume: f64,
    #[serde(rename = "t")]
    pub timestamp: i64,
}

#[derive(Deserialize, Debug)]
pub struct AggregatesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<RestBar>>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AggregatesResponse {
    /// The error text of an `"ERROR"` payload, if this is one.
    pub fn error_message(&self) -> Option<String> {
        if self.status.as_deref() != Some("ERROR") {
            return None;
        }
        Some(
            self.error
                .clone()
                .or_else(|| self.message.clone())
                .unwrap_or_else(|| "Unknown API error".to_string()),
        )
    }
}

impl From<RestBar> for Bar {
    fn from(rb: RestBar) -> Self {
        Bar {
            timestamp: rb.timestamp,
            open: rb.open,
            high: rb.high,
            low: rb.low,
            close: rb.close,
            // fractional volume shows up on some crypto/forex feeds
            volume: rb.volume.max(0.0).round() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "ticker": "AAPL",
        "queryCount": 2,
        "resultsCount": 2,
        "adjusted": true,
        "status": "OK",
        "request_id": "abc",
        "results": [
            {"v": 70790813.0, "vw": 131.6292, "o": 130.465, "c": 130.15, "h": 133.41, "l": 129.89, "t": 1673240400000, "n": 645365},
            {"v": 63896155.4, "o": 130.26, "c": 133.49, "h": 133.49, "l": 129.89, "t": 1673326800000}
        ],
        "next_url": "https://api.polygon.io/v2/aggs/ticker/AAPL/range/1/day/cursor"
    }"#;

    #[test]
    fn decodes_page_and_maps_bars() {
        let page: AggregatesResponse = serde_json::from_str(PAGE).unwrap();
        assert!(page.error_message().is_none());
        assert!(page.next_url.is_some());

        let bars: Vec<Bar> = page.results.unwrap().into_iter().map(Bar::from).collect();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].timestamp, 1_673_240_400_000);
        assert_eq!(bars[0].open, 130.465);
        assert_eq!(bars[0].volume, 70_790_813);
        assert_eq!(bars[1].volume, 63_896_155);
    }

    #[test]
    fn error_payload() {
        let page: AggregatesResponse =
            serde_json::from_str(r#"{"status":"ERROR","request_id":"x","error":"Unknown API Key"}"#)
                .unwrap();
        assert_eq!(page.error_message().as_deref(), Some("Unknown API Key"));
        assert!(page.results.is_none());
    }
}
