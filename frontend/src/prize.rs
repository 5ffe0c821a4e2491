use std::fmt;

use gloo_net::http::Request;
use wof_shared::shared_wheel_game::PrizeDocument;
use wof_shared::wheel_controller::PrizeSource;

#[derive(Debug)]
pub enum PrizeError {
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for PrizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {}", e),
            Self::Status(code) => write!(f, "unexpected status {}", code),
            Self::Decode(e) => write!(f, "malformed prize document: {}", e),
        }
    }
}

pub fn parse_prize_document(body: &str) -> Result<Option<String>, PrizeError> {
    serde_json::from_str::<PrizeDocument>(body)
        .map(|doc| doc.prize)
        .map_err(|e| PrizeError::Decode(e.to_string()))
}

/// Reads `{"prize": "..."}` from a JSON document over HTTP.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpPrizeSource {
    url: String,
}

impl HttpPrizeSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn request(&self) -> Result<Option<String>, PrizeError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| PrizeError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(PrizeError::Status(response.status()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| PrizeError::Network(e.to_string()))?;
        parse_prize_document(&body)
    }
}

impl PrizeSource for HttpPrizeSource {
    async fn fetch_prize(&self) -> Option<String> {
        match self.request().await {
            Ok(Some(prize)) => Some(prize),
            Ok(None) => {
                log::info!("{} has no prize configured", self.url);
                None
            }
            Err(e) => {
                log::warn!("prize lookup at {} failed: {}", self.url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prize_document() {
        assert_eq!(
            parse_prize_document(r#"{"prize": "10% off"}"#).unwrap(),
            Some("10% off".to_string())
        );
        assert_eq!(parse_prize_document(r#"{"prize": null}"#).unwrap(), None);
        assert_eq!(parse_prize_document("{}").unwrap(), None);
        assert!(matches!(parse_prize_document("<html>"), Err(PrizeError::Decode(_))));
    }
}
