use std::sync::mpsc::{self, Receiver};
use std::thread;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use thiserror::Error;

use super::model::{CarRecord, Catalog};
use crate::config::CatalogConfig;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Any failure to obtain the base collection. The UI treats every variant the
/// same way: log it and show an empty catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed catalog payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The worker thread went away without sending an outcome.
    #[error("catalog loader stopped without a result")]
    Interrupted,
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Expected payload:
///
/// ```json
/// [
///   {
///     "id": 1,
///     "carMaker": "Porsche",
///     "carModel": "911 GT3",
///     "year": 2022,
///     "engineSize": "4.0",
///     "horsepower": "502",
///     "torque": "346",
///     "accelerationZeroSixty": "3.2",
///     "priceUsd": "161,100"
///   },
///   ...
/// ]
/// ```
pub fn parse_records(body: &str) -> Result<Vec<CarRecord>, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// Perform the single blocking GET against the catalog endpoint.
///
/// Without a configured timeout the request may take as long as the server
/// needs; the blocking client's own 30 second default is switched off.
pub fn fetch_catalog(config: &CatalogConfig) -> Result<Catalog, LoadError> {
    let url = config.endpoint.as_str();
    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(LoadError::Client)?;

    let network = |source: reqwest::Error| LoadError::Network {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .header(CONTENT_TYPE, "application/json")
        .header(USER_AGENT, concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .send()
        .map_err(network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(network)?;
    let records = parse_records(&body)?;
    Ok(Catalog::from_records(records))
}

/// Run [`fetch_catalog`] on a worker thread.
///
/// The outcome arrives on the returned receiver; `notify` runs right after it
/// is sent so the UI can wake up. If the receiver is gone by then the outcome
/// is dropped.
pub fn spawn_load<F>(config: CatalogConfig, notify: F) -> Receiver<Result<Catalog, LoadError>>
where
    F: FnOnce() + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        log::info!("Fetching catalog from {}", config.endpoint);
        let outcome = fetch_catalog(&config);
        let _ = sender.send(outcome);
        notify();
    });

    receiver
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::Duration;

    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "carMaker": "Porsche",
            "carModel": "911 GT3",
            "year": 2022,
            "engineSize": "4.0",
            "horsepower": "502",
            "torque": "346",
            "accelerationZeroSixty": "3.2",
            "priceUsd": "161,100"
        },
        {
            "id": 2,
            "carMaker": "Lotus",
            "carModel": "Evora",
            "year": 2019,
            "engineSize": "3.5",
            "horsepower": "416",
            "torque": "317",
            "accelerationZeroSixty": null,
            "priceUsd": "96,950"
        }
    ]"#;

    #[test]
    fn parses_wire_format() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].car_maker, "Porsche");
        assert_eq!(records[0].year, 2022);
        assert_eq!(records[0].acceleration_zero_sixty.as_deref(), Some("3.2"));
        assert_eq!(records[1].acceleration_zero_sixty, None);
        assert_eq!(records[1].price_usd, "96,950");
    }

    #[test]
    fn missing_acceleration_field_is_none() {
        let body = r#"[{"id": 7, "carMaker": "Acme", "carModel": "X", "year": 2001,
            "engineSize": "2.0", "horsepower": "200", "torque": "180", "priceUsd": "1"}]"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records[0].acceleration_zero_sixty, None);
    }

    #[test]
    fn empty_array_is_a_valid_load() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        assert!(matches!(parse_records("{\"cars\": []}"), Err(LoadError::Decode(_))));
        assert!(matches!(parse_records("<html>"), Err(LoadError::Decode(_))));
        // `year` must be an integer.
        let body = r#"[{"id": 1, "carMaker": "A", "carModel": "B", "year": "2020",
            "engineSize": "1", "horsepower": "1", "torque": "1", "priceUsd": "1"}]"#;
        assert!(matches!(parse_records(body), Err(LoadError::Decode(_))));
    }

    /// Serve one HTTP response with `body` after `delay`, returning the URL.
    fn serve_once(delay: Duration, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            thread::sleep(delay);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        });
        format!("http://127.0.0.1:{port}/cars")
    }

    #[test]
    fn slow_server_still_loads_without_timeout() {
        let config = CatalogConfig {
            endpoint: serve_once(Duration::from_secs(2), "[]"),
            timeout: None,
        };
        let catalog = fetch_catalog(&config).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn configured_timeout_is_enforced() {
        let config = CatalogConfig {
            endpoint: serve_once(Duration::from_secs(3), "[]"),
            timeout: Some(Duration::from_millis(500)),
        };
        assert!(matches!(fetch_catalog(&config), Err(LoadError::Network { .. })));
    }

    #[test]
    fn unreachable_endpoint_reports_failure_through_channel() {
        // A port that was just free: nothing is listening on it any more.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = CatalogConfig {
            endpoint: format!("http://127.0.0.1:{port}/cars"),
            timeout: Some(Duration::from_secs(2)),
        };
        let (notified_tx, notified_rx) = mpsc::channel();
        let receiver = spawn_load(config, move || {
            let _ = notified_tx.send(());
        });

        let outcome = receiver.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(matches!(outcome, Err(LoadError::Network { .. })));
        notified_rx.recv_timeout(Duration::from_secs(10)).unwrap();
    }
}
