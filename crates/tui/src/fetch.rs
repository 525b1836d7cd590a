use std::path::{Path, PathBuf};

use tempgrid_core::{MalformedDatasetError, TemperatureDataset, parse_dataset};
use thiserror::Error;

pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Error)]
pub enum DataFetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Malformed(#[from] MalformedDatasetError),
}

/// Fetch and parse the dataset with a single GET. No retries.
pub async fn load(url: &str) -> Result<TemperatureDataset, DataFetchError> {
    tracing::info!(url, "fetching dataset");

    let request_error = |source| DataFetchError::Request {
        url: url.to_string(),
        source,
    };
    let response = reqwest::get(url).await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataFetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().await.map_err(request_error)?;

    tracing::debug!(bytes = body.len(), "dataset downloaded");
    Ok(parse_dataset(&body)?)
}

/// Read the same JSON document from disk.
pub fn load_file(path: &Path) -> Result<TemperatureDataset, DataFetchError> {
    tracing::info!(path = %path.display(), "reading dataset");
    let data = std::fs::read(path).map_err(|source| DataFetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_dataset(&data)?)
}
