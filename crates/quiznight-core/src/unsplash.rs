//! Typed client for the Unsplash REST API.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub mod error;

use error::UnsplashError;

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUserLinks {
    pub html: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUser {
    pub name: String,
    pub links: PhotoUserLinks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoLinks {
    pub html: String,
    pub download_location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: String,
    pub width: i32,
    pub height: i32,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    pub user: PhotoUser,
    pub links: PhotoLinks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    pub total: u64,
    pub total_pages: u64,
    pub results: Vec<Photo>,
}

#[derive(Clone)]
pub struct UnsplashClient {
    client: reqwest::Client,
    base_url: Url,
    access_key: String,
}

impl UnsplashClient {
    pub fn new(access_key: String, base_url: Option<Url>) -> Result<Self, UnsplashError> {
        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url,
            access_key,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, UnsplashError> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "unsplash request");
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, path, "unsplash request failed");
            return Err(UnsplashError::Status(status));
        }
        Ok(response.json().await?)
    }

    pub async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
        orientation: Option<&str>,
    ) -> Result<SearchResults, UnsplashError> {
        let mut params = vec![
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(orientation) = orientation {
            params.push(("orientation", orientation.to_string()));
        }
        self.get_json("search/photos", &params).await
    }

    pub async fn get_photo(&self, id: &str) -> Result<Photo, UnsplashError> {
        self.get_json(&format!("photos/{id}"), &[]).await
    }

    pub async fn featured_photos(&self, count: u32) -> Result<Vec<Photo>, UnsplashError> {
        self.get_json(
            "photos",
            &[
                ("order_by", "popular".to_string()),
                ("per_page", count.to_string()),
            ],
        )
        .await
    }

    /// Unsplash requires reporting a download whenever a cached image is
    /// actually used.
    pub async fn track_download(&self, photo_id: &str) -> Result<(), UnsplashError> {
        let _: serde_json::Value = self.get_json(&format!("photos/{photo_id}/download"), &[]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_decode() {
        let payload = r#"{
            "total": 1,
            "total_pages": 1,
            "results": [{
                "id": "abc123",
                "width": 4000,
                "height": 3000,
                "description": null,
                "alt_description": "a pub quiz in progress",
                "urls": {
                    "raw": "https://images.example/raw",
                    "full": "https://images.example/full",
                    "regular": "https://images.example/regular",
                    "small": "https://images.example/small",
                    "thumb": "https://images.example/thumb"
                },
                "user": {"name": "Ana Fotografa", "links": {"html": "https://unsplash.example/@ana"}},
                "links": {
                    "html": "https://unsplash.example/photos/abc123",
                    "download_location": "https://api.unsplash.example/photos/abc123/download"
                }
            }]
        }"#;
        let decoded: SearchResults = serde_json::from_str(payload).unwrap();
        assert_eq!(decoded.total, 1);
        assert_eq!(decoded.results[0].id, "abc123");
        assert_eq!(decoded.results[0].user.name, "Ana Fotografa");
    }
}
