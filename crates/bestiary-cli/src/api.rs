//! Bestiary API Client

use std::path::Path;

use anyhow::{bail, Context, Result};
use reqwest::{multipart, Client, Response};
use serde::{Deserialize, Serialize};

/// API Client for Bestiary
pub struct BestiaryClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

/// Animal as sent to and returned by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Animal {
    #[serde(skip_serializing)]
    pub animal_id: Option<i64>,
    pub color: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    pub habitat: String,
    pub description: String,
    pub diet: String,
    pub lifespan: f64,
    pub fun_facts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// URL of an animal route: `/api/{color}` followed by `suffix` segments
fn animal_url(base_url: &str, color: &str, suffix: &[&str]) -> String {
    let mut url = format!("{}/api/{}", base_url, urlencoding::encode(color));
    for segment in suffix {
        url.push('/');
        url.push_str(segment);
    }
    url
}

async fn ensure_success(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }
    Ok(resp)
}

impl BestiaryClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all animals, optionally filtered
    pub async fn list(&self, name: Option<&str>, min_lifespan: Option<f64>) -> Result<Vec<Animal>> {
        let url = format!("{}/api/all", self.base_url);
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(name) = name {
            query.push(("animalName", name.to_string()));
        }
        if let Some(years) = min_lifespan {
            query.push(("minLifespan", years.to_string()));
        }

        let resp = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context("Failed to connect to Bestiary API")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// List the animals of a color
    pub async fn by_color(&self, color: &str) -> Result<Vec<Animal>> {
        let url = animal_url(&self.base_url, color, &["all"]);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Bestiary API")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Get a specific animal
    pub async fn get(&self, color: &str, id: i64) -> Result<Animal> {
        let url = animal_url(&self.base_url, color, &[&id.to_string()]);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Bestiary API")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Create an animal of `color`
    pub async fn create(&self, color: &str, animal: &Animal) -> Result<Animal> {
        let url = animal_url(&self.base_url, color, &["create"]);
        let resp = self
            .client
            .post(&url)
            .json(animal)
            .send()
            .await
            .context("Failed to connect to Bestiary API")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Replace an animal
    pub async fn update(&self, color: &str, id: i64, animal: &Animal) -> Result<Animal> {
        let url = animal_url(&self.base_url, color, &[&id.to_string(), "update"]);
        let resp = self
            .client
            .put(&url)
            .json(animal)
            .send()
            .await
            .context("Failed to connect to Bestiary API")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Delete an animal
    pub async fn delete(&self, color: &str, id: i64) -> Result<()> {
        let url = animal_url(&self.base_url, color, &[&id.to_string(), "delete"]);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to connect to Bestiary API")?;

        ensure_success(resp).await?;
        Ok(())
    }

    /// Upload an image file, returning its public path
    pub async fn upload(&self, path: &Path) -> Result<String> {
        let url = format!("{}/upload", self.base_url);
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(file_name));

        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to connect to Bestiary API")?;

        let uploaded: UploadResponse = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(uploaded.url)
    }
}
