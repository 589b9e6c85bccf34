use std::env;
use std::path::PathBuf;

use crate::features::regions::models::IdPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub datasets: DatasetConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Where region datasets are read from and how strictly their ids are parsed
#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    /// Directory holding `<country>.csv` files that replace the embedded datasets
    pub data_dir: Option<PathBuf>,
    /// Handling of unparseable ids in numeric-id datasets
    pub id_policy: IdPolicy,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            datasets: DatasetConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatasetConfig {
    pub fn from_env() -> Result<Self, String> {
        let data_dir = env::var("DATA_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let id_policy = match env::var("DATASET_ID_POLICY") {
            Ok(value) => value.parse::<IdPolicy>()?,
            Err(_) => IdPolicy::default(),
        };

        Ok(Self {
            data_dir,
            id_policy,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Georegion API".to_string());
        let version =
            env::var("SWAGGER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Administrative region hierarchy and postal code lookups".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}
