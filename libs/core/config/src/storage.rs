use crate::{env_or_default, ConfigError, FromEnv};
use std::path::PathBuf;

/// Where the collection documents live
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding every collection document
    pub data_dir: PathBuf,
    /// File name of the products document inside `data_dir`
    pub products_file: String,
    /// File name of the carts document inside `data_dir`
    pub carts_file: String,
}

impl StorageConfig {
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    pub fn carts_path(&self) -> PathBuf {
        self.data_dir.join(&self.carts_file)
    }
}

fn file_name(key: &str, default: &str) -> Result<String, ConfigError> {
    let name = env_or_default(key, default);
    let valid = !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != "..";
    if valid {
        Ok(name)
    } else {
        Err(ConfigError::ParseError {
            key: key.to_string(),
            details: format!("'{}' is not a plain file name", name),
        })
    }
}

impl FromEnv for StorageConfig {
    /// Reads from environment variables:
    /// - DATA_DIR: defaults to ./data
    /// - PRODUCTS_FILE: defaults to products.json
    /// - CARTS_FILE: defaults to carts.json
    fn from_env() -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(env_or_default("DATA_DIR", "./data"));
        let products_file = file_name("PRODUCTS_FILE", "products.json")?;
        let carts_file = file_name("CARTS_FILE", "carts.json")?;

        if products_file == carts_file {
            return Err(ConfigError::ParseError {
                key: "CARTS_FILE".to_string(),
                details: "products and carts must use different documents".to_string(),
            });
        }

        Ok(Self {
            data_dir,
            products_file,
            carts_file,
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            products_file: "products.json".to_string(),
            carts_file: "carts.json".to_string(),
        }
    }
}
