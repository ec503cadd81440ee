use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_STORE_PATH: &str = "config/session.json";

/// On-disk shape: the two opaque token keys, absent when logged out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredTokens {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

/// Durable storage for the bearer token pair.
///
/// Backed by a small JSON file keyed `access_token` / `refresh_token`. A
/// missing file means logged out. Writes go through on every mutation so the
/// session survives restarts; reads are served from memory and never block.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
    tokens: StoredTokens,
}

impl TokenStore {
    /// Opens the store at `path`, treating a missing file as logged out.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tokens = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoredTokens::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, tokens })
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.tokens.refresh_token.as_deref()
    }

    /// Stores a fresh token pair and persists it.
    pub fn set_tokens(&mut self, access: &str, refresh: &str) -> Result<()> {
        self.tokens.access_token = Some(access.to_string());
        self.tokens.refresh_token = Some(refresh.to_string());
        self.save()
    }

    /// Removes both tokens and persists the logged-out state.
    pub fn clear(&mut self) -> Result<()> {
        self.tokens = StoredTokens::default();
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&self.tokens)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

pub fn default_store_path() -> &'static str {
    DEFAULT_STORE_PATH
}
