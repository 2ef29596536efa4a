//! 設定ファイル（~/.fpb/config.toml）
//!
//! すべてのキーは省略可能。省略したキーはデフォルト値になる。

use crate::badge::{
    BadgeBuilder, BadgeImageService, BadgeService, OutputFormat, DEFAULT_PLUGIN_URL,
};
use crate::env::EnvVar;
use crate::error::{BadgeError, Result};
use crate::http::HttpConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// config.toml のルート構造
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_plugin_url: Option<String>,
    badge_service_url: Option<String>,
    image_service_url: Option<String>,
    default_format: Option<OutputFormat>,
    timeout_secs: Option<u64>,
}

/// 実行時の設定
#[derive(Debug, Clone)]
pub struct Config {
    /// 入力が空のときに使うプラグインURL
    pub default_plugin_url: String,
    /// バッジデータサービス
    pub badge_service: BadgeService,
    /// バッジ画像サービス
    pub image_service: BadgeImageService,
    /// 出力形式の初期値
    pub default_format: OutputFormat,
    /// HTTP設定（preview のみ使用）
    pub http: HttpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_plugin_url: DEFAULT_PLUGIN_URL.to_string(),
            badge_service: BadgeService::default(),
            image_service: BadgeImageService::default(),
            default_format: OutputFormat::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// 優先順位: 明示的なパス > FPB_CONFIG > ~/.fpb/config.toml
    /// 明示的に指定されたファイルが存在しない場合はエラー。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(BadgeError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// デフォルトの設定ファイルパス
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = EnvVar::get(EnvVar::CONFIG) {
            return Some(PathBuf::from(path));
        }
        EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".fpb").join("config.toml"))
    }

    /// 指定パスから読み込む（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// TOML文字列から構築
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(Self::from_file(file))
    }

    /// 設定済みサービスでビルダーを作成
    pub fn builder(&self) -> BadgeBuilder {
        BadgeBuilder::new(self.badge_service.clone(), self.image_service.clone())
    }

    fn from_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(url) = file.default_plugin_url {
            config.default_plugin_url = url;
        }
        if let Some(url) = file.badge_service_url {
            config.badge_service = BadgeService::new(url);
        }
        if let Some(url) = file.image_service_url {
            config.image_service = BadgeImageService::new(url);
        }
        if let Some(format) = file.default_format {
            config.default_format = format;
        }
        if let Some(secs) = file.timeout_secs {
            config.http.timeout = Some(Duration::from_secs(secs));
        }

        config
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
