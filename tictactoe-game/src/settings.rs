//! 游戏设置模块
//!
//! 提供设置数据结构与 JSON 持久化

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tictactoe_core::Difficulty;

/// 电脑走棋前的默认停顿（毫秒）
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// EnvFilter 指令中使用的级别名
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// AI 难度
    pub difficulty: Difficulty,
    /// 电脑走棋前的停顿（毫秒），由界面层负责等待
    pub ai_delay_ms: u64,
    /// 随机数种子；None 时使用系统熵
    pub rng_seed: Option<u64>,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            rng_seed: None,
            log_level: LogLevel::default(),
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认路径加载设置，失败时使用默认值
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// 从指定路径加载设置，文件不存在或无效时使用默认值
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                tracing::info!("已加载设置: {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("{:#}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 从指定路径读取设置
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取设置文件: {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("设置文件格式无效: {:?}", path))
    }

    /// 保存设置到默认路径
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)
    }

    /// 保存设置到指定路径
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 按设置创建随机数生成器
    pub fn rng(&self) -> ChaCha8Rng {
        match self.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.ai_delay_ms, 500);
        assert_eq!(settings.rng_seed, None);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = GameSettings {
            difficulty: Difficulty::Hard,
            ai_delay_ms: 0,
            rng_seed: Some(99),
            log_level: LogLevel::Debug,
        };
        settings.save_to(&path).unwrap();

        let loaded = GameSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "difficulty": "easy" }"#).unwrap();

        let loaded = GameSettings::load_from(&path).unwrap();
        assert_eq!(loaded.difficulty, Difficulty::Easy);
        assert_eq!(loaded.ai_delay_ms, DEFAULT_AI_DELAY_MS);
    }

    #[test]
    fn test_invalid_or_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        assert_eq!(GameSettings::load_or_default(&path), GameSettings::default());

        std::fs::write(&path, "not json").unwrap();
        assert!(GameSettings::load_from(&path).is_err());
        assert_eq!(GameSettings::load_or_default(&path), GameSettings::default());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let settings = GameSettings {
            rng_seed: Some(7),
            ..Default::default()
        };
        let a: u64 = settings.rng().gen();
        let b: u64 = settings.rng().gen();
        assert_eq!(a, b);
    }
}
