//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::model::SpecialRomanjiTable;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_ENV: &str = "TYPING_COST_CONFIG";

/// 타이핑 비용 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TypingCostConfig {
    /// 사용할 입력 방식
    #[serde(default)]
    pub special_romanji_table: SpecialRomanjiTable,
    /// 오타 보정 사용 여부 (false면 모델을 조회하지 않음)
    #[serde(default = "default_use_typing_correction")]
    pub use_typing_correction: bool,
}

fn default_use_typing_correction() -> bool {
    true
}

impl Default for TypingCostConfig {
    fn default() -> Self {
        Self {
            special_romanji_table: SpecialRomanjiTable::default(),
            use_typing_correction: default_use_typing_correction(),
        }
    }
}

/// 설정 파일 경로: $TYPING_COST_CONFIG 또는 ~/.config/typing-cost/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("typing-cost").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TypingCostConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            TypingCostConfig::default()
        }),
        Err(_) => TypingCostConfig::default(),
    }
}

/// JSON 문자열에서 설정 파싱
pub fn parse_config(content: &str) -> Result<TypingCostConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// 설정 파일 저장
pub fn save_config(config: &TypingCostConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    log::debug!("설정 저장: {}", path.display());
    Ok(())
}
