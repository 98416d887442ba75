//! 내장 타이핑 모델 데이터
//!
//! `data/` 아래의 바이너리 테이블은 `data/gen_fixtures.py`가 고정 규칙으로 만든
//! 합성 픽스처입니다 (실측 통계 아님, 규칙은 `data/README.md`).
//! 형식은 `cost_table` 모듈 문서를 따르며, 모두 `IndexLayout::Padded` 규칙입니다.

use super::indexer::IndexLayout;

/// 12키 / 플릭 자판 알파벳
const TWELVE_KEYS_CHARACTERS: &str = "1234567890*#";

/// QWERTY / 5단 자판 알파벳
const ROMAN_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz-";

/// 타이핑 모델 한 개를 구성하는 정적 데이터
#[derive(Debug)]
pub struct ModelData {
    /// 테이블 이름 (로그용)
    pub name: &'static str,
    /// 알파벳 (순서가 자리값)
    pub characters: &'static str,
    pub max_key_length: usize,
    pub layout: IndexLayout,
    /// 비용 바이트
    pub cost_table: &'static [u8],
    /// little-endian u32 매핑 오프셋
    pub mapping_table: &'static [u8],
}

pub static TWELVE_KEYS_HIRAGANA: ModelData = ModelData {
    name: "12keys-hiragana",
    characters: TWELVE_KEYS_CHARACTERS,
    max_key_length: 4,
    layout: IndexLayout::Padded,
    cost_table: include_bytes!("../../data/typing_model_12keys-hiragana.cost"),
    mapping_table: include_bytes!("../../data/typing_model_12keys-hiragana.map"),
};

pub static FLICK_HIRAGANA: ModelData = ModelData {
    name: "flick-hiragana",
    characters: TWELVE_KEYS_CHARACTERS,
    max_key_length: 3,
    layout: IndexLayout::Padded,
    cost_table: include_bytes!("../../data/typing_model_flick-hiragana.cost"),
    mapping_table: include_bytes!("../../data/typing_model_flick-hiragana.map"),
};

pub static TOGGLE_FLICK_HIRAGANA: ModelData = ModelData {
    name: "toggle_flick-hiragana",
    characters: TWELVE_KEYS_CHARACTERS,
    max_key_length: 3,
    layout: IndexLayout::Padded,
    cost_table: include_bytes!("../../data/typing_model_toggle_flick-hiragana.cost"),
    mapping_table: include_bytes!("../../data/typing_model_toggle_flick-hiragana.map"),
};

pub static QWERTY_MOBILE_HIRAGANA: ModelData = ModelData {
    name: "qwerty_mobile-hiragana",
    characters: ROMAN_CHARACTERS,
    max_key_length: 3,
    layout: IndexLayout::Padded,
    cost_table: include_bytes!("../../data/typing_model_qwerty_mobile-hiragana.cost"),
    mapping_table: include_bytes!("../../data/typing_model_qwerty_mobile-hiragana.map"),
};

pub static GODAN_HIRAGANA: ModelData = ModelData {
    name: "godan-hiragana",
    characters: ROMAN_CHARACTERS,
    max_key_length: 3,
    layout: IndexLayout::Padded,
    cost_table: include_bytes!("../../data/typing_model_godan-hiragana.cost"),
    mapping_table: include_bytes!("../../data/typing_model_godan-hiragana.map"),
};
