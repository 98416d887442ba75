//! 입력 방식별 타이핑 모델 레지스트리
//!
//! 각 모델은 처음 요청될 때 한 번만 생성되고, 프로세스 종료까지 공유됩니다.
//! 테이블이 없는 입력 방식은 `None`을 반환하며, 호출자는 보정 없이
//! 원본 입력을 사용하면 됩니다.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::data::{self, ModelData};
use super::typing_model::TypingModel;

/// 자판/로마자 입력 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRomanjiTable {
    #[default]
    DefaultTable,
    TwelveKeysToHiragana,
    TwelveKeysToHalfwidthascii,
    TwelveKeysToNumber,
    FlickToHiragana,
    FlickToHalfwidthascii,
    FlickToNumber,
    ToggleFlickToHiragana,
    ToggleFlickToHalfwidthascii,
    ToggleFlickToNumber,
    QwertyMobileToHiragana,
    QwertyMobileToHalfwidthascii,
    GodanToHiragana,
    GodanToHalfwidthascii,
    NotouchToHiragana,
    NotouchToHalfwidthascii,
}

impl SpecialRomanjiTable {
    /// 모든 입력 방식
    pub const ALL: [SpecialRomanjiTable; 16] = [
        SpecialRomanjiTable::DefaultTable,
        SpecialRomanjiTable::TwelveKeysToHiragana,
        SpecialRomanjiTable::TwelveKeysToHalfwidthascii,
        SpecialRomanjiTable::TwelveKeysToNumber,
        SpecialRomanjiTable::FlickToHiragana,
        SpecialRomanjiTable::FlickToHalfwidthascii,
        SpecialRomanjiTable::FlickToNumber,
        SpecialRomanjiTable::ToggleFlickToHiragana,
        SpecialRomanjiTable::ToggleFlickToHalfwidthascii,
        SpecialRomanjiTable::ToggleFlickToNumber,
        SpecialRomanjiTable::QwertyMobileToHiragana,
        SpecialRomanjiTable::QwertyMobileToHalfwidthascii,
        SpecialRomanjiTable::GodanToHiragana,
        SpecialRomanjiTable::GodanToHalfwidthascii,
        SpecialRomanjiTable::NotouchToHiragana,
        SpecialRomanjiTable::NotouchToHalfwidthascii,
    ];

    /// 설정 파일/CLI에서 쓰는 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialRomanjiTable::DefaultTable => "default_table",
            SpecialRomanjiTable::TwelveKeysToHiragana => "twelve_keys_to_hiragana",
            SpecialRomanjiTable::TwelveKeysToHalfwidthascii => "twelve_keys_to_halfwidthascii",
            SpecialRomanjiTable::TwelveKeysToNumber => "twelve_keys_to_number",
            SpecialRomanjiTable::FlickToHiragana => "flick_to_hiragana",
            SpecialRomanjiTable::FlickToHalfwidthascii => "flick_to_halfwidthascii",
            SpecialRomanjiTable::FlickToNumber => "flick_to_number",
            SpecialRomanjiTable::ToggleFlickToHiragana => "toggle_flick_to_hiragana",
            SpecialRomanjiTable::ToggleFlickToHalfwidthascii => "toggle_flick_to_halfwidthascii",
            SpecialRomanjiTable::ToggleFlickToNumber => "toggle_flick_to_number",
            SpecialRomanjiTable::QwertyMobileToHiragana => "qwerty_mobile_to_hiragana",
            SpecialRomanjiTable::QwertyMobileToHalfwidthascii => "qwerty_mobile_to_halfwidthascii",
            SpecialRomanjiTable::GodanToHiragana => "godan_to_hiragana",
            SpecialRomanjiTable::GodanToHalfwidthascii => "godan_to_halfwidthascii",
            SpecialRomanjiTable::NotouchToHiragana => "notouch_to_hiragana",
            SpecialRomanjiTable::NotouchToHalfwidthascii => "notouch_to_halfwidthascii",
        }
    }
}

impl fmt::Display for SpecialRomanjiTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialRomanjiTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecialRomanjiTable::ALL
            .iter()
            .copied()
            .find(|table| table.as_str() == s)
            .ok_or_else(|| format!("알 수 없는 입력 방식: {}", s))
    }
}

/// 입력 방식 한 개의 모델 슬롯
struct ModelSlot {
    data: &'static ModelData,
    /// 처음 조회될 때 생성
    model: OnceLock<Option<TypingModel>>,
}

/// 내장 테이블이 있는 입력 방식
static REGISTERED: [(SpecialRomanjiTable, &ModelData); 5] = [
    (SpecialRomanjiTable::TwelveKeysToHiragana, &data::TWELVE_KEYS_HIRAGANA),
    (SpecialRomanjiTable::FlickToHiragana, &data::FLICK_HIRAGANA),
    (SpecialRomanjiTable::ToggleFlickToHiragana, &data::TOGGLE_FLICK_HIRAGANA),
    (SpecialRomanjiTable::QwertyMobileToHiragana, &data::QWERTY_MOBILE_HIRAGANA),
    (SpecialRomanjiTable::GodanToHiragana, &data::GODAN_HIRAGANA),
];

lazy_static! {
    static ref SLOTS: HashMap<SpecialRomanjiTable, ModelSlot> = REGISTERED
        .iter()
        .map(|&(table, data)| {
            (
                table,
                ModelSlot {
                    data,
                    model: OnceLock::new(),
                },
            )
        })
        .collect();
}

/// 내장 데이터로 모델 생성 (실패 시 로그 후 `None`)
fn build(data: &ModelData) -> Option<TypingModel> {
    match TypingModel::from_data(data) {
        Ok(model) => {
            log::debug!(
                "타이핑 모델 생성: {} ({}개 항목)",
                data.name,
                model.populated_entries()
            );
            Some(model)
        }
        Err(e) => {
            log::error!("타이핑 모델 생성 실패: {}: {}", data.name, e);
            None
        }
    }
}

/// 입력 방식에 해당하는 공유 모델 조회
///
/// 같은 입력 방식에 대해 항상 같은 인스턴스를 반환합니다.
/// 동시에 처음 호출되어도 생성은 한 번만 일어납니다.
///
/// # Examples
/// ```
/// use typing_cost::model::{typing_model, SpecialRomanjiTable};
///
/// assert!(typing_model(SpecialRomanjiTable::DefaultTable).is_none());
/// let model = typing_model(SpecialRomanjiTable::QwertyMobileToHiragana).unwrap();
/// assert!(model.get_cost("ka").is_ok());
/// ```
pub fn typing_model(table: SpecialRomanjiTable) -> Option<&'static TypingModel> {
    let slot: &'static ModelSlot = SLOTS.get(&table)?;
    slot.model.get_or_init(|| build(slot.data)).as_ref()
}

/// 입력 방식에 내장 테이블이 있는지 확인 (모델을 생성하지 않음)
pub fn has_typing_model(table: SpecialRomanjiTable) -> bool {
    SLOTS.contains_key(&table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::INFINITY;

    #[test]
    fn test_tables_without_model() {
        for table in [
            SpecialRomanjiTable::DefaultTable,
            SpecialRomanjiTable::TwelveKeysToNumber,
            SpecialRomanjiTable::QwertyMobileToHalfwidthascii,
            SpecialRomanjiTable::NotouchToHiragana,
        ] {
            assert!(!has_typing_model(table));
            assert!(typing_model(table).is_none());
            assert!(typing_model(table).is_none());
        }
    }

    #[test]
    fn test_registration_matches_resolution() {
        for table in SpecialRomanjiTable::ALL {
            assert_eq!(
                has_typing_model(table),
                typing_model(table).is_some(),
                "{}",
                table
            );
        }
    }

    #[test]
    fn test_same_instance() {
        for table in SpecialRomanjiTable::ALL {
            if !has_typing_model(table) {
                continue;
            }
            let first = typing_model(table).unwrap();
            let second = typing_model(table).unwrap();
            assert!(std::ptr::eq(first, second), "{}", table);
        }
    }

    #[test]
    fn test_models_are_distinct_per_table() {
        let qwerty = typing_model(SpecialRomanjiTable::QwertyMobileToHiragana).unwrap();
        let godan = typing_model(SpecialRomanjiTable::GodanToHiragana).unwrap();
        assert!(!std::ptr::eq(qwerty, godan));
    }

    #[test]
    fn test_embedded_costs() {
        let qwerty = typing_model(SpecialRomanjiTable::QwertyMobileToHiragana).unwrap();
        assert_eq!(qwerty.get_cost("ka").unwrap(), 22);
        assert_eq!(qwerty.get_cost("k").unwrap(), 28);
        assert_eq!(qwerty.get_cost("shi").unwrap(), 34);
        assert_eq!(qwerty.get_cost("qqq").unwrap(), INFINITY);
        assert_eq!(qwerty.get_cost("").unwrap(), INFINITY);

        let twelve = typing_model(SpecialRomanjiTable::TwelveKeysToHiragana).unwrap();
        assert_eq!(twelve.get_cost("1").unwrap(), 6);
        assert_eq!(twelve.get_cost("1111").unwrap(), 33);
        assert_eq!(twelve.get_cost("1*").unwrap(), 14);

        let flick = typing_model(SpecialRomanjiTable::FlickToHiragana).unwrap();
        assert_eq!(flick.get_cost("1").unwrap(), 4);
        assert_eq!(flick.get_cost("11").unwrap(), INFINITY);

        let toggle = typing_model(SpecialRomanjiTable::ToggleFlickToHiragana).unwrap();
        assert_eq!(toggle.get_cost("111").unwrap(), 27);

        let godan = typing_model(SpecialRomanjiTable::GodanToHiragana).unwrap();
        assert_eq!(godan.get_cost("ka").unwrap(), 24);
    }

    #[test]
    fn test_name_round_trip() {
        for table in SpecialRomanjiTable::ALL {
            assert_eq!(table.as_str().parse::<SpecialRomanjiTable>(), Ok(table));
            let json = serde_json::to_string(&table).unwrap();
            assert_eq!(json, format!("\"{}\"", table.as_str()));
        }
        assert!("qwerty".parse::<SpecialRomanjiTable>().is_err());
    }
}
