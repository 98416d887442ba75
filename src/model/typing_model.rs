//! 타이핑 모델
//!
//! 키 인덱서와 비용 테이블을 묶어 키 → 비용 조회를 제공합니다.

use super::cost_table::CostTable;
use super::data::ModelData;
use super::error::TypingModelError;
use super::indexer::{IndexLayout, KeyIndexer};

/// 키 비용 조회 인터페이스
///
/// 실제 모델과 테스트 대역(`MockTypingModel`)이 구현합니다.
/// 소비자는 `&dyn CostModel`로 주입받습니다.
pub trait CostModel: Send + Sync {
    /// 키의 비용 조회
    ///
    /// 데이터가 없으면 `Ok(INFINITY)`, 알파벳/길이 위반은 `Err`
    fn get_cost(&self, key: &str) -> Result<i32, TypingModelError>;
}

/// 테이블 기반 타이핑 모델 (생성 후 읽기 전용)
#[derive(Debug)]
pub struct TypingModel {
    indexer: KeyIndexer,
    table: CostTable,
}

impl TypingModel {
    /// 인덱서와 테이블로 모델 생성
    ///
    /// 매핑 테이블 크기가 인덱서의 주소 공간과 같아야 합니다.
    pub fn new(indexer: KeyIndexer, table: CostTable) -> Result<Self, TypingModelError> {
        if table.len() != indexer.capacity() {
            return Err(TypingModelError::Format(format!(
                "매핑 테이블 크기 불일치: {} (기대값 {})",
                table.len(),
                indexer.capacity()
            )));
        }
        Ok(Self { indexer, table })
    }

    /// 내장 데이터에서 모델 생성
    pub fn from_data(data: &ModelData) -> Result<Self, TypingModelError> {
        let indexer = KeyIndexer::new(data.characters, data.max_key_length, data.layout)?;
        let table = CostTable::from_bytes(data.cost_table, data.mapping_table)?;
        Self::new(indexer, table)
    }

    /// 키의 비용 조회
    ///
    /// # Examples
    /// ```
    /// use typing_cost::model::{CostTable, IndexLayout, KeyIndexer, TypingModel, INFINITY, NO_DATA};
    ///
    /// let indexer = KeyIndexer::new("ab", 2, IndexLayout::Dense).unwrap();
    /// let table = CostTable::new(vec![NO_DATA, 3], vec![0, 1, 0, 0]).unwrap();
    /// let model = TypingModel::new(indexer, table).unwrap();
    /// assert_eq!(model.get_cost("ab").unwrap(), 3);
    /// assert_eq!(model.get_cost("ba").unwrap(), INFINITY);
    /// ```
    pub fn get_cost(&self, key: &str) -> Result<i32, TypingModelError> {
        let index = self.indexer.encode(key)?;
        self.table.lookup(index)
    }

    pub fn alphabet(&self) -> &[char] {
        self.indexer.alphabet()
    }

    pub fn max_key_length(&self) -> usize {
        self.indexer.max_key_length()
    }

    pub fn layout(&self) -> IndexLayout {
        self.indexer.layout()
    }

    /// 데이터가 있는 키 수
    pub fn populated_entries(&self) -> usize {
        self.table.populated_entries()
    }
}

impl CostModel for TypingModel {
    fn get_cost(&self, key: &str) -> Result<i32, TypingModelError> {
        TypingModel::get_cost(self, key)
    }
}
