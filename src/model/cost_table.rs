//! 비용 테이블
//!
//! 평면 인덱스 → 매핑 테이블 → 비용 바이트의 한 단계 간접 참조로
//! 비용을 조회합니다.
//!
//! # 바이너리 형식
//! - 비용 테이블: 바이트 배열. 각 바이트는 `0..255` 범위의 비용 또는 `NO_DATA`
//! - 매핑 테이블: little-endian `u32` 배열. 각 값은 비용 테이블 내 위치

use super::error::TypingModelError;

/// 데이터 없음을 나타내는 비용 바이트
pub const NO_DATA: u8 = u8::MAX;

/// 데이터가 없는 키의 비용 (어떤 실제 비용보다도 큼)
pub const INFINITY: i32 = 2 << 20;

/// 읽기 전용 비용 테이블
#[derive(Debug, Clone)]
pub struct CostTable {
    costs: Box<[u8]>,
    mapping: Box<[u32]>,
}

impl CostTable {
    /// 비용 바이트와 매핑 오프셋으로 테이블 생성
    ///
    /// 모든 오프셋이 비용 테이블 범위 안에 있는지 검증합니다.
    pub fn new(costs: Vec<u8>, mapping: Vec<u32>) -> Result<Self, TypingModelError> {
        if let Some(index) = mapping
            .iter()
            .position(|&offset| offset as usize >= costs.len())
        {
            return Err(TypingModelError::Format(format!(
                "매핑 오프셋 범위 초과: mapping[{}] = {} (비용 테이블 크기 {})",
                index,
                mapping[index],
                costs.len()
            )));
        }

        Ok(Self {
            costs: costs.into_boxed_slice(),
            mapping: mapping.into_boxed_slice(),
        })
    }

    /// 직렬화된 바이트에서 테이블 생성
    ///
    /// 매핑 바이트는 little-endian `u32` 배열이어야 합니다.
    pub fn from_bytes(cost_bytes: &[u8], mapping_bytes: &[u8]) -> Result<Self, TypingModelError> {
        if mapping_bytes.len() % 4 != 0 {
            return Err(TypingModelError::Format(format!(
                "매핑 테이블 크기가 4의 배수가 아닙니다: {}",
                mapping_bytes.len()
            )));
        }

        let mapping = mapping_bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Self::new(cost_bytes.to_vec(), mapping)
    }

    /// 인덱스의 비용 조회
    ///
    /// `NO_DATA` 항목은 `INFINITY`로 반환합니다.
    pub fn lookup(&self, index: usize) -> Result<i32, TypingModelError> {
        let offset = *self
            .mapping
            .get(index)
            .ok_or(TypingModelError::IndexOutOfRange {
                index,
                len: self.mapping.len(),
            })?;

        // 오프셋은 생성 시 검증됨
        match self.costs[offset as usize] {
            NO_DATA => Ok(INFINITY),
            cost => Ok(i32::from(cost)),
        }
    }

    /// 매핑 테이블 항목 수
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// 실제 데이터가 있는 항목 수
    pub fn populated_entries(&self) -> usize {
        self.mapping
            .iter()
            .filter(|&&offset| self.costs[offset as usize] != NO_DATA)
            .count()
    }
}
