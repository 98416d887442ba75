//! 테스트용 타이핑 모델 대역

use std::collections::HashMap;

use super::cost_table::INFINITY;
use super::error::TypingModelError;
use super::typing_model::CostModel;

/// 키별 비용을 직접 지정하는 모델
///
/// 지정하지 않은 키는 모두 `INFINITY`입니다. 어떤 키도 거부하지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct MockTypingModel {
    costs: HashMap<String, i32>,
}

impl MockTypingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 비용 지정 (빌더)
    pub fn with_cost(mut self, key: impl Into<String>, cost: i32) -> Self {
        self.costs.insert(key.into(), cost);
        self
    }

    pub fn set_cost(&mut self, key: impl Into<String>, cost: i32) {
        self.costs.insert(key.into(), cost);
    }
}

impl CostModel for MockTypingModel {
    fn get_cost(&self, key: &str) -> Result<i32, TypingModelError> {
        Ok(self.costs.get(key).copied().unwrap_or(INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_costs() {
        let mut mock = MockTypingModel::new().with_cost("ka", 10);
        mock.set_cost("ki", 20);
        assert_eq!(mock.get_cost("ka").unwrap(), 10);
        assert_eq!(mock.get_cost("ki").unwrap(), 20);
        assert_eq!(mock.get_cost("ku").unwrap(), INFINITY);
    }
}
