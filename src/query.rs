//! 여러 키의 비용을 한 번에 조회

use serde::Serialize;

use crate::model::{CostModel, INFINITY};

/// 키 한 개의 조회 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostReport {
    pub key: String,
    /// 비용 (데이터 없음이면 None)
    pub cost: Option<i32>,
    /// 알파벳/길이 위반 메시지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 키 목록의 비용 조회
///
/// `INFINITY`는 `cost: None`으로, 잘못된 키는 `error`로 보고합니다.
pub fn query_costs<S: AsRef<str>>(model: &dyn CostModel, keys: &[S]) -> Vec<CostReport> {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            match model.get_cost(key) {
                Ok(INFINITY) => CostReport {
                    key: key.to_string(),
                    cost: None,
                    error: None,
                },
                Ok(cost) => CostReport {
                    key: key.to_string(),
                    cost: Some(cost),
                    error: None,
                },
                Err(e) => CostReport {
                    key: key.to_string(),
                    cost: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect()
}
