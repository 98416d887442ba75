//! 타이핑 보정 비용 모델
//!
//! 키 입력 시퀀스에 "얼마나 의도에서 벗어났는지"를 나타내는 정수 비용을 매깁니다.
//! 변환 파이프라인은 이 비용으로 오타 보정 후보의 순위를 정합니다.
//!
//! # 구성
//!
//! 1. **키 인덱서** (`KeyIndexer`): 키를 혼합 기수 평면 인덱스로 변환
//! 2. **비용 테이블** (`CostTable`): 인덱스 → 매핑 오프셋 → 비용 바이트
//! 3. **레지스트리** (`typing_model`): 입력 방식별 공유 모델
//!
//! # 사용 예시
//!
//! ```
//! use typing_cost::model::{typing_model, SpecialRomanjiTable, INFINITY};
//!
//! match typing_model(SpecialRomanjiTable::QwertyMobileToHiragana) {
//!     Some(model) => {
//!         let cost = model.get_cost("ka").unwrap();
//!         assert!(cost < INFINITY);
//!     }
//!     None => { /* 보정 없이 원본 입력 사용 */ }
//! }
//! ```

mod cost_table;
mod data;
mod error;
mod indexer;
mod mock;
mod registry;
mod typing_model;

// 공개 인터페이스
pub use cost_table::{CostTable, INFINITY, NO_DATA};
pub use data::ModelData;
pub use error::TypingModelError;
pub use indexer::{IndexLayout, KeyIndexer};
pub use mock::MockTypingModel;
pub use registry::{has_typing_model, typing_model, SpecialRomanjiTable};
pub use typing_model::{CostModel, TypingModel};
