//! 타이핑 모델 에러 정의

/// 타이핑 모델 생성/조회 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingModelError {
    /// 모델 알파벳에 없는 문자가 키에 포함됨
    OutOfAlphabet {
        /// 문제가 된 문자
        character: char,
        /// 키 내 문자 위치 (0부터)
        position: usize,
    },
    /// 키 길이가 모델의 최대 길이를 초과함
    KeyTooLong { length: usize, max: usize },
    /// 인덱스가 매핑 테이블 범위를 벗어남
    IndexOutOfRange { index: usize, len: usize },
    /// 테이블 형식 오류
    Format(String),
}

impl std::fmt::Display for TypingModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypingModelError::OutOfAlphabet { character, position } => write!(
                f,
                "알파벳에 없는 문자: {:?} (위치 {})",
                character, position
            ),
            TypingModelError::KeyTooLong { length, max } => {
                write!(f, "키 길이 초과: {} (최대 {})", length, max)
            }
            TypingModelError::IndexOutOfRange { index, len } => {
                write!(f, "인덱스 범위 초과: {} (테이블 크기 {})", index, len)
            }
            TypingModelError::Format(s) => write!(f, "테이블 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for TypingModelError {}
