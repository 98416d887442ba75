//! 키 문자열 → 평면 인덱스 인코딩
//!
//! 키를 혼합 기수(mixed-radix) 수로 보고 매핑 테이블의 위치를 계산합니다.
//! 두 레이아웃 모두 첫 번째 문자가 최상위 자리입니다.

use std::collections::HashMap;

use super::error::TypingModelError;

/// 인덱스 자리값 규칙
///
/// 테이블 생성기가 사용한 규칙과 정확히 일치해야 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexLayout {
    /// 자리값 = 알파벳 내 순서 (0부터), 기수 = 알파벳 크기
    ///
    /// 길이가 다른 키가 같은 인덱스를 가질 수 있음 ("b" == "ab")
    Dense,
    /// 자리값 = 알파벳 내 순서 + 1, 기수 = 알파벳 크기 + 1
    ///
    /// 0은 "문자 없음"으로 예약. 내장 테이블은 모두 이 규칙을 사용
    Padded,
}

impl IndexLayout {
    fn radix(self, alphabet_size: usize) -> usize {
        match self {
            IndexLayout::Dense => alphabet_size,
            IndexLayout::Padded => alphabet_size + 1,
        }
    }

    fn digit_offset(self) -> usize {
        match self {
            IndexLayout::Dense => 0,
            IndexLayout::Padded => 1,
        }
    }
}

/// 키 인덱서
///
/// 알파벳과 최대 키 길이로 주소 공간을 정의하고,
/// 키를 그 공간 안의 인덱스로 변환합니다.
#[derive(Debug, Clone)]
pub struct KeyIndexer {
    /// 알파벳 (순서가 자리값을 결정)
    alphabet: Vec<char>,
    /// 문자 -> 알파벳 내 순서
    radix_table: HashMap<char, usize>,
    max_key_length: usize,
    layout: IndexLayout,
    /// 주소 공간 크기 = 기수 ^ 최대 키 길이
    capacity: usize,
}

impl KeyIndexer {
    /// 알파벳 문자열로 인덱서 생성
    ///
    /// 빈 알파벳, 중복 문자, 최대 길이 0, 주소 공간 오버플로는 거부합니다.
    pub fn new(
        characters: &str,
        max_key_length: usize,
        layout: IndexLayout,
    ) -> Result<Self, TypingModelError> {
        let alphabet: Vec<char> = characters.chars().collect();
        if alphabet.is_empty() {
            return Err(TypingModelError::Format("빈 알파벳".into()));
        }
        if max_key_length == 0 {
            return Err(TypingModelError::Format("최대 키 길이가 0입니다".into()));
        }

        let mut radix_table = HashMap::with_capacity(alphabet.len());
        for (ordinal, &c) in alphabet.iter().enumerate() {
            if radix_table.insert(c, ordinal).is_some() {
                return Err(TypingModelError::Format(format!(
                    "알파벳 문자 중복: {:?}",
                    c
                )));
            }
        }

        let radix = layout.radix(alphabet.len());
        let capacity = u32::try_from(max_key_length)
            .ok()
            .and_then(|exp| radix.checked_pow(exp))
            .ok_or_else(|| {
                TypingModelError::Format(format!(
                    "주소 공간 오버플로: {}^{}",
                    radix, max_key_length
                ))
            })?;

        Ok(Self {
            alphabet,
            radix_table,
            max_key_length,
            layout,
            capacity,
        })
    }

    /// 키를 평면 인덱스로 변환
    ///
    /// 반환값은 항상 `capacity()`보다 작습니다. 빈 키는 0입니다.
    ///
    /// # Examples
    /// ```
    /// use typing_cost::model::{IndexLayout, KeyIndexer};
    ///
    /// let indexer = KeyIndexer::new("ab", 2, IndexLayout::Dense).unwrap();
    /// assert_eq!(indexer.encode("ab").unwrap(), 1);
    /// assert_eq!(indexer.encode("ba").unwrap(), 2);
    /// assert!(indexer.encode("c").is_err());
    /// ```
    pub fn encode(&self, key: &str) -> Result<usize, TypingModelError> {
        let radix = self.radix();
        let offset = self.layout.digit_offset();
        let mut index = 0usize;
        let mut length = 0usize;

        // 알파벳 검사는 키 전체에 대해 길이 검사보다 먼저
        for (position, character) in key.chars().enumerate() {
            let digit = self
                .radix_table
                .get(&character)
                .ok_or(TypingModelError::OutOfAlphabet {
                    character,
                    position,
                })?;
            length = position + 1;
            if length <= self.max_key_length {
                index = index * radix + digit + offset;
            }
        }

        if length > self.max_key_length {
            return Err(TypingModelError::KeyTooLong {
                length,
                max: self.max_key_length,
            });
        }

        Ok(index)
    }

    /// 문자가 알파벳에 포함되는지 확인
    pub fn contains(&self, c: char) -> bool {
        self.radix_table.contains_key(&c)
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    pub fn layout(&self) -> IndexLayout {
        self.layout
    }

    /// 자리당 기수
    pub fn radix(&self) -> usize {
        self.layout.radix(self.alphabet.len())
    }

    /// 주소 공간 크기 (매핑 테이블이 가져야 할 항목 수)
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
