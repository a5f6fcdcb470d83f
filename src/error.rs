use thiserror::Error;

use crate::field::{FieldId, NumberField};
use crate::password::PasswordParseError;

/// フィールドの読み書き時に発生しうるエラー。どちらも呼び出し側のミス。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FieldError {
    /// フィールドが登録されていない。
    #[error("{0} is not registered; register all fields before saving/loading")]
    Unregistered(FieldId),

    /// 数値が `0..=255` の範囲外。
    #[error("{field} must be in 0..=255, got {value}")]
    OutOfRange { field: NumberField, value: i64 },
}

/// パスワードのロード時に発生しうるエラー。いずれも入力ミスとして扱い、状態は変更されない。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LoadError {
    /// パスワードの文字数が正しくない。
    #[error("password must contain exactly {expected} chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// パスワードに無効な文字が含まれている。
    #[error("password contains an invalid character '{ch}' at position {pos}")]
    InvalidChar { pos: usize, ch: char },

    /// チェックサムが一致しない。
    #[error("checksum mismatch: embed={embed:#04X}, calculated={calculated:#04X}")]
    ChecksumMismatch { embed: u8, calculated: u8 },
}

impl From<PasswordParseError> for LoadError {
    fn from(e: PasswordParseError) -> Self {
        match e {
            PasswordParseError::InvalidChar { pos, ch } => Self::InvalidChar { pos, ch },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FlagField;

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::Unregistered(FlagField::new(3).into()).to_string(),
            "flag #3 is not registered; register all fields before saving/loading"
        );
        assert_eq!(
            FieldError::OutOfRange {
                field: NumberField::new(1000),
                value: 256
            }
            .to_string(),
            "small number #1000 must be in 0..=255, got 256"
        );
        assert_eq!(
            LoadError::ChecksumMismatch {
                embed: 0xA5,
                calculated: 0x0B
            }
            .to_string(),
            "checksum mismatch: embed=0xA5, calculated=0x0B"
        );
    }

    #[test]
    fn test_from_parse_error() {
        assert_eq!(
            LoadError::from(PasswordParseError::InvalidChar { pos: 4, ch: 'u' }),
            LoadError::InvalidChar { pos: 4, ch: 'u' }
        );
    }
}
