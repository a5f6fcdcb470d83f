use crate::field::{FlagField, NumberField};

/// 登録済みフィールドの並び。パスワード内のバイト位置・ビット位置を決める。
///
/// 登録順がそのままレイアウトになる。過去に発行したパスワードを読めるようにするには、
/// 全てのビルドで同じフィールドを同じ順序で登録しなければならない。
/// この制約は実行時には検査しないが、`FieldLayout` 同士を比較すれば互換性を確かめられる。
///
/// パスワードのバイト列は以下の構成になる:
///
/// ```text
/// [checksum] [number 0] [number 1] ... [flags 0..8] [flags 8..16] ...
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldLayout {
    numbers: Vec<NumberField>,
    flags: Vec<FlagField>,
}

impl FieldLayout {
    /// 空のレイアウトを返す。
    pub fn new() -> Self {
        Self::default()
    }

    /// 数値フィールドを末尾に登録する。登録済みなら何もせず `false` を返す。
    pub fn register_number(&mut self, field: NumberField) -> bool {
        if self.has_number(field) {
            return false;
        }
        self.numbers.push(field);
        true
    }

    /// フラグを末尾に登録する。登録済みなら何もせず `false` を返す。
    pub fn register_flag(&mut self, field: FlagField) -> bool {
        if self.has_flag(field) {
            return false;
        }
        self.flags.push(field);
        true
    }

    /// 数値フィールドが登録済みかどうかを返す。
    pub fn has_number(&self, field: NumberField) -> bool {
        self.numbers.contains(&field)
    }

    /// フラグが登録済みかどうかを返す。
    pub fn has_flag(&self, field: FlagField) -> bool {
        self.flags.contains(&field)
    }

    /// 登録順の数値フィールド。
    pub fn numbers(&self) -> &[NumberField] {
        &self.numbers
    }

    /// 登録順のフラグ。
    pub fn flags(&self) -> &[FlagField] {
        &self.flags
    }

    /// フラグ領域のバイト数。
    pub fn flag_bytes_len(&self) -> usize {
        self.flags.len().div_ceil(8)
    }

    /// チェックサムを除いたバイト数。
    pub fn packed_len(&self) -> usize {
        self.numbers.len() + self.flag_bytes_len()
    }

    /// チェックサムを含むバイト数。
    pub fn payload_len(&self) -> usize {
        1 + self.packed_len()
    }

    /// このレイアウトで生成されるパスワードの文字数。
    pub fn password_len(&self) -> usize {
        (self.payload_len() * 8).div_ceil(5)
    }
}
