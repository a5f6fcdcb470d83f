use std::collections::BTreeMap;

use crate::field::{FlagField, NumberField};

/// パスワードに記録されるゲーム状態。
///
/// 値が格納されていないフィールドは 0 / `false` として扱う。
/// フィールドが登録済みかどうかはここでは検査しない(`PasswordData` の責務)。
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Savedata {
    numbers: BTreeMap<NumberField, u8>,
    flags: BTreeMap<FlagField, bool>,
}

impl Savedata {
    /// 空のゲーム状態を返す。
    pub fn new() -> Self {
        Self::default()
    }

    /// 数値フィールドの値を返す。未設定なら 0。
    pub fn number(&self, field: NumberField) -> u8 {
        self.numbers.get(&field).copied().unwrap_or(0)
    }

    /// フラグの値を返す。未設定なら `false`。
    pub fn flag(&self, field: FlagField) -> bool {
        self.flags.get(&field).copied().unwrap_or(false)
    }

    /// 数値フィールドの値を設定する。
    pub fn set_number(&mut self, field: NumberField, value: u8) {
        self.numbers.insert(field, value);
    }

    /// フラグの値を設定する。
    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        self.flags.insert(field, value);
    }

    /// 全ての値を消去する。
    pub fn clear(&mut self) {
        self.numbers.clear();
        self.flags.clear();
    }

    /// 値が一つも格納されていないかどうかを返す。
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty() && self.flags.is_empty()
    }

    /// 格納されている数値フィールドを ID 順で返す。
    pub fn numbers(&self) -> impl Iterator<Item = (NumberField, u8)> + '_ {
        self.numbers.iter().map(|(&field, &value)| (field, value))
    }

    /// 格納されているフラグを ID 順で返す。
    pub fn flags(&self) -> impl Iterator<Item = (FlagField, bool)> + '_ {
        self.flags.iter().map(|(&field, &value)| (field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mut savedata = Savedata::new();
        assert_eq!(savedata.number(NumberField::new(1)), 0);
        assert!(!savedata.flag(FlagField::new(1)));

        savedata.set_number(NumberField::new(1), 99);
        savedata.set_flag(FlagField::new(1), true);
        assert_eq!(savedata.number(NumberField::new(1)), 99);
        assert!(savedata.flag(FlagField::new(1)));
        assert!(!savedata.is_empty());

        savedata.clear();
        assert!(savedata.is_empty());
        assert_eq!(savedata.number(NumberField::new(1)), 0);
        assert!(!savedata.flag(FlagField::new(1)));
    }
}
