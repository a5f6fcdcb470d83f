/// 小さな数値(`0..=255`)フィールドの ID。
///
/// ID の値そのものに意味はない。同じ名前空間内で重複しないことだけが要求される。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NumberField(u32);

impl NumberField {
    /// 内部値から `NumberField` を作る。
    pub const fn new(inner: u32) -> Self {
        Self(inner)
    }

    /// 内部値を返す。
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// フラグ(真偽値)フィールドの ID。
///
/// `NumberField` とは別の名前空間なので、同じ内部値を持っていても衝突しない。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FlagField(u32);

impl FlagField {
    /// 内部値から `FlagField` を作る。
    pub const fn new(inner: u32) -> Self {
        Self(inner)
    }

    /// 内部値を返す。
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// 名前空間付きのフィールド ID。エラー報告に用いる。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldId {
    Number(NumberField),
    Flag(FlagField),
}

impl From<NumberField> for FieldId {
    fn from(field: NumberField) -> Self {
        Self::Number(field)
    }
}

impl From<FlagField> for FieldId {
    fn from(field: FlagField) -> Self {
        Self::Flag(field)
    }
}

impl std::fmt::Display for NumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "small number #{}", self.0)
    }
}

impl std::fmt::Display for FlagField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "flag #{}", self.0)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(field) => std::fmt::Display::fmt(field, f),
            Self::Flag(field) => std::fmt::Display::fmt(field, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_display() {
        assert_eq!(
            FieldId::from(NumberField::new(1000)).to_string(),
            "small number #1000"
        );
        assert_eq!(FieldId::from(FlagField::new(7)).to_string(), "flag #7");
    }

    #[test]
    fn test_namespaces_are_distinct() {
        assert_ne!(
            FieldId::from(NumberField::new(1)),
            FieldId::from(FlagField::new(1))
        );
    }
}
