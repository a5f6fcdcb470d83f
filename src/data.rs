use tracing::{debug, trace};

use crate::checksum::{ChecksumProvider, Crc8};
use crate::error::{FieldError, LoadError};
use crate::field::{FlagField, NumberField};
use crate::layout::FieldLayout;
use crate::password::Password;
use crate::savedata::Savedata;
use crate::serialized::SerializedBytes;

/// パスワードセーブの本体。フィールドのレイアウト、現在の値、チェックサム関数を持つ。
///
/// 全てのフィールドを登録してから値の読み書きやパスワードの生成・ロードを行うこと。
/// 登録順がパスワードの形式を決めるので、パスワードを生成した後にフィールドを追加すると
/// 既存のパスワードは読めなくなる。
///
/// ```
/// use pwsave::{FlagField, NumberField, PasswordData};
///
/// const LEVEL: NumberField = NumberField::new(1000);
/// const FOUND_TANK: FlagField = FlagField::new(1000);
///
/// let mut data = PasswordData::new();
/// data.register_small_number(LEVEL);
/// data.register_flag(FOUND_TANK);
///
/// data.set_small_number(LEVEL, 42).unwrap();
/// data.set_flag(FOUND_TANK, true).unwrap();
/// let password = data.password().display().to_string();
/// assert_eq!(password, "MMN80");
///
/// data.clear_all_data();
/// data.load_from("mmn8o").unwrap();
/// assert_eq!(data.small_number(LEVEL), Ok(42));
/// assert_eq!(data.flag(FOUND_TANK), Ok(true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PasswordData<C = Crc8> {
    layout: FieldLayout,
    savedata: Savedata,
    checksum: C,
}

impl PasswordData<Crc8> {
    /// CRC-8 をチェックサムに用いる空の `PasswordData` を返す。
    pub fn new() -> Self {
        Self::default()
    }

    /// 構築済みのレイアウトから `PasswordData` を作る。
    pub fn from_layout(layout: FieldLayout) -> Self {
        Self {
            layout,
            savedata: Savedata::new(),
            checksum: Crc8,
        }
    }
}

impl<C: ChecksumProvider> PasswordData<C> {
    /// 指定したチェックサム関数を用いる空の `PasswordData` を返す。
    pub fn with_checksum(checksum: C) -> Self {
        Self {
            layout: FieldLayout::new(),
            savedata: Savedata::new(),
            checksum,
        }
    }

    /// 数値フィールドを登録する。登録済みなら何もしない。
    pub fn register_small_number(&mut self, field: NumberField) {
        if !self.layout.register_number(field) {
            trace!(%field, "already registered");
        }
    }

    /// フラグを登録する。登録済みなら何もしない。
    pub fn register_flag(&mut self, field: FlagField) {
        if !self.layout.register_flag(field) {
            trace!(%field, "already registered");
        }
    }

    /// 数値フィールドに値を設定する。値は `0..=255` でなければならない。
    pub fn set_small_number(
        &mut self,
        field: NumberField,
        value: impl Into<i64>,
    ) -> Result<(), FieldError> {
        self.ensure_number(field)?;

        let value = value.into();
        let value =
            u8::try_from(value).map_err(|_| FieldError::OutOfRange { field, value })?;
        self.savedata.set_number(field, value);

        Ok(())
    }

    /// フラグに値を設定する。
    pub fn set_flag(&mut self, field: FlagField, value: bool) -> Result<(), FieldError> {
        self.ensure_flag(field)?;
        self.savedata.set_flag(field, value);

        Ok(())
    }

    /// 数値フィールドの値を返す。未設定なら 0。
    pub fn small_number(&self, field: NumberField) -> Result<u8, FieldError> {
        self.ensure_number(field)?;

        Ok(self.savedata.number(field))
    }

    /// フラグの値を返す。未設定なら `false`。
    pub fn flag(&self, field: FlagField) -> Result<bool, FieldError> {
        self.ensure_flag(field)?;

        Ok(self.savedata.flag(field))
    }

    /// 現在の値からパスワードを生成する。
    pub fn password(&self) -> Password {
        SerializedBytes::from_savedata(&self.layout, &self.savedata, &self.checksum).to_password()
    }

    /// パスワードをロードし、成功すれば全ての値を置き換える。
    ///
    /// 失敗した場合、現在の値は一切変更されない。
    pub fn load_from(&mut self, password: &str) -> Result<(), LoadError> {
        let expected = self.expected_password_len();
        let actual = password.chars().count();
        if actual != expected {
            debug!(expected, actual, "rejected password: wrong length");
            return Err(LoadError::InvalidLength { expected, actual });
        }

        let password = Password::parse(password).map_err(|e| {
            debug!(error = %e, "rejected password: undecodable");
            LoadError::from(e)
        })?;

        // 文字数が正しければ少なくともチェックサムの 1 バイトはある。
        let invalid_length = LoadError::InvalidLength { expected, actual };
        let bytes =
            SerializedBytes::from_password(&password).ok_or_else(|| invalid_length.clone())?;

        if !bytes.checksum_is_ok(&self.checksum) {
            let embed = bytes.checksum_embed();
            let calculated = bytes.checksum_calculated(&self.checksum);
            debug!(embed, calculated, "rejected password: checksum mismatch");
            return Err(LoadError::ChecksumMismatch { embed, calculated });
        }

        self.savedata = bytes
            .to_savedata(&self.layout, &self.checksum)
            .ok_or(invalid_length)?;
        debug!(
            numbers = self.layout.numbers().len(),
            flags = self.layout.flags().len(),
            "loaded password"
        );

        Ok(())
    }

    /// 全ての値を消去する。各フィールドはデフォルト値(0 / `false`)に戻る。
    pub fn clear_all_data(&mut self) {
        self.savedata.clear();
    }

    /// 現在のレイアウトで生成・ロードされるパスワードの文字数。
    pub fn expected_password_len(&self) -> usize {
        self.layout.password_len()
    }

    /// レイアウトを返す。
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// 現在の値を返す。
    pub fn savedata(&self) -> &Savedata {
        &self.savedata
    }

    fn ensure_number(&self, field: NumberField) -> Result<(), FieldError> {
        if self.layout.has_number(field) {
            Ok(())
        } else {
            Err(FieldError::Unregistered(field.into()))
        }
    }

    fn ensure_flag(&self, field: FlagField) -> Result<(), FieldError> {
        if self.layout.has_flag(field) {
            Ok(())
        } else {
            Err(FieldError::Unregistered(field.into()))
        }
    }
}
