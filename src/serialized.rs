use bitvec::prelude::*;

use crate::checksum::{ChecksumProvider, CHECKSUM_BITS};
use crate::layout::FieldLayout;
use crate::password::Password;
use crate::savedata::Savedata;

/// ゲーム状態をレイアウトに従ってバイト列にパックする。チェックサムは含まない。
///
/// 数値フィールドが 1 バイトずつ登録順に並び、その後にフラグ領域が続く。
/// フラグは登録順に各バイトの上位ビットから詰める。つまりフラグ `i` は
/// `i / 8` バイト目の bit `7 - i % 8` に入る。最終バイトの余りビットは 0。
///
/// ```text
/// [number 0] [number 1] ... [01234567] [89AB0000]
/// ```
pub fn pack(layout: &FieldLayout, savedata: &Savedata) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(layout.packed_len());

    bytes.extend(layout.numbers().iter().map(|&field| savedata.number(field)));

    let mut flag_bytes = vec![0_u8; layout.flag_bytes_len()];
    let bits = flag_bytes.view_bits_mut::<Msb0>();
    for (i, &field) in layout.flags().iter().enumerate() {
        bits.set(i, savedata.flag(field));
    }
    bytes.extend(flag_bytes);

    bytes
}

/// `pack` の逆変換。バイト数がレイアウトと一致しなければ `None` を返す。
///
/// フラグ領域の余りビットは無視する。
pub fn unpack(layout: &FieldLayout, bytes: &[u8]) -> Option<Savedata> {
    if bytes.len() != layout.packed_len() {
        return None;
    }

    let (number_bytes, flag_bytes) = bytes.split_at(layout.numbers().len());
    let mut savedata = Savedata::new();

    for (&field, &value) in layout.numbers().iter().zip(number_bytes) {
        savedata.set_number(field, value);
    }

    let bits = flag_bytes.view_bits::<Msb0>();
    for (&field, bit) in layout.flags().iter().zip(bits.iter().by_vals()) {
        savedata.set_flag(field, bit);
    }

    Some(savedata)
}

/// チェックサム付きのバイト列。
///
/// 先頭 1 バイトがチェックサム、残りがパックされたゲーム状態:
///
/// ```text
/// [checksum] [body ...]
/// ```
///
/// 最低でも 1 バイト(チェックサム)を含む。
#[repr(transparent)]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SerializedBytes(Vec<u8>);

impl SerializedBytes {
    /// バイト列から `SerializedBytes` を作る。空なら `None` を返す。
    pub fn new(buf: &[u8]) -> Option<Self> {
        (!buf.is_empty()).then(|| Self(buf.to_vec()))
    }

    /// ゲーム状態をシリアライズして `SerializedBytes` を得る。
    ///
    /// 戻り値はチェックサムが一致していることが保証される。
    pub fn from_savedata(
        layout: &FieldLayout,
        savedata: &Savedata,
        checksum: &impl ChecksumProvider,
    ) -> Self {
        let body = pack(layout, savedata);

        let mut inner = Vec::with_capacity(1 + body.len());
        inner.push(checksum.checksum(&body, CHECKSUM_BITS));
        inner.extend(body);

        Self(inner)
    }

    /// パスワードをデコードして `SerializedBytes` を得る。
    /// デコード結果が空(パスワードが 1 文字以下)なら `None` を返す。
    ///
    /// 戻り値はチェックサムが一致していない可能性がある。
    pub fn from_password(password: &Password) -> Option<Self> {
        let inner = password.to_bytes();
        (!inner.is_empty()).then_some(Self(inner))
    }

    /// `SerializedBytes` をパスワードにエンコードする。
    pub fn to_password(&self) -> Password {
        Password::from_bytes(&self.0)
    }

    /// ゲーム状態にデシリアライズする。
    /// チェックサムが一致しないか、バイト数がレイアウトと一致しなければ `None` を返す。
    pub fn to_savedata(
        &self,
        layout: &FieldLayout,
        checksum: &impl ChecksumProvider,
    ) -> Option<Savedata> {
        if !self.checksum_is_ok(checksum) {
            return None;
        }

        unpack(layout, self.body())
    }

    /// チェックサムを除いた部分を返す。
    pub fn body(&self) -> &[u8] {
        &self.0[1..]
    }

    /// バイト列全体を含むスライスを返す。
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// 内部バッファを返す。
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// バイト数を返す。
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// バイト列に格納されたチェックサムを返す。
    pub fn checksum_embed(&self) -> u8 {
        self.0[0]
    }

    /// バイト列の内容から計算されたチェックサムを返す。
    pub fn checksum_calculated(&self, checksum: &impl ChecksumProvider) -> u8 {
        checksum.checksum(self.body(), CHECKSUM_BITS)
    }

    /// バイト列に格納されたチェックサムと計算されたチェックサムが一致するかどうかを返す。
    pub fn checksum_is_ok(&self, checksum: &impl ChecksumProvider) -> bool {
        self.checksum_embed() == self.checksum_calculated(checksum)
    }
}

impl std::ops::Deref for SerializedBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for SerializedBytes {
    fn as_ref(&self) -> &[u8] {
        self
    }
}
