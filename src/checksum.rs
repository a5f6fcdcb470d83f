use crc::{Crc, CRC_8_SMBUS};

/// パスワードに埋め込むチェックサムのビット数。
pub const CHECKSUM_BITS: u32 = 8;

/// バイト列のチェックサムを計算するもの。
///
/// 入力バイト列の内容と順序のみから決まる純粋関数でなければならない。
/// 戻り値は `0..(1 << bits)` の範囲に収まること。
///
/// チェックサムは入力ミスの検出用であり、改竄の防止にはならない。
pub trait ChecksumProvider {
    /// `bytes` のチェックサムを `bits` ビット幅で返す。`bits` は `1..=8`。
    fn checksum(&self, bytes: &[u8], bits: u32) -> u8;
}

impl<F> ChecksumProvider for F
where
    F: Fn(&[u8], u32) -> u8,
{
    fn checksum(&self, bytes: &[u8], bits: u32) -> u8 {
        self(bytes, bits)
    }
}

/// CRC-8/SMBUS (多項式 0x07, 初期値 0, 反転なし, 最終 XOR なし)。
///
/// `bits < 8` の場合は下位 `bits` ビットに切り詰める。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Crc8;

impl Crc8 {
    const CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);

    /// 8bit の CRC を計算する。
    pub fn compute(bytes: &[u8]) -> u8 {
        Self::CRC.checksum(bytes)
    }
}

impl ChecksumProvider for Crc8 {
    fn checksum(&self, bytes: &[u8], bits: u32) -> u8 {
        debug_assert!(matches!(bits, 1..=8));

        let crc = Self::compute(bytes);
        if bits >= 8 {
            crc
        } else {
            crc & ((1 << bits) - 1)
        }
    }
}
