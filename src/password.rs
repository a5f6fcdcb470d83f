use std::fmt::Write as _;

use bitvec::prelude::*;
use thiserror::Error;

/// パスワード。base32 文字の列。
///
/// バイト列は上位ビットから順に 5bit ずつ区切られ、各 5bit 値が 1 文字になる:
///
/// ```text
/// 01234567 89ABCDEF GH...
/// |---||-- -||---|| ---...
/// ```
///
/// 末尾の端数は下位側を 0 で埋めて 5bit にする。パディング文字は付けない。
#[repr(transparent)]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Password(Vec<PasswordChar>);

impl Password {
    /// 文字列をパースして `Password` を作る。
    ///
    /// 大文字小文字は区別しない。また `o` は `0` として、`i`, `l` は `1` として扱う。
    pub fn parse(s: &str) -> Result<Self, PasswordParseError> {
        s.chars()
            .enumerate()
            .map(|(i, c)| {
                PasswordChar::from_char(c).ok_or(PasswordParseError::InvalidChar { pos: i, ch: c })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// バイト列をエンコードして `Password` を得る。文字数は `ceil(bytes.len() * 8 / 5)`。
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let inner = bytes
            .view_bits::<Msb0>()
            .chunks(5)
            .map(|chunk| {
                // 端数は左詰めにする。
                let value = chunk.load_be::<u8>() << (5 - chunk.len());
                PasswordChar::all()[usize::from(value)]
            })
            .collect();

        Self(inner)
    }

    /// パスワードをデコードしてバイト列を得る。バイト数は `floor(self.len() * 5 / 8)`。
    ///
    /// 末尾の 8bit に満たない端数は捨てる。
    /// エンコード結果でないパスワードに対しても何らかのバイト列を返す。
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(5 * self.len());
        for pc in self {
            bits.extend_from_bitslice(&pc.to_inner().view_bits::<Msb0>()[3..]);
        }

        bits.chunks_exact(8)
            .map(|chunk| chunk.load_be::<u8>())
            .collect()
    }

    /// 内部バッファを返す。
    pub fn into_inner(self) -> Vec<PasswordChar> {
        self.0
    }

    /// パスワード全体を含むスライスを返す。
    pub fn as_slice(&self) -> &[PasswordChar] {
        self.0.as_slice()
    }

    /// 文字数を返す。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 空かどうかを返す。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// パスワードを正規の大文字表記でフォーマットする `Display` オブジェクトを返す。
    pub fn display(&self) -> PasswordDisplay {
        PasswordDisplay { password: self }
    }
}

impl std::ops::Deref for Password {
    type Target = [PasswordChar];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[PasswordChar]> for Password {
    fn as_ref(&self) -> &[PasswordChar] {
        self
    }
}

impl std::str::FromStr for Password {
    type Err = PasswordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl IntoIterator for Password {
    type Item = PasswordChar;
    type IntoIter = std::vec::IntoIter<PasswordChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a> IntoIterator for &'a Password {
    type Item = &'a PasswordChar;
    type IntoIter = std::slice::Iter<'a, PasswordChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
pub struct PasswordDisplay<'a> {
    password: &'a Password,
}

impl std::fmt::Display for PasswordDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pc in self.password {
            f.write_char(pc.to_char())?;
        }

        Ok(())
    }
}

/// パスワード内の文字。
///
/// 読み間違えやすい I, L, O, U は使わない。
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PasswordChar {
    D0 = 0x00,
    D1 = 0x01,
    D2 = 0x02,
    D3 = 0x03,
    D4 = 0x04,
    D5 = 0x05,
    D6 = 0x06,
    D7 = 0x07,
    D8 = 0x08,
    D9 = 0x09,
    A = 0x0A,
    B = 0x0B,
    C = 0x0C,
    D = 0x0D,
    E = 0x0E,
    F = 0x0F,
    G = 0x10,
    H = 0x11,
    J = 0x12,
    K = 0x13,
    M = 0x14,
    N = 0x15,
    P = 0x16,
    Q = 0x17,
    R = 0x18,
    S = 0x19,
    T = 0x1A,
    V = 0x1B,
    W = 0x1C,
    X = 0x1D,
    Y = 0x1E,
    Z = 0x1F,
}

impl PasswordChar {
    /// 正規の表記による全文字。インデックスが内部値に一致する。
    pub const ALPHABET: &'static str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

    /// 内部値から `PasswordChar` を作る。無効値に対しては `None` を返す。
    pub const fn from_inner(inner: u8) -> Option<Self> {
        if matches!(inner, 0..=0x1F) {
            Some(Self::all()[inner as usize])
        } else {
            None
        }
    }

    /// 文字を `PasswordChar` に変換する。無効な文字に対しては `None` を返す。
    ///
    /// 大文字小文字は区別しない。紛らわしい `o` は `0` に、`i`, `l` は `1` に読み替える。
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '0' | 'o' => Some(Self::D0),
            '1' | 'i' | 'l' => Some(Self::D1),
            '2' => Some(Self::D2),
            '3' => Some(Self::D3),
            '4' => Some(Self::D4),
            '5' => Some(Self::D5),
            '6' => Some(Self::D6),
            '7' => Some(Self::D7),
            '8' => Some(Self::D8),
            '9' => Some(Self::D9),
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            'e' => Some(Self::E),
            'f' => Some(Self::F),
            'g' => Some(Self::G),
            'h' => Some(Self::H),
            'j' => Some(Self::J),
            'k' => Some(Self::K),
            'm' => Some(Self::M),
            'n' => Some(Self::N),
            'p' => Some(Self::P),
            'q' => Some(Self::Q),
            'r' => Some(Self::R),
            's' => Some(Self::S),
            't' => Some(Self::T),
            'v' => Some(Self::V),
            'w' => Some(Self::W),
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }

    /// 内部値を返す。
    pub const fn to_inner(self) -> u8 {
        self as u8
    }

    /// 正規の表記(数字または大文字)を返す。
    pub const fn to_char(self) -> char {
        Self::ALPHABET.as_bytes()[self as usize] as char
    }

    /// 全ての文字を昇順で返す。
    pub const fn all() -> [Self; 0x20] {
        use PasswordChar::*;

        #[rustfmt::skip]
        const ALL: [PasswordChar; 0x20] = [
            D0, D1, D2, D3, D4, D5, D6, D7, D8, D9,
            A, B, C, D, E, F, G, H,
            J, K, M, N, P, Q, R, S, T,
            V, W, X, Y, Z,
        ];

        ALL
    }
}

/// パスワードのパース時に発生しうるエラー。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PasswordParseError {
    /// パスワードに無効な文字が含まれている。
    #[error("password contains an invalid character '{ch}' at position {pos}")]
    InvalidChar { pos: usize, ch: char },
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use super::*;

    #[test]
    fn test_char_table() {
        assert_equal(
            PasswordChar::all().iter().map(|pc| pc.to_char()),
            PasswordChar::ALPHABET.chars(),
        );
        for (i, pc) in PasswordChar::all().into_iter().enumerate() {
            assert_eq!(usize::from(pc.to_inner()), i);
            assert_eq!(PasswordChar::from_inner(pc.to_inner()), Some(pc));
            assert_eq!(PasswordChar::from_char(pc.to_char()), Some(pc));
        }
        assert_eq!(PasswordChar::from_inner(0x20), None);
    }

    #[test]
    fn test_char_ambiguous() {
        assert_eq!(PasswordChar::from_char('o'), Some(PasswordChar::D0));
        assert_eq!(PasswordChar::from_char('O'), Some(PasswordChar::D0));
        assert_eq!(PasswordChar::from_char('i'), Some(PasswordChar::D1));
        assert_eq!(PasswordChar::from_char('I'), Some(PasswordChar::D1));
        assert_eq!(PasswordChar::from_char('l'), Some(PasswordChar::D1));
        assert_eq!(PasswordChar::from_char('L'), Some(PasswordChar::D1));
        assert_eq!(PasswordChar::from_char('z'), Some(PasswordChar::Z));

        assert_eq!(PasswordChar::from_char('u'), None);
        assert_eq!(PasswordChar::from_char('U'), None);
        assert_eq!(PasswordChar::from_char('-'), None);
        assert_eq!(PasswordChar::from_char(' '), None);
        assert_eq!(PasswordChar::from_char('あ'), None);
    }

    #[test]
    fn test_non_ascii_lookalikes_rejected() {
        // KELVIN SIGN は Unicode の小文字化では 'k' になるが、ASCII 以外は受け付けない。
        assert_eq!(PasswordChar::from_char('\u{212A}'), None);
        assert_eq!(
            Password::parse("MM\u{212A}80"),
            Err(PasswordParseError::InvalidChar {
                pos: 2,
                ch: '\u{212A}'
            })
        );
        // 全角の数字も同様。
        assert_eq!(PasswordChar::from_char('０'), None);
    }

    #[test]
    fn test_password_parse() {
        assert_equal(
            Password::parse("mMn8o").unwrap(),
            [
                PasswordChar::M,
                PasswordChar::M,
                PasswordChar::N,
                PasswordChar::D8,
                PasswordChar::D0,
            ],
        );
        assert!(Password::parse("").unwrap().is_empty());

        assert_eq!(
            Password::parse("AB?CD"),
            Err(PasswordParseError::InvalidChar { pos: 2, ch: '?' })
        );
        assert_eq!(
            Password::parse("0u"),
            Err(PasswordParseError::InvalidChar { pos: 1, ch: 'u' })
        );
    }

    #[test]
    fn test_password_display() {
        assert_eq!(Password::parse("mmn8o").unwrap().display().to_string(), "MMN80");
        assert_eq!(Password::parse("ilo").unwrap().display().to_string(), "110");
    }

    #[test]
    fn test_from_bytes() {
        fn f(bytes: &[u8]) -> String {
            Password::from_bytes(bytes).display().to_string()
        }

        assert_eq!(f(&[]), "");
        assert_eq!(f(&[0x00]), "00");
        assert_eq!(f(&[0xFF]), "ZW");
        assert_eq!(f(&[0x8A]), "H8");
        assert_eq!(f(&[0xA5, 0x2A, 0x80]), "MMN80");
        assert_eq!(f(&[0xDE, 0xAD, 0xBE, 0xEF, 0x01]), "VTPVXVR1");
    }

    #[test]
    fn test_to_bytes() {
        fn f(s: &str) -> Vec<u8> {
            Password::parse(s).unwrap().to_bytes()
        }

        assert!(f("").is_empty());
        assert!(f("Z").is_empty());
        assert_eq!(f("ZW"), [0xFF]);
        assert_eq!(f("MMN80"), [0xA5, 0x2A, 0x80]);
        assert_eq!(f("ZZZZZZZZ"), [0xFF; 5]);
        assert_eq!(f("vtpvxvr1"), [0xDE, 0xAD, 0xBE, 0xEF, 0x01]);
    }

    #[test]
    fn test_lengths() {
        for n in 0..=16 {
            let bytes = vec![0x5A; n];
            let password = Password::from_bytes(&bytes);
            assert_eq!(password.len(), (n * 8).div_ceil(5));
            assert_eq!(password.to_bytes(), bytes);
        }
    }
}
