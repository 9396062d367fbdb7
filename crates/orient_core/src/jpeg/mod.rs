mod scanner;

pub use scanner::MarkerScanner;

pub const FILL: u8 = 0xFF;
pub const TEM: u8 = 0x01;
pub const RST0: u8 = 0xD0;
pub const RST7: u8 = 0xD7;
pub const SOI: u8 = 0xD8;
pub const EOI: u8 = 0xD9;
pub const APP0: u8 = 0xE0;
pub const APP1: u8 = 0xE1;
pub const APP15: u8 = 0xEF;

/// Size of the big-endian length field that opens every marker segment.
pub const LENGTH_FIELD_LEN: u16 = 2;

#[inline]
pub const fn is_restart_marker(marker: u8) -> bool {
    marker >= RST0 && marker <= RST7
}
#[inline]
pub const fn is_app_marker(marker: u8) -> bool {
    marker >= APP0 && marker <= APP15
}
#[inline]
pub const fn is_standalone_marker(marker: u8) -> bool {
    matches!(marker, SOI | EOI | TEM) || is_restart_marker(marker)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerType {
    Soi,
    Eoi,
    Tem,
    Rst(u8),
    App(u8),
    Other(u8),
}

impl MarkerType {
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            SOI => Self::Soi,
            EOI => Self::Eoi,
            TEM => Self::Tem,
            b if is_restart_marker(b) => Self::Rst(b - RST0),
            b if is_app_marker(b) => Self::App(b - APP0),
            b => Self::Other(b),
        }
    }

    #[inline]
    pub fn to_byte(&self) -> u8 {
        match self {
            Self::Soi => SOI,
            Self::Eoi => EOI,
            Self::Tem => TEM,
            Self::Rst(n) => RST0 + n,
            Self::App(n) => APP0 + n,
            Self::Other(b) => *b,
        }
    }

    /// Whether a length field and payload follow this marker.
    #[inline]
    pub fn has_payload(&self) -> bool {
        !is_standalone_marker(self.to_byte())
    }
}
