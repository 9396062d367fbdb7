//! EXIF display orientation and the transform needed to show an image upright.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The eight EXIF orientation codes, named by where row 0 and column 0 of
/// the stored image end up.
///
/// ```text
///     1: TopLeft     2: TopRight    3: BottomRight 4: BottomLeft
///     ┌───┐          ┌───┐          ┌───┐          ┌───┐
///     │ F │          │ Ꟊ │          │   │          │   │
///     │   │          │   │          │ Ꟊ │          │ F │
///     └───┘          └───┘          └───┘          └───┘
///
///     5: LeftTop     6: RightTop    7: RightBottom 8: LeftBottom
///     ┌────┐         ┌────┐         ┌────┐         ┌────┐
///     │ F  │         │  F │         │  Ꟊ │         │ Ꟊ  │
///     └────┘         └────┘         └────┘         └────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Orientation {
    #[default]
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
    LeftTop = 5,
    RightTop = 6,
    RightBottom = 7,
    LeftBottom = 8,
}

impl Orientation {
    /// All orientations, indexed by EXIF code - 1.
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::LeftTop,
        Self::RightTop,
        Self::RightBottom,
        Self::LeftBottom,
    ];

    /// Maps an EXIF code (1-8). Returns `None` for anything else.
    #[must_use]
    pub fn from_exif(code: u16) -> Option<Self> {
        match code {
            1..=8 => Some(Self::ALL[usize::from(code - 1)]),
            _ => None,
        }
    }

    /// Resolves an optional raw tag value, falling back to [`Orientation::TopLeft`]
    /// when the value is absent or outside 1-8.
    #[must_use]
    pub fn normalize(raw: Option<u16>) -> Self {
        raw.and_then(Self::from_exif).unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub const fn exif_code(self) -> u16 {
        self as u16
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "TopLeft",
            Self::TopRight => "TopRight",
            Self::BottomRight => "BottomRight",
            Self::BottomLeft => "BottomLeft",
            Self::LeftTop => "LeftTop",
            Self::RightTop => "RightTop",
            Self::RightBottom => "RightBottom",
            Self::LeftBottom => "LeftBottom",
        }
    }

    /// Whether the image is already stored upright.
    #[inline]
    #[must_use]
    pub const fn is_identity(self) -> bool {
        matches!(self, Self::TopLeft)
    }

    /// Whether width and height trade places once the image is shown upright.
    #[inline]
    #[must_use]
    pub const fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Self::LeftTop | Self::RightTop | Self::RightBottom | Self::LeftBottom
        )
    }

    /// The clockwise rotation, then optional horizontal mirror, that turns the
    /// stored pixels into the upright image.
    #[must_use]
    pub const fn display_transform(self) -> DisplayTransform {
        let (rotation, mirror) = match self {
            Self::TopLeft => (Rotation::None, false),
            Self::TopRight => (Rotation::None, true),
            Self::BottomRight => (Rotation::Cw180, false),
            Self::BottomLeft => (Rotation::Cw180, true),
            Self::LeftTop => (Rotation::Cw90, true),
            Self::RightTop => (Rotation::Cw90, false),
            Self::RightBottom => (Rotation::Cw270, true),
            Self::LeftBottom => (Rotation::Cw270, false),
        };
        DisplayTransform { rotation, mirror }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrientationError(String);

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown orientation: {}", self.0)
    }
}

impl std::error::Error for ParseOrientationError {}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u16>() {
            return Self::from_exif(code).ok_or_else(|| ParseOrientationError(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseOrientationError(s.to_string()))
    }
}

/// Clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl Rotation {
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Cw90 => 90,
            Self::Cw180 => 180,
            Self::Cw270 => 270,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DisplayTransform {
    pub rotation: Rotation,
    /// Horizontal mirror applied after the rotation.
    pub mirror: bool,
}

impl DisplayTransform {
    #[inline]
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(self.rotation, Rotation::None) && !self.mirror
    }
}

impl fmt::Display for DisplayTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rotation, self.mirror) {
            (Rotation::None, false) => f.write_str("none"),
            (Rotation::None, true) => f.write_str("mirror"),
            (r, false) => write!(f, "rotate{}", r.degrees()),
            (r, true) => write!(f, "rotate{}+mirror", r.degrees()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exif_codes() {
        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.exif_code(), i as u16 + 1);
            assert_eq!(Orientation::from_exif(i as u16 + 1), Some(*o));
        }
        assert_eq!(Orientation::from_exif(6), Some(Orientation::RightTop));
        assert_eq!(Orientation::from_exif(8), Some(Orientation::LeftBottom));
    }

    #[test]
    fn test_invalid_codes() {
        assert_eq!(Orientation::from_exif(0), None);
        assert_eq!(Orientation::from_exif(9), None);
        assert_eq!(Orientation::from_exif(u16::MAX), None);
    }

    #[test]
    fn test_normalize_falls_back() {
        assert_eq!(Orientation::normalize(None), Orientation::TopLeft);
        assert_eq!(Orientation::normalize(Some(0)), Orientation::TopLeft);
        assert_eq!(Orientation::normalize(Some(9)), Orientation::TopLeft);
        assert_eq!(Orientation::normalize(Some(3)), Orientation::BottomRight);
        assert_eq!(Orientation::default(), Orientation::TopLeft);
    }

    #[test]
    fn test_swaps_dimensions() {
        let swapping: Vec<u16> = Orientation::ALL
            .iter()
            .filter(|o| o.swaps_dimensions())
            .map(|o| o.exif_code())
            .collect();
        assert_eq!(swapping, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_display_transform() {
        assert!(Orientation::TopLeft.display_transform().is_identity());
        assert_eq!(
            Orientation::RightTop.display_transform(),
            DisplayTransform {
                rotation: Rotation::Cw90,
                mirror: false
            }
        );
        assert_eq!(
            Orientation::LeftTop.display_transform().to_string(),
            "rotate90+mirror"
        );
        assert_eq!(Orientation::TopRight.display_transform().to_string(), "mirror");
        assert_eq!(
            Orientation::LeftBottom.display_transform().to_string(),
            "rotate270"
        );
        for o in Orientation::ALL {
            assert_eq!(o.display_transform().is_identity(), o.is_identity());
            assert_eq!(
                matches!(
                    o.display_transform().rotation,
                    Rotation::Cw90 | Rotation::Cw270
                ),
                o.swaps_dimensions()
            );
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("RightTop".parse::<Orientation>(), Ok(Orientation::RightTop));
        assert_eq!("lefttop".parse::<Orientation>(), Ok(Orientation::LeftTop));
        assert_eq!(" 7 ".parse::<Orientation>(), Ok(Orientation::RightBottom));
        assert!("9".parse::<Orientation>().is_err());
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_serialize_as_name() {
        let json = serde_json::to_string(&Orientation::BottomLeft).unwrap();
        assert_eq!(json, "\"BottomLeft\"");
    }
}
