use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourMapKind {
    Grayscale,
    Hue,
    #[default]
    HistogramHue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapKind(pub String);

impl std::fmt::Display for UnknownColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown colour map '{}', expected one of: grayscale, hue, histogram",
            self.0
        )
    }
}

impl std::error::Error for UnknownColourMapKind {}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::HistogramHue, Self::Hue, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Linear grayscale",
            Self::Hue => "Direct hue",
            Self::HistogramHue => "Histogram-equalised hue",
        }
    }

    /// Lower-case name used on the command line and in output file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Hue => "hue",
            Self::HistogramHue => "histogram",
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourMapKind {
    type Err = UnknownColourMapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColourMapKind(s.to_string()))
    }
}
