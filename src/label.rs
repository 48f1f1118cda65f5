//! IONEX 1.1 line labels
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Label] identifies an IONEX line: it is written at column 61 of
/// header lines and map delimiters, and defines the line format descriptor.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    #[strum(serialize = "IONEX VERSION / TYPE")]
    VersionType,
    #[strum(serialize = "PGM / RUN BY / DATE")]
    ProgramRunByDate,
    #[strum(serialize = "DESCRIPTION")]
    Description,
    #[strum(serialize = "COMMENT")]
    Comment,
    #[strum(serialize = "EPOCH OF FIRST MAP")]
    EpochOfFirstMap,
    #[strum(serialize = "EPOCH OF LAST MAP")]
    EpochOfLastMap,
    #[strum(serialize = "INTERVAL")]
    Interval,
    #[strum(serialize = "# OF MAPS IN FILE")]
    NumberOfMaps,
    #[strum(serialize = "MAPPING FUNCTION")]
    MappingFunction,
    #[strum(serialize = "ELEVATION CUTOFF")]
    ElevationCutoff,
    #[strum(serialize = "OBSERVABLES USED")]
    ObservablesUsed,
    #[strum(serialize = "# OF STATIONS")]
    NumberOfStations,
    #[strum(serialize = "# OF SATELLITES")]
    NumberOfSatellites,
    #[strum(serialize = "SYS / # STA / # SAT")]
    SystemStationsSatellites,
    #[strum(serialize = "BASE RADIUS")]
    BaseRadius,
    #[strum(serialize = "MAP DIMENSION")]
    MapDimension,
    #[strum(serialize = "HGT1 / HGT2 / DHGT")]
    HeightGrid,
    #[strum(serialize = "LAT1 / LAT2 / DLAT")]
    LatitudeGrid,
    #[strum(serialize = "LON1 / LON2 / DLON")]
    LongitudeGrid,
    #[strum(serialize = "EXPONENT")]
    Exponent,
    #[strum(serialize = "START OF AUX DATA")]
    StartOfAuxData,
    #[strum(serialize = "END OF AUX DATA")]
    EndOfAuxData,
    #[strum(serialize = "START OF TEC MAP")]
    StartOfTecMap,
    #[strum(serialize = "EPOCH OF CURRENT MAP")]
    EpochOfCurrentMap,
    #[strum(serialize = "LAT/LON1/LON2/DLON/H")]
    GridLocator,
    #[strum(serialize = "END OF TEC MAP")]
    EndOfTecMap,
    #[strum(serialize = "START OF RMS MAP")]
    StartOfRmsMap,
    #[strum(serialize = "END OF RMS MAP")]
    EndOfRmsMap,
    #[strum(serialize = "START OF HEIGHT MAP")]
    StartOfHeightMap,
    #[strum(serialize = "END OF HEIGHT MAP")]
    EndOfHeightMap,
    #[strum(serialize = "END OF HEADER")]
    EndOfHeader,
    #[strum(serialize = "END OF FILE")]
    EndOfFile,
}

impl Label {
    /// First label of any header
    pub const FIRST: Self = Self::VersionType;

    /// Last label of any header
    pub const LAST: Self = Self::EndOfHeader;

    /// Format descriptor of lines carrying this label
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::VersionType => "F8.1, 12X, A1, 19X, A3, 17X",
            Self::ProgramRunByDate => "A20, A20, A20",
            Self::Description
            | Self::Comment
            | Self::ObservablesUsed
            | Self::StartOfAuxData
            | Self::EndOfAuxData => "A60",
            Self::EpochOfFirstMap | Self::EpochOfLastMap | Self::EpochOfCurrentMap => "6I6, 24X",
            Self::Interval
            | Self::NumberOfMaps
            | Self::NumberOfStations
            | Self::NumberOfSatellites
            | Self::MapDimension
            | Self::Exponent
            | Self::StartOfTecMap
            | Self::EndOfTecMap
            | Self::StartOfRmsMap
            | Self::EndOfRmsMap
            | Self::StartOfHeightMap
            | Self::EndOfHeightMap => "I6, 54X",
            Self::MappingFunction => "2X, A4, 54X",
            Self::ElevationCutoff | Self::BaseRadius => "F8.1, 52X",
            Self::SystemStationsSatellites => "5X, A1, I6, I6, 42X",
            Self::HeightGrid | Self::LatitudeGrid | Self::LongitudeGrid => "2X, 3F6.1, 40X",
            Self::GridLocator => "2X, 5F6.1, 28X",
            Self::EndOfHeader | Self::EndOfFile => "60X",
        }
    }

    /// Returns true if this label may span several lines.
    /// Other labels describe a single physical quantity.
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            Self::Comment | Self::Description | Self::ObservablesUsed
        )
    }

    /// Number of '/' separated words in this label
    pub fn words(&self) -> usize {
        self.as_ref().split('/').count()
    }

    /// Default header line order
    pub fn default_header_order() -> Vec<Self> {
        vec![
            Self::VersionType,
            Self::ProgramRunByDate,
            Self::Description,
            Self::EpochOfFirstMap,
            Self::EpochOfLastMap,
            Self::Interval,
            Self::NumberOfMaps,
            Self::MappingFunction,
            Self::ElevationCutoff,
            Self::NumberOfStations,
            Self::NumberOfSatellites,
            Self::ObservablesUsed,
            Self::BaseRadius,
            Self::MapDimension,
            Self::HeightGrid,
            Self::LatitudeGrid,
            Self::LongitudeGrid,
            Self::Exponent,
            Self::Comment,
            Self::StartOfAuxData,
            Self::EndOfAuxData,
            Self::EndOfHeader,
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn label_parsing() {
        for label in Label::iter() {
            let text = label.to_string();
            assert_eq!(Label::from_str(&text), Ok(label));
            assert_eq!(text, label.as_ref());
            assert!(text.len() <= 20, "\"{}\" is too long", text);
        }
        assert_eq!(Label::iter().count(), 32);
        assert!(Label::from_str("PGM / RUN BY").is_err());
    }

    #[test]
    fn words() {
        assert_eq!(Label::VersionType.words(), 2);
        assert_eq!(Label::ProgramRunByDate.words(), 3);
        assert_eq!(Label::GridLocator.words(), 5);
        assert_eq!(Label::EndOfHeader.words(), 1);
    }

    #[test]
    fn default_order() {
        let order = Label::default_header_order();
        assert_eq!(order.first(), Some(&Label::FIRST));
        assert_eq!(order.last(), Some(&Label::LAST));
    }
}
