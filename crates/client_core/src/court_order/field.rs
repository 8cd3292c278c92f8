use std::{fmt, str::FromStr};

use mhr_shared::{domain::CourtOrderInfo, error::DraftError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourtOrderField {
    CourtName,
    CourtRegistry,
    FileNumber,
    OrderDate,
    EffectOfOrder,
}

impl CourtOrderField {
    /// Display order of the form.
    pub const ALL: [CourtOrderField; 5] = [
        CourtOrderField::CourtName,
        CourtOrderField::CourtRegistry,
        CourtOrderField::FileNumber,
        CourtOrderField::OrderDate,
        CourtOrderField::EffectOfOrder,
    ];

    pub fn index(self) -> usize {
        match self {
            CourtOrderField::CourtName => 0,
            CourtOrderField::CourtRegistry => 1,
            CourtOrderField::FileNumber => 2,
            CourtOrderField::OrderDate => 3,
            CourtOrderField::EffectOfOrder => 4,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CourtOrderField::CourtName => "courtName",
            CourtOrderField::CourtRegistry => "courtRegistry",
            CourtOrderField::FileNumber => "fileNumber",
            CourtOrderField::OrderDate => "orderDate",
            CourtOrderField::EffectOfOrder => "effectOfOrder",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            CourtOrderField::CourtName => "txt-court-name",
            CourtOrderField::CourtRegistry => "txt-court-registry",
            CourtOrderField::FileNumber => "txt-court-file-number",
            CourtOrderField::OrderDate => "court-date-text-field",
            CourtOrderField::EffectOfOrder => "effect-of-order",
        }
    }

    pub fn display_id(self) -> &'static str {
        match self {
            CourtOrderField::CourtName => "court-name-display",
            CourtOrderField::CourtRegistry => "court-registry-display",
            CourtOrderField::FileNumber => "file-number-display",
            CourtOrderField::OrderDate => "date-display",
            CourtOrderField::EffectOfOrder => "effect-display",
        }
    }

    pub fn from_input_id(id: &str) -> Option<Self> {
        CourtOrderField::ALL
            .into_iter()
            .find(|field| field.input_id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            CourtOrderField::CourtName => "Court Name",
            CourtOrderField::CourtRegistry => "Court Registry",
            CourtOrderField::FileNumber => "Court File Number",
            CourtOrderField::OrderDate => "Date of Order",
            CourtOrderField::EffectOfOrder => "Effect of Order (Optional)",
        }
    }

    pub fn max_length(self) -> Option<usize> {
        match self {
            CourtOrderField::CourtName => Some(256),
            CourtOrderField::CourtRegistry => Some(64),
            CourtOrderField::FileNumber => Some(20),
            CourtOrderField::OrderDate => None,
            CourtOrderField::EffectOfOrder => Some(512),
        }
    }

    /// `None` for optional fields.
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            CourtOrderField::CourtName => Some("Enter the court name"),
            CourtOrderField::CourtRegistry => Some("Enter the court registry"),
            CourtOrderField::FileNumber => Some("Enter the court file number"),
            CourtOrderField::OrderDate => Some("Enter the date of order"),
            CourtOrderField::EffectOfOrder => None,
        }
    }

    pub fn read(self, info: &CourtOrderInfo) -> &str {
        match self {
            CourtOrderField::CourtName => &info.court_name,
            CourtOrderField::CourtRegistry => &info.court_registry,
            CourtOrderField::FileNumber => &info.file_number,
            CourtOrderField::OrderDate => &info.order_date,
            CourtOrderField::EffectOfOrder => &info.effect_of_order,
        }
    }

    pub fn write(self, info: &mut CourtOrderInfo, value: String) {
        let slot = match self {
            CourtOrderField::CourtName => &mut info.court_name,
            CourtOrderField::CourtRegistry => &mut info.court_registry,
            CourtOrderField::FileNumber => &mut info.file_number,
            CourtOrderField::OrderDate => &mut info.order_date,
            CourtOrderField::EffectOfOrder => &mut info.effect_of_order,
        };
        *slot = value;
    }
}

impl fmt::Display for CourtOrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CourtOrderField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourtOrderField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| DraftError::UnknownField(s.to_string()))
    }
}
