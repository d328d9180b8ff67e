//! Field type enumeration for dynamic client-type fields

use serde::{Deserialize, Serialize};

/// Type of a dynamic field. Decides which widget is built for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
    List,
    Phone,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::Date => "DATE",
            Self::Boolean => "BOOLEAN",
            Self::List => "LIST",
            Self::Phone => "PHONE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Text => "Текст",
            Self::Number => "Число",
            Self::Date => "Дата",
            Self::Boolean => "Да/Нет",
            Self::List => "Список",
            Self::Phone => "Телефон",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == s)
    }

    pub fn all() -> [FieldType; 6] {
        [
            Self::Text,
            Self::Number,
            Self::Date,
            Self::Boolean,
            Self::List,
            Self::Phone,
        ]
    }

    /// Only LIST and PHONE may hold several values per client.
    pub fn supports_multiple(&self) -> bool {
        matches!(self, Self::List | Self::Phone)
    }
}
