use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const CONGRESS_BASE_URL: &str = "https://www.congress.gov/bill";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillType {
    HouseBill,
    SenateBill,
    HouseJointResolution,
    SenateJointResolution,
    HouseConcurrentResolution,
    SenateConcurrentResolution,
    HouseResolution,
    SenateResolution,
}

impl BillType {
    pub const ALL: [BillType; 8] = [
        BillType::HouseBill,
        BillType::SenateBill,
        BillType::HouseJointResolution,
        BillType::SenateJointResolution,
        BillType::HouseConcurrentResolution,
        BillType::SenateConcurrentResolution,
        BillType::HouseResolution,
        BillType::SenateResolution,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            BillType::HouseBill => "house-bill",
            BillType::SenateBill => "senate-bill",
            BillType::HouseJointResolution => "house-joint-resolution",
            BillType::SenateJointResolution => "senate-joint-resolution",
            BillType::HouseConcurrentResolution => "house-concurrent-resolution",
            BillType::SenateConcurrentResolution => "senate-concurrent-resolution",
            BillType::HouseResolution => "house-resolution",
            BillType::SenateResolution => "senate-resolution",
        }
    }

    /// Prefix used in the canonical display id, e.g. `H.J.Res.` in `H.J.Res.7`.
    pub fn short_prefix(self) -> &'static str {
        match self {
            BillType::HouseBill => "H.R.",
            BillType::SenateBill => "S.",
            BillType::HouseJointResolution => "H.J.Res.",
            BillType::SenateJointResolution => "S.J.Res.",
            BillType::HouseConcurrentResolution => "H.Con.Res.",
            BillType::SenateConcurrentResolution => "S.Con.Res.",
            BillType::HouseResolution => "H.Res.",
            BillType::SenateResolution => "S.Res.",
        }
    }

    pub fn chamber(self) -> Chamber {
        if self.slug().starts_with("house") {
            Chamber::House
        } else {
            Chamber::Senate
        }
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for BillType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase().replace('_', "-");
        BillType::ALL
            .into_iter()
            .find(|bill_type| bill_type.slug() == wanted)
            .ok_or_else(|| format!("Unknown bill type: {value}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// Class of the per-chamber column inside a titles block.
    pub fn column_class(self) -> &'static str {
        match self {
            Chamber::House => "house-column",
            Chamber::Senate => "senate-column",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillLocator {
    pub congress: u32,
    pub bill_type: BillType,
    pub bill_id: u32,
}

impl BillLocator {
    pub fn new(congress: u32, bill_type: BillType, bill_id: u32) -> Self {
        Self {
            congress,
            bill_type,
            bill_id,
        }
    }

    pub fn display_id(&self) -> String {
        format!("{}{}", self.bill_type.short_prefix(), self.bill_id)
    }

    pub fn chamber(&self) -> Chamber {
        self.bill_type.chamber()
    }

    pub fn url(&self) -> String {
        format!(
            "{CONGRESS_BASE_URL}/{}-congress/{}/{}",
            ordinal(self.congress),
            self.bill_type.slug(),
            self.bill_id
        )
    }

    pub fn all_info_url(&self) -> String {
        format!("{}/all-info", self.url())
    }

    /// Plain-text rendering of a bill version. An empty `version` selects the
    /// current one; otherwise it is a path suffix such as `/ih`.
    pub fn text_url(&self, version: &str) -> String {
        format!("{}/text{version}?format=txt", self.url())
    }
}

impl fmt::Display for BillLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Congress {}", ordinal(self.congress), self.display_id())
    }
}

pub fn ordinal(value: u32) -> String {
    let suffix = match (value % 10, value % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{value}{suffix}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonReference {
    pub name: String,
    pub party: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverviewValue {
    Person(PersonReference),
    Count(u32),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    #[serde(flatten)]
    pub fields: BTreeMap<String, OverviewValue>,
    pub tracker: Vec<String>,
}

impl Overview {
    pub fn sponsor(&self) -> Option<&PersonReference> {
        match self.fields.get("sponsor") {
            Some(OverviewValue::Person(person)) => Some(person),
            _ => None,
        }
    }

    pub fn roll_call_votes(&self) -> Option<u32> {
        match self.fields.get("roll call votes") {
            Some(OverviewValue::Count(count)) => Some(*count),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(OverviewValue::Text(text)) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedBillReference {
    pub bill: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub header: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRecord {
    pub id: String,
    pub congress: u32,
    pub url: String,
    pub title: String,
    pub overview: Overview,
    pub titles_short: Vec<String>,
    pub titles_official: Vec<String>,
    pub cosponsors: Vec<PersonReference>,
    pub committees: Vec<String>,
    pub related_bills: Vec<RelatedBillReference>,
    pub policy_area: String,
    pub subjects: Vec<String>,
    pub current_summary: TextBlock,
    pub current_text: TextBlock,
}

/// Non-fatal observation made while extracting a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    UnknownOverviewKey { key: String, value: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownOverviewKey { key, value } => {
                write!(f, "unknown overview key '{key}' (value: {value:?})")
            }
        }
    }
}

/// Result of a successful extraction call.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Record {
        record: Box<BillRecord>,
        warnings: Vec<Warning>,
    },
    /// The bill number is reserved: the page carries no title and nothing
    /// was extracted.
    Reserved,
}

impl Extraction {
    pub fn record(&self) -> Option<&BillRecord> {
        match self {
            Extraction::Record { record, .. } => Some(record),
            Extraction::Reserved => None,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, Extraction::Reserved)
    }
}
