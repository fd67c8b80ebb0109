//! Game record model and the edit form that produces it.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Date format used by the backend and by the form's date input.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Lookup key of a record. The backend may hand out numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppId {
    Number(u64),
    /// Negative or fractional ids, kept exactly as the backend sent them
    OtherNumber(serde_json::Number),
    Text(String),
}

impl AppId {
    /// Interpret user input: all-digit text becomes a number, unless a
    /// leading zero would be lost.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let canonical_digits = trimmed.chars().all(|c| c.is_ascii_digit())
            && !(trimmed.len() > 1 && trimmed.starts_with('0'));

        Some(match trimmed.parse::<u64>() {
            Ok(n) if canonical_digits => AppId::Number(n),
            _ => AppId::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppId::Number(n) => write!(f, "{}", n),
            AppId::OtherNumber(n) => write!(f, "{}", n),
            AppId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub app_id: AppId,
    pub name: String,
    pub release_date: String,
    #[serde(deserialize_with = "number_or_text")]
    pub price: f64,
    #[serde(deserialize_with = "joined_list")]
    pub developers: String,
    #[serde(deserialize_with = "joined_list")]
    pub publishers: String,
}

/// Body of a partial update. Absent fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GamePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishers: Option<String>,
}

impl GamePatch {
    pub fn is_empty(&self) -> bool {
        self == &GamePatch::default()
    }

    /// Apply the form's checks to the fields that are present.
    pub fn validate(&self) -> std::result::Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let texts = [
            (FormField::Name, &self.name),
            (FormField::ReleaseDate, &self.release_date),
            (FormField::Developers, &self.developers),
            (FormField::Publishers, &self.publishers),
        ];
        for (field, value) in texts {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.push(FieldError::required(field));
            }
        }

        if let Some(date) = self.release_date.as_deref() {
            if !date.trim().is_empty() && !is_release_date(date) {
                errors.push(FieldError::invalid(FormField::ReleaseDate, DATE_HINT));
            }
        }

        if self.price.is_some_and(|p| !p.is_finite()) {
            errors.push(FieldError::invalid(FormField::Price, PRICE_HINT));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

const DATE_HINT: &str = "must be a date (YYYY-MM-DD)";
const PRICE_HINT: &str = "must be a number";

fn is_release_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text.trim(), RELEASE_DATE_FORMAT).is_ok()
}

// Form inputs reach the backend as strings, so prices may come back quoted.
fn number_or_text<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {:?}", text))),
    }
}

// Accepts either free text or a JSON array of names.
fn joined_list<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrList {
        Text(String),
        List(Vec<String>),
    }

    Ok(match TextOrList::deserialize(deserializer)? {
        TextOrList::Text(text) => text,
        TextOrList::List(items) => items.join(", "),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    AppId,
    Name,
    ReleaseDate,
    Price,
    Developers,
    Publishers,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::AppId,
        FormField::Name,
        FormField::ReleaseDate,
        FormField::Price,
        FormField::Developers,
        FormField::Publishers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::AppId => "App ID",
            FormField::Name => "Name",
            FormField::ReleaseDate => "Release Date",
            FormField::Price => "Price",
            FormField::Developers => "Developers",
            FormField::Publishers => "Publishers",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn required(field: FormField) -> Self {
        Self {
            field,
            message: format!("{} is required", field.label()),
        }
    }

    fn invalid(field: FormField, detail: &str) -> Self {
        Self {
            field,
            message: format!("{} {}", field.label(), detail),
        }
    }
}

/// Raw text of the six form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameForm {
    pub app_id: String,
    pub name: String,
    pub release_date: String,
    pub price: String,
    pub developers: String,
    pub publishers: String,
}

impl GameForm {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_record(record: &GameRecord) -> Self {
        Self {
            app_id: record.app_id.to_string(),
            name: record.name.clone(),
            release_date: record.release_date.clone(),
            price: record.price.to_string(),
            developers: record.developers.clone(),
            publishers: record.publishers.clone(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::AppId => &self.app_id,
            FormField::Name => &self.name,
            FormField::ReleaseDate => &self.release_date,
            FormField::Price => &self.price,
            FormField::Developers => &self.developers,
            FormField::Publishers => &self.publishers,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::AppId => &mut self.app_id,
            FormField::Name => &mut self.name,
            FormField::ReleaseDate => &mut self.release_date,
            FormField::Price => &mut self.price,
            FormField::Developers => &mut self.developers,
            FormField::Publishers => &mut self.publishers,
        }
    }

    /// Check required fields and the date/number inputs, producing the record
    /// to send or one error per offending field.
    pub fn validate(&self) -> std::result::Result<GameRecord, Vec<FieldError>> {
        let mut errors: Vec<FieldError> = FormField::ALL
            .iter()
            .filter(|field| self.value(**field).trim().is_empty())
            .map(|field| FieldError::required(*field))
            .collect();

        fn has_error(errors: &[FieldError], field: FormField) -> bool {
            errors.iter().any(|e| e.field == field)
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => Some(price),
            _ => {
                if !has_error(&errors, FormField::Price) {
                    errors.push(FieldError::invalid(FormField::Price, PRICE_HINT));
                }
                None
            }
        };

        if !has_error(&errors, FormField::ReleaseDate) && !is_release_date(&self.release_date) {
            errors.push(FieldError::invalid(FormField::ReleaseDate, DATE_HINT));
        }

        match (AppId::parse(&self.app_id), price) {
            (Some(app_id), Some(price)) if errors.is_empty() => Ok(GameRecord {
                app_id,
                name: self.name.trim().to_string(),
                release_date: self.release_date.trim().to_string(),
                price,
                developers: self.developers.trim().to_string(),
                publishers: self.publishers.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}
