//! Field declarations for admin pages.
//!
//! A CRUD controller describes each entity attribute once, as a
//! [`FieldDescriptor`], and narrows the pages it appears on with the
//! chainable visibility methods (`only_on_index`, `hide_on_form`).
//! The page engine asks [`FieldDescriptor::is_displayed_on`] for each page it
//! materializes and keeps the declaration order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Longest text shown in an index cell before it is cut with an ellipsis.
pub const INDEX_TEXT_MAX_CHARS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageName {
    Index,
    Detail,
    New,
    Edit,
}

impl PageName {
    pub const ALL: [PageName; 4] = [Self::Index, Self::Detail, Self::New, Self::Edit];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Detail => "detail",
            Self::New => "new",
            Self::Edit => "edit",
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, Self::New | Self::Edit)
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Index => 0b0001,
            Self::Detail => 0b0010,
            Self::New => 0b0100,
            Self::Edit => 0b1000,
        }
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widget used to display and edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    DateTime,
}

/// Set of pages a field is displayed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility(u8);

impl Visibility {
    pub const ALL: Visibility = Visibility(0b1111);

    pub fn only(pages: &[PageName]) -> Self {
        Self(pages.iter().fold(0, |acc, page| acc | page.bit()))
    }

    pub fn contains(self, page: PageName) -> bool {
        self.0 & page.bit() != 0
    }

    pub fn without(self, page: PageName) -> Self {
        Self(self.0 & !page.bit())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    property: &'static str,
    label: &'static str,
    kind: FieldKind,
    visibility: Visibility,
}

impl FieldDescriptor {
    fn new(property: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            property,
            label,
            kind,
            visibility: Visibility::ALL,
        }
    }

    pub fn text(property: &'static str, label: &'static str) -> Self {
        Self::new(property, label, FieldKind::Text)
    }

    pub fn textarea(property: &'static str, label: &'static str) -> Self {
        Self::new(property, label, FieldKind::Textarea)
    }

    pub fn date_time(property: &'static str, label: &'static str) -> Self {
        Self::new(property, label, FieldKind::DateTime)
    }

    pub fn only_on_index(self) -> Self {
        self.with_visibility(Visibility::only(&[PageName::Index]))
    }

    pub fn hide_on_form(self) -> Self {
        let visibility = self
            .visibility
            .without(PageName::New)
            .without(PageName::Edit);
        self.with_visibility(visibility)
    }

    fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn property(&self) -> &'static str {
        self.property
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_displayed_on(&self, page: PageName) -> bool {
        self.visibility.contains(page)
    }

    /// Render `value` the way this field shows it on `page`.
    pub fn format_value(&self, value: &FieldValue, page: PageName, datetime_format: &str) -> String {
        match value {
            FieldValue::Text(text) => match self.kind {
                FieldKind::Text | FieldKind::Textarea if page == PageName::Index => {
                    truncate(text, INDEX_TEXT_MAX_CHARS)
                }
                _ => text.clone(),
            },
            FieldValue::DateTime(at) => at.format(datetime_format).to_string(),
        }
    }
}

/// Raw attribute value read from an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    DateTime(DateTime<Utc>),
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}
