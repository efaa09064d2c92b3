use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Stored in place of an optional text field that was left blank.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub book_id: String, // display code, BOOK-NNN
    pub title: String,
    pub url: String,
    pub image: String,
    pub subject_name: String,
    pub teacher_name: String, // denormalized copy of Teacher::name
    pub grade: String,
    pub book_type: String,
    pub time_clicked: i64, // epoch millis of the latest create or edit
    pub click_count: u64,
    pub favorites_count: u64,
    pub date_added: NaiveDate,
}

/// Caller-editable part of a [`Book`]. Identity and counter fields are not
/// representable here, so an update can never overwrite them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: String,
    pub subject_name: String,
    pub teacher_name: String,
    pub grade: String,
    pub book_type: String,
}

impl BookInput {
    /// Trim every field and replace blank optional ones with [`UNKNOWN`].
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            url: or_unknown(self.url),
            image: or_unknown(self.image),
            subject_name: or_unknown(self.subject_name),
            teacher_name: or_unknown(self.teacher_name),
            grade: or_unknown(self.grade),
            book_type: or_unknown(self.book_type),
        }
    }
}

fn or_unknown(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub subject: String, // resolved from subject_id on every write
    pub subject_id: String,
    pub date_added: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherInput {
    pub name: String,
    pub subject_id: String,
}

/// Id/name pair used to fill teacher pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechStatus {
    #[default]
    Scheduled,
    Published,
}

impl SpeechStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechStatus::Scheduled => "scheduled",
            SpeechStatus::Published => "published",
        }
    }
}

/// A daily announcement scheduled for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speech {
    pub id: String,
    pub title: String,
    pub content: String,
    pub scheduled_date: NaiveDate,
    pub status: SpeechStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechInput {
    pub title: String,
    pub content: String,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub status: SpeechStatus,
}

// Alert enums serialize as their lowercase name; `as_str` yields the same
// text so sorting compares what the wire format shows.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name { $($variant),+ }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self { $($name::$variant => $text),+ }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum!(AlertType { Info => "info", Warning => "warning", Error => "error", Success => "success" });
text_enum!(AlertPriority { Low => "low", Medium => "medium", High => "high", Urgent => "urgent" });
text_enum!(TargetAudience {
    All => "all",
    Students => "students",
    Teachers => "teachers",
    Parents => "parents",
    Staff => "staff",
});
text_enum!(AlertCategory {
    General => "general",
    Academic => "academic",
    Administrative => "administrative",
    Emergency => "emergency",
    Maintenance => "maintenance",
});
text_enum!(AlertStatus {
    Draft => "draft",
    Scheduled => "scheduled",
    Active => "active",
    Expired => "expired",
    Archived => "archived",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertAttachment {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub priority: AlertPriority,
    pub target_audience: TargetAudience,
    pub category: AlertCategory,
    pub status: AlertStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub is_sticky: bool,
    pub show_on_login: bool,
    pub show_on_dashboard: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AlertAttachment>>,
}

/// A file picked in the alert form, before it becomes an [`AlertAttachment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub name: String,
    pub url: String,
    pub content_type: String,
    pub size: u64,
}

/// Editable alert fields as submitted from the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertForm {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub priority: AlertPriority,
    pub target_audience: TargetAudience,
    pub category: AlertCategory,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    pub is_sticky: bool,
    pub show_on_login: bool,
    pub show_on_dashboard: bool,
    #[serde(default)]
    pub attachments: Vec<FileUpload>,
}

impl Default for AlertForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            alert_type: AlertType::Info,
            priority: AlertPriority::Medium,
            target_audience: TargetAudience::All,
            category: AlertCategory::General,
            scheduled_date: None,
            expiry_date: None,
            is_sticky: false,
            show_on_login: false,
            show_on_dashboard: true,
            attachments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_fills_blank_fields_with_unknown() {
        let input = BookInput {
            title: "  Algebra I ".into(),
            url: "   ".into(),
            teacher_name: "Mr. Smith".into(),
            ..BookInput::default()
        }
        .normalized();
        assert_eq!(input.title, "Algebra I");
        assert_eq!(input.url, UNKNOWN);
        assert_eq!(input.image, UNKNOWN);
        assert_eq!(input.grade, UNKNOWN);
        assert_eq!(input.teacher_name, "Mr. Smith");
    }

    #[test]
    fn alert_type_serializes_under_type_key() {
        let att = AlertAttachment {
            id: "a".into(),
            name: "n".into(),
            url: "u".into(),
            content_type: "application/pdf".into(),
            size: 3,
        };
        let v = serde_json::to_value(att).unwrap();
        assert_eq!(v["type"], "application/pdf");
        assert_eq!(AlertPriority::Urgent.to_string(), "urgent");
    }
}
