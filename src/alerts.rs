//! Alert administration: CRUD, filtering, sorting and paging over a list of
//! alerts held by the caller. This is independent from [`crate::manager`];
//! alerts share no data with books or teachers and raise no bus events.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::ids::prefixed_id;
use crate::listing::SortOrder;
use crate::models::*;

pub const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_AUTHOR: &str = "current-user";

const CREATED_MESSAGE: &str = "Alert created successfully.";
const UPDATED_MESSAGE: &str = "Alert updated successfully.";
const DELETED_MESSAGE: &str = "Alert deleted successfully.";
const SAVE_FAILED_MESSAGE: &str = "Something went wrong while saving the alert.";
const DELETE_FAILED_MESSAGE: &str = "Something went wrong while deleting the alert.";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlertError {
    #[error("alert not found: {0}")]
    NotFound(String),
    #[error("invalid alert: {0}")]
    Invalid(String),
    #[error("no deletion is awaiting confirmation")]
    NothingToConfirm,
}

/// Transient outcome message shown after a save or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

/// Empty search term and `None` filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub search_term: String,
    pub status: Option<AlertStatus>,
    pub alert_type: Option<AlertType>,
    pub priority: Option<AlertPriority>,
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        let needle = self.search_term.to_lowercase();
        let text_hit = alert.title.to_lowercase().contains(&needle)
            || alert.message.to_lowercase().contains(&needle);
        text_hit
            && self.status.map_or(true, |s| alert.status == s)
            && self.alert_type.map_or(true, |t| alert.alert_type == t)
            && self.priority.map_or(true, |p| alert.priority == p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertField {
    Title,
    Message,
    Type,
    Priority,
    TargetAudience,
    Category,
    Status,
    ScheduledDate,
    ExpiryDate,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    IsSticky,
    ShowOnLogin,
    ShowOnDashboard,
}

// Each field yields the same variant for every alert, so comparisons never
// cross variants. Enum fields compare by their text, like the wire format.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortValue<'a> {
    Text(&'a str),
    Date(Option<NaiveDate>),
    Time(DateTime<Utc>),
    Flag(bool),
}

impl AlertField {
    fn value<'a>(&self, alert: &'a Alert) -> SortValue<'a> {
        match self {
            AlertField::Title => SortValue::Text(&alert.title),
            AlertField::Message => SortValue::Text(&alert.message),
            AlertField::Type => SortValue::Text(alert.alert_type.as_str()),
            AlertField::Priority => SortValue::Text(alert.priority.as_str()),
            AlertField::TargetAudience => SortValue::Text(alert.target_audience.as_str()),
            AlertField::Category => SortValue::Text(alert.category.as_str()),
            AlertField::Status => SortValue::Text(alert.status.as_str()),
            AlertField::ScheduledDate => SortValue::Date(alert.scheduled_date),
            AlertField::ExpiryDate => SortValue::Date(alert.expiry_date),
            AlertField::CreatedAt => SortValue::Time(alert.created_at),
            AlertField::UpdatedAt => SortValue::Time(alert.updated_at),
            AlertField::CreatedBy => SortValue::Text(&alert.created_by),
            AlertField::IsSticky => SortValue::Flag(alert.is_sticky),
            AlertField::ShowOnLogin => SortValue::Flag(alert.show_on_login),
            AlertField::ShowOnDashboard => SortValue::Flag(alert.show_on_dashboard),
        }
    }

    fn compare(&self, a: &Alert, b: &Alert) -> Ordering {
        self.value(a).cmp(&self.value(b))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub urgent: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub success: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStats {
    pub total: usize,
    pub active: usize,
    pub scheduled: usize,
    pub expired: usize,
    pub draft: usize,
    pub by_priority: PriorityCounts,
    pub by_type: TypeCounts,
}

pub struct AlertManager {
    alerts: Vec<Alert>,
    visible: Vec<Alert>,
    filter: AlertFilter,
    sort_by: AlertField,
    order: SortOrder,
    page: usize,
    page_size: usize,
    pending_delete: Option<String>,
    banner: Option<Banner>,
    author: String,
}

impl AlertManager {
    /// Newest first, ten per page.
    pub fn new(alerts: Vec<Alert>) -> Self {
        let mut manager = Self {
            alerts,
            visible: Vec::new(),
            filter: AlertFilter::default(),
            sort_by: AlertField::CreatedAt,
            order: SortOrder::Desc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            pending_delete: None,
            banner: None,
            author: DEFAULT_AUTHOR.to_string(),
        };
        manager.refresh();
        manager
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.refresh();
        self
    }

    /// Name stamped into `created_by` of new alerts.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    // Recompute the filtered, sorted view. Any change to it sends the reader
    // back to the first page.
    fn refresh(&mut self) {
        let mut visible: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|a| self.filter.matches(a))
            .cloned()
            .collect();
        let (field, order) = (self.sort_by, self.order);
        visible.sort_by(|a, b| order.apply(field.compare(a, b)));
        self.visible = visible;
        self.page = 1;
    }

    // ---------------- view state ----------------

    pub fn filter(&self) -> &AlertFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: AlertFilter) {
        self.filter = filter;
        self.refresh();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.refresh();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(AlertFilter::default());
    }

    pub fn sort(&self) -> (AlertField, SortOrder) {
        (self.sort_by, self.order)
    }

    pub fn sort_by(&mut self, field: AlertField, order: SortOrder) {
        self.sort_by = field;
        self.order = order;
        self.refresh();
    }

    /// Column-header behaviour: the active column flips direction, a new
    /// column starts ascending.
    pub fn toggle_sort(&mut self, field: AlertField) {
        let order = if self.sort_by == field {
            self.order.flipped()
        } else {
            SortOrder::Asc
        };
        self.sort_by(field, order);
    }

    /// Every alert passing the filter, in sort order.
    pub fn visible(&self) -> &[Alert] {
        &self.visible
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.visible.len().div_ceil(self.page_size)
    }

    /// Clamped into `1..=total_pages` (page 1 when nothing is visible).
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn page_items(&self) -> &[Alert] {
        let start = ((self.page - 1) * self.page_size).min(self.visible.len());
        let end = (start + self.page_size).min(self.visible.len());
        &self.visible[start..end]
    }

    // ---------------- mutations ----------------

    /// Create an alert, or edit the one named by `editing`. Failures leave the
    /// list untouched and raise an error banner.
    pub fn save(&mut self, editing: Option<&str>, form: AlertForm) -> Result<Alert, AlertError> {
        let result = match editing {
            Some(id) => self.update(id, form),
            None => self.create(form),
        };
        match &result {
            Ok(alert) => {
                let message = if editing.is_some() { UPDATED_MESSAGE } else { CREATED_MESSAGE };
                info!(id = %alert.id, "alert saved");
                self.banner = Some(Banner::Success(message.to_string()));
                self.refresh();
            }
            Err(e) => {
                warn!(error = %e, "alert save failed");
                self.banner = Some(Banner::Error(SAVE_FAILED_MESSAGE.to_string()));
            }
        }
        result
    }

    fn create(&mut self, form: AlertForm) -> Result<Alert, AlertError> {
        check_form(&form)?;
        let now = Utc::now();
        let alert = Alert {
            id: prefixed_id("alert"),
            title: form.title.trim().to_string(),
            message: form.message.trim().to_string(),
            alert_type: form.alert_type,
            priority: form.priority,
            target_audience: form.target_audience,
            category: form.category,
            status: AlertStatus::Draft,
            scheduled_date: form.scheduled_date,
            expiry_date: form.expiry_date,
            created_at: now,
            updated_at: now,
            created_by: self.author.clone(),
            is_sticky: form.is_sticky,
            show_on_login: form.show_on_login,
            show_on_dashboard: form.show_on_dashboard,
            attachments: to_attachments(&form.attachments),
        };
        self.alerts.push(alert.clone());
        Ok(alert)
    }

    fn update(&mut self, id: &str, form: AlertForm) -> Result<Alert, AlertError> {
        check_form(&form)?;
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AlertError::NotFound(id.to_string()))?;

        alert.title = form.title.trim().to_string();
        alert.message = form.message.trim().to_string();
        alert.alert_type = form.alert_type;
        alert.priority = form.priority;
        alert.target_audience = form.target_audience;
        alert.category = form.category;
        alert.scheduled_date = form.scheduled_date;
        alert.expiry_date = form.expiry_date;
        alert.is_sticky = form.is_sticky;
        alert.show_on_login = form.show_on_login;
        alert.show_on_dashboard = form.show_on_dashboard;
        if let Some(attachments) = to_attachments(&form.attachments) {
            alert.attachments = Some(attachments);
        }
        alert.updated_at = Utc::now().max(alert.updated_at);
        Ok(alert.clone())
    }

    /// First step of deletion; nothing is removed until [`confirm_delete`].
    ///
    /// [`confirm_delete`]: AlertManager::confirm_delete
    pub fn request_delete(&mut self, id: &str) -> Result<(), AlertError> {
        if self.get(id).is_none() {
            return Err(AlertError::NotFound(id.to_string()));
        }
        self.pending_delete = Some(id.to_string());
        Ok(())
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Result<Alert, AlertError> {
        let id = self.pending_delete.take().ok_or(AlertError::NothingToConfirm)?;
        let Some(index) = self.alerts.iter().position(|a| a.id == id) else {
            warn!(%id, "alert vanished before deletion was confirmed");
            self.banner = Some(Banner::Error(DELETE_FAILED_MESSAGE.to_string()));
            return Err(AlertError::NotFound(id));
        };
        let removed = self.alerts.remove(index);
        info!(%id, "alert deleted");
        self.banner = Some(Banner::Success(DELETED_MESSAGE.to_string()));
        self.refresh();
        Ok(removed)
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Hand the banner to the caller and clear it.
    pub fn take_banner(&mut self) -> Option<Banner> {
        self.banner.take()
    }

    pub fn stats(&self) -> AlertStats {
        let mut stats = AlertStats { total: self.alerts.len(), ..AlertStats::default() };
        for alert in &self.alerts {
            match alert.status {
                AlertStatus::Active => stats.active += 1,
                AlertStatus::Scheduled => stats.scheduled += 1,
                AlertStatus::Expired => stats.expired += 1,
                AlertStatus::Draft => stats.draft += 1,
                AlertStatus::Archived => {}
            }
            match alert.priority {
                AlertPriority::Urgent => stats.by_priority.urgent += 1,
                AlertPriority::High => stats.by_priority.high += 1,
                AlertPriority::Medium => stats.by_priority.medium += 1,
                AlertPriority::Low => stats.by_priority.low += 1,
            }
            match alert.alert_type {
                AlertType::Info => stats.by_type.info += 1,
                AlertType::Warning => stats.by_type.warning += 1,
                AlertType::Error => stats.by_type.error += 1,
                AlertType::Success => stats.by_type.success += 1,
            }
        }
        stats
    }
}

fn check_form(form: &AlertForm) -> Result<(), AlertError> {
    if form.title.trim().is_empty() {
        return Err(AlertError::Invalid("title is required".into()));
    }
    if form.message.trim().is_empty() {
        return Err(AlertError::Invalid("message is required".into()));
    }
    Ok(())
}

fn to_attachments(files: &[FileUpload]) -> Option<Vec<AlertAttachment>> {
    if files.is_empty() {
        return None;
    }
    Some(
        files
            .iter()
            .map(|f| AlertAttachment {
                id: prefixed_id("attachment"),
                name: f.name.clone(),
                url: f.url.clone(),
                content_type: f.content_type.clone(),
                size: f.size,
            })
            .collect(),
    )
}
