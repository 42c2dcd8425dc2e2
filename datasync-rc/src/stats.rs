//! Email, rETL, and adoption read models
//!
//! The dashboard client renders these as cards, tables, and charts. Email
//! activity grows as rows dispatch notifications; rETL job counters move
//! when an execution is started; the adoption catalog is a fixed snapshot
//! seeded at startup.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use datasync_common::SourceSystem;

/// Sender address stamped on outgoing notifications
pub const SYSTEM_SENDER: &str = "system@datasync.com";

/// Delivery state of one email record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Sent,
    Failed,
    Draft,
}

/// One entry in the email activity log
#[derive(Debug, Clone, Serialize)]
pub struct EmailActivity {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub from: String,
    pub recipient: String,
    pub subject: String,
    pub status: EmailStatus,
}

/// Aggregate email counters for the dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailStats {
    pub sent: usize,
    pub failed: usize,
    pub draft: usize,
}

/// Append-only log of email dispatches
pub struct EmailLog {
    records: Vec<EmailActivity>,
}

impl EmailLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Log seeded with the sample activity entries
    pub fn with_sample_data() -> Self {
        let mut log = Self::new();
        log.push(
            Utc.with_ymd_and_hms(2025, 10, 3, 14, 32, 0).unwrap(),
            "admin@company.com",
            "Validation Failed - SFDC Data Mismatch",
            EmailStatus::Sent,
        );
        log.push(
            Utc.with_ymd_and_hms(2025, 10, 3, 13, 15, 0).unwrap(),
            "data@company.com",
            "Weekly Summary Report",
            EmailStatus::Failed,
        );
        log
    }

    fn push(
        &mut self,
        timestamp: DateTime<Utc>,
        recipient: &str,
        subject: &str,
        status: EmailStatus,
    ) -> EmailActivity {
        let record = EmailActivity {
            id: Uuid::new_v4(),
            timestamp,
            from: SYSTEM_SENDER.to_string(),
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            status,
        };
        self.records.push(record.clone());
        record
    }

    /// Record a dispatched notification and return the new entry
    pub fn record_sent(&mut self, recipient: &str, subject: &str) -> EmailActivity {
        self.push(Utc::now(), recipient, subject, EmailStatus::Sent)
    }

    /// All records, newest first
    pub fn activity(&self, status: Option<EmailStatus>) -> Vec<EmailActivity> {
        let mut records: Vec<EmailActivity> = self
            .records
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    }

    /// Counters derived by scanning the log
    pub fn stats(&self) -> EmailStats {
        let count =
            |status: EmailStatus| self.records.iter().filter(|r| r.status == status).count();
        EmailStats {
            sent: count(EmailStatus::Sent),
            failed: count(EmailStatus::Failed),
            draft: count(EmailStatus::Draft),
        }
    }
}

/// One failed rETL job with its suggested resolution
#[derive(Debug, Clone, Serialize)]
pub struct RetlError {
    pub id: Uuid,
    pub source: SourceSystem,
    pub timestamp: DateTime<Utc>,
    pub error: String,
    pub resolution: String,
}

/// Aggregate rETL job counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetlStats {
    /// Number of recognized source systems
    pub sources: usize,
    pub completed: usize,
    pub failed: usize,
    pub pending: usize,
}

/// rETL job bookkeeping: counters plus the failed-job table
pub struct RetlLog {
    completed: usize,
    failed: usize,
    pending: usize,
    errors: Vec<RetlError>,
}

impl RetlLog {
    pub fn new() -> Self {
        Self {
            completed: 0,
            failed: 0,
            pending: 0,
            errors: Vec::new(),
        }
    }

    /// Counters and failed jobs seeded from the sample snapshot
    pub fn with_sample_data() -> Self {
        let mut log = Self::new();
        log.completed = 245;
        log.failed = 12;
        log.pending = 8;
        log.errors.push(RetlError {
            id: Uuid::new_v4(),
            source: SourceSystem::Sfdc,
            timestamp: Utc.with_ymd_and_hms(2025, 10, 3, 12, 45, 0).unwrap(),
            error: "Connection timeout".to_string(),
            resolution: "Retry connection with increased timeout".to_string(),
        });
        log.errors.push(RetlError {
            id: Uuid::new_v4(),
            source: SourceSystem::NetSuite,
            timestamp: Utc.with_ymd_and_hms(2025, 10, 3, 11, 30, 0).unwrap(),
            error: "Incomplete data file".to_string(),
            resolution: "Contact data provider for complete file".to_string(),
        });
        log
    }

    /// Count a newly started execution as pending
    pub fn record_started(&mut self) {
        self.pending += 1;
    }

    pub fn stats(&self) -> RetlStats {
        RetlStats {
            sources: SourceSystem::ALL.len(),
            completed: self.completed,
            failed: self.failed,
            pending: self.pending,
        }
    }

    /// Failed jobs, newest first
    pub fn errors(&self) -> Vec<RetlError> {
        let mut errors = self.errors.clone();
        errors.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        errors
    }
}

/// User engagement bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engagement {
    High,
    Medium,
    Low,
}

/// Per-user adoption record
#[derive(Debug, Clone, Serialize)]
pub struct UserActivity {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub visits: u32,
    pub updates: u32,
    pub last_active: DateTime<Utc>,
    pub engagement: Engagement,
}

/// One week of visit/update totals
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyActivity {
    pub week: String,
    pub visits: u32,
    pub updates: u32,
}

/// Engagement distribution slice (percent of users)
#[derive(Debug, Clone, Serialize)]
pub struct EngagementSlice {
    pub name: String,
    pub value: u32,
}

/// Count of one activity type across the period
#[derive(Debug, Clone, Serialize)]
pub struct ActivityTypeCount {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub count: u32,
}

/// Adoption overview card values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdoptionOverview {
    pub total_users: usize,
    pub total_visits: u32,
    pub total_updates: u32,
    /// Share of high-engagement users, percent, one decimal place
    pub high_engagement_rate: f64,
}

/// Fixed adoption snapshot seeded at startup
pub struct AdoptionReport {
    users: Vec<UserActivity>,
    weekly: Vec<WeeklyActivity>,
    engagement: Vec<EngagementSlice>,
    activity_types: Vec<ActivityTypeCount>,
}

impl AdoptionReport {
    pub fn with_sample_data() -> Self {
        let user = |id, name: &str, email: &str, visits, updates, (d, h, m), engagement| {
            UserActivity {
                id,
                name: name.to_string(),
                email: email.to_string(),
                visits,
                updates,
                last_active: Utc.with_ymd_and_hms(2025, 10, d, h, m, 0).unwrap(),
                engagement,
            }
        };
        Self {
            users: vec![
                user(1, "John Doe", "john@company.com", 24, 15, (3, 15, 30), Engagement::High),
                user(2, "Jane Smith", "jane@company.com", 18, 8, (3, 14, 20), Engagement::Medium),
                user(3, "Bob Johnson", "bob@company.com", 32, 22, (3, 16, 45), Engagement::High),
                user(4, "Alice Williams", "alice@company.com", 5, 2, (1, 10, 15), Engagement::Low),
            ],
            weekly: vec![
                WeeklyActivity { week: "Week 1".to_string(), visits: 120, updates: 45 },
                WeeklyActivity { week: "Week 2".to_string(), visits: 180, updates: 68 },
                WeeklyActivity { week: "Week 3".to_string(), visits: 245, updates: 92 },
                WeeklyActivity { week: "Week 4".to_string(), visits: 310, updates: 125 },
            ],
            engagement: vec![
                EngagementSlice { name: "High".to_string(), value: 35 },
                EngagementSlice { name: "Medium".to_string(), value: 45 },
                EngagementSlice { name: "Low".to_string(), value: 20 },
            ],
            activity_types: vec![
                ActivityTypeCount { activity_type: "Comments".to_string(), count: 145 },
                ActivityTypeCount { activity_type: "Email Updates".to_string(), count: 89 },
                ActivityTypeCount { activity_type: "Approvals".to_string(), count: 67 },
                ActivityTypeCount { activity_type: "Rejections".to_string(), count: 23 },
            ],
        }
    }

    pub fn users(&self) -> &[UserActivity] {
        &self.users
    }

    pub fn weekly(&self) -> &[WeeklyActivity] {
        &self.weekly
    }

    pub fn engagement(&self) -> &[EngagementSlice] {
        &self.engagement
    }

    pub fn activity_types(&self) -> &[ActivityTypeCount] {
        &self.activity_types
    }

    /// Card values derived from the user table
    pub fn overview(&self) -> AdoptionOverview {
        let total_users = self.users.len();
        let high = self
            .users
            .iter()
            .filter(|u| u.engagement == Engagement::High)
            .count();
        let rate = if total_users == 0 {
            0.0
        } else {
            (high as f64 / total_users as f64 * 1000.0).round() / 10.0
        };
        AdoptionOverview {
            total_users,
            total_visits: self.users.iter().map(|u| u.visits).sum(),
            total_updates: self.users.iter().map(|u| u.updates).sum(),
            high_engagement_rate: rate,
        }
    }

    /// Users ranked by update count, highest first, at most five
    pub fn top_contributors(&self) -> Vec<UserActivity> {
        let mut ranked = self.users.clone();
        ranked.sort_by(|a, b| b.updates.cmp(&a.updates));
        ranked.truncate(5);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_stats_counted_from_log() {
        let log = EmailLog::with_sample_data();
        assert_eq!(
            log.stats(),
            EmailStats {
                sent: 1,
                failed: 1,
                draft: 0,
            }
        );
    }

    #[test]
    fn recording_a_dispatch_updates_stats_and_activity() {
        let mut log = EmailLog::with_sample_data();
        log.record_sent("ops@company.com", "Validation fail - Active Customers");
        assert_eq!(log.stats().sent, 2);

        let sent = log.activity(Some(EmailStatus::Sent));
        assert_eq!(sent.len(), 2);
        // Newest first
        assert_eq!(sent[0].recipient, "ops@company.com");
        assert_eq!(sent[0].from, SYSTEM_SENDER);
    }

    #[test]
    fn activity_filter_by_status() {
        let log = EmailLog::with_sample_data();
        assert_eq!(log.activity(Some(EmailStatus::Failed)).len(), 1);
        assert_eq!(log.activity(Some(EmailStatus::Draft)).len(), 0);
        assert_eq!(log.activity(None).len(), 2);
    }

    #[test]
    fn retl_execution_moves_pending_counter() {
        let mut log = RetlLog::with_sample_data();
        assert_eq!(log.stats().pending, 8);
        log.record_started();
        assert_eq!(log.stats().pending, 9);
        assert_eq!(log.stats().sources, 3);
    }

    #[test]
    fn retl_errors_newest_first() {
        let errors = RetlLog::with_sample_data().errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].source, SourceSystem::Sfdc);
        assert_eq!(errors[1].source, SourceSystem::NetSuite);
    }

    #[test]
    fn adoption_overview_derived_from_users() {
        let report = AdoptionReport::with_sample_data();
        assert_eq!(
            report.overview(),
            AdoptionOverview {
                total_users: 4,
                total_visits: 79,
                total_updates: 47,
                high_engagement_rate: 50.0,
            }
        );
    }

    #[test]
    fn top_contributors_ranked_by_updates() {
        let report = AdoptionReport::with_sample_data();
        let ranked = report.top_contributors();
        let names: Vec<&str> = ranked.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Bob Johnson", "John Doe", "Jane Smith", "Alice Williams"]);
    }
}
