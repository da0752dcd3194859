//! Study List Filtering
//!
//! Search, category/method chips and sort order for the list page.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::Study;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first
    #[default]
    Latest,
    /// Closest application deadline first
    Deadline,
    /// Most participants first
    Participants,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Latest, SortOrder::Deadline, SortOrder::Participants];

    /// `<select>` option value
    pub fn value(self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::Deadline => "deadline",
            SortOrder::Participants => "participants",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Latest => "최신순",
            SortOrder::Deadline => "마감 임박순",
            SortOrder::Participants => "참가자 많은순",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|order| order.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyFilter {
    pub search: String,
    pub category: Option<u32>,
    pub method: Option<String>,
    pub sort: SortOrder,
}

impl StudyFilter {
    /// Select a category, or clear it when it is already selected
    pub fn toggle_category(&mut self, id: u32) {
        self.category = if self.category == Some(id) { None } else { Some(id) };
    }

    /// Select a method, or clear it when it is already selected
    pub fn toggle_method(&mut self, method: &str) {
        self.method = if self.method.as_deref() == Some(method) {
            None
        } else {
            Some(method.to_string())
        };
    }

    pub fn matches(&self, study: &Study) -> bool {
        if self.category.is_some_and(|id| study.category_id != id) {
            return false;
        }
        if self.method.as_deref().is_some_and(|m| study.method != m) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || [&study.title, &study.goal, &study.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply(&self, studies: &[Study]) -> Vec<Study> {
        let mut result: Vec<Study> = studies.iter().filter(|s| self.matches(s)).cloned().collect();
        match self.sort {
            SortOrder::Latest => result.sort_by(|a, b| newest_first(a.created_at, b.created_at)),
            SortOrder::Deadline => result.sort_by(|a, b| soonest_first(a.deadline, b.deadline)),
            SortOrder::Participants => {
                result.sort_by(|a, b| b.participant_count().cmp(&a.participant_count()))
            }
        }
        result
    }
}

/// Descending, missing timestamps last
fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending, missing timestamps last
fn soonest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;
    use chrono::TimeZone;

    fn make_study(id: u64, category_id: u32, method: &str, title: &str, created_day: Option<u32>) -> Study {
        Study {
            id,
            creator_id: 1,
            category_id,
            title: title.to_string(),
            goal: format!("goal {id}"),
            description: String::new(),
            max_participants: 10,
            method: method.to_string(),
            duration_start: None,
            duration_end: None,
            deadline: None,
            created_at: created_day.map(|d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()),
            updated_at: None,
            participants: Vec::new(),
        }
    }

    fn ids(studies: &[Study]) -> Vec<u64> {
        studies.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_default_sorts_latest_first() {
        let studies = vec![
            make_study(1, 1, "온라인", "Spring", Some(1)),
            make_study(2, 2, "오프라인", "OS", None),
            make_study(3, 3, "혼합", "DP", Some(9)),
        ];
        assert_eq!(ids(&StudyFilter::default().apply(&studies)), vec![3, 1, 2]);
    }

    #[test]
    fn test_category_and_method_filters() {
        let studies = vec![
            make_study(1, 1, "온라인", "a", Some(1)),
            make_study(2, 1, "오프라인", "b", Some(2)),
            make_study(3, 2, "온라인", "c", Some(3)),
        ];
        let mut filter = StudyFilter::default();
        filter.toggle_category(1);
        assert_eq!(ids(&filter.apply(&studies)), vec![2, 1]);

        filter.toggle_method("온라인");
        assert_eq!(ids(&filter.apply(&studies)), vec![1]);

        filter.toggle_category(1);
        assert_eq!(filter.category, None);
        assert_eq!(ids(&filter.apply(&studies)), vec![3, 1]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_text_fields() {
        let mut rust = make_study(1, 1, "온라인", "Rust 입문", Some(1));
        rust.description = "Ownership and BORROWING".into();
        let studies = vec![rust, make_study(2, 1, "온라인", "Kotlin", Some(2))];

        let filter = StudyFilter { search: "borrow".into(), ..Default::default() };
        assert_eq!(ids(&filter.apply(&studies)), vec![1]);

        let filter = StudyFilter { search: "GOAL 2".into(), ..Default::default() };
        assert_eq!(ids(&filter.apply(&studies)), vec![2]);
    }

    #[test]
    fn test_deadline_and_participant_sorts() {
        let mut a = make_study(1, 1, "온라인", "a", None);
        a.deadline = Some(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        let mut b = make_study(2, 1, "온라인", "b", None);
        b.deadline = Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap());
        let mut c = make_study(3, 1, "온라인", "c", None);
        c.participants = vec![
            Participant { id: 1, nickname: "x".into(), avatar: String::new() },
            Participant { id: 2, nickname: "y".into(), avatar: String::new() },
        ];
        let studies = vec![a, b, c];

        let filter = StudyFilter { sort: SortOrder::Deadline, ..Default::default() };
        assert_eq!(ids(&filter.apply(&studies)), vec![2, 1, 3]);

        let filter = StudyFilter { sort: SortOrder::Participants, ..Default::default() };
        assert_eq!(ids(&filter.apply(&studies)), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_order_values() {
        assert_eq!(SortOrder::from_value("deadline"), SortOrder::Deadline);
        assert_eq!(SortOrder::from_value("bogus"), SortOrder::Latest);
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_value(order.value()), order);
        }
    }
}
