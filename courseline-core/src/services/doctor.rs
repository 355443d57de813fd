//! Doctor service - health checks on the stored document
//!
//! Reads the document as stored, without seeding or repairing anything.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::result::Result;
use crate::domain::StoreData;
use crate::store::{decode, LoadPolicy, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<serde_json::Value>>,
}

impl CheckResult {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            message: message.into(),
            details: None,
        }
    }

    fn from_findings(
        failing: CheckStatus,
        findings: Vec<serde_json::Value>,
        ok_message: &str,
        problem: impl FnOnce(usize) -> String,
    ) -> Self {
        if findings.is_empty() {
            return Self::pass(ok_message);
        }
        Self {
            status: failing,
            message: problem(findings.len()),
            details: Some(findings),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct DoctorSummary {
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

#[derive(Debug, Serialize)]
pub struct DoctorResult {
    pub checks: BTreeMap<String, CheckResult>,
    pub summary: DoctorSummary,
}

pub struct DoctorService {
    store: Arc<Store>,
}

impl DoctorService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Run all health checks
    pub fn run_checks(&self) -> Result<DoctorResult> {
        let mut checks = BTreeMap::new();

        let data = match self.store.raw()? {
            None => {
                checks.insert(
                    "stored_document".to_string(),
                    CheckResult::pass("No data stored yet; seed data will be written on first use"),
                );
                None
            }
            Some(bytes) => {
                let decoded = decode(&bytes);
                let result = if decoded.is_ok() {
                    CheckResult::pass("Stored data is well-formed")
                } else {
                    let consequence = match self.store.policy() {
                        LoadPolicy::Reseed => "it will be replaced with seed data on next load",
                        LoadPolicy::Strict => "loading will fail until it is fixed or reset",
                    };
                    CheckResult {
                        status: CheckStatus::Error,
                        message: format!("Stored data is malformed; {}", consequence),
                        details: decoded.as_ref().err().map(|reason| vec![json!({"reason": reason})]),
                    }
                };
                checks.insert("stored_document".to_string(), result);
                decoded.ok()
            }
        };

        if let Some(data) = &data {
            run_data_checks(data, &mut checks);
        }

        let summary = summarize(&checks);
        Ok(DoctorResult { checks, summary })
    }
}

fn run_data_checks(data: &StoreData, checks: &mut BTreeMap<String, CheckResult>) {
    let course_ids: HashSet<&str> = data.courses.iter().map(|c| c.id.as_str()).collect();

    let mut seen = HashSet::new();
    let duplicates: Vec<_> = data
        .courses
        .iter()
        .filter(|c| !seen.insert(c.id.as_str()))
        .map(|c| json!({"course_id": c.id, "title": c.title}))
        .collect();
    checks.insert(
        "duplicate_courses".to_string(),
        CheckResult::from_findings(CheckStatus::Error, duplicates, "All course ids are unique", |n| {
            format!("{} course(s) reuse an existing id", n)
        }),
    );

    let bad_durations: Vec<_> = data
        .courses
        .iter()
        .filter(|c| c.duration <= 0.0 || !c.duration.is_finite())
        .map(|c| json!({"course_id": c.id, "duration": c.duration}))
        .collect();
    checks.insert(
        "course_durations".to_string(),
        CheckResult::from_findings(
            CheckStatus::Warning,
            bad_durations,
            "All course durations are positive",
            |n| format!("{} course(s) have a non-positive duration", n),
        ),
    );

    let known = &course_ids;
    let dangling_prereqs: Vec<_> = data
        .courses
        .iter()
        .flat_map(|c| {
            c.prerequisite_ids()
                .iter()
                .filter(move |p| !known.contains(p.as_str()))
                .map(move |p| json!({"course_id": c.id, "prerequisite": p}))
        })
        .collect();
    checks.insert(
        "unknown_prerequisites".to_string(),
        CheckResult::from_findings(
            CheckStatus::Warning,
            dangling_prereqs,
            "All prerequisites refer to catalog courses",
            |n| format!("{} prerequisite(s) refer to unknown courses", n),
        ),
    );

    let mut pair_counts: HashMap<(&str, &str), usize> = HashMap::new();
    for e in &data.enrollments {
        *pair_counts
            .entry((e.user_id.as_str(), e.course_id.as_str()))
            .or_default() += 1;
    }
    let mut duplicate_pairs: Vec<_> = pair_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    duplicate_pairs.sort();
    let duplicate_pairs: Vec<_> = duplicate_pairs
        .into_iter()
        .map(|((user, course), count)| json!({"user_id": user, "course_id": course, "count": count}))
        .collect();
    checks.insert(
        "duplicate_enrollments".to_string(),
        CheckResult::from_findings(
            CheckStatus::Error,
            duplicate_pairs,
            "One enrollment per course",
            |n| format!("{} course(s) have more than one enrollment", n),
        ),
    );

    let orphaned: Vec<_> = data
        .enrollments
        .iter()
        .filter(|e| !course_ids.contains(e.course_id.as_str()))
        .map(|e| json!({"course_id": e.course_id, "status": e.status.as_str()}))
        .collect();
    checks.insert(
        "orphaned_enrollments".to_string(),
        CheckResult::from_findings(
            CheckStatus::Warning,
            orphaned,
            "All enrollments refer to catalog courses",
            |n| format!("{} enrollment(s) refer to unknown courses", n),
        ),
    );

    let inconsistent: Vec<_> = data
        .enrollments
        .iter()
        .filter_map(|e| {
            e.invariant_violation()
                .map(|problem| json!({"course_id": e.course_id, "problem": problem}))
        })
        .collect();
    checks.insert(
        "enrollment_state".to_string(),
        CheckResult::from_findings(
            CheckStatus::Error,
            inconsistent,
            "Enrollment status, progress and completion time agree",
            |n| format!("{} enrollment(s) are in an inconsistent state", n),
        ),
    );
}

fn summarize(checks: &BTreeMap<String, CheckResult>) -> DoctorSummary {
    let count = |status: CheckStatus| checks.values().filter(|c| c.status == status).count();
    DoctorSummary {
        passed: count(CheckStatus::Pass),
        warnings: count(CheckStatus::Warning),
        errors: count(CheckStatus::Error),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::adapters::MemoryStorage;
    use crate::domain::{Enrollment, EnrollmentStatus, CURRENT_USER_ID};
    use crate::ports::Storage;
    use crate::store::STORAGE_KEY;

    fn setup() -> (Arc<MemoryStorage>, Arc<Store>) {
        let storage = Arc::new(MemoryStorage::new());
        let store = Arc::new(Store::new(Arc::clone(&storage) as Arc<dyn Storage>));
        (storage, store)
    }

    #[test]
    fn test_empty_storage_passes_without_seeding() {
        let (storage, store) = setup();
        let result = DoctorService::new(store).run_checks().unwrap();

        assert_eq!(result.checks.len(), 1);
        assert_eq!(result.summary.errors, 0);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_healthy_seed() {
        let (_, store) = setup();
        store.load().unwrap();

        let result = DoctorService::new(store).run_checks().unwrap();
        assert_eq!(result.summary.errors, 0);
        assert_eq!(result.summary.warnings, 0);
        assert_eq!(result.summary.passed, result.checks.len());
    }

    #[test]
    fn test_malformed_document_reported_not_repaired() {
        let (storage, store) = setup();
        storage.set(STORAGE_KEY, b"{oops").unwrap();

        let result = DoctorService::new(store).run_checks().unwrap();
        assert_eq!(result.checks["stored_document"].status, CheckStatus::Error);
        assert_eq!(storage.get(STORAGE_KEY).unwrap().unwrap(), b"{oops");
    }

    #[test]
    fn test_finds_data_problems() {
        let (_, store) = setup();
        let mut data = store.load().unwrap();

        data.courses[0].prerequisites = Some(vec!["missing".to_string()]);
        data.courses[1].duration = 0.0;
        let dup = data.courses[2].clone();
        data.courses.push(dup);

        data.enrollments
            .push(Enrollment::new(CURRENT_USER_ID, "1", Utc::now()));
        data.enrollments
            .push(Enrollment::new(CURRENT_USER_ID, "1", Utc::now()));
        data.enrollments
            .push(Enrollment::new(CURRENT_USER_ID, "ghost", Utc::now()));
        let mut broken = Enrollment::new(CURRENT_USER_ID, "3", Utc::now());
        broken.status = EnrollmentStatus::Completed;
        data.enrollments.push(broken);
        store.save(&data).unwrap();

        let result = DoctorService::new(store).run_checks().unwrap();
        let status = |name: &str| result.checks[name].status;

        assert_eq!(status("stored_document"), CheckStatus::Pass);
        assert_eq!(status("duplicate_courses"), CheckStatus::Error);
        assert_eq!(status("course_durations"), CheckStatus::Warning);
        assert_eq!(status("unknown_prerequisites"), CheckStatus::Warning);
        assert_eq!(status("duplicate_enrollments"), CheckStatus::Error);
        assert_eq!(status("orphaned_enrollments"), CheckStatus::Warning);
        assert_eq!(status("enrollment_state"), CheckStatus::Error);
        assert_eq!(result.summary.errors, 3);
        assert_eq!(result.summary.warnings, 3);
    }
}
