//! Shape checks for the persisted document
//!
//! Applied to the raw JSON before typed decoding. Every check is a plain
//! predicate; nothing here panics or returns an error.

use serde_json::{Map, Value};

use super::enrollment::MAX_PROGRESS;
use super::Level;

type Object = Map<String, Value>;

const COURSE_STRING_FIELDS: &[&str] = &["id", "title", "description", "category", "instructor"];
const ENROLLMENT_STRING_FIELDS: &[&str] = &["userId", "courseId", "enrolledAt"];
const ENROLLMENT_STATUSES: &[&str] = &["enrolled", "completed"];
const USER_STRING_FIELDS: &[&str] = &["userId", "name", "email"];

/// Whether `value` has the shape of a stored `{courses, enrollments, user}` document
pub fn is_valid_store_data(value: &Value) -> bool {
    let Some(root) = value.as_object() else {
        return false;
    };

    all_items(root.get("courses"), is_valid_course)
        && all_items(root.get("enrollments"), is_valid_enrollment)
        && root.get("user").is_some_and(is_valid_user)
}

pub fn is_valid_course(value: &Value) -> bool {
    value.as_object().is_some_and(|course| {
        strings(course, COURSE_STRING_FIELDS)
            && number(course, "duration")
            && boolean(course, "isFree")
            && course
                .get("level")
                .and_then(Value::as_str)
                .and_then(Level::parse)
                .is_some()
    })
}

pub fn is_valid_enrollment(value: &Value) -> bool {
    value.as_object().is_some_and(|enrollment| {
        strings(enrollment, ENROLLMENT_STRING_FIELDS)
            && one_of(enrollment, "status", ENROLLMENT_STATUSES)
            && progress_in_range(enrollment)
            && optional_string(enrollment, "completedAt")
    })
}

pub fn is_valid_user(value: &Value) -> bool {
    value.as_object().is_some_and(|user| {
        strings(user, USER_STRING_FIELDS)
            && user
                .get("preferences")
                .and_then(Value::as_object)
                .is_some_and(|prefs| {
                    all_items(prefs.get("preferredCategories"), Value::is_string)
                        && boolean(prefs, "notifications")
                })
    })
}

fn all_items(value: Option<&Value>, predicate: fn(&Value) -> bool) -> bool {
    value
        .and_then(Value::as_array)
        .is_some_and(|items| items.iter().all(predicate))
}

fn strings(obj: &Object, keys: &[&str]) -> bool {
    keys.iter().all(|key| obj.get(*key).is_some_and(Value::is_string))
}

fn number(obj: &Object, key: &str) -> bool {
    obj.get(key).is_some_and(Value::is_number)
}

fn boolean(obj: &Object, key: &str) -> bool {
    obj.get(key).is_some_and(Value::is_boolean)
}

fn one_of(obj: &Object, key: &str, allowed: &[&str]) -> bool {
    obj.get(key)
        .and_then(Value::as_str)
        .is_some_and(|v| allowed.contains(&v))
}

fn optional_string(obj: &Object, key: &str) -> bool {
    match obj.get(key) {
        None | Some(Value::Null) => true,
        Some(v) => v.is_string(),
    }
}

fn progress_in_range(obj: &Object) -> bool {
    obj.get("progress")
        .and_then(Value::as_f64)
        .is_some_and(|p| (0.0..=f64::from(MAX_PROGRESS)).contains(&p))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::seed;

    fn valid_document() -> Value {
        json!({
            "courses": [{
                "id": "1",
                "title": "Intro",
                "description": "Basics",
                "category": "Programming",
                "duration": 8,
                "isFree": true,
                "level": "beginner",
                "instructor": "John Doe",
                "prerequisites": []
            }],
            "enrollments": [{
                "userId": "current-user",
                "courseId": "1",
                "status": "completed",
                "progress": 100,
                "enrolledAt": "2025-01-01T10:00:00.000Z",
                "completedAt": "2025-01-02T10:00:00.000Z"
            }],
            "user": {
                "userId": "current-user",
                "name": "Demo User",
                "email": "demo@example.com",
                "preferences": {
                    "preferredCategories": ["Programming"],
                    "notifications": false
                }
            }
        })
    }

    #[test]
    fn test_accepts_valid_document() {
        assert!(is_valid_store_data(&valid_document()));
    }

    #[test]
    fn test_accepts_seed() {
        let seed = serde_json::to_value(seed::initial_data()).unwrap();
        assert!(is_valid_store_data(&seed));
    }

    #[test]
    fn test_rejects_wrong_top_level() {
        assert!(!is_valid_store_data(&json!(null)));
        assert!(!is_valid_store_data(&json!([])));
        assert!(!is_valid_store_data(&json!("lms")));
        assert!(!is_valid_store_data(&json!({})));

        let mut doc = valid_document();
        doc["courses"] = json!({});
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["user"] = json!(null);
        assert!(!is_valid_store_data(&doc));
    }

    #[test]
    fn test_rejects_bad_course() {
        let mut doc = valid_document();
        doc["courses"][0]["level"] = json!("expert");
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["courses"][0]["duration"] = json!("8");
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["courses"][0]["isFree"] = json!(1);
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["courses"][0].as_object_mut().unwrap().remove("instructor");
        assert!(!is_valid_store_data(&doc));
    }

    #[test]
    fn test_rejects_bad_enrollment() {
        let mut doc = valid_document();
        doc["enrollments"][0]["status"] = json!("dropped");
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["enrollments"][0]["progress"] = json!(101);
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["enrollments"][0]["progress"] = json!(-1);
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["enrollments"][0]["completedAt"] = json!(12345);
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["enrollments"][0]["enrolledAt"] = json!(null);
        assert!(!is_valid_store_data(&doc));
    }

    #[test]
    fn test_completed_at_may_be_absent_or_null() {
        let mut doc = valid_document();
        doc["enrollments"][0]["completedAt"] = json!(null);
        assert!(is_valid_store_data(&doc));

        doc["enrollments"][0].as_object_mut().unwrap().remove("completedAt");
        assert!(is_valid_store_data(&doc));
    }

    #[test]
    fn test_rejects_bad_user() {
        let mut doc = valid_document();
        doc["user"]["preferences"]["notifications"] = json!("yes");
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["user"]["preferences"]["preferredCategories"] = json!("Design");
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["user"]["preferences"]["preferredCategories"] = json!([1, 2]);
        assert!(!is_valid_store_data(&doc));

        let mut doc = valid_document();
        doc["user"]["email"] = json!(null);
        assert!(!is_valid_store_data(&doc));
    }
}
