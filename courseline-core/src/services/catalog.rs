//! Catalog service - read-only course queries

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::Course;
use crate::store::Store;

/// Price filter for catalog browsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl PriceFilter {
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Free => course.is_free,
            PriceFilter::Paid => !course.is_free,
        }
    }
}

impl FromStr for PriceFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(PriceFilter::All),
            "free" => Ok(PriceFilter::Free),
            "paid" => Ok(PriceFilter::Paid),
            other => Err(Error::validation(format!(
                "unknown price filter '{}' (expected all, free or paid)",
                other
            ))),
        }
    }
}

/// Sort order for catalog browsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Title,
    Duration,
}

impl SortBy {
    fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortBy::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortBy::Duration => a
                .duration
                .partial_cmp(&b.duration)
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortBy::Title),
            "duration" => Ok(SortBy::Duration),
            other => Err(Error::validation(format!(
                "unknown sort '{}' (expected title or duration)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Title => f.write_str("title"),
            SortBy::Duration => f.write_str("duration"),
        }
    }
}

/// Catalog browsing options.
///
/// Filters and sorting apply to the requested page only; paging itself
/// always follows catalog order.
#[derive(Debug, Clone)]
pub struct CourseFilter {
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
    /// `None` (or "all") means every category
    pub category: Option<String>,
    pub price: PriceFilter,
    pub sort: SortBy,
}

impl CourseFilter {
    pub fn page(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            search: None,
            category: None,
            price: PriceFilter::All,
            sort: SortBy::Title,
        }
    }

    fn matches(&self, course: &Course) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .map_or(true, |q| course.matches_search(q));
        let matches_category = match self.category.as_deref() {
            None | Some("all") => true,
            Some(category) => course.category == category,
        };
        matches_search && matches_category && self.price.matches(course)
    }
}

/// One page of browse results
#[derive(Debug, Serialize)]
pub struct CoursePage {
    pub page: usize,
    pub page_size: usize,
    pub total_courses: usize,
    pub total_pages: usize,
    /// Distinct categories on this page, in first-seen order
    pub categories: Vec<String>,
    pub courses: Vec<Course>,
}

/// 1-indexed page of `items`; empty for page 0, size 0 or past the end
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// Number of pages needed for `total` items
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

fn distinct_categories(courses: &[Course]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for course in courses {
        if !categories.contains(&course.category) {
            categories.push(course.category.clone());
        }
    }
    categories
}

/// Catalog service for course lookups and browsing
pub struct CatalogService {
    store: Arc<Store>,
}

impl CatalogService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Courses on a 1-indexed page, in catalog order
    pub fn list_courses(&self, page: usize, page_size: usize) -> Result<Vec<Course>> {
        let data = self.store.load()?;
        Ok(page_slice(&data.courses, page, page_size))
    }

    pub fn total_courses(&self) -> Result<usize> {
        Ok(self.store.load()?.courses.len())
    }

    pub fn total_pages(&self, page_size: usize) -> Result<usize> {
        Ok(page_count(self.total_courses()?, page_size))
    }

    pub fn get_course(&self, id: &str) -> Result<Option<Course>> {
        Ok(self.store.load()?.course(id).cloned())
    }

    /// Distinct categories across the whole catalog, in first-seen order
    pub fn categories(&self) -> Result<Vec<String>> {
        Ok(distinct_categories(&self.store.load()?.courses))
    }

    /// Fetch a page, then search, filter and sort within it
    pub fn browse(&self, filter: &CourseFilter) -> Result<CoursePage> {
        let data = self.store.load()?;
        let on_page = page_slice(&data.courses, filter.page, filter.page_size);
        let categories = distinct_categories(&on_page);

        let mut courses: Vec<Course> = on_page.into_iter().filter(|c| filter.matches(c)).collect();
        courses.sort_by(|a, b| filter.sort.compare(a, b));

        Ok(CoursePage {
            page: filter.page,
            page_size: filter.page_size,
            total_courses: data.courses.len(),
            total_pages: page_count(data.courses.len(), filter.page_size),
            categories,
            courses,
        })
    }
}
