//! Courses command - browse the catalog one page at a time

use anyhow::Result;
use colored::Colorize;
use courseline_core::services::{CourseFilter, PriceFilter, SortBy};

use super::get_context;
use crate::output::{self, create_table, price_label};

pub struct CoursesArgs {
    pub page: usize,
    pub page_size: Option<usize>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub price: String,
    pub sort: String,
    pub json: bool,
}

pub fn run(args: CoursesArgs) -> Result<()> {
    let ctx = get_context()?;

    let mut filter = CourseFilter::page(args.page, args.page_size.unwrap_or(ctx.config.page_size));
    filter.search = args.search.filter(|s| !s.trim().is_empty());
    filter.category = args.category;
    filter.price = args.price.parse::<PriceFilter>()?;
    filter.sort = args.sort.parse::<SortBy>()?;

    let page = ctx.catalog_service.browse(&filter)?;

    if args.json {
        return output::print_json(&page);
    }

    if page.courses.is_empty() {
        output::warning("No courses match your filters.");
    } else {
        let mut table = create_table();
        table.set_header(vec!["ID", "Title", "Category", "Level", "Duration", "Price"]);
        for course in &page.courses {
            table.add_row(vec![
                course.id.clone(),
                course.title.clone(),
                course.category.clone(),
                course.level.to_string(),
                course.duration_display(),
                price_label(course).to_string(),
            ]);
        }
        println!("{}", table);
    }

    println!();
    println!(
        "{}",
        format!(
            "Page {} of {} ({} courses in catalog)",
            page.page, page.total_pages, page.total_courses
        )
        .dimmed()
    );
    if !page.categories.is_empty() {
        println!(
            "{}",
            format!("Categories on this page: {}", page.categories.join(", ")).dimmed()
        );
    }

    Ok(())
}
