//! TUI rendering traits for sgpi types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to sgpi-core types using owo_colors.

use owo_colors::OwoColorize;
use sgpi_core::record::city_state;
use sgpi_core::upcoming::{self, Countdown};
use sgpi_core::view::{CatalogView, ViewStatus};
use sgpi_core::{Freshness, Record, Resource};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CatalogView {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        if self.search().has_searched() {
            lines.push(render_filter_summary(self));
        }

        match self.status() {
            ViewStatus::PreSearch => {
                lines.push("Search Directory".bold().to_string());
                lines.push(
                    "   Use search to find members by name, ID, email, or phone number."
                        .dimmed()
                        .to_string(),
                );
            }
            ViewStatus::Loading => lines.push("   Processing...".dimmed().to_string()),
            ViewStatus::NoMatches => {
                lines.push(format!("   {}", no_matches_message(self.resource()).dimmed()))
            }
            ViewStatus::Results(total) => {
                for record in self.page_records() {
                    lines.push(render_row(self.resource(), record));
                }
                lines.push(String::new());
                if let Some((first, last)) = self.showing() {
                    lines.push(
                        format!("Showing {first} - {last} of {total}")
                            .dimmed()
                            .to_string(),
                    );
                }
                if self.total_pages() > 1 {
                    lines.push(render_page_window(self));
                }
            }
        }

        if let Some(note) = freshness_note(self) {
            lines.push(note);
        }

        lines.join("\n")
    }
}

impl Render for Countdown {
    fn render(&self) -> String {
        format!(
            "{} days  {} hours  {} minutes  {} seconds",
            self.days.bold(),
            self.hours.bold(),
            self.minutes.bold(),
            self.seconds.bold()
        )
    }
}

fn render_filter_summary(view: &CatalogView) -> String {
    let committed = view.search().committed();
    let keyword = if committed.keyword.is_empty() {
        "All"
    } else {
        committed.keyword.as_str()
    };

    match view.resource() {
        Resource::Members => format!(
            "Results for {} in {}",
            format!("\"{keyword}\"").bold(),
            committed.category.label().bold()
        ),
        Resource::Events => format!("Results for {}", format!("\"{keyword}\"").bold()),
    }
}

fn no_matches_message(resource: Resource) -> &'static str {
    match resource {
        Resource::Members => "No members found matching your criteria.",
        Resource::Events => "No events found matching your criteria.",
    }
}

/// One line per record, columns chosen per catalog.
fn render_row(resource: Resource, record: &Record) -> String {
    match resource {
        Resource::Members => {
            let email = record.field("email");
            let phone = record.field("phone");
            let category = record.field("category");
            let category = if category.contains("Life") {
                category.green().to_string()
            } else {
                category.yellow().to_string()
            };
            format!(
                "{:<12} {} {} {} {} {} [{}]",
                record.field("memberId").dimmed(),
                record.field("name").bold(),
                record.field("qualification"),
                city_state(&record.field("address")).dimmed(),
                or_dash(&email).cyan(),
                or_dash(&phone).dimmed(),
                category
            )
        }
        Resource::Events => {
            let date = record.field("date");
            let date = if date.trim().is_empty() {
                "Date To Be Announced".to_string()
            } else {
                date.into_owned()
            };
            format!(
                "{} {} {}",
                record.field("title").bold(),
                date.dimmed(),
                record.field("location")
            )
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// "< 3 4 [5] 6 7 >" style page navigation.
fn render_page_window(view: &CatalogView) -> String {
    let current = view.current_page();
    let mut parts = Vec::new();

    if current > 1 {
        parts.push("<".to_string());
    }
    for page in view.page_window() {
        if page == current {
            parts.push(format!("[{page}]").bold().to_string());
        } else {
            parts.push(page.to_string());
        }
    }
    if current < view.total_pages() {
        parts.push(">".to_string());
    }

    parts.join(" ")
}

/// Hint shown while a cached catalog is being revalidated.
fn freshness_note(view: &CatalogView) -> Option<String> {
    if view.is_loading() && view.catalog().freshness == Freshness::Cached {
        Some("(refreshing...)".dimmed().to_string())
    } else {
        None
    }
}

/// Homepage-style card for the next event.
pub fn render_upcoming(event: &Record, now: chrono::DateTime<chrono::Utc>) -> String {
    let mut lines = vec![format!("Upcoming Event: {}", event.field("title").bold())];

    let date = event.field("date");
    if !date.trim().is_empty() {
        lines.push(format!("   {}", date.dimmed()));
    }
    let location = event.field("location");
    if !location.trim().is_empty() {
        lines.push(format!("   {location}"));
    }

    if let Some(target) = upcoming::event_date(event) {
        lines.push(format!("   {}", Countdown::until(target, now).render()));
    }

    for (label, field) in [("Register", "registrationlink"), ("Flyer", "flyerlink")] {
        let link = event.field(field);
        if !link.trim().is_empty() {
            lines.push(format!("   {}: {}", label, link.cyan()));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgpi_core::Catalog;
    use url::Url;

    fn cached_events_view() -> CatalogView {
        let url = Url::parse("https://site.test/academics-events").unwrap();
        let mut view = CatalogView::mount(Resource::Events, url);
        view.replace_catalog(Catalog::empty(Resource::Events).with_cached(vec![
            Record::from_pairs([("title", "Liver pathology workshop"), ("date", "2099-01-01")]),
        ]));
        view
    }

    #[test]
    fn settled_cached_view_renders_without_notice() {
        let mut view = cached_events_view();
        view.finish_loading();

        let out = view.render();
        assert!(out.contains("Liver pathology workshop"));
        assert!(!out.contains("server"));
        assert!(!out.contains("refreshing"));
    }

    #[test]
    fn cached_view_hints_while_refreshing() {
        let view = cached_events_view();
        assert!(view.is_loading());
        assert!(view.render().contains("(refreshing...)"));
    }
}
