use anyhow::Result;
use owo_colors::OwoColorize;
use sgpi_core::Resource;
use sgpi_core::search::Category;
use sgpi_core::view::CatalogView;

use super::Context;
use crate::render::Render;
use crate::utils::tui::create_spinner;

/// Criteria given on the command line. Unset values keep whatever the
/// mounted URL carried.
pub struct Query {
    pub keyword: Option<String>,
    pub category: Option<Category>,
    pub page: usize,
}

impl Query {
    fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.category.is_none()
    }
}

pub async fn run(ctx: &Context, resource: Resource, shared: Option<&str>, query: Query) -> Result<()> {
    let url = ctx.view_url(resource, shared)?;
    let mut view = CatalogView::mount(resource, url);

    if !query.is_empty() {
        if let Some(keyword) = query.keyword {
            view.set_keyword(keyword);
        }
        if let Some(category) = query.category {
            view.set_category(category);
        }
        view.commit();
    }

    let mut handle = ctx.sync.load(resource, resource.listing_policy());
    view.sync_from(&handle);

    let spinner = create_spinner(format!("Loading {resource}..."));
    handle.settled().await;
    spinner.finish_and_clear();

    view.sync_from(&handle);
    view.goto_page(query.page);

    println!("{}", view.render());
    println!("\n{}", view.url().as_str().dimmed());

    Ok(())
}
