use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use sgpi_core::Resource;
use sgpi_core::upcoming;

use super::Context;
use crate::render::render_upcoming;
use crate::utils::tui::create_spinner;

pub async fn run(ctx: &Context) -> Result<()> {
    let spinner = create_spinner("Loading events...".to_string());
    let catalog = ctx.sync.cache_or_fetch(Resource::Events).await;
    spinner.finish_and_clear();

    match upcoming::next_upcoming(&catalog.records, Utc::now()) {
        Some(event) => println!("{}", render_upcoming(event, Utc::now())),
        None => println!("{}", "No upcoming events.".dimmed()),
    }

    Ok(())
}
