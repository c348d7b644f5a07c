//! Interactive listing: edit criteria, commit, page through results while
//! the catalog keeps loading in the background.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use sgpi_core::Resource;
use sgpi_core::search::Category;
use sgpi_core::sync::LoadPolicy;
use sgpi_core::view::CatalogView;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::Context;
use crate::render::Render;

const HELP: &str = "\
  k <text>   set the search keyword
  c <cat>    set the category (members only)
  s          search with the current keyword and category
  x          clear the search
  n / p      next / previous page
  g <n>      go to page n
  r          reload the catalog
  u          print the shareable link
  h          this help
  q          quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Keyword(String),
    Category(Category),
    Search,
    Clear,
    Next,
    Prev,
    Goto(usize),
    Reload,
    Link,
    Help,
    Quit,
}

impl Action {
    fn parse(input: &str) -> Result<Action, String> {
        let input = input.trim();
        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "k" | "keyword" => Ok(Action::Keyword(arg.to_string())),
            "c" | "category" => arg.parse().map(Action::Category),
            "s" | "search" | "" => Ok(Action::Search),
            "x" | "clear" => Ok(Action::Clear),
            "n" | "next" => Ok(Action::Next),
            "p" | "prev" => Ok(Action::Prev),
            "g" | "goto" => arg
                .parse()
                .map(Action::Goto)
                .map_err(|_| format!("Not a page number: '{arg}'")),
            "r" | "reload" => Ok(Action::Reload),
            "u" | "url" => Ok(Action::Link),
            "h" | "help" | "?" => Ok(Action::Help),
            "q" | "quit" | "exit" => Ok(Action::Quit),
            other => Err(format!("Unknown command '{other}'. Type h for help.")),
        }
    }
}

pub async fn run(ctx: &Context, resource: Resource, shared: Option<&str>) -> Result<()> {
    let url = ctx.view_url(resource, shared)?;
    let mut view = CatalogView::mount(resource, url);

    let mut handle = ctx.sync.load(resource, resource.listing_policy());
    let mut watching = true;
    view.sync_from(&handle);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP.dimmed());
    redraw(&view);

    loop {
        tokio::select! {
            update = handle.changed(), if watching => {
                match update {
                    Some(_) => {
                        view.sync_from(&handle);
                        redraw(&view);
                    }
                    None => {
                        view.finish_loading();
                        watching = false;
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let action = match Action::parse(&line) {
                    Ok(action) => action,
                    Err(e) => {
                        println!("{}", e.red());
                        prompt(&view);
                        continue;
                    }
                };
                debug!(?action, "browse input");

                match action {
                    Action::Keyword(keyword) => {
                        view.set_keyword(keyword);
                        prompt(&view);
                    }
                    Action::Category(category) => {
                        if resource.category_field().is_none() {
                            println!("{}", format!("{resource} have no categories").yellow());
                        } else {
                            view.set_category(category);
                        }
                        prompt(&view);
                    }
                    Action::Search => {
                        view.commit();
                        redraw(&view);
                    }
                    Action::Clear => {
                        view.clear();
                        redraw(&view);
                    }
                    Action::Next => {
                        view.next_page();
                        redraw(&view);
                    }
                    Action::Prev => {
                        view.prev_page();
                        redraw(&view);
                    }
                    Action::Goto(page) => {
                        view.goto_page(page);
                        redraw(&view);
                    }
                    Action::Reload => {
                        // Replacing the handle drops the old one; its task
                        // discards whatever it was still fetching.
                        handle = ctx.sync.load(resource, LoadPolicy::CacheFirst);
                        watching = true;
                        view.sync_from(&handle);
                        redraw(&view);
                    }
                    Action::Link => {
                        println!("{}", view.url().as_str().cyan());
                        prompt(&view);
                    }
                    Action::Help => {
                        println!("{}", HELP.dimmed());
                        prompt(&view);
                    }
                    Action::Quit => break,
                }
            }
        }
    }

    Ok(())
}

fn redraw(view: &CatalogView) {
    println!();
    println!("{}", view.render());
    prompt(view);
}

/// Prompt showing the criteria being edited, which may differ from the
/// ones the results were computed with.
fn prompt(view: &CatalogView) {
    let pending = view.search().pending();
    let mut label = format!("\"{}\"", pending.keyword);
    if view.resource().category_field().is_some() {
        label.push_str(&format!(" in {}", pending.category.label()));
    }

    print!("{} {} ", label.dimmed(), ">".bold());
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keyword_with_spaces() {
        assert_eq!(
            Action::parse("k  liver pathology "),
            Ok(Action::Keyword("liver pathology".to_string()))
        );
        assert_eq!(Action::parse("k"), Ok(Action::Keyword(String::new())));
    }

    #[test]
    fn parses_category_case_insensitively() {
        assert_eq!(Action::parse("c ad hoc"), Ok(Action::Category(Category::AdHoc)));
        assert_eq!(Action::parse("category life"), Ok(Action::Category(Category::Life)));
        assert!(Action::parse("c honorary").is_err());
    }

    #[test]
    fn empty_line_searches() {
        assert_eq!(Action::parse(""), Ok(Action::Search));
        assert_eq!(Action::parse("   "), Ok(Action::Search));
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(Action::parse("n"), Ok(Action::Next));
        assert_eq!(Action::parse("p"), Ok(Action::Prev));
        assert_eq!(Action::parse("g 4"), Ok(Action::Goto(4)));
        assert!(Action::parse("g four").is_err());
    }

    #[test]
    fn rejects_unknown_commands() {
        let err = Action::parse("zap").unwrap_err();
        assert!(err.contains("zap"));
    }
}
