use clap::Args;
use fiber_bliss::config::AppConfig;
use fiber_bliss::error::AppError;
use fiber_bliss::pages::{
    current_year, CareersView, ContentBlock, InMemorySessionStore, Page, RenderRequest,
};
use std::fmt::Write as _;
use std::sync::Arc;

use crate::infra::build_pages;

#[derive(Args, Debug, Default)]
pub(crate) struct ShowcaseArgs {
    /// Year used for the footer and years in business (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
}

#[derive(Args, Debug)]
pub(crate) struct CareersArgs {
    /// Portal view to print
    #[arg(long, default_value_t = CareersView::Welcome)]
    pub(crate) view: CareersView,
    /// Application ID to check when printing the applications view
    #[arg(long)]
    pub(crate) application_id: Option<String>,
    /// Year used for the footer and metrics (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
}

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Application ID, matched exactly (e.g. KFB-APP1001)
    pub(crate) application_id: String,
}

pub(crate) fn run_showcase(args: ShowcaseArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let sessions = Arc::new(InMemorySessionStore::new(config.sessions));
    let pages = build_pages(&config.content, sessions)?;
    let page = pages
        .showcase
        .render(args.year.unwrap_or_else(current_year));
    print!("{}", render_page(&page));
    Ok(())
}

pub(crate) fn run_careers(args: CareersArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let sessions = Arc::new(InMemorySessionStore::new(config.sessions));
    let pages = build_pages(&config.content, sessions)?;
    let request = RenderRequest {
        application_id: args.application_id,
    };
    let page = pages.careers.render_view(
        args.view,
        &request,
        args.year.unwrap_or_else(current_year),
    )?;
    print!("{}", render_page(&page));
    Ok(())
}

pub(crate) fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let sessions = Arc::new(InMemorySessionStore::new(config.sessions));
    let pages = build_pages(&config.content, sessions)?;
    let outcome = pages.careers.lookup(&args.application_id)?;
    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Lookup result unavailable: {err}"),
    }
    Ok(())
}

/// Plain-text rendering of a page for the terminal.
pub(crate) fn render_page(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{}", page.tagline);
    render_block(&page.hero, 0, &mut out);

    if !page.navigation.is_empty() {
        let menu: Vec<String> = page
            .navigation
            .iter()
            .map(|entry| {
                if entry.selected {
                    format!("[{}]", entry.label)
                } else {
                    entry.label.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "Menu: {}", menu.join(" | "));
    }

    for block in &page.sidebar {
        render_block(block, 0, &mut out);
    }

    for section in &page.sections {
        let _ = writeln!(out, "\n== {} ==", section.heading);
        for block in &section.blocks {
            render_block(block, 0, &mut out);
        }
    }

    out.push('\n');
    for line in &page.footer {
        let _ = writeln!(out, "{line}");
    }
    out
}

fn render_block(block: &ContentBlock, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    match block {
        ContentBlock::Heading { text, .. } => {
            let _ = writeln!(out, "{pad}-- {text} --");
        }
        ContentBlock::Text { text } => {
            let _ = writeln!(out, "{pad}{text}");
        }
        ContentBlock::Field { label, value } => {
            let _ = writeln!(out, "{pad}{label}: {value}");
        }
        ContentBlock::List { items } => {
            for item in items {
                let _ = writeln!(out, "{pad}- {item}");
            }
        }
        ContentBlock::Metric { label, value } => {
            let _ = writeln!(out, "{pad}{label}: {value}");
        }
        ContentBlock::Link { label, url } => {
            let _ = writeln!(out, "{pad}{label} <{url}>");
        }
        ContentBlock::Badge { text } => {
            let _ = writeln!(out, "{pad}[{text}]");
        }
        ContentBlock::Notice { level, message } => {
            let _ = writeln!(out, "{pad}({level:?}) {message}");
        }
        ContentBlock::Image { url, caption, .. } => {
            let _ = writeln!(out, "{pad}[image] {caption} <{url}>");
        }
        ContentBlock::ImageUnavailable {
            message,
            instructions,
        } => {
            let _ = writeln!(out, "{pad}[image] {message}");
            for step in instructions {
                let _ = writeln!(out, "{pad}  * {step}");
            }
        }
        ContentBlock::Card { title, blocks } => {
            let _ = writeln!(out, "{pad}{title}");
            for inner in blocks {
                render_block(inner, depth + 1, out);
            }
        }
        ContentBlock::Tabs { tabs } => {
            for tab in tabs {
                let _ = writeln!(out, "{pad}# {}", tab.label);
                for inner in &tab.blocks {
                    render_block(inner, depth + 1, out);
                }
            }
        }
        ContentBlock::Form {
            fields,
            submit_label,
            action,
            ..
        } => {
            for field in fields {
                let marker = if field.required { " (required)" } else { "" };
                let _ = writeln!(out, "{pad}[ {} ]{marker}", field.label);
            }
            let _ = writeln!(out, "{pad}<{submit_label}> POST {action}");
        }
        ContentBlock::Action { label, action } => {
            let _ = writeln!(out, "{pad}<{label}> POST {action}");
        }
        ContentBlock::Divider => {
            let _ = writeln!(out, "{pad}----");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fiber_bliss::config::ContentConfig;

    #[test]
    fn showcase_text_includes_prices_and_footer() {
        let pages = build_pages(&ContentConfig::default(), Arc::default()).expect("pages build");
        let text = render_page(&pages.showcase.render(2026));

        assert!(text.starts_with("Kwazi's Fiber Bliss\n"));
        assert!(text.contains("== Products & Prices =="));
        assert!(text.contains("- Bikini Sets: R300"));
        assert!(text.contains("© 2017-2026 Kwazi's Fiber Bliss"));
        assert!(text.contains("== Image Help =="));
    }

    #[test]
    fn careers_text_marks_selected_view() {
        let pages = build_pages(&ContentConfig::default(), Arc::default()).expect("pages build");
        let page = pages
            .careers
            .render_view(CareersView::OurTeam, &RenderRequest::default(), 2026)
            .expect("renders");
        let text = render_page(&page);

        assert!(text.contains("[Our Team]"));
        assert!(text.contains("== Meet Our Team =="));
        assert!(!text.contains("[Welcome]"));
    }
}
