//! Output renderers for CLI commands.

use anyhow::Context;
use hearth_menu::{HomepageSection, NavigationBrowserAction, NavigationDestination, ShareType};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::preview::MenuView;

pub(crate) fn render_menu(view: &MenuView, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(view)?),
        OutputFormat::Table => {
            for line in menu_lines(view) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SectionRow {
    section: HomepageSection,
    context_menu: bool,
}

pub(crate) fn render_sections(format: OutputFormat) -> CliResult<()> {
    let rows: Vec<SectionRow> = HomepageSection::all()
        .iter()
        .map(|&section| SectionRow {
            section,
            context_menu: section.has_context_menu(),
        })
        .collect();
    match format {
        OutputFormat::Json => println!("{}", to_json(&rows)?),
        OutputFormat::Table => {
            println!("{:<14} MENU", "SECTION");
            for row in rows {
                println!(
                    "{:<14} {}",
                    row.section.as_str(),
                    if row.context_menu { "yes" } else { "no" }
                );
            }
        }
    }
    Ok(())
}

fn to_json(value: &impl Serialize) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .context("failed to format JSON")
        .map_err(CliError::failure)
}

fn menu_lines(view: &MenuView) -> Vec<String> {
    let mut lines = Vec::new();
    match &view.site {
        Some(site) => lines.push(format!(
            "site: {} ({}, {})",
            site.url,
            site.kind.as_str(),
            view.section
        )),
        None => lines.push(format!("site: <none> ({})", view.section)),
    }
    if view.rows.is_empty() {
        lines.push("no actions".to_string());
    } else {
        lines.push(format!("{:>3} {:<26} {:<18} TITLE", "#", "ACTION", "ICON"));
        for row in &view.rows {
            let pending = row
                .pending
                .map(|work| format!(" [pending: {work}]"))
                .unwrap_or_default();
            lines.push(format!(
                "{:>3} {:<26} {:<18} {}{pending}",
                row.index, row.kind, row.icon, row.title
            ));
        }
    }
    for action in &view.dispatched {
        lines.push(format!("dispatched: {}", describe_action(action)));
    }
    lines
}

fn describe_action(action: &NavigationBrowserAction) -> String {
    let target = match &action.destination {
        NavigationDestination::Settings { section } => format!("settings {section:?}"),
        NavigationDestination::NewTab {
            url,
            is_private,
            select_new_tab,
        } => format!("new tab {url} private={is_private} select={select_new_tab}"),
        NavigationDestination::ShareSheet { configuration } => match &configuration.share_type {
            ShareType::Site(url) => format!("share sheet {url}"),
        },
    };
    format!("{} -> {target}", action.action_type.as_str())
}
