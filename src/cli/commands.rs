use std::io::Write;

use crate::app::{AppContext, Result, TaproomError};
use crate::catalog::{ItemDetail, PaginatedListController};
use crate::domain::{Item, ItemId};

/// Load every page and print the items.
pub async fn list_items<W: Write>(ctx: &AppContext, json: bool, out: &mut W) -> Result<()> {
    let controller = ctx.controller();
    load_remaining(&controller, |_| false).await;

    let items = controller.items();
    if json {
        serde_json::to_writer_pretty(&mut *out, &items)?;
        writeln!(out)?;
        return Ok(());
    }

    if items.is_empty() {
        writeln!(out, "No items")?;
        return Ok(());
    }

    for item in &items {
        writeln!(out, "{}", format_row(item))?;
    }
    writeln!(
        out,
        "\n{} items from {} pages",
        items.len(),
        controller.current_page()
    )?;

    Ok(())
}

/// Page through the catalog until `id` turns up, then print its details.
pub async fn show_item<W: Write>(ctx: &AppContext, id: ItemId, out: &mut W) -> Result<()> {
    let controller = ctx.controller();
    load_remaining(&controller, |c| c.item(id).is_some()).await;

    let detail = controller
        .detail(id)
        .ok_or(TaproomError::ItemNotFound(id))?;
    write_detail(&detail, out)?;

    Ok(())
}

/// Keep loading until the list is complete, `done` says stop, or a page
/// fails.
async fn load_remaining<F>(controller: &PaginatedListController, done: F)
where
    F: Fn(&PaginatedListController) -> bool,
{
    while controller.has_more() && !done(controller) {
        let before = controller.current_page();
        controller.load_next().await;
        if controller.current_page() == before {
            eprintln!(
                "Page {} could not be loaded; showing what was fetched so far",
                before + 1
            );
            break;
        }
    }
}

fn format_row(item: &Item) -> String {
    let marker = if item.is_favorite() { "★" } else { " " };
    format!(
        "{} {:>5}  {} - {}",
        marker,
        item.id(),
        item.name(),
        item.tagline()
    )
}

fn write_detail<W: Write>(detail: &ItemDetail, out: &mut W) -> Result<()> {
    let favorite = if detail.is_favorite() { " ★" } else { "" };
    writeln!(out, "{}{}", detail.name(), favorite)?;
    writeln!(out, "{}", detail.tagline_label())?;
    writeln!(out, "{}", detail.abv_label())?;
    writeln!(out, "{}", detail.ibu_label())?;
    writeln!(out, "Image: {}", detail.image_url())?;
    writeln!(out)?;
    writeln!(out, "{}", detail.description())?;
    Ok(())
}
