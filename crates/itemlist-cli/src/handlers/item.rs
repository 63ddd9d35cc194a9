use crate::context::CliContext;
use crate::output;
use itemlist_core::ItemListError;
use itemlist_domain::{Item, ItemId};

pub async fn handle_add(
    ctx: &mut CliContext,
    title: String,
    content: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    let content = content.unwrap_or_else(Item::default_content);
    let result = if force {
        ctx.store.add_forced(title, content)
    } else {
        ctx.store.add(title, content)
    };

    match result {
        Ok(id) => {
            ctx.save().await?;
            let item = find(ctx, id)?;
            output::output_success(&item, ctx.drain_notifications());
        }
        Err(ItemListError::DuplicateTitle { title }) => output::output_error(
            &format!(
                "\"{}\" already exists in your list. Use --force to add it anyway",
                title
            ),
            Vec::new(),
        ),
        Err(e) => output::output_error(&e.to_string(), Vec::new()),
    }
    Ok(())
}

pub async fn handle_list(ctx: &mut CliContext) -> anyhow::Result<()> {
    let items = ctx.store.snapshot();
    output::output_list(items, ctx.store.all_selected(), ctx.drain_notifications());
    Ok(())
}

pub async fn handle_get(ctx: &mut CliContext, id: ItemId) -> anyhow::Result<()> {
    match ctx.store.get(id) {
        Some(item) => {
            let item = item.clone();
            output::output_success(&item, Vec::new());
        }
        None => output::output_error(&ItemListError::NotFound(id).to_string(), Vec::new()),
    }
    Ok(())
}

pub async fn handle_toggle(ctx: &mut CliContext, id: ItemId) -> anyhow::Result<()> {
    if let Err(e) = ctx.store.toggle_selection(id) {
        output::output_error(&e.to_string(), Vec::new());
    }
    ctx.save().await?;
    let item = find(ctx, id)?;
    output::output_success(&item, ctx.drain_notifications());
    Ok(())
}

pub async fn handle_select_all(ctx: &mut CliContext, deselect: bool) -> anyhow::Result<()> {
    ctx.store.set_select_all(!deselect);
    ctx.save().await?;
    handle_list(ctx).await
}

pub async fn handle_delete_selected(ctx: &mut CliContext) -> anyhow::Result<()> {
    let removed = ctx.store.delete_selected();
    if !removed.is_empty() {
        ctx.save().await?;
    }
    output::output_success(
        serde_json::json!({"deleted": removed, "count": removed.len()}),
        ctx.drain_notifications(),
    );
    Ok(())
}

pub async fn handle_clear(ctx: &mut CliContext) -> anyhow::Result<()> {
    let count = ctx.store.clear_all();
    ctx.save().await?;
    output::output_success(
        serde_json::json!({"cleared": count}),
        ctx.drain_notifications(),
    );
    Ok(())
}

pub async fn handle_update(
    ctx: &mut CliContext,
    id: ItemId,
    title: Option<String>,
    content: Option<String>,
) -> anyhow::Result<()> {
    let Some(existing) = ctx.store.get(id).cloned() else {
        output::output_error(&ItemListError::NotFound(id).to_string(), Vec::new());
    };

    let title = title.unwrap_or(existing.title);
    let content = content.unwrap_or(existing.content);
    if let Err(e) = ctx.store.update(id, title, content) {
        output::output_error(&e.to_string(), Vec::new());
    }

    ctx.save().await?;
    let item = find(ctx, id)?;
    output::output_success(&item, ctx.drain_notifications());
    Ok(())
}

fn find(ctx: &CliContext, id: ItemId) -> anyhow::Result<Item> {
    ctx.store
        .get(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!(ItemListError::NotFound(id)))
}
