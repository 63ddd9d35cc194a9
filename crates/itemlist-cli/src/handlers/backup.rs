use crate::context::CliContext;
use crate::output;
use itemlist_persistence::ExportService;
use std::path::PathBuf;

pub async fn handle_export(
    ctx: &mut CliContext,
    output_path: Option<PathBuf>,
    staging: bool,
) -> anyhow::Result<()> {
    let path = match output_path {
        Some(path) => path,
        None if staging => {
            ExportService::staging_path(Some(ctx.config.effective_backup_file_name()))
        }
        None => ctx.config.effective_backup_path(),
    };

    let handle = ctx
        .export_service()
        .spawn_export(ctx.store.snapshot(), path);
    let result = handle.await?;
    let notifications = ctx.drain_notifications();

    match result {
        Ok(report) => output::output_success(&report, notifications),
        Err(e) => output::output_error(&e.to_string(), notifications),
    }
    Ok(())
}

pub async fn handle_import(ctx: &mut CliContext, path: PathBuf) -> anyhow::Result<()> {
    let items = match ctx.export_service().import(&path).await {
        Ok(items) => items,
        Err(e) => output::output_error(
            &format!("Failed to import {}: {}", path.display(), e),
            Vec::new(),
        ),
    };

    let count = match ctx.store.restore(items) {
        Ok(count) => count,
        Err(e) => output::output_error(
            &format!("Failed to import {}: {}", path.display(), e),
            Vec::new(),
        ),
    };

    ctx.save().await?;
    output::output_success(
        serde_json::json!({"imported": count}),
        ctx.drain_notifications(),
    );
    Ok(())
}
