use crate::context::CliContext;
use crate::output;
use itemlist_core::ItemListError;
use itemlist_domain::ItemId;

pub async fn handle_search(
    ctx: &mut CliContext,
    query: Option<String>,
    id: Option<ItemId>,
) -> anyhow::Result<()> {
    let search = ctx.web_search();
    let url = match (query, id) {
        (_, Some(id)) => match ctx.store.get(id) {
            Some(item) => search.url_for_item(item),
            None => output::output_error(&ItemListError::NotFound(id).to_string(), Vec::new()),
        },
        (Some(query), None) => search.url_for(&query),
        (None, None) => None,
    };

    match url {
        Some(url) => output::output_success(serde_json::json!({"url": url}), Vec::new()),
        None => output::output_error("Nothing to search for", Vec::new()),
    }
    Ok(())
}
