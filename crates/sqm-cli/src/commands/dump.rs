use crate::context::AppContext;

/// Handle `sqm dump`: every stored field, pretty-printed.
pub fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    println!("{}", ctx.store.dump_json()?);
    Ok(())
}
