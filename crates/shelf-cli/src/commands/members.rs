use crate::app::AppContext;
use crate::cli::{MemberRegisterArgs, OutputArgs};
use crate::helpers::parse_output_format;
use crate::output::print_member_list;
use crate::ui::receipt;

use super::open_catalog;

pub fn handle_register(ctx: &AppContext, args: &MemberRegisterArgs) -> anyhow::Result<()> {
    let (store, mut catalog) = open_catalog(ctx)?;

    let member = catalog.register_member(args.name.as_str())?;
    let items = [
        ("ID", member.id().to_string()),
        ("Name", member.name().to_string()),
    ];

    ctx.save_catalog(&store, &catalog)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        println!("{}", receipt(&ui_ctx, "Member registered", &items));
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let (_store, catalog) = open_catalog(ctx)?;

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    print_member_list(&ui_ctx, &catalog.list_members(), format, ctx.quiet())
}
