/// `add-view` / `remove-view` commands: change a definition's component views.
///
/// Both commands share one action, parametrized by [`MembershipChange`]:
///
/// 1. validate `--org`, `--label`, `--content_view` (usage error)
/// 2. resolve the definition, then the view (data error; view lookup is
///    skipped when the definition is unknown)
/// 3. fetch the definition's current views (one request)
/// 4. compute the new id list
/// 5. submit it (one request, skipped on `--dry-run`)
use tracing::{debug, info};

use crate::api::ContentViewApi;
use crate::cli::OutputCtx;
use crate::cli::args::MembershipArgs;
use crate::cli::output::write_membership;
use crate::definition::{
    ActionError, MembershipChange, apply_change, resolve_definition, resolve_view,
};
use crate::types::MembershipOutput;

/// Validated options for a membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipOptions<'a> {
    pub org: &'a str,
    pub label: &'a str,
    pub content_view: &'a str,
    pub dry_run: bool,
}

/// Check that `--org`, `--label` and `--content_view` were all given.
///
/// Blank values (empty or whitespace only) count as missing.
///
/// # Errors
///
/// Returns `ActionError::Usage` naming every missing option.
pub fn validate_options(args: &MembershipArgs) -> Result<MembershipOptions<'_>, ActionError> {
    match (
        given(args.org.as_deref()),
        given(args.label.as_deref()),
        given(args.content_view.as_deref()),
    ) {
        (Some(org), Some(label), Some(content_view)) => Ok(MembershipOptions {
            org,
            label,
            content_view,
            dry_run: args.dry_run,
        }),
        (org, label, content_view) => {
            let missing = [
                ("org", org.is_none()),
                ("label", label.is_none()),
                ("content_view", content_view.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            Err(ActionError::Usage { missing })
        }
    }
}

fn given(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Run `cvdcli add-view` or `cvdcli remove-view`.
///
/// `connect` is only called after the options validate.
///
/// # Errors
///
/// Returns `ActionError` on missing options, unknown definition or view,
/// connection problems or a rejected update.
pub fn run<A, F>(
    args: &MembershipArgs,
    change: MembershipChange,
    connect: F,
    ctx: &OutputCtx,
) -> Result<(), ActionError>
where
    A: ContentViewApi,
    F: FnOnce() -> Result<A, ActionError>,
{
    let opts = validate_options(args)?;
    let api = connect()?;
    let output = execute(&opts, change, &api, ctx)?;
    write_membership(&output, ctx);
    Ok(())
}

/// Resolve, compute and submit a membership change for validated options.
///
/// # Errors
///
/// - `ActionError::DefinitionNotFound` / `ActionError::ViewNotFound`
/// - `ActionError::Remote` — a request failed or the update was rejected
pub fn execute<A>(
    opts: &MembershipOptions<'_>,
    change: MembershipChange,
    api: &A,
    ctx: &OutputCtx,
) -> Result<MembershipOutput, ActionError>
where
    A: ContentViewApi + ?Sized,
{
    let _t_def = ctx.timer("resolve_definition");
    let definition = resolve_definition(api, opts.org, opts.label)?;
    drop(_t_def);

    let _t_view = ctx.timer("resolve_view");
    let view = resolve_view(api, opts.org, opts.content_view)?;
    drop(_t_view);

    let _t_list = ctx.timer("list_views");
    let current = api.list_views(definition.id)?;
    drop(_t_list);

    let views = apply_change(&current, &view, change);
    debug!(
        definition = definition.id,
        view = view.id,
        ?change,
        before = current.len(),
        after = views.len(),
        "computed membership"
    );

    if opts.dry_run {
        info!(definition = definition.id, "dry run, skipping update");
    } else {
        let _t_update = ctx.timer("update_views");
        api.update_views(definition.id, &views)?;
        drop(_t_update);
    }

    Ok(MembershipOutput {
        org: opts.org.to_owned(),
        definition: definition.label,
        definition_id: definition.id,
        view: view.label,
        view_id: view.id,
        change,
        views,
        dry_run: opts.dry_run,
    })
}
