/// `views` command: list the content views of a definition.
use tracing::debug;

use crate::api::{ContentViewApi, View};
use crate::cli::OutputCtx;
use crate::cli::args::ViewsArgs;
use crate::cli::output::write_views;
use crate::definition::{ActionError, resolve_definition};
use crate::types::ViewOutput;

/// Run `cvdcli views`.
///
/// # Errors
///
/// Returns `ActionError::DefinitionNotFound` for an unknown definition, or
/// `ActionError::Remote` / `ActionError::Config` on connection problems.
pub fn run<A, F>(args: &ViewsArgs, connect: F, ctx: &OutputCtx) -> Result<(), ActionError>
where
    A: ContentViewApi,
    F: FnOnce() -> Result<A, ActionError>,
{
    let api = connect()?;
    let views = execute(args, &api, ctx)?;
    let output: Vec<ViewOutput> = views.iter().map(ViewOutput::from).collect();
    write_views(&output, ctx);
    Ok(())
}

/// Resolve the definition and fetch its views.
///
/// # Errors
///
/// See [`run`].
pub fn execute<A>(args: &ViewsArgs, api: &A, ctx: &OutputCtx) -> Result<Vec<View>, ActionError>
where
    A: ContentViewApi + ?Sized,
{
    let _t_def = ctx.timer("resolve_definition");
    let definition = resolve_definition(api, &args.org, &args.label)?;
    drop(_t_def);

    let _t_list = ctx.timer("list_views");
    let views = api.list_views(definition.id)?;
    drop(_t_list);

    debug!(definition = definition.id, count = views.len(), "fetched views");
    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeApi, definition, view};
    use crate::cli::OutputFormat;

    fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Json, false, false, false)
    }

    fn args() -> ViewsArgs {
        ViewsArgs {
            org: "ACME".into(),
            label: "def1".into(),
        }
    }

    #[test]
    fn test_lists_definition_views() {
        let members = vec![view(1, "view1", "View 1"), view(2, "view2", "View 2")];
        let api = FakeApi::new(Some(definition(7, "def1")), None, members.clone());
        let views = execute(&args(), &api, &ctx()).unwrap();
        assert_eq!(views, members);
        assert_eq!(api.list_calls(), vec![7]);
    }

    #[test]
    fn test_unknown_definition_is_data_error() {
        let api = FakeApi::new(None, None, vec![]);
        let err = execute(&args(), &api, &ctx()).unwrap_err();
        assert!(matches!(err, ActionError::DefinitionNotFound { .. }));
        assert!(api.list_calls().is_empty());
    }

    #[test]
    fn test_connect_failure_propagates() {
        let result = run(
            &args(),
            || Err::<FakeApi, _>(ActionError::Config("bad url".into())),
            &ctx(),
        );
        assert!(matches!(result, Err(ActionError::Config(_))));
    }
}
