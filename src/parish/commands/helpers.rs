use crate::controller::ListController;
use crate::error::Result;
use crate::filter::{FilterState, Filterable};
use crate::source::DataSource;

use super::CmdResult;

/// Load the controller if needed, then apply `filter`.
pub async fn prepare<R, S>(
    ctl: &mut ListController<R, S>,
    filter: FilterState<R::Selectors>,
) -> Result<()>
where
    R: Filterable,
    S: DataSource<R>,
{
    if !ctl.is_ready() {
        ctl.load().await?;
    }
    ctl.set_filter(filter)
}

/// Snapshot the controller's current view into a result.
pub fn listed<R, S>(ctl: &ListController<R, S>, result: CmdResult<R>) -> CmdResult<R>
where
    R: Filterable,
    S: DataSource<R>,
{
    let (total, _) = ctl.counts();
    result.with_listed(ctl.view().to_vec(), total)
}
