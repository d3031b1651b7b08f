use crate::commands::{CmdMessage, CmdResult};
use crate::controller::ListController;
use crate::error::Result;
use crate::filter::{FilterState, Filterable};
use crate::model::{RecordId, Toggle};
use crate::source::DataSource;

use super::helpers::{listed, prepare};

pub async fn run<R, S>(
    ctl: &mut ListController<R, S>,
    filter: FilterState<R::Selectors>,
    id: RecordId,
) -> Result<CmdResult<R>>
where
    R: Filterable + Toggle,
    S: DataSource<R>,
{
    prepare(ctl, filter).await?;
    let record = ctl.toggle(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Status alterado ({} {}): {} agora está {}",
        R::KIND,
        id,
        record.label(),
        record.status()
    )));
    result.affected.push(record);
    Ok(listed(ctl, result))
}
