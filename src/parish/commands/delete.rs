use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::ConfirmationGate;
use crate::controller::ListController;
use crate::error::Result;
use crate::filter::{FilterState, Filterable};
use crate::model::{Record, RecordId};
use crate::source::DataSource;

use super::helpers::{listed, prepare};

pub async fn run<R, S, G>(
    ctl: &mut ListController<R, S>,
    filter: FilterState<R::Selectors>,
    id: RecordId,
    gate: &G,
) -> Result<CmdResult<R>>
where
    R: Filterable,
    S: DataSource<R>,
    G: ConfirmationGate + ?Sized,
{
    prepare(ctl, filter).await?;
    let mut result = CmdResult::default();

    match ctl.delete(id, gate).await? {
        Some(record) => {
            result.add_message(CmdMessage::success(format!(
                "Excluído ({} {}): {}",
                R::KIND,
                id,
                record.label()
            )));
            result.affected.push(record);
        }
        None => result.add_message(CmdMessage::info("Operação cancelada.")),
    }

    Ok(listed(ctl, result))
}
