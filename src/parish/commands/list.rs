use crate::commands::{CmdMessage, CmdResult};
use crate::controller::ListController;
use crate::error::Result;
use crate::filter::{FilterState, Filterable};
use crate::source::DataSource;

use super::helpers::{listed, prepare};

pub async fn run<R, S>(
    ctl: &mut ListController<R, S>,
    filter: FilterState<R::Selectors>,
) -> Result<CmdResult<R>>
where
    R: Filterable,
    S: DataSource<R>,
{
    prepare(ctl, filter).await?;
    let mut result = listed(ctl, CmdResult::default());
    if result.listed.is_empty() && result.total > 0 {
        result.add_message(CmdMessage::info(format!(
            "Nenhum resultado para o filtro atual ({} registros no total).",
            result.total
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Selector, UserSelectors};
    use crate::model::{Role, User};
    use crate::source::seed::SeedSource;

    #[tokio::test]
    async fn lists_the_filtered_view() {
        let mut ctl: ListController<User, _> = ListController::new(SeedSource::demo());
        let result = run(&mut ctl, FilterState::<UserSelectors>::with_term("maria"))
            .await
            .unwrap();

        let names: Vec<_> = result.listed.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Maria Santos"]);
        assert_eq!(result.total, 4);
        assert!(result.messages.is_empty());
    }

    #[tokio::test]
    async fn explains_an_empty_view() {
        let mut ctl: ListController<User, _> = ListController::new(SeedSource::demo());
        let filter = FilterState::new(
            "maria",
            UserSelectors {
                role: Selector::Is(Role::Admin),
                active: Selector::Any,
            },
        );
        let result = run(&mut ctl, filter).await.unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
