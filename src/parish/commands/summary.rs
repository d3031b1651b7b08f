use crate::commands::KindCount;
use crate::controller::ListController;
use crate::error::Result;
use crate::filter::Filterable;
use crate::source::DataSource;

/// Count one kind's records, loading the controller if needed.
pub async fn count<R, S>(ctl: &mut ListController<R, S>) -> Result<KindCount>
where
    R: Filterable,
    S: DataSource<R>,
{
    if !ctl.is_ready() {
        ctl.load().await?;
    }
    let (total, visible) = ctl.counts();
    Ok(KindCount {
        kind: R::KIND,
        total,
        visible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, RecordKind};
    use crate::source::seed::SeedSource;

    #[tokio::test]
    async fn counts_after_filtering() {
        let mut ctl: ListController<Member, _> = ListController::new(SeedSource::demo());
        let fresh = count(&mut ctl).await.unwrap();
        assert_eq!(fresh.kind, RecordKind::Member);
        assert_eq!((fresh.total, fresh.visible), (5, 5));

        ctl.set_term("ferreira").unwrap();
        let narrowed = count(&mut ctl).await.unwrap();
        assert_eq!((narrowed.total, narrowed.visible), (5, 1));
    }
}
