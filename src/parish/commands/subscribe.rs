use crate::commands::{CmdMessage, CmdResult};
use crate::controller::ListController;
use crate::error::Result;
use crate::filter::{EventSelectors, FilterState};
use crate::model::{Event, RecordId};
use crate::source::DataSource;

use super::helpers::{listed, prepare};

pub async fn subscribe<S: DataSource<Event>>(
    ctl: &mut ListController<Event, S>,
    filter: FilterState<EventSelectors>,
    event_id: RecordId,
    participant: RecordId,
) -> Result<CmdResult<Event>> {
    prepare(ctl, filter).await?;
    let event = ctl.update(event_id, |event| {
        event.subscribe(participant)?;
        Ok(event.clone())
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Inscrição confirmada: participante {} em {}",
        participant, event.title
    )));
    if let Some(spots) = event.spots_left() {
        let message = format!("{} vaga(s) restante(s)", spots);
        if spots == 0 {
            result.add_message(CmdMessage::warning(message));
        } else {
            result.add_message(CmdMessage::info(message));
        }
    }
    result.affected.push(event);
    Ok(listed(ctl, result))
}

pub async fn unsubscribe<S: DataSource<Event>>(
    ctl: &mut ListController<Event, S>,
    filter: FilterState<EventSelectors>,
    event_id: RecordId,
    participant: RecordId,
) -> Result<CmdResult<Event>> {
    prepare(ctl, filter).await?;
    let event = ctl.update(event_id, |event| {
        event.unsubscribe(participant)?;
        Ok(event.clone())
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Inscrição cancelada: participante {} em {}",
        participant, event.title
    )));
    result.affected.push(event);
    Ok(listed(ctl, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ParishError;
    use crate::source::seed::SeedSource;

    #[tokio::test]
    async fn subscription_updates_the_listed_event() {
        let mut ctl = ListController::new(SeedSource::demo());
        let result = subscribe(&mut ctl, FilterState::default(), 2, 9)
            .await
            .unwrap();

        let retiro = result.listed.iter().find(|e| e.id == 2).unwrap();
        assert!(retiro.is_subscribed(9));
        assert_eq!(retiro.spots_left(), Some(27));
    }

    #[tokio::test]
    async fn full_event_rejects_and_keeps_participants() {
        let mut ctl = ListController::new(SeedSource::demo());
        let err = subscribe(&mut ctl, FilterState::default(), 3, 9)
            .await
            .unwrap_err();
        assert!(matches!(err, ParishError::EventFull { event: 3, capacity: 2 }));
        assert_eq!(ctl.get(3).unwrap().participants, vec![1, 4]);
    }

    #[tokio::test]
    async fn unsubscribe_frees_a_spot_on_a_full_event() {
        let mut ctl = ListController::new(SeedSource::demo());
        unsubscribe(&mut ctl, FilterState::default(), 3, 4)
            .await
            .unwrap();
        let result = subscribe(&mut ctl, FilterState::default(), 3, 9)
            .await
            .unwrap();
        assert_eq!(result.affected[0].participants, vec![1, 9]);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
    }
}
