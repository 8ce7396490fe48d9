use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::App;
use crate::runtime::{EventResult, key_handler};

pub(crate) fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> EventResult {
    // Wait for either a terminal event or the next redraw tick.
    let maybe_event = tokio::select! {
        biased;
        event = event_rx.recv() => event,
        _ = tick.tick() => None,
    };

    if matches!(process_event(app, maybe_event), EventResult::Quit) {
        return EventResult::Quit;
    }

    // Drain queued events so fast typing is not applied one key per frame.
    while let Ok(event) = event_rx.try_recv() {
        if matches!(process_event(app, Some(event)), EventResult::Quit) {
            return EventResult::Quit;
        }
    }

    EventResult::Continue
}

fn process_event(app: &mut App, event: Option<Event>) -> EventResult {
    if let Some(Event::Key(key)) = event
        && key.kind != KeyEventKind::Release
    {
        return key_handler::handle_key_event(app, key);
    }

    EventResult::Continue
}
