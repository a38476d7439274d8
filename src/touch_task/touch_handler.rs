//! Turns polled touch frames into press / move / release events

use axs5106l::{TouchPoint, TouchPoints};
use defmt::{debug, info, Format};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Format)]
pub(crate) enum TouchEvent {
    Pressed { x: u16, y: u16 },
    Moved { x: u16, y: u16 },
    Released { x: u16, y: u16 },
}

pub(crate) struct TouchHandler {
    last_touch_point: Option<TouchPoint>,
}

impl TouchHandler {
    pub(crate) fn new() -> Self {
        Self {
            last_touch_point: None,
        }
    }

    pub(crate) fn handle_new_touch_points(&mut self, points: &TouchPoints) {
        for point in points.iter().skip(1) {
            debug!("Secondary touch {}", point);
        }
        let event: Option<TouchEvent>;
        (self.last_touch_point, event) =
            Self::evaluate_touch_point(points.first().copied(), self.last_touch_point);
        if let Some(event) = event {
            info!("Event {}", event);
        }
    }

    /// Only the first contact drives the pointer. Ids are per frame, so a
    /// changed first slot is reported as a move.
    fn evaluate_touch_point(
        touch_point: Option<TouchPoint>,
        last_touch_point: Option<TouchPoint>,
    ) -> (Option<TouchPoint>, Option<TouchEvent>) {
        let event = match (touch_point, last_touch_point) {
            (Some(p), None) => Some(TouchEvent::Pressed { x: p.x, y: p.y }),
            (Some(p), Some(last)) if p.x != last.x || p.y != last.y => {
                Some(TouchEvent::Moved { x: p.x, y: p.y })
            }
            (Some(_), Some(_)) => None,
            (None, Some(last)) => Some(TouchEvent::Released {
                x: last.x,
                y: last.y,
            }),
            (None, None) => None,
        };
        (touch_point, event)
    }
}
