use super::*;
use crate::model::ObservationPhase;
use log::info;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

/// Cuenta atrás del modo a ciegas. Pertenece al ticket del reto que la creó.
#[derive(Debug, Clone)]
pub struct Countdown {
    ticket: u64,
    remaining: u32,
    next_tick: Instant,
}

impl Countdown {
    pub fn new(ticket: u64, seconds: u32, now: Instant) -> Self {
        Self {
            ticket,
            remaining: seconds,
            next_tick: now + TICK,
        }
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Cuántos segundos completos han pasado desde el último tick
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while due < self.remaining && now >= self.next_tick {
            due += 1;
            self.next_tick += TICK;
        }
        due
    }

    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}

impl MirrorApp {
    pub(crate) fn start_countdown(&mut self, seconds: u32, now: Instant) {
        self.countdown = Some(Countdown::new(self.session.ticket(), seconds, now));
        self.session.view_time_remaining = Some(seconds);
    }

    pub(crate) fn cancel_countdown(&mut self) {
        self.countdown = None;
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Avanza la cuenta atrás según el reloj. La llama la interfaz cada frame.
    pub fn update_countdown(&mut self, now: Instant) {
        let due = match self.countdown.as_mut() {
            Some(countdown) => countdown.due_ticks(now),
            None => return,
        };
        for _ in 0..due {
            if self.countdown.is_none() {
                break;
            }
            self.countdown_tick();
        }
    }

    /// Un tick de un segundo. Al llegar a cero pasa a la extracción (una vez).
    pub fn countdown_tick(&mut self) {
        let ticket = self.session.ticket();
        let viewing = self.state == AppState::Observation(ObservationPhase::Viewing);

        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };
        // Tick de otro reto o fuera de la observación: se descarta
        if countdown.ticket != ticket || !viewing {
            debug!("dropping stale countdown tick");
            self.countdown = None;
            return;
        }

        countdown.remaining = countdown.remaining.saturating_sub(1);
        let remaining = countdown.remaining;
        self.session.view_time_remaining = Some(remaining);

        if remaining == 0 {
            info!("view time over for level {:?}", self.session.current_level());
            self.enter_extraction();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_ticks_counts_whole_seconds() {
        let start = Instant::now();
        let mut countdown = Countdown::new(1, 5, start);
        assert_eq!(countdown.due_ticks(start + Duration::from_millis(900)), 0);
        assert_eq!(countdown.due_ticks(start + Duration::from_millis(2_100)), 2);
        assert_eq!(countdown.due_ticks(start + Duration::from_millis(2_500)), 0);
        assert_eq!(countdown.due_ticks(start + Duration::from_secs(60)), 5);
    }

    #[test]
    fn until_next_tick_never_negative() {
        let start = Instant::now();
        let countdown = Countdown::new(1, 3, start);
        assert_eq!(countdown.until_next_tick(start + Duration::from_secs(5)), Duration::ZERO);
    }
}
