//! Hazard notification channel.
//!
//! Only some container kinds can raise hazard notices (see
//! [`Container::hazard_reporter`](super::Container::hazard_reporter)). When a
//! liquid container rejects a load, it sends one [`HazardNotice`] through the
//! [`HazardNotifier`] supplied by the caller before the overfill error is
//! returned. Gas loads fail without a notice.

use serde::Serialize;
use tracing::warn;

use super::serial::SerialNumber;

/// Alert describing a dangerous load attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazardNotice {
    pub serial: SerialNumber,
    pub attempted_kg: f64,
    pub ceiling_kg: f64,
    pub message: String,
}

/// Sink receiving hazard notices. Calls are synchronous.
pub trait HazardNotifier {
    fn notify(&mut self, notice: HazardNotice);
}

impl<N: HazardNotifier + ?Sized> HazardNotifier for &mut N {
    fn notify(&mut self, notice: HazardNotice) {
        (**self).notify(notice);
    }
}

impl<N: HazardNotifier + ?Sized> HazardNotifier for Box<N> {
    fn notify(&mut self, notice: HazardNotice) {
        (**self).notify(notice);
    }
}

/// Default notifier that emits each notice as a `warn` tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHazardNotifier;

impl HazardNotifier for TracingHazardNotifier {
    fn notify(&mut self, notice: HazardNotice) {
        warn!(
            serial = %notice.serial,
            attempted_kg = notice.attempted_kg,
            ceiling_kg = notice.ceiling_kg,
            "{}",
            notice.message
        );
    }
}

/// Notifier that keeps every notice it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingHazardNotifier {
    notices: Vec<HazardNotice>,
}

impl RecordingHazardNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[HazardNotice] {
        &self.notices
    }

    /// Remove and return all collected notices.
    pub fn drain(&mut self) -> Vec<HazardNotice> {
        std::mem::take(&mut self.notices)
    }
}

impl HazardNotifier for RecordingHazardNotifier {
    fn notify(&mut self, notice: HazardNotice) {
        self.notices.push(notice);
    }
}
