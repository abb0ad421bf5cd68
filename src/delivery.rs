//! Getting a finished night in front of the players. The engine never
//! calls into this module; the binary wires an outcome through it.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::constants::countdown_events;
use crate::types::NightOutcome;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("could not reach {handle}: {reason}")]
    Unreachable { handle: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output shared by every observer, plus private messages to remote
/// handles.
pub trait Delivery {
    fn display(&mut self, text: &str);
    fn direct_message(&mut self, handle: &str, text: &str) -> Result<(), DeliveryError>;
}

/// Maps a player name to a remote handle. `None` means the player reads
/// their log on the shared device.
pub trait IdentityResolver {
    fn resolve(&self, name: &str) -> Option<String>;
}

impl IdentityResolver for BTreeMap<String, String> {
    fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Turn-taking on one shared device.
pub trait PassAndPlay {
    fn hand_to(&mut self, name: &str) -> Result<(), DeliveryError>;
    fn show_private(&mut self, lines: &[String]) -> Result<(), DeliveryError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    pub remote: Vec<String>,
    pub local: Vec<String>,
    pub failed: Vec<String>,
}

/// Sends each player their private log, remotely when the resolver
/// knows them and on the shared device otherwise, then shows the wake
/// order to everyone. A failed remote send falls back to the device.
pub fn deliver_night<D, R, P>(
    outcome: &NightOutcome,
    delivery: &mut D,
    resolver: &R,
    device: &mut P,
) -> Result<DeliveryReport, DeliveryError>
where
    D: Delivery + ?Sized,
    R: IdentityResolver + ?Sized,
    P: PassAndPlay + ?Sized,
{
    let mut report = DeliveryReport::default();
    delivery.display(&outcome.seating_text());

    let mut local = Vec::new();
    for log in &outcome.private_logs {
        match resolver.resolve(&log.name) {
            Some(handle) => match delivery.direct_message(&handle, &log.messages.join("\n")) {
                Ok(()) => report.remote.push(log.name.clone()),
                Err(_) => {
                    report.failed.push(log.name.clone());
                    local.push(log);
                }
            },
            None => local.push(log),
        }
    }

    for log in local {
        device.hand_to(&log.name)?;
        device.show_private(&log.messages)?;
        report.local.push(log.name.clone());
    }

    delivery.display(&outcome.wake_order_text());
    Ok(report)
}

pub fn reveal<D: Delivery + ?Sized>(outcome: &NightOutcome, delivery: &mut D) {
    delivery.display(&outcome.reveal_text());
}

/// Announcements at fixed offsets from the start of the day.
#[derive(Clone, Debug)]
pub struct Countdown {
    events: Vec<(u64, String)>,
}

impl Countdown {
    pub fn new(events: Vec<(u64, String)>) -> Self {
        Self { events }
    }

    /// Think for a minute, discuss for five, warn thirty seconds before
    /// the vote.
    pub fn standard() -> Self {
        Self::new(
            countdown_events()
                .into_iter()
                .map(|(at, text)| (at, text.to_string()))
                .collect(),
        )
    }

    pub fn run<D, S>(&self, delivery: &mut D, mut sleep: S)
    where
        D: Delivery + ?Sized,
        S: FnMut(Duration),
    {
        let mut current = 0u64;
        for (at, text) in &self.events {
            let wait = at.saturating_sub(current);
            if wait > 0 {
                sleep(Duration::from_secs(wait));
            }
            current = current.max(*at);
            delivery.display(text);
        }
    }
}
