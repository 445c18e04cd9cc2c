//! Beacon lifecycle controller
//!
//! Owns the socket handle and the timer: waits out the startup delay,
//! then formats and sends one status datagram per tick until a shutdown
//! signal arrives. A failed send is logged and the loop keeps going.

use crate::config::BeaconConfig;
use crate::identity::IdentityProvider;
use crate::message;
use crate::sender::StatusSink;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, sleep};
use tracing::{error, info};

/// Lifecycle states. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconState {
    Idle,
    Waiting,
    Running,
    Stopped,
}

/// Wires the timer to the sender and owns both for its whole lifetime.
pub struct Beacon<S: StatusSink, P: IdentityProvider> {
    config: BeaconConfig,
    sink: S,
    identity: P,
    state: BeaconState,
}

impl<S: StatusSink, P: IdentityProvider> Beacon<S, P> {
    pub fn new(config: BeaconConfig, sink: S, identity: P) -> Self {
        Self {
            config,
            sink,
            identity,
            state: BeaconState::Idle,
        }
    }

    pub fn state(&self) -> BeaconState {
        self.state
    }

    /// Drive the beacon until `shutdown` resolves.
    ///
    /// The first tick fires one interval after the startup delay elapses,
    /// then every interval thereafter. Ticks are processed one at a time;
    /// a shutdown during the delay stops the beacon with zero sends.
    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);

        self.state = BeaconState::Waiting;
        info!(
            "waiting {}s for the device identity to become available...",
            self.config.startup_delay_ms / 1000
        );

        tokio::select! {
            _ = sleep(Duration::from_millis(self.config.startup_delay_ms)) => {}
            _ = &mut shutdown => {
                info!("shutdown requested before startup delay elapsed");
                self.stop();
                return;
            }
        }

        self.state = BeaconState::Running;
        info!(
            "broadcasting to {}:{} every {}ms",
            self.config.host, self.config.port, self.config.interval_ms
        );

        let mut ticker = interval(Duration::from_millis(self.config.interval_ms));
        // an interval's first tick completes immediately; consume it so
        // the first send lands one full interval after the delay
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick(),
                _ = &mut shutdown => break,
            }
        }

        // dropping the ticker cancels all pending ticks
        self.stop();
    }

    fn tick(&mut self) {
        // Identity is re-read on every tick: it can appear or change
        // after boot.
        let serial = self.identity.serial_number();
        let payload = message::status_now(&serial);

        match self.sink.send(payload.as_bytes()) {
            Ok(_) => info!("sent status: {}", payload),
            Err(e) => error!("{}", e),
        }
    }

    /// Close the socket and enter the terminal state. Idempotent.
    pub fn stop(&mut self) {
        if self.state == BeaconState::Stopped {
            return;
        }
        self.state = BeaconState::Stopped;
        self.sink.close();
        info!("beacon stopped");
    }
}
