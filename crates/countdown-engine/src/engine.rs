use std::time::Duration;

use chrono::TimeDelta;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, trace};

use crate::alert::Alert;
use crate::format::format_clock;
use crate::input::{Command, Key};
use crate::render::Renderer;
use crate::signals::{Signal, Signals};
use crate::surface::RenderSurface;
use crate::Result;

/// Interval between clock updates
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownConfig {
    /// Requested total duration; every (re)start arms the deadline with this value
    pub duration: TimeDelta,
    pub tick: Duration,
}

impl CountdownConfig {
    pub fn new(duration: TimeDelta) -> Self {
        Self {
            duration,
            tick: TICK,
        }
    }
}

/// How the countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The deadline fired
    Expired,
    /// The user pressed a quit key
    Quit,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Expired => 0,
            Outcome::Quit => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Paused,
    Terminated(Outcome),
}

enum Wakeup {
    Input(Option<Key>),
    Signal(Signal),
}

/// The countdown state machine.
///
/// Owns the deadline/ticker pair, consumes key presses from `input`, keeps the
/// remaining time and redraws it on every tick. Signals are only armed while
/// running; a paused countdown waits on input alone.
pub struct Countdown<S, A> {
    config: CountdownConfig,
    tick: TimeDelta,
    renderer: Renderer<S>,
    alert: A,
    input: UnboundedReceiver<Key>,
    input_open: bool,
    signals: Option<Signals>,
    remaining: TimeDelta,
    state: State,
}

impl<S, A> Countdown<S, A>
where
    S: RenderSurface,
    A: Alert,
{
    pub fn new(
        config: CountdownConfig,
        surface: S,
        alert: A,
        input: UnboundedReceiver<Key>,
    ) -> Self {
        Self {
            config,
            tick: TimeDelta::from_std(config.tick).unwrap_or(TimeDelta::seconds(1)),
            renderer: Renderer::new(surface),
            alert,
            input,
            input_open: true,
            signals: None,
            remaining: config.duration,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn remaining(&self) -> TimeDelta {
        self.remaining
    }

    /// Draw the first frame, run until the deadline fires or the user quits,
    /// then release the surface and play the alert.
    ///
    /// The surface is closed on every path out of the loop, including render
    /// failures; the alert only plays after a clean finish.
    pub async fn run(&mut self) -> Result<Outcome> {
        let looped = self.run_loop().await;
        let closed = self.renderer.close();
        let outcome = looped?;
        closed?;

        info!(?outcome, remaining = %format_clock(self.remaining), "countdown finished");
        self.alert.play()?;
        Ok(outcome)
    }

    async fn run_loop(&mut self) -> Result<Outcome> {
        self.renderer.render(self.remaining)?;
        self.start();

        loop {
            if let State::Terminated(outcome) = self.state {
                return Ok(outcome);
            }

            match self.wait().await {
                Wakeup::Input(Some(key)) => self.on_key(key),
                Wakeup::Input(None) => self.on_input_closed(),
                Wakeup::Signal(Signal::Tick) => self.on_tick()?,
                Wakeup::Signal(Signal::Deadline) => self.terminate(Outcome::Expired),
            }
        }
    }

    async fn wait(&mut self) -> Wakeup {
        let input = &mut self.input;
        let input_open = self.input_open;

        match self.signals.as_mut() {
            Some(signals) => tokio::select! {
                key = input.recv(), if input_open => Wakeup::Input(key),
                signal = signals.next() => Wakeup::Signal(signal),
            },
            // on_input_closed terminates before a paused countdown could get here
            None => Wakeup::Input(input.recv().await),
        }
    }

    fn on_key(&mut self, key: Key) {
        match Command::from_key(key) {
            Some(Command::Quit) => self.terminate(Outcome::Quit),
            Some(Command::Pause) => self.pause(),
            Some(Command::Restart) => self.start(),
            None => trace!(?key, "ignoring key"),
        }
    }

    fn on_input_closed(&mut self) {
        debug!("input source closed");
        self.input_open = false;
        if self.signals.is_none() {
            self.terminate(Outcome::Quit);
        }
    }

    fn on_tick(&mut self) -> Result<()> {
        self.remaining -= self.tick;
        trace!(remaining = %format_clock(self.remaining), "tick");
        self.renderer.render(self.remaining)?;
        Ok(())
    }

    /// Arm a fresh deadline for the full requested duration plus a fresh ticker.
    /// The remaining time is left as it is.
    fn start(&mut self) {
        debug!(
            duration = %format_clock(self.config.duration),
            remaining = %format_clock(self.remaining),
            "arming deadline and ticker"
        );
        self.signals = Some(Signals::arm(self.config.duration, self.config.tick));
        self.state = State::Running;
    }

    fn pause(&mut self) {
        debug!(remaining = %format_clock(self.remaining), "paused");
        self.signals = None;
        self.state = State::Paused;
    }

    fn terminate(&mut self, outcome: Outcome) {
        self.signals = None;
        self.state = State::Terminated(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MockSurface;
    use tokio::sync::mpsc;

    struct Silent;

    impl Alert for Silent {
        fn play(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn countdown(seconds: i64) -> Countdown<MockSurface, Silent> {
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut countdown = Countdown::new(
            CountdownConfig::new(TimeDelta::seconds(seconds)),
            MockSurface::new(80, 24),
            Silent,
            rx,
        );
        countdown.start();
        countdown
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_key_enters_paused_and_disarms_signals() {
        let mut countdown = countdown(5);
        assert_eq!(countdown.state(), State::Running);

        countdown.on_key(Key::Char('p'));
        assert_eq!(countdown.state(), State::Paused);
        assert!(countdown.signals.is_none());

        // Pausing again is a no-op
        countdown.on_key(Key::Char('P'));
        assert_eq!(countdown.state(), State::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_key_leaves_paused_state() {
        let mut countdown = countdown(5);
        countdown.on_key(Key::Char('p'));
        countdown.on_key(Key::Char('c'));

        assert_eq!(countdown.state(), State::Running);
        assert!(countdown.signals.is_some());
        assert_eq!(countdown.remaining(), TimeDelta::seconds(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_from_paused_terminates() {
        let mut countdown = countdown(5);
        countdown.on_key(Key::Char('p'));
        countdown.on_key(Key::Esc);

        assert_eq!(countdown.state(), State::Terminated(Outcome::Quit));
        assert!(countdown.signals.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_input_while_paused_quits() {
        let mut countdown = countdown(5);
        countdown.on_key(Key::Char('p'));
        countdown.on_input_closed();

        assert_eq!(countdown.state(), State::Terminated(Outcome::Quit));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmapped_key_keeps_state() {
        let mut countdown = countdown(5);
        countdown.on_key(Key::Other);
        countdown.on_key(Key::Char('x'));

        assert_eq!(countdown.state(), State::Running);
    }
}
