//! Debounced live evaluation.
//!
//! Each input change submits the current password; a pending evaluation is
//! cancelled when a newer one arrives, so only the last input of a burst
//! produces a result on the channel.

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::LiveConfig;
use crate::evaluator::evaluate_password_strength;
use crate::strength::PasswordEvaluation;

/// Waits for the debounce delay, then evaluates and sends the result.
///
/// Nothing is sent if `token` is cancelled before the delay elapses.
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
    config: &LiveConfig,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(config.debounce) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

/// Drives re-evaluation from input-change notifications.
pub struct LiveEvaluator {
    tx: mpsc::Sender<PasswordEvaluation>,
    config: LiveConfig,
    pending: Option<CancellationToken>,
}

impl LiveEvaluator {
    pub fn new(tx: mpsc::Sender<PasswordEvaluation>, config: LiveConfig) -> Self {
        Self {
            tx,
            config,
            pending: None,
        }
    }

    /// Schedules an evaluation of `password`, superseding any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, password: SecretString) -> JoinHandle<()> {
        self.cancel();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let tx = self.tx.clone();
        let config = self.config;
        tokio::spawn(async move {
            evaluate_password_strength_tx(&password, token, tx, &config).await;
        })
    }

    /// Cancels the pending evaluation, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for LiveEvaluator {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::Strength;
    use std::time::Duration;
    use tokio::time::Instant;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_waits_for_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let config = LiveConfig::with_debounce(Duration::from_millis(300));
        let start = Instant::now();

        evaluate_password_strength_tx(&secret("Abcdefg1"), CancellationToken::new(), tx, &config)
            .await;

        assert!(start.elapsed() >= Duration::from_millis(300));
        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.strength(), Strength::Good);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_strength_tx(&secret("Abcdefg1!"), token, tx, &LiveConfig::default())
            .await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_zero_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let config = LiveConfig::with_debounce(Duration::ZERO);

        evaluate_password_strength_tx(&secret(""), CancellationToken::new(), tx, &config).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.strength(), Strength::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must complete without panicking.
        evaluate_password_strength_tx(&secret("abc"), CancellationToken::new(), tx, &LiveConfig::default())
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_evaluator_keeps_latest_input() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut live = LiveEvaluator::new(tx, LiveConfig::default());

        let first = live.submit(secret("a"));
        let second = live.submit(secret("Abcdefg1!"));
        first.await.expect("first task");
        second.await.expect("second task");
        drop(live);

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.strength(), Strength::Strong);
        assert_eq!(evaluation.rules.0, [true, true, true, true]);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_evaluator_sequential_inputs() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut live = LiveEvaluator::new(tx, LiveConfig::with_debounce(Duration::from_millis(50)));

        live.submit(secret("Abcdefgh")).await.expect("task");
        live.submit(secret("Abcdefg1")).await.expect("task");

        assert_eq!(rx.recv().await.map(|e| e.strength()), Some(Strength::Fair));
        assert_eq!(rx.recv().await.map(|e| e.strength()), Some(Strength::Good));
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_evaluator_drop_cancels_pending() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut live = LiveEvaluator::new(tx, LiveConfig::default());

        let handle = live.submit(secret("Abcdefg1!"));
        drop(live);
        handle.await.expect("task");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_evaluator_cancel() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut live = LiveEvaluator::new(tx, LiveConfig::default());

        let handle = live.submit(secret("Abcdefg1!"));
        live.cancel();
        handle.await.expect("task");

        assert!(rx.try_recv().is_err());
    }
}
