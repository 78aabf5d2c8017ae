//! Purchase orchestrator.
//!
//! Sequences the two dependent transactions of a presale buy:
//!
//! ```text
//! Idle ──(allowance short)──► AwaitingApproval ──► AwaitingConfirmation ──► Idle
//!   └──────────(allowance sufficient)──────────────────────┘
//! ```
//!
//! Any failure returns straight to `Idle` with an error notification; the
//! approval, when needed, is fully confirmed before the purchase is sent.
//! Only one attempt may be in flight per orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::allowance::AllowanceGate;
use super::balance::BalanceReader;
use super::notification::NotificationEmitter;
use crate::domain::rate::{echo_payment_amount, estimate_sale_tokens, PRESALE_PRICE};
use crate::domain::{
    Account, Confirmation, Notification, PurchaseReceipt, PurchaseState, TokenAmount, TokenKind,
};
use crate::error::PurchaseError;
use crate::port::{PaymentToken, PendingTransaction, PresaleContract};

/// Message shown after a confirmed purchase.
pub const PURCHASE_SUCCESS_MESSAGE: &str = "Token purchase successful!";

/// Clears the in-flight flag and resets the state when an attempt ends,
/// including when the attempt's future is dropped mid-flight.
struct FlightGuard<'a> {
    in_flight: &'a AtomicBool,
    state: &'a watch::Sender<PurchaseState>,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.state.send_replace(PurchaseState::Idle);
        self.in_flight.store(false, Ordering::Release);
    }
}

/// Drives allowance raising and purchase submission for one buyer.
pub struct PurchaseOrchestrator {
    gate: AllowanceGate,
    token: Arc<dyn PaymentToken>,
    presale: Arc<dyn PresaleContract>,
    balances: Arc<BalanceReader>,
    notifications: NotificationEmitter,
    input: Mutex<String>,
    price: Decimal,
    confirmation_timeout: Option<Duration>,
    in_flight: AtomicBool,
    state: watch::Sender<PurchaseState>,
}

impl PurchaseOrchestrator {
    pub fn new(
        token: Arc<dyn PaymentToken>,
        presale: Arc<dyn PresaleContract>,
        balances: Arc<BalanceReader>,
        notifications: NotificationEmitter,
    ) -> Self {
        let (state, _) = watch::channel(PurchaseState::Idle);
        Self {
            gate: AllowanceGate::new(Arc::clone(&token)),
            token,
            presale,
            balances,
            notifications,
            input: Mutex::new(String::new()),
            price: PRESALE_PRICE,
            confirmation_timeout: None,
            in_flight: AtomicBool::new(false),
            state,
        }
    }

    /// Override the presale price used for estimates.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Bound every confirmation wait. `None` waits indefinitely.
    #[must_use]
    pub fn with_confirmation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    // --- Input ---

    pub fn set_input(&self, input: impl Into<String>) {
        *self.input.lock() = input.into();
    }

    #[must_use]
    pub fn input(&self) -> String {
        self.input.lock().clone()
    }

    /// Fill the input with the whole cached PaymentToken balance.
    pub fn set_max(&self) {
        self.set_input(self.balances.max_payment().normalize().to_string());
    }

    /// Expected SaleToken output for the current input.
    #[must_use]
    pub fn estimate(&self) -> String {
        estimate_sale_tokens(&self.input.lock(), self.price)
    }

    /// Current input as a two-decimal dollar amount.
    #[must_use]
    pub fn input_echo(&self) -> String {
        echo_payment_amount(&self.input.lock())
    }

    /// Whether a submission would be acted upon right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire) && !self.input.lock().trim().is_empty()
    }

    // --- State ---

    #[must_use]
    pub fn state(&self) -> PurchaseState {
        *self.state.borrow()
    }

    /// Observe state transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PurchaseState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn balances(&self) -> &Arc<BalanceReader> {
        &self.balances
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationEmitter {
        &self.notifications
    }

    fn set_state(&self, next: PurchaseState) {
        let previous = self.state.send_replace(next);
        debug!(from = %previous, to = %next, "Purchase state");
    }

    // --- Workflow ---

    /// Buy SaleToken with the amount currently in the input.
    ///
    /// A submission while another attempt is in flight returns
    /// [`PurchaseError::InProgress`] without touching the chain or the
    /// notification slot. Every other outcome produces exactly one
    /// notification.
    ///
    /// # Errors
    ///
    /// Returns the [`PurchaseError`] that ended the attempt.
    pub async fn submit(&self, account: Option<&Account>) -> Result<PurchaseReceipt, PurchaseError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Purchase already in progress; submission ignored");
            return Err(PurchaseError::InProgress);
        }
        let _guard = FlightGuard {
            in_flight: &self.in_flight,
            state: &self.state,
        };

        let Some(account) = account else {
            return Err(self.fail(PurchaseError::NotConnected));
        };

        let amount = match TokenAmount::parse(TokenKind::Payment, &self.input()) {
            Ok(amount) => amount,
            Err(e) => return Err(self.fail(e.into())),
        };

        info!(account = %account, amount = %amount, "Purchase started");

        match self.execute(account, amount).await {
            Ok(receipt) => {
                self.set_state(PurchaseState::Idle);
                self.input.lock().clear();
                self.balances.refresh(Some(account)).await;
                info!(
                    account = %account,
                    tx_hash = %receipt.purchase.tx_hash,
                    approved = receipt.approval.is_some(),
                    "Purchase confirmed"
                );
                self.notifications
                    .emit(Notification::success(PURCHASE_SUCCESS_MESSAGE));
                Ok(receipt)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    async fn execute(
        &self,
        account: &Account,
        amount: TokenAmount,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let spender = self.presale.address().clone();

        let check = self
            .gate
            .check(account, &spender, amount)
            .await
            .map_err(|e| PurchaseError::AllowanceQueryFailed(e.reason()))?;

        let approval = if check.needs_approval() {
            self.set_state(PurchaseState::AwaitingApproval);
            let pending = self
                .token
                .approve(&spender, amount.units())
                .await
                .map_err(|e| PurchaseError::ApprovalFailed(e.reason()))?;
            info!(tx_hash = %pending.tx_hash(), units = amount.units(), "Approval submitted");
            Some(
                self.confirm("Approval", pending, PurchaseError::ApprovalFailed)
                    .await?,
            )
        } else {
            None
        };

        self.set_state(PurchaseState::AwaitingConfirmation);
        let pending = self
            .presale
            .buy_tokens(amount.units())
            .await
            .map_err(|e| PurchaseError::PurchaseFailed(e.reason()))?;
        info!(tx_hash = %pending.tx_hash(), units = amount.units(), "Purchase submitted");
        let purchase = self
            .confirm("Purchase", pending, PurchaseError::PurchaseFailed)
            .await?;

        Ok(PurchaseReceipt {
            approval,
            purchase,
            paid_units: amount.units(),
        })
    }

    async fn confirm(
        &self,
        step: &'static str,
        pending: Box<dyn PendingTransaction>,
        on_error: fn(String) -> PurchaseError,
    ) -> Result<Confirmation, PurchaseError> {
        let wait = pending.confirm();
        let result = match self.confirmation_timeout {
            Some(limit) => tokio::time::timeout(limit, wait).await.map_err(|_| {
                PurchaseError::ConfirmationTimeout {
                    step,
                    secs: limit.as_secs(),
                }
            })?,
            None => wait.await,
        };
        result.map_err(|e| on_error(e.reason()))
    }

    fn fail(&self, err: PurchaseError) -> PurchaseError {
        error!(error = %err, state = %self.state(), "Purchase failed");
        self.notifications.emit(Notification::error(err.to_string()));
        err
    }
}
