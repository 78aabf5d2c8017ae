//! Scripted in-memory chain implementing every chain port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use presale::domain::{Account, Confirmation, ContractAddress, PurchaseState, TokenKind};
use presale::error::ChainError;
use presale::port::{PaymentToken, PendingTransaction, PresaleContract, TokenBalances};
use tokio::sync::{watch, Notify};

pub const PRESALE: &str = "0x2222222222222222222222222222222222222222";
pub const BUYER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// One port call, with the workflow state observed when it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    BalanceOf(TokenKind),
    Allowance,
    Approve { units: u128, state: PurchaseState },
    BuyTokens { units: u128, state: PurchaseState },
}

/// How a submitted transaction's confirmation resolves.
#[derive(Clone)]
pub enum Outcome {
    Confirmed,
    Reverted,
    /// Confirm only after the gate is notified.
    Gated(Arc<Notify>),
    Never,
}

#[derive(Default)]
struct Script {
    allowance: u128,
    balances: HashMap<TokenKind, u128>,
    allowance_error: Option<ChainError>,
    balance_error: Option<ChainError>,
    approve_error: Option<ChainError>,
    buy_error: Option<ChainError>,
    approve_outcome: Option<Outcome>,
    buy_outcome: Option<Outcome>,
    calls: Vec<Call>,
    tx_counter: u64,
}

#[derive(Clone)]
pub struct ScriptedChain {
    script: Arc<Mutex<Script>>,
    presale: ContractAddress,
    state: Arc<Mutex<Option<watch::Receiver<PurchaseState>>>>,
}

impl Default for ScriptedChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedChain {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::default())),
            presale: ContractAddress::from(PRESALE),
            state: Arc::new(Mutex::new(None)),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Script) -> R) -> R {
        f(&mut self.script.lock().expect("lock script"))
    }

    pub fn set_allowance(&self, units: u128) {
        self.with(|s| s.allowance = units);
    }

    pub fn set_balance(&self, token: TokenKind, units: u128) {
        self.with(|s| {
            s.balances.insert(token, units);
        });
    }

    pub fn fail_allowance(&self, err: ChainError) {
        self.with(|s| s.allowance_error = Some(err));
    }

    pub fn fail_balances(&self, err: Option<ChainError>) {
        self.with(|s| s.balance_error = err);
    }

    pub fn fail_approve(&self, err: ChainError) {
        self.with(|s| s.approve_error = Some(err));
    }

    pub fn fail_buy(&self, err: ChainError) {
        self.with(|s| s.buy_error = Some(err));
    }

    pub fn approve_outcome(&self, outcome: Outcome) {
        self.with(|s| s.approve_outcome = Some(outcome));
    }

    pub fn buy_outcome(&self, outcome: Outcome) {
        self.with(|s| s.buy_outcome = Some(outcome));
    }

    /// Record the workflow state alongside each write.
    pub fn observe(&self, state: watch::Receiver<PurchaseState>) {
        *self.state.lock().expect("lock observer") = Some(state);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.with(|s| s.calls.clone())
    }

    pub fn approvals(&self) -> Vec<u128> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Approve { units, .. } => Some(units),
                _ => None,
            })
            .collect()
    }

    pub fn purchases(&self) -> Vec<u128> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::BuyTokens { units, .. } => Some(units),
                _ => None,
            })
            .collect()
    }

    pub fn balance_reads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::BalanceOf(_)))
            .count()
    }

    fn observed_state(&self) -> PurchaseState {
        self.state
            .lock()
            .expect("lock observer")
            .as_ref()
            .map_or(PurchaseState::Idle, |rx| *rx.borrow())
    }

    fn next_hash(&self) -> String {
        self.with(|s| {
            s.tx_counter += 1;
            format!("0x{:064x}", s.tx_counter)
        })
    }
}

#[async_trait]
impl TokenBalances for ScriptedChain {
    async fn balance_of(&self, token: TokenKind, _owner: &Account) -> Result<u128, ChainError> {
        self.with(|s| {
            s.calls.push(Call::BalanceOf(token));
            match &s.balance_error {
                Some(err) => Err(err.clone()),
                None => Ok(s.balances.get(&token).copied().unwrap_or_default()),
            }
        })
    }
}

#[async_trait]
impl PaymentToken for ScriptedChain {
    async fn allowance(
        &self,
        _owner: &Account,
        _spender: &ContractAddress,
    ) -> Result<u128, ChainError> {
        self.with(|s| {
            s.calls.push(Call::Allowance);
            match &s.allowance_error {
                Some(err) => Err(err.clone()),
                None => Ok(s.allowance),
            }
        })
    }

    async fn approve(
        &self,
        _spender: &ContractAddress,
        units: u128,
    ) -> Result<Box<dyn PendingTransaction>, ChainError> {
        let state = self.observed_state();
        let (error, outcome) = self.with(|s| {
            s.calls.push(Call::Approve { units, state });
            (s.approve_error.clone(), s.approve_outcome.clone())
        });
        if let Some(err) = error {
            return Err(err);
        }
        let outcome = outcome.unwrap_or(Outcome::Confirmed);
        if matches!(outcome, Outcome::Confirmed) {
            self.with(|s| s.allowance = units);
        }
        Ok(Box::new(ScriptedPending {
            tx_hash: self.next_hash(),
            outcome,
        }))
    }
}

#[async_trait]
impl PresaleContract for ScriptedChain {
    fn address(&self) -> &ContractAddress {
        &self.presale
    }

    async fn buy_tokens(&self, units: u128) -> Result<Box<dyn PendingTransaction>, ChainError> {
        let state = self.observed_state();
        let (error, outcome) = self.with(|s| {
            s.calls.push(Call::BuyTokens { units, state });
            (s.buy_error.clone(), s.buy_outcome.clone())
        });
        if let Some(err) = error {
            return Err(err);
        }
        Ok(Box::new(ScriptedPending {
            tx_hash: self.next_hash(),
            outcome: outcome.unwrap_or(Outcome::Confirmed),
        }))
    }
}

struct ScriptedPending {
    tx_hash: String,
    outcome: Outcome,
}

#[async_trait]
impl PendingTransaction for ScriptedPending {
    fn tx_hash(&self) -> String {
        self.tx_hash.clone()
    }

    async fn confirm(self: Box<Self>) -> Result<Confirmation, ChainError> {
        match self.outcome {
            Outcome::Confirmed => {}
            Outcome::Reverted => {
                return Err(ChainError::Reverted {
                    tx_hash: self.tx_hash,
                });
            }
            Outcome::Gated(gate) => gate.notified().await,
            Outcome::Never => std::future::pending::<()>().await,
        }
        Ok(Confirmation {
            tx_hash: self.tx_hash,
            block_number: Some(1),
        })
    }
}
