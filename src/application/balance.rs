//! Balance reader.
//!
//! Fetches PaymentToken and SaleToken balances together and caches the last
//! successful pair for display. Balances are best-effort: a failed refresh
//! is logged and the previous pair stays in place.

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{Account, Balances, DomainError, TokenAmount, TokenKind};
use crate::port::TokenBalances;

/// Reads and caches both token balances for the connected account.
pub struct BalanceReader {
    ledger: Arc<dyn TokenBalances>,
    cached: RwLock<Balances>,
    /// Account the cache was last refreshed for.
    last_account: RwLock<Option<Account>>,
}

impl BalanceReader {
    /// Create a reader with zeroed balances.
    pub fn new(ledger: Arc<dyn TokenBalances>) -> Self {
        Self {
            ledger,
            cached: RwLock::new(Balances::default()),
            last_account: RwLock::new(None),
        }
    }

    /// Last successfully fetched balances.
    #[must_use]
    pub fn cached(&self) -> Balances {
        *self.cached.read()
    }

    /// Cached PaymentToken balance, used for the max-amount shortcut.
    #[must_use]
    pub fn max_payment(&self) -> Decimal {
        self.cached.read().payment
    }

    /// Refresh both balances for `account`.
    ///
    /// A disconnected wallet is a no-op. Returns the new pair on success and
    /// `None` when nothing was fetched; failures leave the cache untouched.
    pub async fn refresh(&self, account: Option<&Account>) -> Option<Balances> {
        let account = account?;

        let (payment, sale) = tokio::join!(
            self.ledger.balance_of(TokenKind::Payment, account),
            self.ledger.balance_of(TokenKind::Sale, account),
        );

        let (payment, sale) = match (payment, sale) {
            (Ok(payment), Ok(sale)) => (payment, sale),
            (Err(e), _) | (_, Err(e)) => {
                warn!(account = %account, error = %e, "Failed to fetch balances");
                return None;
            }
        };

        let balances = match Self::convert(payment, sale) {
            Ok(balances) => balances,
            Err(e) => {
                warn!(account = %account, error = %e, "Balance not representable");
                return None;
            }
        };

        *self.cached.write() = balances;
        *self.last_account.write() = Some(account.clone());
        debug!(
            account = %account,
            payment = %balances.payment,
            sale = %balances.sale,
            "Balances refreshed"
        );
        Some(balances)
    }

    /// Refresh only when `account` differs from the one last seen.
    ///
    /// Disconnecting clears the cache.
    pub async fn on_account_changed(&self, account: Option<&Account>) -> Option<Balances> {
        if self.last_account.read().as_ref() == account {
            return None;
        }
        match account {
            Some(_) => self.refresh(account).await,
            None => {
                *self.cached.write() = Balances::default();
                *self.last_account.write() = None;
                None
            }
        }
    }

    fn convert(payment: u128, sale: u128) -> Result<Balances, DomainError> {
        Ok(Balances {
            payment: TokenAmount::from_units(TokenKind::Payment, payment).to_decimal()?,
            sale: TokenAmount::from_units(TokenKind::Sale, sale).to_decimal()?,
        })
    }
}
