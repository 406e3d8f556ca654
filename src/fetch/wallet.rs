//! Wallet seam for settling Lightning invoices.

use anyhow::{bail, Result};
use async_trait::async_trait;

/// Pays a BOLT11 invoice and returns the payment preimage.
///
/// The preimage is the proof of payment sent back to the server alongside the
/// macaroon. How the invoice gets paid is entirely up to the implementation.
#[async_trait]
pub trait InvoicePayer: Send + Sync {
    /// Pays `invoice`, returning the hex-encoded preimage.
    async fn pay_invoice(&self, invoice: &str) -> Result<String>;
}

/// Payer used when no wallet is configured. Refuses every invoice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWallet;

#[async_trait]
impl InvoicePayer for NoWallet {
    async fn pay_invoice(&self, _invoice: &str) -> Result<String> {
        bail!("no wallet configured to pay L402 invoices")
    }
}
