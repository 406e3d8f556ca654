// Shared test helpers for HTTP-level tests.
//
// Provides a recording wallet and canned lookup bodies used by several test files.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use async_trait::async_trait;

use ip_geolocation::initialization::init_client;
use ip_geolocation::{Config, InvoicePayer, L402Client};

/// Macaroon handed out by the mock server's challenge.
#[allow(dead_code)] // Used by other test files
pub const MACAROON: &str = "AGIAJEemVQUTEyNCR0exk7ek90Cg==";
/// Invoice handed out by the mock server's challenge.
#[allow(dead_code)]
pub const INVOICE: &str = "lnbc1500n1pw5kjhmpp5fu6xhthlt2vucmzkx6c7wtlh2r625r30cyjsfqhu8rsx4xpz5lwqdpa2fjkzep6yptksct5yp5hxgrrv96hx";
/// Preimage the recording wallet returns.
#[allow(dead_code)]
pub const PREIMAGE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

/// Well-formed lookup body for 1.1.1.1.
#[allow(dead_code)]
pub const CLOUDFLARE_BODY: &str = r#"{"ip":"1.1.1.1","continent_name":"Oceania","country_name":"Australia","state_prov":"","city":"","latitude":"-33.49","longitude":"143.21","isp":"Cloudflare","country_flag":"http://x/flag.png"}"#;

/// `WWW-Authenticate` value the mock server sends with its 402.
#[allow(dead_code)]
pub fn challenge_header() -> String {
    format!(r#"L402 macaroon="{MACAROON}", invoice="{INVOICE}""#)
}

/// `Authorization` value expected on the paid retry.
#[allow(dead_code)]
pub fn paid_authorization(header_key: &str) -> String {
    format!("{header_key} {MACAROON}:{PREIMAGE}")
}

/// Wallet that records every invoice and answers with a fixed preimage,
/// or refuses every invoice when built with `failing()`.
#[derive(Default)]
pub struct RecordingPayer {
    calls: AtomicUsize,
    invoices: Mutex<Vec<String>>,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingPayer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn invoices(&self) -> Vec<String> {
        self.invoices.lock().expect("payer lock poisoned").clone()
    }
}

#[async_trait]
impl InvoicePayer for RecordingPayer {
    async fn pay_invoice(&self, invoice: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.invoices
            .lock()
            .expect("payer lock poisoned")
            .push(invoice.to_string());
        if self.fail {
            bail!("insufficient balance");
        }
        Ok(PREIMAGE.to_string())
    }
}

/// L402 client with a short timeout paying through `payer`.
#[allow(dead_code)]
pub async fn l402_client(payer: Arc<RecordingPayer>) -> L402Client {
    let config = Config {
        timeout_seconds: 5,
        user_agent: "ip_geolocation_test/1.0".to_string(),
        ..Default::default()
    };
    let client = init_client(&config)
        .await
        .expect("Failed to create HTTP client");
    L402Client::new(client, payer)
}
