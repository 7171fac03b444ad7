//! Wallet capability adapter.
//!
//! The connection state machine is owned by a provider object the host
//! page injects (`window.workfoxWallet`); this module only reads its
//! status and forwards connect/disconnect requests. Wallet outcomes are
//! reported as toasts and never touch session state.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use gloo_console as console;
use wasm_bindgen::prelude::*;
use wf_session_core::WalletCapability;

use crate::dom::{self, Elements};
use crate::toast;

#[wasm_bindgen]
extern "C" {
    /// Injected wallet provider object.
    pub type WalletProvider;

    #[wasm_bindgen(method, getter, js_name = activeAddress)]
    fn active_address(this: &WalletProvider) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = isConnected)]
    fn is_connected(this: &WalletProvider) -> bool;

    #[wasm_bindgen(method, catch)]
    async fn connect(this: &WalletProvider) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    async fn disconnect(this: &WalletProvider) -> Result<JsValue, JsValue>;
}

pub struct BrowserWallet {
    provider: WalletProvider,
}

impl BrowserWallet {
    /// Look up the injected provider, if the host page supplied one.
    pub fn injected() -> Option<Self> {
        let value =
            js_sys::Reflect::get(dom::window().as_ref(), &JsValue::from_str("workfoxWallet"))
                .ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(Self {
            provider: value.unchecked_into(),
        })
    }
}

#[async_trait(?Send)]
impl WalletCapability for BrowserWallet {
    fn address(&self) -> Option<String> {
        self.provider.active_address()
    }

    fn is_connected(&self) -> bool {
        self.provider.is_connected()
    }

    async fn connect(&self) -> Result<String> {
        self.provider
            .connect()
            .await
            .map_err(|err| anyhow!("provider rejected connect: {err:?}"))?;
        self.address()
            .ok_or_else(|| anyhow!("provider connected but reported no address"))
    }

    async fn disconnect(&self) -> Result<()> {
        self.provider
            .disconnect()
            .await
            .map_err(|err| anyhow!("provider rejected disconnect: {err:?}"))?;
        Ok(())
    }
}

// ── User-triggered operations ──

pub async fn request_connect(els: &Elements) {
    let Some(wallet) = BrowserWallet::injected() else {
        console::error!("no wallet provider injected");
        toast::error(els, "Failed to connect wallet");
        return;
    };

    match wallet.connect().await {
        Ok(address) => {
            dom::set_text(&els.wallet_address, &format_address(&address));
            toast::success(els, "Wallet connected successfully");
        }
        Err(err) => {
            console::error!(format!("wallet connect failed: {err}"));
            toast::error(els, "Failed to connect wallet");
        }
    }
}

pub async fn request_disconnect(els: &Elements) {
    let Some(wallet) = BrowserWallet::injected() else {
        console::error!("no wallet provider injected");
        toast::error(els, "Failed to disconnect wallet");
        return;
    };

    match wallet.disconnect().await {
        Ok(()) => {
            dom::set_text(&els.wallet_address, "");
            toast::success(els, "Wallet disconnected");
        }
        Err(err) => {
            console::error!(format!("wallet disconnect failed: {err}"));
            toast::error(els, "Failed to disconnect wallet");
        }
    }
}

/// `0x12ab...cdef` display form.
fn format_address(address: &str) -> String {
    if address.len() > 10 {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}
