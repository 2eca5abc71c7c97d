//! CLI command implementations.

use crate::account::{chain_master, AccountId, ChainAccount, ACCOUNT_ID_LEN};
use crate::flags::TxFlagRegistry;
use crate::keys::{CompressedKey, Signature};
use crate::register::{RegisterTx, RegisterTxBuilder};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::io::Read;
use tracing::info;

/// Decode a hex-encoded registration record
#[derive(Args)]
pub struct DecodeCommand {
    /// Hex-encoded record; read from stdin when omitted
    pub hex: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl DecodeCommand {
    pub fn run(self) -> Result<()> {
        let hex_input = match self.hex {
            Some(value) => value,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let data = hex::decode(hex_input.trim()).context("input is not valid hex")?;
        let tx = RegisterTx::decode(&data)?;
        info!(
            bytes = data.len(),
            co_signers = tx.multi_sig().len(),
            "record decoded"
        );

        let json = tx.to_json();
        if self.pretty {
            println!("{}", serde_json::to_string_pretty(&json)?);
        } else {
            println!("{}", json);
        }
        Ok(())
    }
}

/// Construct and serialize a registration record
#[derive(Args)]
pub struct EncodeCommand {
    /// Registrant compressed public key (33-byte hex)
    #[arg(long)]
    pub registrant: String,

    /// Referrer account identifier (20-byte hex, 0x prefix optional)
    #[arg(long)]
    pub referrer: String,

    /// Signature r component (32-byte hex)
    #[arg(long)]
    pub sig_r: String,

    /// Signature s component (32-byte hex)
    #[arg(long)]
    pub sig_s: String,

    /// Signature recovery id
    #[arg(long, default_value = "0")]
    pub sig_v: u8,

    /// Additional co-signer key (repeatable, max 4); the registrant key
    /// fills slot 0 automatically
    #[arg(long = "co-signer")]
    pub co_signers: Vec<String>,
}

impl EncodeCommand {
    pub fn run(self) -> Result<()> {
        let registrant = CompressedKey::from_hex(&self.registrant)?;
        let referrer_id = parse_account_id(&self.referrer)?;
        let signature = Signature::new(
            parse_fixed::<32>(&self.sig_r, "sig-r")?,
            parse_fixed::<32>(&self.sig_s, "sig-s")?,
            self.sig_v,
        );

        let mut builder = RegisterTxBuilder::new();
        builder.set_registrant(registrant);
        builder.set_referrer_id(referrer_id, signature);
        if !self.co_signers.is_empty() {
            let keys = self
                .co_signers
                .iter()
                .map(|k| CompressedKey::from_hex(k))
                .collect::<Result<Vec<_>, _>>()?;
            builder.set_co_signers(&keys)?;
        }

        let data = builder.serialize()?;
        info!(bytes = data.len(), "record serialized");
        println!("{}", hex::encode(data));
        Ok(())
    }
}

/// List the registered transaction flags
#[derive(Args)]
pub struct FlagsCommand {
    /// Emit JSON instead of a plain listing
    #[arg(long)]
    pub json: bool,
}

impl FlagsCommand {
    pub fn run(self) -> Result<()> {
        let registry = TxFlagRegistry::with_protocol_flags();
        if self.json {
            let flags: Vec<_> = registry.all().collect();
            println!("{}", serde_json::to_string_pretty(&flags)?);
        } else {
            for entry in registry.all() {
                let decodable = if entry.decode.is_some() {
                    " (decodable)"
                } else {
                    ""
                };
                println!("{:#06x}  {}{}", entry.flag, entry.name, decodable);
            }
        }
        Ok(())
    }
}

/// Show the chain-master authority account
#[derive(Args)]
pub struct ChainMasterCommand {}

impl ChainMasterCommand {
    pub fn run(self) -> Result<()> {
        let master = chain_master();
        println!("public key:  {}", master.public_key());
        println!("identifier:  {}", master.account_identifier());
        println!("forges:      {}", master.can_forge_blocks());
        println!("supply:      {}", master.initial_supply());
        for (i, key) in master.all_public_keys().iter().enumerate() {
            println!("signatory {}: {}", i + 1, key);
        }
        Ok(())
    }
}

fn parse_account_id(input: &str) -> Result<AccountId> {
    let trimmed = input.trim().trim_start_matches("0x");
    Ok(AccountId::from_bytes(parse_fixed::<ACCOUNT_ID_LEN>(
        trimmed, "referrer",
    )?))
}

fn parse_fixed<const N: usize>(input: &str, field: &str) -> Result<[u8; N]> {
    let bytes =
        hex::decode(input.trim()).with_context(|| format!("{} is not valid hex", field))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow!("{} must be {} bytes, got {}", field, N, len))
}
