mod config;

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use flowlink_convert::{
    message_to_account, message_to_account_key, message_to_block_header, message_to_event,
    message_to_transaction,
};
use flowlink_core::{EventBuilder, Identifier};
use flowlink_protobuf::{entities, Message};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::config::{CliOverrides, InputEncoding, InspectConfig, LogFormat};

const DEFAULT_LOG_FILTER: &str = "warn,flowlink_inspect=info,flowlink_convert=info";

#[derive(Parser, Debug)]
#[command(
    name = "flowlink-inspect",
    version,
    about = "Decode flowlink protobuf entities and print them as JSON"
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Args, Debug, Default, Clone)]
struct ConfigArgs {
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
    #[arg(long, global = true)]
    log_filter: Option<String>,
    #[arg(long, global = true)]
    input_encoding: Option<InputEncoding>,
    #[arg(long, global = true)]
    pretty: Option<bool>,
}

impl ConfigArgs {
    fn into_overrides(self) -> CliOverrides {
        CliOverrides {
            log_format: self.log_format,
            log_filter: self.log_filter,
            input_encoding: self.input_encoding,
            pretty: self.pretty,
        }
    }
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Decode a protobuf message and print the domain value.
    Decode(DecodeCommand),
    /// Compute the canonical ID of an event.
    EventId(EventIdCommand),
}

#[derive(Args, Debug)]
struct DecodeCommand {
    /// Message type stored in the input.
    #[arg(value_enum)]
    kind: MessageKind,
    /// Input file, or `-` for stdin.
    path: PathBuf,
}

#[derive(Args, Debug)]
struct EventIdCommand {
    /// Hex encoded ID of the emitting transaction.
    #[arg(long)]
    transaction_id: Identifier,
    /// Position of the event within the transaction.
    #[arg(long)]
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MessageKind {
    BlockHeader,
    Account,
    AccountKey,
    Event,
    Transaction,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = cli.config.clone().into_overrides();
    let mut config = InspectConfig::load()?;
    config.apply_overrides(&overrides)?;

    init_tracing(&config);

    let output = match cli.command {
        CliCommand::Decode(cmd) => {
            let input = read_input(&cmd.path)?;
            let bytes = config
                .input_encoding
                .decode(&input)
                .with_context(|| format!("input is not valid {}", config.input_encoding.as_str()))?;
            debug!(kind = ?cmd.kind, len = bytes.len(), "decoding message");
            render(cmd.kind, &bytes)?
        }
        CliCommand::EventId(cmd) => event_id(&cmd),
    };

    let text = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{text}");
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn render(kind: MessageKind, bytes: &[u8]) -> Result<serde_json::Value> {
    let value = match kind {
        MessageKind::BlockHeader => {
            let message = entities::BlockHeader::decode(bytes)?;
            serde_json::to_value(message_to_block_header(&message))?
        }
        MessageKind::Account => {
            let message = entities::Account::decode(bytes)?;
            let account = message_to_account(Some(&message))?;
            info!(address = %account.address, keys = account.keys.len(), "decoded account");
            serde_json::to_value(account)?
        }
        MessageKind::AccountKey => {
            let message = entities::AccountPublicKey::decode(bytes)?;
            serde_json::to_value(message_to_account_key(Some(&message))?)?
        }
        MessageKind::Event => {
            let message = entities::Event::decode(bytes)?;
            let event = message_to_event(Some(&message))?;
            info!(event = %event, "decoded event");
            json!({ "id": event.id(), "event": event })
        }
        MessageKind::Transaction => {
            let message = entities::Transaction::decode(bytes)?;
            let transaction = message_to_transaction(Some(&message))?;
            json!({ "id": transaction.id(), "transaction": transaction })
        }
    };
    Ok(value)
}

fn event_id(cmd: &EventIdCommand) -> serde_json::Value {
    let event = EventBuilder::new("", cmd.transaction_id)
        .index(cmd.index)
        .build();
    json!({
        "transaction_id": cmd.transaction_id,
        "index": cmd.index,
        "id": event.id(),
    })
}

fn init_tracing(config: &InspectConfig) {
    // An explicit filter wins, then RUST_LOG, then the built-in default.
    let env_filter = match &config.log_filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    let json = matches!(config.log_format, LogFormat::Json);
    let subscriber = build_subscriber(json, env_filter);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}

fn build_subscriber(json: bool, env_filter: EnvFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
    if json {
        Box::new(
            tracing_subscriber::registry().with(env_filter).with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            ),
        )
    } else {
        Box::new(
            tracing_subscriber::registry().with(env_filter).with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowlink_convert::{block_header_to_message, event_to_message, transaction_to_message};
    use flowlink_core::{Address, BlockHeader, Transaction, Value};

    #[test]
    fn cli_parses_global_overrides() {
        let cli = Cli::try_parse_from([
            "flowlink-inspect",
            "decode",
            "event",
            "payload.hex",
            "--input-encoding",
            "hex",
            "--log-format",
            "json",
        ])
        .expect("cli parses");

        let overrides = cli.config.into_overrides();
        assert_eq!(overrides.input_encoding, Some(InputEncoding::Hex));
        assert_eq!(overrides.log_format, Some(LogFormat::Json));
        assert!(matches!(
            cli.command,
            CliCommand::Decode(DecodeCommand {
                kind: MessageKind::Event,
                ..
            })
        ));
    }

    #[test]
    fn event_id_command_rejects_short_transaction_ids() {
        let result = Cli::try_parse_from([
            "flowlink-inspect",
            "event-id",
            "--transaction-id",
            "abcd",
            "--index",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn event_id_matches_domain_identity() {
        let transaction_id = Identifier::from_slice(&[3; 32]);
        let output = event_id(&EventIdCommand {
            transaction_id,
            index: 2,
        });

        let expected = EventBuilder::new("flow.AccountCreated", transaction_id)
            .index(2)
            .build()
            .id();
        assert_eq!(output["id"], expected);
        assert_eq!(output["transaction_id"], transaction_id.hex());
    }

    #[test]
    fn renders_block_header() {
        let header = BlockHeader {
            id: Identifier::from_slice(&[1; 32]),
            parent_id: Identifier::from_slice(&[2; 32]),
            height: 42,
        };
        let bytes = block_header_to_message(&header).encode_to_vec();

        let output = render(MessageKind::BlockHeader, &bytes).unwrap();
        assert_eq!(output["height"], 42);
        assert_eq!(output["id"], header.id.hex());
    }

    #[test]
    fn renders_event_with_id() {
        let event = EventBuilder::new("flow.AccountCreated", Identifier::from_slice(&[4; 32]))
            .field("address", Value::Address(Address::from_slice(&[1])))
            .build();
        let bytes = event_to_message(&event).unwrap().encode_to_vec();

        let output = render(MessageKind::Event, &bytes).unwrap();
        assert_eq!(output["id"], event.id());
        assert_eq!(output["event"]["type"], "flow.AccountCreated");
        assert_eq!(
            output["event"]["value"]["fields"][0]["value"]["value"],
            "0x0000000000000001"
        );
    }

    #[test]
    fn renders_transaction_with_id() {
        let transaction = Transaction {
            script: b"transaction {}".to_vec(),
            gas_limit: 10,
            ..Transaction::default()
        };
        let bytes = transaction_to_message(&transaction).encode_to_vec();

        let output = render(MessageKind::Transaction, &bytes).unwrap();
        assert_eq!(output["id"], transaction.id().hex());
        assert_eq!(output["transaction"]["gas_limit"], 10);
        assert_eq!(output["transaction"]["script"], "dHJhbnNhY3Rpb24ge30=");
    }

    #[test]
    fn conversion_errors_surface() {
        let message = entities::Event {
            r#type: "flow.AccountCreated".into(),
            transaction_id: vec![1; 32],
            index: 0,
            payload: b"{".to_vec(),
        };

        let err = render(MessageKind::Event, &message.encode_to_vec()).unwrap_err();
        assert_eq!(err.to_string(), "failed to decode event payload");

        let report = format!("{err:#}");
        assert!(report.starts_with("failed to decode event payload: malformed JSON-Cadence value: "));
        assert_eq!(report.matches("malformed JSON-Cadence value").count(), 1);
    }
}
